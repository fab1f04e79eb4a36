pub mod error;
pub mod models;
pub mod types;

pub use error::Error;
pub use models::SentimentScorer;
pub use types::{Article, Query, ScoredArticle, SentimentLabel, Verdict};

pub type Result<T> = std::result::Result<T, Error>;
