pub mod analyzer;
pub mod lexicon;
pub mod scorer;

pub use analyzer::{classify, VerdictAnalyzer, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use scorer::LexiconScorer;

pub mod prelude {
    pub use super::analyzer::VerdictAnalyzer;
    pub use super::scorer::LexiconScorer;
    pub use nv_core::{Article, Query, Result, ScoredArticle, SentimentLabel, Verdict};
}
