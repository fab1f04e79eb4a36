use async_trait::async_trait;
use nv_core::{Article, Query, Result};

pub mod config;
pub mod newsapi;

pub use config::SourceConfig;
pub use newsapi::NewsApiSource;

/// A queryable supplier of recent news articles.
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Name of the news source, for logs.
    fn name(&self) -> &str;

    /// Issues a single search request for the query and returns matching
    /// articles, most recent first.
    async fn fetch(&self, query: &Query) -> Result<Vec<Article>>;
}
