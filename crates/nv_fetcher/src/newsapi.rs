use async_trait::async_trait;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::fmt;
use tracing::{debug, info, warn};
use url::Url;

use nv_core::{Article, Error, Query, Result};

use crate::config::SourceConfig;
use crate::NewsSource;

#[derive(Deserialize)]
struct SearchResponse {
    status: String,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<WireArticle>,
}

#[derive(Deserialize)]
struct WireArticle {
    #[serde(default)]
    source: WireSource,
    // title/description/url are nullable on the wire
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    url: Option<String>,
    #[serde(rename = "publishedAt")]
    published_at: DateTime<Utc>,
}

#[derive(Deserialize, Default)]
struct WireSource {
    #[serde(default)]
    name: Option<String>,
}

pub struct NewsApiSource {
    client: Client,
    config: SourceConfig,
}

impl fmt::Debug for NewsApiSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsApiSource")
            .field("client", &"<reqwest::Client>")
            .field("config", &self.config)
            .finish()
    }
}

impl NewsApiSource {
    pub fn new(config: SourceConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::Config("missing news API key".to_string()));
        }
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { client, config })
    }

    /// Start of the search window: `horizon_days` before `now`, at date
    /// precision as the search endpoint expects.
    pub fn from_date(query: &Query, now: DateTime<Utc>) -> NaiveDate {
        (now - Duration::days(i64::from(query.horizon_days))).date_naive()
    }

    fn build_url(&self, query: &Query, from: NaiveDate) -> Result<Url> {
        let mut url = Url::parse(&self.config.endpoint)
            .map_err(|e| Error::Config(format!("invalid endpoint: {}", e)))?;
        url.query_pairs_mut()
            .append_pair("q", &query.company)
            .append_pair("from", &from.format("%Y-%m-%d").to_string())
            .append_pair("language", &self.config.language)
            .append_pair("sortBy", "publishedAt")
            .append_pair("pageSize", &self.config.page_size.to_string());
        if !self.config.domains.is_empty() {
            url.query_pairs_mut()
                .append_pair("domains", &self.config.domains.join(","));
        }
        Ok(url)
    }

    /// Turns a response body into articles: schema check, relevance filter,
    /// recency ordering, page-size cap. Pure, so it is testable without a
    /// network.
    fn parse_articles(&self, body: &str, query: &Query) -> Result<Vec<Article>> {
        let response: SearchResponse = serde_json::from_str(body)?;
        if response.status != "ok" {
            let detail = response
                .message
                .or(response.code)
                .unwrap_or_else(|| "unknown error".to_string());
            return Err(Error::Fetch(format!("news search reported: {}", detail)));
        }

        let fetched = response.articles.len();
        let needle = query.company.to_lowercase();
        let mut articles: Vec<Article> = response
            .articles
            .into_iter()
            .map(|wire| Article {
                title: wire.title.unwrap_or_default(),
                description: wire.description.unwrap_or_default(),
                url: wire.url.unwrap_or_default(),
                source: wire.source.name.unwrap_or_default(),
                published_at: wire.published_at,
            })
            .filter(|article| {
                !self.config.title_match || article.title.to_lowercase().contains(&needle)
            })
            .collect();

        if articles.is_empty() && fetched > 0 {
            warn!(
                "All {} fetched articles dropped by the title filter for '{}'",
                fetched, query.company
            );
        }

        articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        articles.truncate(self.config.page_size as usize);
        Ok(articles)
    }
}

#[async_trait]
impl NewsSource for NewsApiSource {
    fn name(&self) -> &str {
        "NewsAPI"
    }

    async fn fetch(&self, query: &Query) -> Result<Vec<Article>> {
        let from = Self::from_date(query, Utc::now());
        let url = self.build_url(query, from)?;
        info!(
            "Fetching articles for '{}' since {}",
            query.company, from
        );
        debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("X-Api-Key", &self.config.api_key)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            // error bodies still carry a JSON message worth surfacing
            let detail = serde_json::from_str::<SearchResponse>(&body)
                .ok()
                .and_then(|r| r.message)
                .unwrap_or_else(|| format!("HTTP {}", status));
            return Err(Error::Fetch(format!("news search failed: {}", detail)));
        }

        let articles = self.parse_articles(&body, query)?;
        info!("Fetched {} relevant articles for '{}'", articles.len(), query.company);
        Ok(articles)
    }
}
