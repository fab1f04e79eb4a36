use std::env;
use std::fmt;

use nv_core::{Error, Result};

/// Environment variable the API key is read from when no flag is given.
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

pub const DEFAULT_ENDPOINT: &str = "https://newsapi.org/v2/everything";
pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_PAGE_SIZE: u32 = 5;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Outlets the search is restricted to unless the caller clears the list.
pub const FINANCIAL_DOMAINS: &[&str] = &[
    "bloomberg.com",
    "reuters.com",
    "ft.com",
    "wsj.com",
    "businessinsider.com",
    "cnbc.com",
    "marketwatch.com",
    "finance.yahoo.com",
    "forbes.com",
    "seekingalpha.com",
];

#[derive(Clone)]
pub struct SourceConfig {
    pub api_key: String,
    pub endpoint: String,
    pub language: String,
    pub page_size: u32,
    pub timeout_secs: u64,
    /// Comma-joined into the `domains` request parameter. Empty disables
    /// the domain restriction.
    pub domains: Vec<String>,
    /// Keep only articles whose title mentions the company.
    pub title_match: bool,
}

impl fmt::Debug for SourceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceConfig")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("language", &self.language)
            .field("page_size", &self.page_size)
            .field("timeout_secs", &self.timeout_secs)
            .field("domains", &self.domains)
            .field("title_match", &self.title_match)
            .finish()
    }
}

impl SourceConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Config("missing news API key".to_string()));
        }
        Ok(Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            domains: FINANCIAL_DOMAINS.iter().map(|d| d.to_string()).collect(),
            title_match: true,
        })
    }

    /// Reads the API key from the environment.
    pub fn from_env() -> Result<Self> {
        match env::var(API_KEY_ENV) {
            Ok(key) => Self::new(key),
            Err(_) => Err(Error::Config(format!("{} is not set", API_KEY_ENV))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty_api_key() {
        assert!(SourceConfig::new("").is_err());
        assert!(SourceConfig::new("   ").is_err());
    }

    #[test]
    fn test_defaults() {
        let config = SourceConfig::new("test-key").unwrap();
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.title_match);
        assert!(config.domains.iter().any(|d| d == "reuters.com"));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SourceConfig::new("super-secret").unwrap();
        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret"));
    }
}
