use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Error, Result};

/// Search parameters for a single run. Built once, read-only downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Query {
    pub company: String,
    pub horizon_days: u32,
}

impl Query {
    /// Validates inputs before anything touches the network.
    pub fn new(company: impl Into<String>, horizon_days: u32) -> Result<Self> {
        let company = company.into();
        if company.trim().is_empty() {
            return Err(Error::InvalidQuery(
                "company name must not be empty".to_string(),
            ));
        }
        if horizon_days == 0 {
            return Err(Error::InvalidQuery(
                "horizon must be at least one day".to_string(),
            ));
        }
        Ok(Self {
            company,
            horizon_days,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub description: String,
    pub url: String,
    pub source: String,
    pub published_at: DateTime<Utc>,
}

impl Article {
    /// Text handed to the sentiment scorer: title and description joined
    /// so a headline-only article still carries signal.
    pub fn sentiment_text(&self) -> String {
        match (self.title.is_empty(), self.description.is_empty()) {
            (false, false) => format!("{}. {}", self.title, self.description),
            (false, true) => self.title.clone(),
            (true, false) => self.description.clone(),
            (true, true) => String::new(),
        }
    }
}

/// An article plus its compound sentiment score in [-1.0, 1.0].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredArticle {
    pub article: Article,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
            SentimentLabel::Neutral => write!(f, "Neutral"),
        }
    }
}

/// Terminal output of a run. Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub company: String,
    pub horizon_days: u32,
    pub article_count: usize,
    pub mean_score: f64,
    pub label: SentimentLabel,
}
