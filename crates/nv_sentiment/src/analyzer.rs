use std::fmt;
use std::sync::Arc;

use nv_core::{
    Article, Error, Query, Result, ScoredArticle, SentimentLabel, SentimentScorer, Verdict,
};
use tracing::debug;

use crate::scorer::LexiconScorer;

/// Inclusive boundaries of the standard compound-score convention.
pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Scores article lists and condenses them into a [`Verdict`].
pub struct VerdictAnalyzer {
    scorer: Arc<dyn SentimentScorer>,
}

impl fmt::Debug for VerdictAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VerdictAnalyzer")
            .field("scorer", &self.scorer.name())
            .finish()
    }
}

impl VerdictAnalyzer {
    pub fn new(scorer: Arc<dyn SentimentScorer>) -> Self {
        Self { scorer }
    }

    pub fn with_default_scorer() -> Self {
        Self::new(Arc::new(LexiconScorer::new()))
    }

    /// Scores each article independently over its title and description.
    /// Articles without usable text score 0.0 rather than erroring.
    pub fn score_articles(&self, articles: &[Article]) -> Vec<ScoredArticle> {
        articles
            .iter()
            .map(|article| {
                let score = self.scorer.score(&article.sentiment_text());
                debug!("{:.4}  {}", score, article.title);
                ScoredArticle {
                    article: article.clone(),
                    score,
                }
            })
            .collect()
    }

    /// Averages the per-article scores and classifies the mean. The mean of
    /// an empty list is undefined, so zero articles is an error rather than
    /// a silently neutral verdict.
    pub fn interpret(&self, query: &Query, scored: &[ScoredArticle]) -> Result<Verdict> {
        if scored.is_empty() {
            return Err(Error::NoData(format!(
                "no articles to aggregate for '{}'",
                query.company
            )));
        }

        let mean_score = scored.iter().map(|s| s.score).sum::<f64>() / scored.len() as f64;
        Ok(Verdict {
            company: query.company.clone(),
            horizon_days: query.horizon_days,
            article_count: scored.len(),
            mean_score,
            label: classify(mean_score),
        })
    }

    /// Full aggregation step: score, average, classify.
    pub fn analyze(
        &self,
        query: &Query,
        articles: &[Article],
    ) -> Result<(Vec<ScoredArticle>, Verdict)> {
        let scored = self.score_articles(articles);
        let verdict = self.interpret(query, &scored)?;
        Ok((scored, verdict))
    }
}

/// Maps a mean compound score to its label. Boundaries are inclusive.
pub fn classify(mean: f64) -> SentimentLabel {
    if mean >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if mean <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            description: description.to_string(),
            url: "http://example.com".to_string(),
            source: "test".to_string(),
            published_at: Utc::now(),
        }
    }

    fn scored(score: f64) -> ScoredArticle {
        ScoredArticle {
            article: article("", ""),
            score,
        }
    }

    fn query() -> Query {
        Query::new("Tesla", 3).unwrap()
    }

    #[test]
    fn test_classify_inclusive_boundaries() {
        assert_eq!(classify(0.05), SentimentLabel::Positive);
        assert_eq!(classify(-0.05), SentimentLabel::Negative);
        assert_eq!(classify(0.0499999), SentimentLabel::Neutral);
        assert_eq!(classify(-0.0499999), SentimentLabel::Neutral);
        assert_eq!(classify(0.0), SentimentLabel::Neutral);
        assert_eq!(classify(1.0), SentimentLabel::Positive);
        assert_eq!(classify(-1.0), SentimentLabel::Negative);
    }

    #[test]
    fn test_mean_of_known_scores_is_positive() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let scores = [scored(0.6), scored(0.2), scored(-0.1)];
        let verdict = analyzer.interpret(&query(), &scores).unwrap();
        assert!((verdict.mean_score - 0.2333333333).abs() < 1e-9);
        assert_eq!(verdict.label, SentimentLabel::Positive);
        assert_eq!(verdict.article_count, 3);
    }

    #[test]
    fn test_small_mixed_scores_stay_neutral() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let scores = [scored(0.03), scored(-0.02)];
        let verdict = analyzer.interpret(&query(), &scores).unwrap();
        assert!((verdict.mean_score - 0.005).abs() < 1e-9);
        assert_eq!(verdict.label, SentimentLabel::Neutral);
    }

    #[test]
    fn test_empty_list_is_no_data_not_neutral() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let err = analyzer.interpret(&query(), &[]).unwrap_err();
        assert!(matches!(err, Error::NoData(_)));
    }

    #[test]
    fn test_single_article_mean_equals_its_score() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let articles = [article("Tesla posts record profits", "Shares rally.")];
        let (scored, verdict) = analyzer.analyze(&query(), &articles).unwrap();
        assert_eq!(scored.len(), 1);
        assert_eq!(verdict.mean_score, scored[0].score);
    }

    #[test]
    fn test_mean_stays_in_compound_range() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let articles = [
            article("Tesla stock crashes after fraud scandal", "Investors flee."),
            article("Tesla faces bankruptcy fears", ""),
            article("Tesla wins record profits", "Great quarter."),
        ];
        let (scored, verdict) = analyzer.analyze(&query(), &articles).unwrap();
        for s in &scored {
            assert!((-1.0..=1.0).contains(&s.score));
        }
        assert!((-1.0..=1.0).contains(&verdict.mean_score));
    }

    #[test]
    fn test_textless_article_scores_zero() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let scored = analyzer.score_articles(&[article("", "")]);
        assert_eq!(scored[0].score, 0.0);
    }

    #[test]
    fn test_verdict_carries_query_fields() {
        let analyzer = VerdictAnalyzer::with_default_scorer();
        let verdict = analyzer.interpret(&query(), &[scored(0.4)]).unwrap();
        assert_eq!(verdict.company, "Tesla");
        assert_eq!(verdict.horizon_days, 3);
    }
}
