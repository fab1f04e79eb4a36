//! Console rendering of scored articles and the final verdict.
//!
//! Pure string builders; only `main` prints.

use nv_core::{ScoredArticle, Verdict};

const TITLE_WIDTH: usize = 60;
const BANNER_WIDTH: usize = 46;

pub fn article_table(scored: &[ScoredArticle]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<16}  {:<width$}  {:>8}\n",
        "Date",
        "Title",
        "Score",
        width = TITLE_WIDTH
    ));
    out.push_str(&format!(
        "{:-<16}  {:-<width$}  {:->8}\n",
        "",
        "",
        "",
        width = TITLE_WIDTH
    ));
    for entry in scored {
        let date = entry
            .article
            .published_at
            .format("%Y-%m-%d %H:%M")
            .to_string();
        out.push_str(&format!(
            "{:<16}  {:<width$}  {:>8.4}\n",
            date,
            truncate(&entry.article.title, TITLE_WIDTH),
            entry.score,
            width = TITLE_WIDTH
        ));
    }
    out
}

pub fn verdict_summary(verdict: &Verdict) -> String {
    let line = "=".repeat(BANNER_WIDTH);
    format!(
        "{line}\n{:^width$}\n{line}\n\
         Company:            {}\n\
         Time horizon:       {} days\n\
         Articles analyzed:  {}\n\
         Mean score:         {:.4}\n\
         Interpretation:     {}\n\
         {line}",
        "SENTIMENT VERDICT",
        verdict.company,
        verdict.horizon_days,
        verdict.article_count,
        verdict.mean_score,
        verdict.label,
        width = BANNER_WIDTH,
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use nv_core::{Article, SentimentLabel};

    fn scored(title: &str, score: f64) -> ScoredArticle {
        ScoredArticle {
            article: Article {
                title: title.to_string(),
                description: String::new(),
                url: "http://example.com".to_string(),
                source: "test".to_string(),
                published_at: Utc::now(),
            },
            score,
        }
    }

    #[test]
    fn test_table_has_a_row_per_article() {
        let table = article_table(&[scored("First", 0.5), scored("Second", -0.25)]);
        // header + separator + two rows
        assert_eq!(table.lines().count(), 4);
        assert!(table.contains("First"));
        assert!(table.contains("-0.2500"));
    }

    #[test]
    fn test_table_truncates_long_titles() {
        let long_title = "x".repeat(200);
        let table = article_table(&[scored(&long_title, 0.0)]);
        assert!(table.contains('…'));
        assert!(!table.contains(&long_title));
    }

    #[test]
    fn test_verdict_summary_fields() {
        let verdict = Verdict {
            company: "Tesla".to_string(),
            horizon_days: 3,
            article_count: 3,
            mean_score: 0.2333333333,
            label: SentimentLabel::Positive,
        };
        let summary = verdict_summary(&verdict);
        assert!(summary.contains("SENTIMENT VERDICT"));
        assert!(summary.contains("Tesla"));
        assert!(summary.contains("3 days"));
        assert!(summary.contains("0.2333"));
        assert!(summary.contains("Positive"));
    }
}
