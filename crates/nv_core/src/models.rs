/// Stateless scoring capability over raw text. Implementations must be
/// pure: same text, same score.
pub trait SentimentScorer: Send + Sync {
    /// Compound sentiment score for the text, in [-1.0, 1.0].
    fn score(&self, text: &str) -> f64;

    /// Name of the scoring model, for logs.
    fn name(&self) -> &str;
}
