use async_trait::async_trait;

use crate::error::Result;

/// Sentiment polarity of a text: -1.0 is very negative, 0.0 is neutral,
/// 1.0 is very positive.
///
/// The range is a contract on implementations, not an enforced invariant:
/// provider-backed analyzers return whatever number the model produced,
/// without clamping.
pub type SentimentScore = f64;

#[async_trait]
pub trait SentimentAnalyzer: Send + Sync {
    /// Score a single text. Deterministic on identical input as far as the
    /// backing model allows (providers pin decoding randomness to its
    /// minimum).
    async fn score(&self, text: &str) -> Result<SentimentScore>;

    /// Score several texts, one result per input, in input order.
    ///
    /// The default implementation calls [`score`](Self::score) once per text,
    /// sequentially. Providers with a native batch endpoint may override it,
    /// but must preserve order and length.
    async fn score_batch(&self, texts: &[String]) -> Result<Vec<SentimentScore>> {
        let mut scores = Vec::with_capacity(texts.len());
        for text in texts {
            scores.push(self.score(text).await?);
        }
        Ok(scores)
    }
}

impl std::fmt::Debug for dyn SentimentAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SentimentAnalyzer")
    }
}
