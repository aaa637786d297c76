use crate::error::{Error, Result};
use crate::sentiment::analyzer::SentimentScore;

/// Interprets a model completion as a bare floating-point score.
///
/// Surrounding whitespace is stripped; the value is returned exactly as
/// parsed, with no clamping to [-1.0, 1.0].
pub fn parse_score(response: &str) -> Result<SentimentScore> {
    let trimmed = response.trim();
    trimmed.parse::<f64>().map_err(|_| {
        Error::Parse(format!(
            "expected a floating-point sentiment score, got {:?}",
            trimmed
        ))
    })
}
