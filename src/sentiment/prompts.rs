use serde::{Deserialize, Serialize};

pub const SYSTEM_PROMPT: &str = "Analyze the sentiment of the following text. \
    Return only a floating-point number where -1.0 is very negative, 0.0 is neutral, \
    and 1.0 is very positive.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Builds the two-message exchange sent for every scoring request: the fixed
/// system instruction followed by the input text, verbatim.
pub fn build_messages(text: &str) -> Vec<ChatMessage> {
    vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(text)]
}
