use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::sentiment::analyzer::{SentimentAnalyzer, SentimentScore};
use crate::sentiment::parser::parse_score;
use crate::sentiment::prompts::{build_messages, ChatMessage};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Sentiment analyzer backed by the OpenAI chat-completions API.
///
/// Construction performs no network activity and no credential validation;
/// a bad key surfaces as an API error on the first call.
pub struct OpenAIAnalyzer {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl OpenAIAnalyzer {
    pub fn new(api_key: String, model: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("Failed to create HTTP client");

        Self::with_client(client, api_key, model, None)
    }

    /// Construction with a caller-supplied HTTP client and API base URL,
    /// for shared connection pools, proxies, and tests.
    pub fn with_client(
        client: Client,
        api_key: String,
        model: Option<String>,
        api_base: Option<String>,
    ) -> Self {
        Self {
            client,
            api_key,
            model: model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_base: api_base.unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl SentimentAnalyzer for OpenAIAnalyzer {
    async fn score(&self, text: &str) -> Result<SentimentScore> {
        tracing::debug!("Scoring {} chars with {}", text.len(), self.model);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: build_messages(text),
            // Pin decoding randomness so repeated calls on the same input
            // are as reproducible as the model allows.
            temperature: 0.0,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.api_base))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| Error::Api(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api(format!(
                "OpenAI API error ({}): {}",
                status, body
            )));
        }

        let result: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| Error::Api(format!("Failed to parse OpenAI response: {}", e)))?;

        let content = result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::Api("Empty response from OpenAI".to_string()))?;

        parse_score(&content)
    }
}
