use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::sentiment::analyzer::SentimentAnalyzer;
use crate::sentiment::openai::OpenAIAnalyzer;

/// Construction options for a provider-backed analyzer.
///
/// Which fields are required depends on the provider; the `openai` provider
/// requires `credential` and defaults the rest.
#[derive(Debug, Clone, Default)]
pub struct AnalyzerConfig {
    /// Secret authenticating requests to the provider.
    pub credential: Option<String>,
    /// Provider-side model identifier.
    pub model: Option<String>,
    /// Override for the provider's API base URL.
    pub api_base: Option<String>,
}

type Constructor = fn(AnalyzerConfig) -> Result<Box<dyn SentimentAnalyzer>>;

/// Maps provider tags to analyzer constructors. New providers register a
/// constructor; the dispatch logic never changes.
pub struct AnalyzerRegistry {
    constructors: HashMap<&'static str, Constructor>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    pub fn register(&mut self, tag: &'static str, constructor: Constructor) {
        self.constructors.insert(tag, constructor);
    }

    pub fn create(&self, tag: &str, config: AnalyzerConfig) -> Result<Box<dyn SentimentAnalyzer>> {
        let constructor = self
            .constructors
            .get(tag)
            .ok_or_else(|| Error::Config(format!("Unknown provider tag: {}", tag)))?;
        constructor(config)
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register("openai", build_openai);
        registry
    }
}

fn build_openai(config: AnalyzerConfig) -> Result<Box<dyn SentimentAnalyzer>> {
    let credential = config.credential.ok_or_else(|| {
        Error::Config("OpenAI sentiment analyzer requires a credential".to_string())
    })?;

    let analyzer = match config.api_base {
        Some(api_base) => OpenAIAnalyzer::with_client(
            reqwest::Client::new(),
            credential,
            config.model,
            Some(api_base),
        ),
        None => OpenAIAnalyzer::new(credential, config.model),
    };

    Ok(Box::new(analyzer))
}

/// Constructs an analyzer from the default registry of known providers.
pub fn create_analyzer(tag: &str, config: AnalyzerConfig) -> Result<Box<dyn SentimentAnalyzer>> {
    AnalyzerRegistry::default().create(tag, config)
}
