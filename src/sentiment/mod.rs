pub mod analyzer;
pub mod factory;
pub mod openai;
pub mod parser;
pub mod prompts;

pub use analyzer::{SentimentAnalyzer, SentimentScore};
pub use factory::{create_analyzer, AnalyzerConfig, AnalyzerRegistry};
pub use openai::OpenAIAnalyzer;
