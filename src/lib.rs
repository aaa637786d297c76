pub mod config;
pub mod error;
pub mod sentiment;

pub use config::Config;
pub use error::{Error, Result};
pub use sentiment::{
    create_analyzer, AnalyzerConfig, AnalyzerRegistry, OpenAIAnalyzer, SentimentAnalyzer,
    SentimentScore,
};
