use crate::error::{Error, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub model: Option<String>,
    pub api_base: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let openai_api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| Error::Config("OPENAI_API_KEY environment variable not set".to_string()))?;

        let model = env::var("OPENAI_MODEL").ok();

        let api_base = env::var("OPENAI_API_BASE").ok();

        Ok(Self {
            openai_api_key,
            model,
            api_base,
        })
    }
}
