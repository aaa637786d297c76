use clap::Parser;
use tracing_subscriber::EnvFilter;

use sentimental::{create_analyzer, AnalyzerConfig, Config, SentimentAnalyzer};

#[derive(Parser, Debug)]
#[command(name = "sentimental")]
#[command(version = "0.1.0")]
#[command(about = "Score text sentiment with an LLM provider")]
struct Args {
    /// Texts to score, one score per text
    #[arg(required = true)]
    texts: Vec<String>,

    /// Model identifier (defaults to the provider's preset model)
    #[arg(short, long)]
    model: Option<String>,

    /// Provider to score with
    #[arg(short, long, default_value = "openai")]
    provider: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("sentimental=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();
    let config = Config::from_env()?;

    let analyzer = create_analyzer(
        &args.provider,
        AnalyzerConfig {
            credential: Some(config.openai_api_key),
            model: args.model.or(config.model),
            api_base: config.api_base,
        },
    )?;

    for text in &args.texts {
        let polarity = analyzer.score(text).await?;
        println!("[{}]:\t{}", polarity, text);
    }

    Ok(())
}
