use std::path::Path;

use chrono::Utc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crypto_brief::config::Config;
use crypto_brief::fetcher::Fetcher;
use crypto_brief::pipeline;

const DEFAULT_CONFIG_PATH: &str = "brief.toml";

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crypto_brief=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config()?;
    let zone = config.zone()?;

    info!("Starting news scrape");

    let fetcher = Fetcher::new(config.timeout())?;
    let now = Utc::now().with_timezone(&zone);
    pipeline::run(&fetcher, &config, now).await?;

    Ok(())
}

fn load_config() -> anyhow::Result<Config> {
    if let Ok(path) = std::env::var("CRYPTO_BRIEF_CONFIG") {
        info!("Loading configuration from {}", path);
        return Ok(Config::load(path)?);
    }

    if Path::new(DEFAULT_CONFIG_PATH).exists() {
        info!("Loading configuration from {}", DEFAULT_CONFIG_PATH);
        return Ok(Config::load(DEFAULT_CONFIG_PATH)?);
    }

    info!("No configuration file found, using built-in defaults");
    Ok(Config::default())
}
