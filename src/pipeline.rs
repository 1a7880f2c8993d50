use std::path::PathBuf;

use chrono::{DateTime, FixedOffset};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::fetcher::Fetcher;
use crate::filter::{filter, MatchedArticle};
use crate::parser;
use crate::render::render;
use crate::writer::write;

/// Fetch, parse and filter. Fetch and parse failures yield no articles.
pub async fn collect_articles(fetcher: &Fetcher, config: &Config) -> Vec<MatchedArticle> {
    let raw = match fetcher.fetch(&config.feed_url).await {
        Ok(raw) => raw,
        Err(e) => {
            error!("Error fetching news: {}", e);
            return Vec::new();
        }
    };

    let items = match parser::parse(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("Feed from {} could not be parsed: {}", config.feed_url, e);
            return Vec::new();
        }
    };

    filter(&items, &config.keywords)
}

/// One full run. Returns the path of the written digest.
pub async fn run(
    fetcher: &Fetcher,
    config: &Config,
    now: DateTime<FixedOffset>,
) -> Result<PathBuf> {
    let articles = collect_articles(fetcher, config).await;
    info!("Found {} related articles", articles.len());

    let document = render(&articles, &config.keywords, &now)?;
    let path = write(&document, &config.save_dir)?;

    info!("Saved digest: {}", path.display());
    Ok(path)
}
