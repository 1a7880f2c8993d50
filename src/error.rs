use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BriefError {
    #[error("failed to fetch feed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("failed to parse feed: {0}")]
    Parse(#[from] feed_rs::parser::ParseFeedError),

    #[error("failed to render digest: {0}")]
    Render(#[from] askama::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, BriefError>;
