use chrono::FixedOffset;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{BriefError, Result};

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_feed_url")]
    pub feed_url: String,
    /// Matched case-insensitively; declaration order is the order tags are listed in.
    #[serde(default = "default_keywords")]
    pub keywords: Vec<String>,
    #[serde(default = "default_save_dir")]
    pub save_dir: PathBuf,
    /// HTTP timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Civil zone the digest is dated in
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i32,
}

fn default_feed_url() -> String {
    "https://www.coindesk.com/arc/outboundfeeds/rss/".to_string()
}

fn default_keywords() -> Vec<String> {
    ["Bitcoin", "Ethereum", "Solana", "BTC", "ETH", "SOL"]
        .iter()
        .map(|k| k.to_string())
        .collect()
}

fn default_save_dir() -> PathBuf {
    PathBuf::from("ObsidianVault/News/Crypto")
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_utc_offset_hours() -> i32 {
    9
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feed_url: default_feed_url(),
            keywords: default_keywords(),
            save_dir: default_save_dir(),
            timeout_secs: default_timeout_secs(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            BriefError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_str(&content)
    }

    /// Parse config from a TOML string (useful for testing)
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| BriefError::Config(e.to_string()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn zone(&self) -> Result<FixedOffset> {
        self.utc_offset_hours
            .checked_mul(3600)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                BriefError::Config(format!(
                    "utc_offset_hours out of range: {}",
                    self.utc_offset_hours
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = Config::default();

        assert_eq!(
            config.feed_url,
            "https://www.coindesk.com/arc/outboundfeeds/rss/"
        );
        assert_eq!(
            config.keywords,
            vec!["Bitcoin", "Ethereum", "Solana", "BTC", "ETH", "SOL"]
        );
        assert_eq!(config.save_dir, PathBuf::from("ObsidianVault/News/Crypto"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.zone().unwrap().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
            feed_url = "https://example.com/feed.xml"
            keywords = ["Rust", "Tokio"]
            save_dir = "out/briefs"
            timeout_secs = 3
            utc_offset_hours = -5
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let config = Config::load(temp_file.path()).unwrap();

        assert_eq!(config.feed_url, "https://example.com/feed.xml");
        assert_eq!(config.keywords, vec!["Rust", "Tokio"]);
        assert_eq!(config.save_dir, PathBuf::from("out/briefs"));
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.zone().unwrap().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_str(r#"keywords = ["XRP"]"#).unwrap();

        assert_eq!(config.keywords, vec!["XRP"]);
        assert_eq!(config.timeout_secs, 10);
        assert_eq!(config.utc_offset_hours, 9);
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = Config::load("/nonexistent/path/brief.toml");
        assert!(matches!(result, Err(BriefError::Config(_))));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let content = "this is not valid toml {{{";

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();

        let result = Config::load(temp_file.path());
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_field_type() {
        let result = Config::from_str(r#"keywords = "BTC""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_out_of_range_offset() {
        let config = Config::from_str("utc_offset_hours = 30").unwrap();
        assert!(matches!(config.zone(), Err(BriefError::Config(_))));
    }

    #[test]
    fn test_huge_offset_does_not_overflow() {
        for hours in [700000, -700000, i32::MAX, i32::MIN] {
            let config = Config {
                utc_offset_hours: hours,
                ..Config::default()
            };
            assert!(matches!(config.zone(), Err(BriefError::Config(_))));
        }

        let config = Config::from_str("utc_offset_hours = 700000").unwrap();
        assert!(matches!(config.zone(), Err(BriefError::Config(_))));
    }
}
