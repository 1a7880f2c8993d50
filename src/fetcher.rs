use std::time::Duration;

use reqwest::Client;
use tracing::{debug, info};

use crate::error::Result;

pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("CryptoBrief/1.0 (RSS Digest)")
            .build()?;

        Ok(Self { client })
    }

    /// Single GET, no retry. Non-2xx statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("Fetching feed: {}", url);

        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        debug!("Received {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}
