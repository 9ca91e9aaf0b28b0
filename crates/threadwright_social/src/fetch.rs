//! Timeout-bounded HTTP downloads.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use threadwright_core::ImageUrl;
use threadwright_error::{HttpError, ThreadwrightResult};
use threadwright_interface::AssetFetcher;
use tracing::{debug, instrument};

/// Downloads generated assets over plain HTTP(S).
#[derive(Debug, Clone)]
pub struct HttpAssetFetcher {
    client: Client,
}

impl HttpAssetFetcher {
    /// Fetcher whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(timeout: Duration) -> ThreadwrightResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HttpError::new(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl AssetFetcher for HttpAssetFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &ImageUrl) -> ThreadwrightResult<Vec<u8>> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| HttpError::new(format!("download failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::new(format!("download returned {}", status)).into());
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| HttpError::new(format!("download body failed: {}", e)))?;
        debug!(bytes = bytes.len(), "Downloaded asset");
        Ok(bytes.to_vec())
    }
}
