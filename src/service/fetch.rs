//! Attachment content retrieval from the Discord CDN.

use async_trait::async_trait;

use crate::error::fetch::FetchError;

/// Fetches an attachment's binary content by URL.
#[async_trait]
pub trait AttachmentFetcher: Send + Sync {
    /// Downloads the full body behind `url`.
    ///
    /// # Returns
    /// - `Ok(Vec<u8>)` - The complete response body
    /// - `Err(FetchError)` - Transport failure or non-success status code
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}

/// `AttachmentFetcher` backed by a shared reqwest client.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AttachmentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}
