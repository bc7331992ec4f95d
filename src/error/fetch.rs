use thiserror::Error;

/// Failure retrieving an attachment's binary content from its CDN URL.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP transport error or non-success status code.
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
