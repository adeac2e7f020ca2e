//! Error type for a single GET, kept typed so callers can tell misses apart.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (DNS, connect, timeout, etc.).
    #[error("transport: {0}")]
    Transport(#[from] curl::Error),
    /// Response status was not 200.
    #[error("HTTP {0}")]
    Status(u32),
    /// URL could not be built.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    /// Body was not the JSON we expected.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// True for a definite answer from the server that the resource isn't there.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status(404) | FetchError::Status(410))
    }
}
