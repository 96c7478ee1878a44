//! Errors returned by the entry endpoint client

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The server answered with a non-success status
    #[error("server responded with status {0}")]
    Status(u16),

    /// The request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// The response body was not the expected JSON
    #[error("malformed response from {url}: {message}")]
    Decode { url: String, message: String },

    /// A file attached to the form could not be read
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Status(status.as_u16()),
            None => Self::Transport(err.to_string()),
        }
    }
}
