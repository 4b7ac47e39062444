//! Client error types.

use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Validation failed: {field} must not be empty")]
    Validation { field: &'static str },

    #[error("Failed to load posts: server returned {status}: {message}")]
    Feed { status: u16, message: String },

    #[error("Submission failed: server returned {status}: {message}")]
    Submission { status: u16, message: String },

    #[error("No access token configured for the direct strategy")]
    MissingToken,

    #[error("Failed to open browser: {0}")]
    Browser(String),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
