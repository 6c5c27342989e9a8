//! Error types for the content client

use thiserror::Error;

/// Content client error
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Content lake returned an error
    #[error("Store error {status}: {message}")]
    Store { status: u16, message: String },

    /// Invalid client configuration
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type for content operations
pub type Result<T> = std::result::Result<T, ContentError>;
