//! Error types for the reelpick core library.
//!
//! Transport-level failures carry their `reqwest` source; upstream status
//! codes that need distinct handling (404, 429) get their own variants.

use thiserror::Error;

/// Error type for TMDB operations
#[derive(Error, Debug)]
pub enum TmdbError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Response body was not the expected JSON shape
    #[error("Failed to decode TMDB response: {0}")]
    DecodeError(#[from] serde_json::Error),

    /// Rate limited by the upstream API (HTTP 429)
    #[error("Rate limited - too many requests")]
    RateLimited,

    /// Requested resource was not found (HTTP 404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Upstream returned a status we do not handle specially
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Request URL (never carries the credential; auth is header-only)
        url: String,
    },

    /// Bearer token was empty or not a valid header value
    #[error("Invalid TMDB access token")]
    InvalidCredential,
}

/// Result type alias for TMDB operations
pub type Result<T> = std::result::Result<T, TmdbError>;
