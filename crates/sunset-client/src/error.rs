//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the analytics platform.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The platform rejected the credentials or the bearer token.
    #[error("authentication failed ({status}): {message}")]
    Unauthorized {
        /// HTTP status code (401 or 403).
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The platform returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the platform.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The platform returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// Failed to parse a platform response.
    #[error("parse error: {0}")]
    Parse(String),

    /// A response parsed but lacked a field the caller depends on.
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// The requested object does not exist on the platform.
    #[error("not found: {0}")]
    NotFound(String),

    /// A request was attempted before logging in.
    #[error("not authenticated: call authenticate() first")]
    NotAuthenticated,
}
