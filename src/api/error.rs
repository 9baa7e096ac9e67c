//! Error types for API calls.

use thiserror::Error;

/// Errors that can occur when calling the console API.
///
/// Lower layers of a feature chain pass these through unchanged; the view
/// model decides what the user sees.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Failed to reach the API at all.
    #[error("Connection failed: {source}")]
    Connection {
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// An authenticated endpoint was called with no stored token.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The API rejected the credentials or token (401/403).
    #[error("Rejected by the API ({status})")]
    Unauthorized { status: u16 },

    /// Any other non-success response.
    #[error("Upstream error: {status} - {message}")]
    Upstream { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {source}")]
    Decode {
        #[source]
        source: reqwest::Error,
    },
}
