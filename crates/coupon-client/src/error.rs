//! Client error types.

use serde::Deserialize;

/// Error envelope returned by the coupon service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// Request path the server reported.
    #[serde(default)]
    pub url: String,
    /// Human-readable message.
    pub message: String,
    /// Machine-readable error code.
    pub error_code: String,
}

/// Errors that can occur when using the coupon client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned an error response.
    #[error("API error: {code} - {message}")]
    Api {
        /// Error code.
        code: String,
        /// Error message.
        message: String,
        /// HTTP status code.
        status: u16,
    },

    /// No coupon exists with the requested identifier.
    #[error("coupon not found: {message}")]
    NotFound {
        /// Server message.
        message: String,
    },

    /// A coupon was already issued for the email.
    #[error("coupon already issued for this email")]
    DuplicateEmail,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The server's error code, if the server answered with one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code),
            Self::NotFound { .. } => Some("not.exist.coupon"),
            Self::DuplicateEmail => Some("duplicate.email"),
            Self::Http(_) | Self::Serialization(_) => None,
        }
    }
}
