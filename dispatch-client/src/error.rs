//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (unreachable, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success status; `message` is the server's error text when it sent one
    #[error("API error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Base URL or path could not be turned into a request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Response body did not decode
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Text shown to the user in a blocking notice.
    ///
    /// Server-provided and validation messages are passed through verbatim.
    pub fn user_message(&self) -> String {
        match self {
            Self::Api { message, .. } | Self::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// HTTP status of an API error
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
