//! Error envelope returned by the remote API

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a failed request: `{ "error": "..." }`
#[derive(Debug, Clone, Default, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", .error.as_deref().unwrap_or("Unknown error"))]
pub struct ApiErrorBody {
    #[serde(default, alias = "message")]
    pub error: Option<String>,
}

impl ApiErrorBody {
    /// Parse an error body, `None` if the text is not a JSON error envelope
    /// or carries no message.
    pub fn parse(text: &str) -> Option<String> {
        serde_json::from_str::<ApiErrorBody>(text)
            .ok()
            .and_then(|body| body.error)
            .filter(|msg| !msg.trim().is_empty())
    }
}
