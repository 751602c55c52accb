//! Error types for the Notion SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type NotionResult<T> = Result<T, NotionError>;

/// Error types that can occur when talking to the Notion API.
#[derive(Debug, thiserror::Error)]
pub enum NotionError {
    /// HTTP request failed before a response was decoded.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error (status {status}, {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl NotionError {
    /// Check if this error is the API's not-found response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
            || matches!(self, Self::Api { code, .. } if code == "object_not_found")
    }

    /// Check if this error is an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        // Try to parse as the API's error object
        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(body) {
            Self::Api {
                status: error_response.status,
                code: error_response.code,
                message: error_response.message,
            }
        } else {
            Self::Api {
                status,
                code: "unknown".to_string(),
                message: body.to_string(),
            }
        }
    }
}

/// Error response body from the Notion API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub object: String,
    pub status: u16,
    pub code: String,
    pub message: String,
}
