/*
[INPUT]:  Error sources (HTTP transport, API statuses, serialization)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for the adapter
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the rosterdesk adapter
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// HTTP request failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status
    #[error("API error ({status}): {status_text}")]
    Api { status: u16, status_text: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ConsoleError {
    /// Create an API error from a response status code
    pub fn api_error(status: StatusCode) -> Self {
        ConsoleError::Api {
            status: status.as_u16(),
            status_text: status_text(status),
        }
    }

    /// Status code carried by an API error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ConsoleError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for errors caused by the transport rather than the backend
    pub fn is_transport(&self) -> bool {
        matches!(self, ConsoleError::Http(_))
    }
}

/// Reason phrase for a status code, "Unknown" when the code has none.
pub(crate) fn status_text(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, ConsoleError>;
