//! Error types for the party planner.

use thiserror::Error;

/// Errors that can occur while talking to the party service.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response from {0} carried no data")]
    MissingData(String),

    #[error("Server rejected the request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { status: u16, message: Option<String> },

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ApiError {
    /// Message to show the user, or `None` when the failure should only be logged.
    ///
    /// `fallback` stands in for a rejection that carried no server message.
    pub fn user_message(&self, fallback: &str) -> Option<String> {
        match self {
            ApiError::Rejected { message, .. } => {
                Some(message.clone().unwrap_or_else(|| fallback.to_string()))
            }
            _ => None,
        }
    }
}

/// Result type alias for party service operations.
pub type ApiResult<T> = Result<T, ApiError>;
