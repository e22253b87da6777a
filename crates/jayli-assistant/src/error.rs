//! Assistant error types.

use thiserror::Error;

/// Errors that can occur while asking the model for a reply.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssistantError {
    /// Failed to send the request.
    #[error("Request failed: {0}")]
    Request(String),

    /// The API answered with an error status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Failed to parse the response body.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// No API key in the environment.
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    /// A reply is still being generated.
    #[error("Still typing a reply")]
    Busy,
}

impl From<reqwest::Error> for AssistantError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            AssistantError::Parse(e.to_string())
        } else {
            AssistantError::Request(e.to_string())
        }
    }
}

impl From<serde_json::Error> for AssistantError {
    fn from(e: serde_json::Error) -> Self {
        AssistantError::Parse(e.to_string())
    }
}
