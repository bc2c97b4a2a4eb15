//! Error types for the REST collaborator

use thiserror::Error;

/// Errors returned by a `SyncClient` operation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    /// Connection, IO or request construction failed
    #[error("network error: {0}")]
    Transport(String),

    /// Server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON
    #[error("invalid response body: {0}")]
    Decode(String),

    /// Configured base URL cannot be used
    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl SyncError {
    /// Short message for the status line
    pub fn user_message(&self) -> String {
        match self {
            SyncError::Transport(_) => "Could not reach the server".to_string(),
            SyncError::Status { status, .. } => format!("Server rejected the request ({status})"),
            SyncError::Decode(_) => "Server sent an unexpected response".to_string(),
            SyncError::InvalidBaseUrl(url) => format!("Invalid server address: {url}"),
        }
    }
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            SyncError::Status {
                status: status.as_u16(),
                body: err.to_string(),
            }
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}
