//! Error types for the request client

use shared_types::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur while asking the QA service a question
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Cannot reach {endpoint}: {message}")]
    Transport { endpoint: String, message: String },

    #[error("Server answered HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Wrap a reqwest failure for `endpoint`.
    pub fn transport(endpoint: impl ToString, err: &reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "connection refused".to_string()
        } else {
            err.to_string()
        };
        Self::Transport {
            endpoint: endpoint.to_string(),
            message,
        }
    }

    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedResponse(reason.into())
    }
}

impl Classify for ClientError {
    fn kind(&self) -> ErrorKind {
        match self {
            Self::Transport { .. } | Self::Status { .. } => ErrorKind::TransportFailure,
            Self::MalformedResponse(_) => ErrorKind::MalformedResponse,
            Self::InvalidConfig(_) => ErrorKind::Configuration,
        }
    }
}
