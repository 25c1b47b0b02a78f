//! Outbound ports (Driven Ports)

use async_trait::async_trait;

use crate::domain::QuestionRequest;
use crate::error::ClientError;

/// Status and body of an HTTP exchange, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Delivers a question to the QA service.
///
/// Implementations report network-level failures as
/// `ClientError::Transport`; any HTTP status is returned as a `RawResponse`.
#[async_trait]
pub trait QaTransport: Send + Sync {
    async fn post_question(&self, request: &QuestionRequest) -> Result<RawResponse, ClientError>;

    /// Human-readable target, for logs.
    fn endpoint(&self) -> String;
}
