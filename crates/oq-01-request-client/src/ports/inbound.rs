//! Inbound ports (Driving Ports)

use async_trait::async_trait;
use shared_types::AnswerPayload;

use crate::error::ClientError;

/// Ask the QA service a question.
///
/// Each call performs exactly one request; there is no retry and no
/// client-side validation of `question` (the empty string is sent as is).
#[async_trait]
pub trait QuestionApi: Send + Sync {
    async fn submit_question(&self, question: &str) -> Result<AnswerPayload, ClientError>;
}
