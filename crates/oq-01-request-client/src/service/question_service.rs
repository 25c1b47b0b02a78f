//! Question Service
//!
//! One question, one request: send, check status, validate the body.

use std::time::Instant;

use async_trait::async_trait;
use shared_types::AnswerPayload;
use tracing::{debug, error, info, warn};

use crate::domain::{decode_answer, QuestionRequest};
use crate::error::ClientError;
use crate::ports::{QaTransport, QuestionApi};

/// Longest body excerpt kept in a `Status` error.
const MAX_ERROR_BODY: usize = 200;

/// Implements [`QuestionApi`] over any [`QaTransport`].
pub struct QuestionService<T: QaTransport> {
    transport: T,
}

impl<T: QaTransport> QuestionService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}

#[async_trait]
impl<T: QaTransport> QuestionApi for QuestionService<T> {
    async fn submit_question(&self, question: &str) -> Result<AnswerPayload, ClientError> {
        let request = QuestionRequest::new(question);
        let endpoint = self.transport.endpoint();
        let started = Instant::now();
        debug!(%endpoint, question, "Submitting question");

        let response = self.transport.post_question(&request).await.inspect_err(|e| {
            error!(%endpoint, error = %e, "Question request failed");
        })?;

        if !response.is_success() {
            error!(%endpoint, status = response.status, "QA service returned an error status");
            return Err(ClientError::Status {
                status: response.status,
                body: excerpt(&response.body),
            });
        }

        let payload = decode_answer(&response.body).inspect_err(|e| {
            warn!(%endpoint, error = %e, "Rejected response body");
        })?;

        info!(
            elapsed_ms = started.elapsed().as_millis() as u64,
            server_ms = ?payload.response_time_ms,
            has_tree = payload.has_tree(),
            "Answer received"
        );
        Ok(payload)
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    match trimmed.char_indices().nth(MAX_ERROR_BODY) {
        Some((cut, _)) => format!("{}...", &trimmed[..cut]),
        None => trimmed.to_string(),
    }
}
