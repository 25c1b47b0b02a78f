//! # Application State
//!
//! The single answer slot shared by the question flow and the renderer.
//!
//! Writes go through request tickets: `begin_request` hands out a ticket
//! with a fresh generation number and `complete` only applies a result whose
//! ticket is the newest one issued. A slow response to an older question can
//! therefore never overwrite the answer to a newer one.

use std::collections::VecDeque;
use std::fmt;

use shared_types::{AnswerPayload, Classify, ErrorKind, TreeNode};
use tracing::{debug, error, warn};

use crate::error::ClientError;

/// Notices kept for display; older ones are dropped.
pub const MAX_NOTICES: usize = 32;

/// Proof that a request was started, needed to complete it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    generation: u64,
    question: String,
}

impl RequestTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

/// Severity of a [`Notice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Warning,
    Error,
}

/// User-visible, non-fatal message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    /// Failure bucket when the notice came from an error.
    pub kind: Option<ErrorKind>,
    pub message: String,
}

impl Notice {
    /// Build a notice from any classified error.
    pub fn from_error<E: Classify + fmt::Display>(err: &E) -> Self {
        let kind = err.kind();
        let level = match kind {
            ErrorKind::InvalidTree => NoticeLevel::Warning,
            _ => NoticeLevel::Error,
        };
        Self {
            level,
            kind: Some(kind),
            message: format!("{}: {}", kind.title(), err),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What `complete` did with a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The answer replaced the previous one.
    Applied,
    /// The request failed; the previous answer is kept.
    Failed,
    /// A newer request was started meanwhile; the result was dropped.
    Stale,
}

/// Current answer plus request bookkeeping.
#[derive(Debug, Default)]
pub struct AppState {
    current: Option<AnswerPayload>,
    issued: u64,
    in_flight: bool,
    notices: VecDeque<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a request for `question`.
    pub fn begin_request(&mut self, question: impl Into<String>) -> RequestTicket {
        self.issued += 1;
        self.in_flight = true;
        let ticket = RequestTicket {
            generation: self.issued,
            question: question.into(),
        };
        debug!(generation = ticket.generation, question = %ticket.question, "Request started");
        ticket
    }

    /// Apply the outcome of the request identified by `ticket`.
    pub fn complete(
        &mut self,
        ticket: RequestTicket,
        result: Result<AnswerPayload, ClientError>,
    ) -> Completion {
        if ticket.generation != self.issued {
            warn!(
                generation = ticket.generation,
                latest = self.issued,
                "Discarding stale response"
            );
            return Completion::Stale;
        }
        self.in_flight = false;

        match result {
            Ok(payload) => {
                debug!(
                    generation = ticket.generation,
                    has_tree = payload.has_tree(),
                    "Answer stored"
                );
                self.current = Some(payload);
                Completion::Applied
            }
            Err(err) => {
                error!(generation = ticket.generation, error = %err, "Question failed");
                self.push_notice(Notice::from_error(&err));
                Completion::Failed
            }
        }
    }

    /// The latest successfully received answer.
    pub fn current(&self) -> Option<&AnswerPayload> {
        self.current.as_ref()
    }

    /// The tree of the current answer, if any.
    pub fn tree(&self) -> Option<&TreeNode> {
        self.current.as_ref().and_then(|p| p.tree.as_ref())
    }

    /// Whether the visualize action should be offered.
    pub fn can_visualize(&self) -> bool {
        self.tree().is_some()
    }

    /// Whether the newest request is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.in_flight
    }

    /// Record a failure raised outside the request flow.
    pub fn report<E: Classify + fmt::Display>(&mut self, err: &E) {
        self.push_notice(Notice::from_error(err));
    }

    pub fn push_notice(&mut self, notice: Notice) {
        if self.notices.len() == MAX_NOTICES {
            self.notices.pop_front();
        }
        self.notices.push_back(notice);
    }

    pub fn latest_notice(&self) -> Option<&Notice> {
        self.notices.back()
    }

    pub fn notices(&self) -> impl Iterator<Item = &Notice> {
        self.notices.iter()
    }

    /// Forget all notices, e.g. when the user moves on to a new question.
    pub fn clear_notices(&mut self) {
        self.notices.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(text: &str, tree: Option<TreeNode>) -> AnswerPayload {
        AnswerPayload {
            question: "q".into(),
            answer: text.into(),
            query: String::new(),
            tree,
            response_time_ms: None,
        }
    }

    fn transport_error() -> ClientError {
        ClientError::Transport {
            endpoint: "http://localhost:8080/qa".into(),
            message: "connection refused".into(),
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.current().is_none());
        assert!(!state.can_visualize());
        assert!(!state.is_pending());
        assert!(state.latest_notice().is_none());
    }

    #[test]
    fn test_success_replaces_answer() {
        let mut state = AppState::new();
        let t1 = state.begin_request("first");
        assert!(state.is_pending());
        assert_eq!(state.complete(t1, Ok(answer("one", None))), Completion::Applied);
        assert!(!state.is_pending());

        let t2 = state.begin_request("second");
        state.complete(t2, Ok(answer("two", Some(TreeNode::leaf("S")))));
        assert_eq!(state.current().unwrap().answer, "two");
        assert!(state.can_visualize());
    }

    #[test]
    fn test_failure_keeps_previous_answer() {
        let mut state = AppState::new();
        let t1 = state.begin_request("first");
        state.complete(t1, Ok(answer("one", Some(TreeNode::leaf("S")))));

        let t2 = state.begin_request("second");
        assert_eq!(state.complete(t2, Err(transport_error())), Completion::Failed);
        assert_eq!(state.current().unwrap().answer, "one");

        let notice = state.latest_notice().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.kind, Some(ErrorKind::TransportFailure));
        assert!(notice.message.starts_with("Request failed: "));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = AppState::new();
        let old = state.begin_request("old");
        let new = state.begin_request("new");
        assert_eq!(old.generation() + 1, new.generation());

        assert_eq!(state.complete(new, Ok(answer("new", None))), Completion::Applied);
        assert_eq!(state.complete(old, Ok(answer("old", None))), Completion::Stale);
        assert_eq!(state.current().unwrap().answer, "new");
    }

    #[test]
    fn test_stale_failure_does_not_clear_pending() {
        let mut state = AppState::new();
        let old = state.begin_request("old");
        let _new = state.begin_request("new");
        assert_eq!(state.complete(old, Err(transport_error())), Completion::Stale);
        assert!(state.is_pending());
        assert!(state.latest_notice().is_none());
    }

    #[test]
    fn test_answer_without_tree_cannot_visualize() {
        let mut state = AppState::new();
        let t = state.begin_request("q");
        state.complete(t, Ok(answer("a", None)));
        assert!(state.current().is_some());
        assert!(!state.can_visualize());
    }

    #[test]
    fn test_notices_are_bounded() {
        let mut state = AppState::new();
        for i in 0..(MAX_NOTICES + 5) {
            state.report(&ClientError::MalformedResponse(format!("n{i}")));
        }
        assert_eq!(state.notices().count(), MAX_NOTICES);
        assert!(state.notices().next().unwrap().message.ends_with("n5"));
        state.clear_notices();
        assert!(state.latest_notice().is_none());
    }
}
