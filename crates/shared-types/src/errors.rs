//! # Error Taxonomy
//!
//! Failure kinds of the question/visualize flow. Crate-level errors map into
//! these so the front end can report them uniformly.

use std::fmt;

/// Classification of a failure, independent of where it was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Network or HTTP-level failure talking to the QA service.
    TransportFailure,
    /// The server answered with a body that does not match the schema.
    MalformedResponse,
    /// Visualization requested without a usable tree.
    InvalidTree,
    /// Endpoint or drawing-area settings that cannot be used.
    Configuration,
}

impl ErrorKind {
    /// Short human-readable title.
    pub fn title(&self) -> &'static str {
        match self {
            ErrorKind::TransportFailure => "Request failed",
            ErrorKind::MalformedResponse => "Unexpected response",
            ErrorKind::InvalidTree => "Nothing to visualize",
            ErrorKind::Configuration => "Invalid configuration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Implemented by every error type that can reach the user.
pub trait Classify {
    /// The taxonomy bucket this error falls in.
    fn kind(&self) -> ErrorKind;
}
