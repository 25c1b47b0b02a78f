//! Error types for the Tree Renderer subsystem

use shared_types::{Classify, ErrorKind};
use thiserror::Error;

/// Errors that can occur while laying out or rendering a tree
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    #[error("Invalid tree: {0}")]
    InvalidTree(String),

    #[error("Invalid bounds: {width}x{height} leaves no drawable area after margins")]
    InvalidBounds { width: f64, height: f64 },
}

impl RenderError {
    /// Visualization requested before any tree was received.
    pub fn missing_tree() -> Self {
        RenderError::InvalidTree("no syntax tree present".to_string())
    }
}

impl Classify for RenderError {
    fn kind(&self) -> ErrorKind {
        match self {
            RenderError::InvalidTree(_) => ErrorKind::InvalidTree,
            RenderError::InvalidBounds { .. } => ErrorKind::Configuration,
        }
    }
}
