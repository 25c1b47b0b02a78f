//! # Core Domain Entities
//!
//! The answer payload returned by the QA service and the syntax tree it
//! optionally carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker attached to an LTAG node by the grammar.
///
/// Adjunction nodes are foot nodes, substitution nodes are open slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeOperation {
    /// Adjunction (`ADJ`).
    #[serde(rename = "ADJ")]
    Adjunction,
    /// Substitution (`SUB`).
    #[serde(rename = "SUB")]
    Substitution,
}

impl NodeOperation {
    /// Short name used on the wire.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Adjunction => "ADJ",
            Self::Substitution => "SUB",
        }
    }
}

/// One node of a parse/syntax tree.
///
/// Children are owned, so a `TreeNode` is always a finite, acyclic tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Node label (category + id for non-terminals, the word for terminals).
    pub name: String,
    /// Grammar marker, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<NodeOperation>,
    /// Ordered children; empty for a leaf.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Create a leaf node.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operation: None,
            children: Vec::new(),
        }
    }

    /// Create a node with the given children.
    pub fn with_children(name: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            name: name.into(),
            operation: None,
            children,
        }
    }

    /// Attach a grammar marker.
    pub fn with_operation(mut self, operation: NodeOperation) -> Self {
        self.operation = Some(operation);
        self
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::node_count).sum::<usize>()
    }

    /// Depth of the deepest node below `self` (a leaf has depth 0).
    pub fn max_depth(&self) -> usize {
        self.children
            .iter()
            .map(|c| c.max_depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl fmt::Display for TreeNode {
    /// Bracketed notation, e.g. `S(NP, VP(V))`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.children.is_empty() {
            write!(f, "(")?;
            for (i, child) in self.children.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", child)?;
            }
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A validated answer returned by the QA service.
///
/// Replaced wholesale on every new answer; never patched in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerPayload {
    /// The question as echoed by the server.
    pub question: String,
    /// Answer text.
    pub answer: String,
    /// Query representation (SPARQL) used to produce the answer.
    pub query: String,
    /// Syntax tree of the question, when the server produced one.
    pub tree: Option<TreeNode>,
    /// Server-side processing time in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_time_ms: Option<u64>,
}

impl AnswerPayload {
    /// Whether the payload carries a tree that can be visualized.
    pub fn has_tree(&self) -> bool {
        self.tree.is_some()
    }
}
