//! # Wire Schema
//!
//! Request and response bodies of the question endpoint, checked on receipt.
//!
//! The server reports the syntax tree in one of two places:
//!
//! - `tree`: a node object `{name, operation?, children}`
//! - `sltag`: the grammar envelope `{syntax: [root, ...], semantics}`
//!
//! Node objects may also carry a `parent` name, which is ignored since the
//! nesting already encodes it, and `children: null` for leaves.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use shared_types::{AnswerPayload, NodeOperation, TreeNode};

use crate::error::ClientError;

/// Body of `POST {base_url}{path}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

impl QuestionRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireAnswer {
    question: String,
    answer: String,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    tree: Option<WireTree>,
    #[serde(default)]
    sltag: Option<WireTree>,
    #[serde(default, rename = "responseTime")]
    response_time: Option<u64>,
}

#[derive(Debug)]
enum WireTree {
    Envelope(WireSltag),
    Node(WireNode),
}

// An object with `syntax` is an envelope, anything else must be a node.
// Picking the shape first keeps serde's field-level error message.
impl<'de> Deserialize<'de> for WireTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_envelope = value
            .as_object()
            .is_some_and(|fields| fields.contains_key("syntax"));
        if is_envelope {
            WireSltag::deserialize(value)
                .map(WireTree::Envelope)
                .map_err(de::Error::custom)
        } else {
            WireNode::deserialize(value)
                .map(WireTree::Node)
                .map_err(de::Error::custom)
        }
    }
}

#[derive(Debug, Deserialize)]
struct WireSltag {
    syntax: Vec<WireNode>,
}

#[derive(Debug, Deserialize)]
struct WireNode {
    name: String,
    #[serde(default)]
    operation: Option<NodeOperation>,
    #[serde(default)]
    children: Option<Vec<WireNode>>,
}

impl WireTree {
    fn into_root(self) -> Option<TreeNode> {
        match self {
            WireTree::Node(node) => Some(node.into_tree()),
            WireTree::Envelope(sltag) => sltag.syntax.into_iter().next().map(WireNode::into_tree),
        }
    }
}

impl WireNode {
    // serde_json caps nesting at 128 levels, so recursion here is bounded.
    fn into_tree(self) -> TreeNode {
        TreeNode {
            name: self.name,
            operation: self.operation,
            children: self
                .children
                .unwrap_or_default()
                .into_iter()
                .map(WireNode::into_tree)
                .collect(),
        }
    }
}

/// Parse and validate a response body into an [`AnswerPayload`].
///
/// `tree` wins over `sltag` when both are present. An envelope with an empty
/// `syntax` list yields an answer without tree.
pub fn decode_answer(body: &str) -> Result<AnswerPayload, ClientError> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| ClientError::malformed(format!("body is not JSON: {e}")))?;
    if !value.is_object() {
        return Err(ClientError::malformed(format!(
            "expected a JSON object, got {}",
            json_type(&value)
        )));
    }

    let wire: WireAnswer = serde_json::from_value(value)
        .map_err(|e| ClientError::malformed(e.to_string()))?;

    let tree = wire
        .tree
        .or(wire.sltag)
        .and_then(WireTree::into_root);

    Ok(AnswerPayload {
        question: wire.question,
        answer: wire.answer,
        query: wire.query.unwrap_or_default(),
        tree,
        response_time_ms: wire.response_time,
    })
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
