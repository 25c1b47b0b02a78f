//! Outbound Ports (Driven Ports)
//!
//! The drawing target. The renderer's contract ends at emitting these
//! commands; pixels are the surface's business.

use serde::{Deserialize, Serialize};
use shared_types::NodeOperation;

use crate::domain::{Bounds, CubicCurve, Point};

/// Visual class of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeKind {
    /// Has at least one child; label drawn above the marker.
    Internal,
    /// No children; label drawn below the marker.
    Leaf,
}

impl NodeKind {
    /// CSS-style class name.
    pub fn class_name(&self) -> &'static str {
        match self {
            NodeKind::Internal => "node--internal",
            NodeKind::Leaf => "node--leaf",
        }
    }
}

/// Draw one node marker with its label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeCommand {
    pub position: Point,
    /// The source node's name, as is.
    pub label: String,
    /// Grammar marker; surfaces choose how to show it.
    pub operation: Option<NodeOperation>,
    pub kind: NodeKind,
    pub depth: usize,
    /// Marker radius.
    pub radius: f64,
    /// Signed vertical label offset from `position` (negative = above).
    pub label_dy: f64,
}

/// Draw one curved connector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeCommand {
    pub curve: CubicCurve,
}

/// A single entry in the ordered command stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Clear,
    Edge(EdgeCommand),
    Node(NodeCommand),
}

/// Drawing target with a fixed pixel rectangle (Driven Port)
///
/// Implementations own the actual output. `clear` must drop everything drawn
/// so far.
pub trait DrawSurface {
    /// Pixel size of the surface.
    fn size(&self) -> Bounds;

    /// Remove all previous output.
    fn clear(&mut self);

    fn draw_edge(&mut self, edge: &EdgeCommand);

    fn draw_node(&mut self, node: &NodeCommand);
}
