//! Tree layout: tidy walk scaled into a bounded rectangle.

use serde::{Deserialize, Serialize};
use shared_types::{NodeOperation, TreeNode};
use tracing::debug;

use super::curve::CubicCurve;
use super::geometry::{Bounds, Margins, Point};
use super::hierarchy::Hierarchy;
use super::tidy::{TidyWalk, COUSIN_SEPARATION, SIBLING_SEPARATION};
use crate::error::RenderError;

/// A positioned node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    /// Index in `TreeLayout::nodes` (pre-order).
    pub index: usize,
    /// Label of the source node.
    pub name: String,
    /// Grammar marker of the source node.
    pub operation: Option<NodeOperation>,
    /// Horizontal position in surface pixels.
    pub x: f64,
    /// Vertical position in surface pixels.
    pub y: f64,
    /// Distance from the root.
    pub depth: usize,
    /// Parent index (`None` for the root).
    pub parent: Option<usize>,
    /// Child indices, in input order.
    pub children: Vec<usize>,
}

impl LayoutNode {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Connector from a parent to one of its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderEdge {
    pub parent: usize,
    pub child: usize,
    pub curve: CubicCurve,
}

/// Result of one layout pass. Never cached between renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    /// Nodes in pre-order; `nodes[0]` is the root.
    pub nodes: Vec<LayoutNode>,
    /// One edge per non-root node, in pre-order of the child.
    pub edges: Vec<RenderEdge>,
    /// Surface size the layout was computed for.
    pub bounds: Bounds,
    /// Margins the layout was computed with.
    pub margins: Margins,
}

impl TreeLayout {
    pub fn root(&self) -> &LayoutNode {
        &self.nodes[0]
    }

    /// Deepest level present in the layout.
    pub fn max_depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Find the first node (pre-order) with the given name.
    pub fn find(&self, name: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|n| n.name == name)
    }
}

/// Lay out `root` inside `bounds` minus `margins`.
///
/// Positions follow the tidy-tree convention: same depth means same y,
/// siblings keep input order, parents are centered over their children.
/// The leftmost and rightmost nodes sit half a separation unit in from the
/// edges of the inner rectangle; depth maps linearly onto its height.
/// Coordinates are in surface space (the margin offset is already applied).
///
/// A missing root is rejected with [`RenderError::InvalidTree`].
pub fn layout_tree(
    root: Option<&TreeNode>,
    bounds: Bounds,
    margins: Margins,
) -> Result<TreeLayout, RenderError> {
    let root = root.ok_or_else(RenderError::missing_tree)?;
    let inner = bounds.inner(&margins).ok_or(RenderError::InvalidBounds {
        width: bounds.width,
        height: bounds.height,
    })?;

    let hierarchy = Hierarchy::new(root);
    let raw_x = TidyWalk::new(&hierarchy).run();

    // Extremes, first occurrence in pre-order wins ties.
    let mut left = 0;
    let mut right = 0;
    for (i, &x) in raw_x.iter().enumerate() {
        if x < raw_x[left] {
            left = i;
        }
        if x > raw_x[right] {
            right = i;
        }
    }

    let edge_pad = if left == right {
        SIBLING_SEPARATION
    } else if hierarchy.node(left).parent == hierarchy.node(right).parent {
        SIBLING_SEPARATION / 2.0
    } else {
        COUSIN_SEPARATION / 2.0
    };
    let tx = edge_pad - raw_x[left];
    let kx = inner.width / (raw_x[right] + edge_pad + tx);
    let ky = inner.height / hierarchy.max_depth().max(1) as f64;

    let nodes: Vec<LayoutNode> = hierarchy
        .nodes()
        .iter()
        .enumerate()
        .map(|(index, h)| LayoutNode {
            index,
            name: h.data.name.clone(),
            operation: h.data.operation,
            x: (raw_x[index] + tx) * kx + margins.left,
            y: h.depth as f64 * ky + margins.top,
            depth: h.depth,
            parent: h.parent,
            children: h.children.clone(),
        })
        .collect();

    let edges: Vec<RenderEdge> = nodes
        .iter()
        .filter_map(|child| {
            let parent = child.parent?;
            Some(RenderEdge {
                parent,
                child: child.index,
                curve: CubicCurve::connector(child.position(), nodes[parent].position()),
            })
        })
        .collect();

    debug!(
        nodes = nodes.len(),
        edges = edges.len(),
        max_depth = hierarchy.max_depth(),
        "Tree layout computed"
    );

    Ok(TreeLayout {
        nodes,
        edges,
        bounds,
        margins,
    })
}
