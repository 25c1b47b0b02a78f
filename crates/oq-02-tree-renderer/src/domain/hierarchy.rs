//! Flattening of a `TreeNode` into an index arena.
//!
//! The arena is in pre-order, so a parent always has a lower index than its
//! children and index 0 is the root. Traversal is iterative; deep trees do
//! not grow the call stack.

use shared_types::TreeNode;

/// One node of the flattened hierarchy.
#[derive(Debug, Clone)]
pub struct HierarchyNode<'a> {
    /// Source node.
    pub data: &'a TreeNode,
    /// Distance from the root.
    pub depth: usize,
    /// Parent index (`None` for the root).
    pub parent: Option<usize>,
    /// Position among the parent's children.
    pub sibling_index: usize,
    /// Child indices, in input order.
    pub children: Vec<usize>,
}

/// Pre-order index arena over a borrowed tree.
#[derive(Debug, Clone)]
pub struct Hierarchy<'a> {
    nodes: Vec<HierarchyNode<'a>>,
    max_depth: usize,
}

impl<'a> Hierarchy<'a> {
    /// Flatten `root` into pre-order.
    pub fn new(root: &'a TreeNode) -> Self {
        let mut nodes: Vec<HierarchyNode<'a>> = Vec::new();
        let mut max_depth = 0;
        // (node, parent, depth, sibling index)
        let mut stack: Vec<(&'a TreeNode, Option<usize>, usize, usize)> = vec![(root, None, 0, 0)];

        while let Some((data, parent, depth, sibling_index)) = stack.pop() {
            let index = nodes.len();
            max_depth = max_depth.max(depth);
            nodes.push(HierarchyNode {
                data,
                depth,
                parent,
                sibling_index,
                children: Vec::with_capacity(data.children.len()),
            });
            if let Some(p) = parent {
                nodes[p].children.push(index);
            }
            for (i, child) in data.children.iter().enumerate().rev() {
                stack.push((child, Some(index), depth + 1, i));
            }
        }

        Self { nodes, max_depth }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn node(&self, index: usize) -> &HierarchyNode<'a> {
        &self.nodes[index]
    }

    pub fn nodes(&self) -> &[HierarchyNode<'a>] {
        &self.nodes
    }

    /// Indices in post-order: every child before its parent, siblings left
    /// to right.
    pub fn post_order(&self) -> Vec<usize> {
        let mut order = Vec::with_capacity(self.nodes.len());
        if self.nodes.is_empty() {
            return order;
        }
        let mut stack = vec![(0usize, false)];
        while let Some((index, expanded)) = stack.pop() {
            if expanded {
                order.push(index);
                continue;
            }
            stack.push((index, true));
            for &child in self.nodes[index].children.iter().rev() {
                stack.push((child, false));
            }
        }
        order
    }
}
