//! Tree Renderer Service
//!
//! Turns a layout into an ordered command stream: clear, every edge, then
//! every node, so markers are painted over connectors.

use shared_types::{AnswerPayload, TreeNode};
use tracing::{debug, warn};

use crate::domain::{layout_tree, RenderConfig, TreeLayout};
use crate::error::RenderError;
use crate::ports::{DrawCommand, DrawSurface, EdgeCommand, NodeCommand, NodeKind, TreeRendererApi};

/// Tree renderer implementation
///
/// Stateless apart from its configuration; every call recomputes from
/// scratch.
#[derive(Debug, Clone, Default)]
pub struct TreeRenderer {
    config: RenderConfig,
}

impl TreeRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Command stream for `layout`, without touching any surface.
    pub fn commands(&self, layout: &TreeLayout) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(1 + layout.edges.len() + layout.nodes.len());
        commands.push(DrawCommand::Clear);
        commands.extend(
            layout
                .edges
                .iter()
                .map(|edge| DrawCommand::Edge(EdgeCommand { curve: edge.curve })),
        );
        commands.extend(layout.nodes.iter().map(|node| {
            let kind = if node.is_leaf() {
                NodeKind::Leaf
            } else {
                NodeKind::Internal
            };
            let label_dy = match kind {
                NodeKind::Internal => -self.config.label_offset,
                NodeKind::Leaf => self.config.label_offset,
            };
            DrawCommand::Node(NodeCommand {
                position: node.position(),
                label: node.name.clone(),
                operation: node.operation,
                kind,
                depth: node.depth,
                radius: self.config.node_radius,
                label_dy,
            })
        }));
        commands
    }
}

impl TreeRendererApi for TreeRenderer {
    fn layout(&self, root: Option<&TreeNode>) -> Result<TreeLayout, RenderError> {
        layout_tree(root, self.config.bounds, self.config.margins)
    }

    fn render(&self, layout: &TreeLayout, surface: &mut dyn DrawSurface) {
        for command in self.commands(layout) {
            match command {
                DrawCommand::Clear => surface.clear(),
                DrawCommand::Edge(edge) => surface.draw_edge(&edge),
                DrawCommand::Node(node) => surface.draw_node(&node),
            }
        }
        debug!(
            nodes = layout.nodes.len(),
            edges = layout.edges.len(),
            "Tree rendered"
        );
    }

    fn visualize(
        &self,
        payload: &AnswerPayload,
        surface: &mut dyn DrawSurface,
    ) -> Result<TreeLayout, RenderError> {
        let Some(tree) = payload.tree.as_ref() else {
            warn!(question = %payload.question, "Visualization requested without syntax tree");
            return Err(RenderError::missing_tree());
        };
        let layout = layout_tree(Some(tree), surface.size(), self.config.margins)?;
        self.render(&layout, surface);
        Ok(layout)
    }
}
