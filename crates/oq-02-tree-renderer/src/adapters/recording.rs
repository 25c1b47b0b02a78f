//! In-memory surface that records what it was asked to draw.

use crate::domain::Bounds;
use crate::ports::{DrawCommand, DrawSurface, EdgeCommand, NodeCommand};

/// Surface that stores commands instead of drawing them.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Bounds,
    commands: Vec<DrawCommand>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new(size: Bounds) -> Self {
        Self {
            size,
            commands: Vec::new(),
            clears: 0,
        }
    }

    /// Commands drawn since the last clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// How many times the surface was cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &NodeCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Node(node) => Some(node),
            _ => None,
        })
    }

    pub fn edges(&self) -> impl Iterator<Item = &EdgeCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Edge(edge) => Some(edge),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> Bounds {
        self.size
    }

    fn clear(&mut self) {
        self.commands.clear();
        self.clears += 1;
    }

    fn draw_edge(&mut self, edge: &EdgeCommand) {
        self.commands.push(DrawCommand::Edge(edge.clone()));
    }

    fn draw_node(&mut self, node: &NodeCommand) {
        self.commands.push(DrawCommand::Node(node.clone()));
    }
}
