//! SVG surface.
//!
//! Produces a standalone document: one `<path class="link">` per edge and one
//! `<g class="node ...">` group (circle + centered text) per node.

use std::fmt::Write as _;

use crate::domain::curve::fmt_coord;
use crate::domain::Bounds;
use crate::ports::{DrawSurface, EdgeCommand, NodeCommand};

const STYLE: &str = ".link{fill:none;stroke:#ccc;stroke-width:2px}\
.node circle{fill:#fff;stroke:steelblue;stroke-width:3px}\
.node--leaf circle{fill:#e8f0fa}\
.node text{font:12px sans-serif}";

/// Surface that accumulates SVG markup.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    size: Bounds,
    edges: String,
    nodes: String,
}

impl SvgSurface {
    pub fn new(size: Bounds) -> Self {
        Self {
            size,
            edges: String::new(),
            nodes: String::new(),
        }
    }

    /// The complete SVG document for what has been drawn so far.
    pub fn to_document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\
<style>{STYLE}</style><g class=\"links\">{edges}</g><g class=\"nodes\">{nodes}</g></svg>\n",
            w = fmt_coord(self.size.width),
            h = fmt_coord(self.size.height),
            edges = self.edges,
            nodes = self.nodes,
        )
    }
}

impl DrawSurface for SvgSurface {
    fn size(&self) -> Bounds {
        self.size
    }

    fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
    }

    fn draw_edge(&mut self, edge: &EdgeCommand) {
        // Writing into a String cannot fail.
        let _ = write!(self.edges, "<path class=\"link\" d=\"{}\"/>", edge.curve);
    }

    fn draw_node(&mut self, node: &NodeCommand) {
        let operation = node
            .operation
            .map(|op| format!(" data-operation=\"{}\"", op.short_name()))
            .unwrap_or_default();
        let _ = write!(
            self.nodes,
            "<g class=\"node {}\"{} transform=\"translate({},{})\">\
<circle r=\"{}\"/><text dy=\".35em\" y=\"{}\" text-anchor=\"middle\">{}</text></g>",
            node.kind.class_name(),
            operation,
            fmt_coord(node.position.x),
            fmt_coord(node.position.y),
            fmt_coord(node.radius),
            fmt_coord(node.label_dy),
            escape_xml(&node.label),
        );
    }
}

/// Escape text content for XML.
fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
