//! Tree view: a [`DrawSurface`] painted onto a ratatui braille canvas.
//!
//! The surface is sized in virtual pixels (one cell is 8x16) so the default
//! margins and marker sizes keep their proportions in a terminal. Canvas y
//! grows upwards, surface y grows downwards; `to_canvas` flips between them.
//!
//! [`TreeCache`] keeps the last drawing so frames only repaint it; layout
//! runs again when the answer or the area changes.

use oq_02_tree_renderer::{
    Bounds, DrawSurface, EdgeCommand, NodeCommand, NodeKind, Point, RenderError, TreeRenderer,
    TreeRendererApi,
};
use shared_types::{AnswerPayload, NodeOperation};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        canvas::{Canvas, Circle, Line as CanvasLine},
        Block,
    },
    Frame,
};

/// Virtual pixels per terminal column.
pub const CELL_WIDTH_PX: f64 = 8.0;
/// Virtual pixels per terminal row.
pub const CELL_HEIGHT_PX: f64 = 16.0;
/// Straight segments used to approximate one edge curve.
pub const CURVE_SEGMENTS: usize = 12;

/// Collects what the renderer draws, ready to paint on a canvas.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    size: Bounds,
    segments: Vec<(Point, Point)>,
    nodes: Vec<NodeCommand>,
}

impl CanvasSurface {
    pub fn new(size: Bounds) -> Self {
        Self {
            size,
            segments: Vec::new(),
            nodes: Vec::new(),
        }
    }

    /// Surface covering a terminal area.
    pub fn for_area(area: Rect) -> Self {
        Self::new(Bounds::new(
            f64::from(area.width) * CELL_WIDTH_PX,
            f64::from(area.height) * CELL_HEIGHT_PX,
        ))
    }

    pub fn segments(&self) -> &[(Point, Point)] {
        &self.segments
    }

    pub fn nodes(&self) -> &[NodeCommand] {
        &self.nodes
    }

    /// Surface coordinates to canvas coordinates.
    pub fn to_canvas(&self, point: Point) -> (f64, f64) {
        (point.x, self.size.height - point.y)
    }

    /// Paint everything drawn so far into `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect, block: Block<'_>) {
        let canvas = Canvas::default()
            .block(block)
            .marker(Marker::Braille)
            .x_bounds([0.0, self.size.width])
            .y_bounds([0.0, self.size.height])
            .paint(|ctx| {
                for (from, to) in &self.segments {
                    let (x1, y1) = self.to_canvas(*from);
                    let (x2, y2) = self.to_canvas(*to);
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::DarkGray));
                }
                ctx.layer();

                for node in &self.nodes {
                    let color = node_color(node);
                    let (x, y) = self.to_canvas(node.position);
                    ctx.draw(&Circle {
                        x,
                        y,
                        radius: node.radius,
                        color,
                    });

                    let label_at = Point::new(
                        node.position.x - label_half_width(&node.label),
                        node.position.y + node.label_dy,
                    );
                    let (lx, ly) = self.to_canvas(label_at);
                    ctx.print(lx, ly, Span::styled(node.label.clone(), Style::default().fg(color)));
                }
            });
        frame.render_widget(canvas, area);
    }
}

/// Last tree drawing, keyed by the area it was drawn for.
#[derive(Debug, Default)]
pub struct TreeCache {
    entry: Option<(Rect, Result<CanvasSurface, RenderError>)>,
}

impl TreeCache {
    /// Drawing of `payload` for `area`, laid out only on a cache miss.
    pub fn get_or_draw(
        &mut self,
        area: Rect,
        renderer: &TreeRenderer,
        payload: Option<&AnswerPayload>,
    ) -> &Result<CanvasSurface, RenderError> {
        if !self.is_fresh_for(area) {
            self.entry = None;
        }
        let (_, drawn) = self.entry.get_or_insert_with(|| {
            let mut surface = CanvasSurface::for_area(area);
            let drawn = match payload {
                Some(payload) => renderer.visualize(payload, &mut surface).map(|_| surface),
                None => renderer.layout(None).map(|_| surface),
            };
            (area, drawn)
        });
        drawn
    }

    /// Whether a drawing for `area` is held.
    pub fn is_fresh_for(&self, area: Rect) -> bool {
        matches!(&self.entry, Some((cached, _)) if *cached == area)
    }

    /// Drop the drawing; the next frame lays the tree out again.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}

/// Marked nodes stand out; otherwise internal and leaf nodes differ.
fn node_color(node: &NodeCommand) -> Color {
    match (node.operation, node.kind) {
        (Some(NodeOperation::Substitution), _) => Color::Magenta,
        (Some(NodeOperation::Adjunction), _) => Color::Yellow,
        (None, NodeKind::Internal) => Color::Cyan,
        (None, NodeKind::Leaf) => Color::Green,
    }
}

fn label_half_width(label: &str) -> f64 {
    label.chars().count() as f64 * CELL_WIDTH_PX / 2.0
}

impl DrawSurface for CanvasSurface {
    fn size(&self) -> Bounds {
        self.size
    }

    fn clear(&mut self) {
        self.segments.clear();
        self.nodes.clear();
    }

    fn draw_edge(&mut self, edge: &EdgeCommand) {
        let points = edge.curve.sample(CURVE_SEGMENTS);
        self.segments
            .extend(points.windows(2).map(|pair| (pair[0], pair[1])));
    }

    fn draw_node(&mut self, node: &NodeCommand) {
        self.nodes.push(node.clone());
    }
}
