//! # OQ-02 Tree Renderer
//!
//! Lays out the syntax tree returned by the QA service and turns the layout
//! into draw commands for an abstract surface.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure layout logic, no I/O
//!   - `layout_tree`: tidy-tree layout into a bounded rectangle
//!   - `TreeLayout`, `LayoutNode`, `RenderEdge`: layout output
//!   - `CubicCurve`: edge geometry
//!   - `RenderConfig`: drawing-area configuration
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `TreeRendererApi`: Driving port (inbound API)
//!   - `DrawSurface`: Driven port (the drawing target)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `TreeRenderer`: Implements `TreeRendererApi`
//!
//! - **Adapters Layer** (`adapters/`): Concrete surfaces
//!   - `SvgSurface`: SVG document output
//!   - `RecordingSurface`: In-memory command log
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: N input nodes produce N layout nodes and N-1 edges.
//! - **INVARIANT-2**: Nodes at the same depth share the same y coordinate.
//! - **INVARIANT-3**: Siblings keep their input order left to right.
//! - **INVARIANT-4**: Same tree and bounds always give the same coordinates.
//!
//! ## Usage Example
//!
//! ```ignore
//! use oq_02_tree_renderer::{layout_tree, Bounds, Margins};
//!
//! let layout = layout_tree(Some(&tree), Bounds::new(560.0, 400.0), Margins::new(40.0, 90.0, 50.0, 90.0))?;
//! assert_eq!(layout.edges.len(), layout.nodes.len() - 1);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::{RecordingSurface, SvgSurface};
pub use domain::{
    layout_tree, Bounds, CubicCurve, LayoutNode, Margins, Point, RenderConfig, RenderEdge,
    TreeLayout,
};
pub use error::RenderError;
pub use ports::{DrawCommand, DrawSurface, EdgeCommand, NodeCommand, NodeKind, TreeRendererApi};
pub use service::TreeRenderer;
