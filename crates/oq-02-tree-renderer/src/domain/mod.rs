//! Domain Layer - Pure layout logic
//!
//! This layer contains:
//! - Geometry primitives (points, bounds, margins)
//! - Hierarchy flattening into an index arena
//! - The tidy-tree walk (Buchheim / Walker)
//! - Edge curves
//! - Render configuration
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod config;
pub mod curve;
pub mod geometry;
pub mod hierarchy;
pub mod layout;
pub mod tidy;

pub use config::RenderConfig;
pub use curve::CubicCurve;
pub use geometry::{Bounds, Margins, Point};
pub use layout::{layout_tree, LayoutNode, RenderEdge, TreeLayout};
