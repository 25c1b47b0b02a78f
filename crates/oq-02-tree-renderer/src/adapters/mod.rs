//! Adapters Layer - Concrete drawing surfaces
//!
//! - `SvgSurface`: standalone SVG document
//! - `RecordingSurface`: keeps the command log in memory

pub mod recording;
pub mod svg;

pub use recording::RecordingSurface;
pub use svg::SvgSurface;
