//! Render configuration
//!
//! # Example
//!
//! ```ignore
//! use oq_02_tree_renderer::domain::RenderConfig;
//!
//! let config = RenderConfig::default()
//!     .with_bounds(Bounds::new(800.0, 600.0))
//!     .with_label_offset(16.0);
//! config.validate()?;
//! ```

use serde::{Deserialize, Serialize};

use super::geometry::{Bounds, Margins};
use crate::error::RenderError;

/// Drawing-area and marker settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Full surface size, margins included.
    pub bounds: Bounds,
    /// Space kept free around the tree.
    pub margins: Margins,
    /// Radius of the node marker.
    pub node_radius: f64,
    /// Vertical distance between a node and its label.
    pub label_offset: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::new(660.0, 500.0),
            margins: Margins::new(40.0, 90.0, 50.0, 90.0),
            node_radius: 10.0,
            label_offset: 20.0,
        }
    }
}

impl RenderConfig {
    /// Check that the margins leave a drawable area.
    pub fn validate(&self) -> Result<(), RenderError> {
        self.bounds
            .inner(&self.margins)
            .map(|_| ())
            .ok_or(RenderError::InvalidBounds {
                width: self.bounds.width,
                height: self.bounds.height,
            })
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_label_offset(mut self, offset: f64) -> Self {
        self.label_offset = offset;
        self
    }
}
