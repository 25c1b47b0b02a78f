//! Geometry primitives shared by layout and surfaces.

use serde::{Deserialize, Serialize};

/// A position in surface pixels. `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation towards `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(self.x + (other.x - self.x) * t, self.y + (other.y - self.y) * t)
    }
}

/// Size of a drawing surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Drawable area left after removing `margins`.
    ///
    /// Returns `None` when the margins eat the whole surface or a dimension
    /// is not finite.
    pub fn inner(&self, margins: &Margins) -> Option<Bounds> {
        let width = self.width - margins.left - margins.right;
        let height = self.height - margins.top - margins.bottom;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return None;
        }
        Some(Bounds::new(width, height))
    }
}

/// Space reserved around the drawable area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// Create margins in CSS order (top, right, bottom, left).
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same margin on every side.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }
}
