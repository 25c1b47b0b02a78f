//! Cubic Bezier connectors between a child and its parent.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::geometry::Point;

/// A cubic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicCurve {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl CubicCurve {
    /// Vertical "elbow" curve from `child` up to `parent`.
    ///
    /// Both control points sit on the horizontal line halfway between the two
    /// levels, directly above/below their endpoint, so the curve leaves and
    /// enters each node vertically.
    pub fn connector(child: Point, parent: Point) -> Self {
        let mid_y = (child.y + parent.y) / 2.0;
        Self {
            start: child,
            control1: Point::new(child.x, mid_y),
            control2: Point::new(parent.x, mid_y),
            end: parent,
        }
    }

    /// Point on the curve at parameter `t` in `[0, 1]` (de Casteljau).
    pub fn point_at(&self, t: f64) -> Point {
        let a = self.start.lerp(self.control1, t);
        let b = self.control1.lerp(self.control2, t);
        let c = self.control2.lerp(self.end, t);
        let d = a.lerp(b, t);
        let e = b.lerp(c, t);
        d.lerp(e, t)
    }

    /// Polyline approximation with `segments` segments (at least one).
    pub fn sample(&self, segments: usize) -> Vec<Point> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| self.point_at(i as f64 / segments as f64))
            .collect()
    }

    /// SVG path data (`M x,y C x1,y1 x2,y2 x,y`).
    pub fn to_svg_path(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CubicCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "M{},{}C{},{} {},{} {},{}",
            fmt_coord(self.start.x),
            fmt_coord(self.start.y),
            fmt_coord(self.control1.x),
            fmt_coord(self.control1.y),
            fmt_coord(self.control2.x),
            fmt_coord(self.control2.y),
            fmt_coord(self.end.x),
            fmt_coord(self.end.y),
        )
    }
}

/// Format a coordinate with at most three decimals and no trailing zeros.
pub(crate) fn fmt_coord(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    // avoid "-0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}
