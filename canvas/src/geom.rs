#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::{Deserialize, Serialize};

use crate::config::EditorConfig;
use crate::consts::CANVAS_ASPECT;

/// A point in canvas-local CSS pixels, origin at the canvas's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    #[must_use]
    pub fn dist_sq(self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Scale both coordinates independently.
    #[must_use]
    pub fn scaled(self, sx: f64, sy: f64) -> Point {
        Point { x: self.x * sx, y: self.y * sy }
    }
}

/// Canvas dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Default for Size {
    fn default() -> Self {
        Self { width: 1920.0, height: 1080.0 }
    }
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// X coordinate of the vertical centerline.
    #[must_use]
    pub fn center_x(self) -> f64 {
        self.width / 2.0
    }

    /// Per-axis factors that map coordinates in `self` onto `next`.
    #[must_use]
    pub fn scale_factors(self, next: Size) -> (f64, f64) {
        let sx = if self.width > 0.0 { next.width / self.width } else { 1.0 };
        let sy = if self.height > 0.0 { next.height / self.height } else { 1.0 };
        (sx, sy)
    }
}

/// Round `value` to the nearest multiple of `pitch`.
///
/// Halfway values round away from zero, so `15 → 30` on a 30 px grid.
#[must_use]
pub fn snap(value: f64, pitch: f64) -> f64 {
    if pitch <= 0.0 {
        return value;
    }
    (value / pitch).round() * pitch
}

/// Snap both coordinates of `p` to the grid.
#[must_use]
pub fn snap_point(p: Point, pitch: f64) -> Point {
    Point { x: snap(p.x, pitch), y: snap(p.y, pitch) }
}

/// Largest 16:9 canvas that fits the viewport after reserving room for padding
/// and the controls bar, capped at the configured maximum.
#[must_use]
pub fn fit_canvas(viewport_w: f64, viewport_h: f64, config: &EditorConfig) -> Size {
    let max_w = (viewport_w - config.viewport_pad_x).min(config.max_canvas_width);
    let max_h = (viewport_h - config.viewport_pad_y).min(config.max_canvas_height);

    let mut width = max_w;
    let mut height = width / CANVAS_ASPECT;
    if height > max_h {
        height = max_h;
        width = height * CANVAS_ASPECT;
    }

    Size {
        width: width.floor().max(1.0),
        height: height.floor().max(1.0),
    }
}
