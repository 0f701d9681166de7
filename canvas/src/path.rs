//! Route model: freehand strokes and the history that owns them.
//!
//! A stroke is an ordered list of canvas-local points. Strokes are appended
//! while the pointer is down, smoothed once on release, and afterwards only
//! change when the eraser removes points from them or the canvas is resized.
//! The renderer reads committed strokes and the live stroke separately so the
//! in-progress route can be drawn on top.

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;

use serde::{Deserialize, Serialize};

use crate::geom::Point;

/// One continuous freehand stroke.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Path {
    pub points: Vec<Point>,
}

impl Path {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Ordered stroke history. The newest stroke is last.
#[derive(Debug, Clone, Default)]
pub struct PathHistory {
    paths: Vec<Path>,
    /// Index of the stroke currently being drawn.
    live: Option<usize>,
}

impl PathHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new stroke at `p` and append it to the history.
    pub fn begin(&mut self, p: Point) {
        self.paths.push(Path::new(vec![p]));
        self.live = Some(self.paths.len() - 1);
    }

    /// Append `p` to the live stroke. Returns false when no stroke is live.
    pub fn extend(&mut self, p: Point) -> bool {
        let Some(path) = self.live.and_then(|i| self.paths.get_mut(i)) else {
            return false;
        };
        path.points.push(p);
        true
    }

    /// Close the live stroke: smooth it once, optionally straighten it.
    ///
    /// Returns false when no stroke was live.
    pub fn finish(&mut self, straighten_tolerance_deg: Option<f64>) -> bool {
        let Some(index) = self.live.take() else {
            return false;
        };
        let Some(path) = self.paths.get_mut(index) else {
            return false;
        };
        let mut points = smooth_path(&path.points);
        if let Some(tolerance) = straighten_tolerance_deg {
            points = straighten_path(&points, tolerance);
        }
        path.points = points;
        true
    }

    /// Whether a stroke is being drawn.
    #[cfg(test)]
    pub fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Remove every point within `radius` of `center`, then drop empty strokes.
    ///
    /// Returns true if anything was removed.
    pub fn erase_at(&mut self, center: Point, radius: f64) -> bool {
        let radius_sq = radius * radius;
        let mut changed = false;
        for path in &mut self.paths {
            let before = path.points.len();
            path.points.retain(|p| p.dist_sq(center) > radius_sq);
            changed |= path.points.len() != before;
        }
        if !changed {
            return false;
        }

        let live = self.live.take();
        let mut new_live = None;
        let mut kept = 0;
        let mut index = 0;
        self.paths.retain(|path| {
            let keep = !path.points.is_empty();
            if keep {
                if live == Some(index) {
                    new_live = Some(kept);
                }
                kept += 1;
            }
            index += 1;
            keep
        });
        self.live = new_live;
        true
    }

    /// Drop the newest stroke. No-op on an empty history.
    pub fn undo(&mut self) -> Option<Path> {
        let popped = self.paths.pop();
        if let Some(live) = self.live {
            if live >= self.paths.len() {
                self.live = None;
            }
        }
        popped
    }

    /// Drop every stroke.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.live = None;
    }

    /// Rescale every point, used when the canvas changes size.
    pub fn scale(&mut self, sx: f64, sy: f64) {
        for path in &mut self.paths {
            for p in &mut path.points {
                *p = p.scaled(sx, sy);
            }
        }
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All strokes, oldest first, including the live one.
    #[must_use]
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Strokes that are no longer being drawn, oldest first.
    pub fn committed(&self) -> impl Iterator<Item = &Path> {
        let live = self.live;
        self.paths
            .iter()
            .enumerate()
            .filter(move |(i, _)| Some(*i) != live)
            .map(|(_, p)| p)
    }

    /// The stroke currently being drawn, if any.
    #[must_use]
    pub fn live_path(&self) -> Option<&Path> {
        self.live.and_then(|i| self.paths.get(i))
    }
}

/// Replace each interior point with the centroid of itself and its two
/// neighbours. Endpoints are kept. Strokes shorter than three points are
/// returned unchanged.
#[must_use]
pub fn smooth_path(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let mut out = Vec::with_capacity(points.len());
    out.push(points[0]);
    for w in points.windows(3) {
        out.push(Point {
            x: (w[0].x + w[1].x + w[2].x) / 3.0,
            y: (w[0].y + w[1].y + w[2].y) / 3.0,
        });
    }
    out.push(points[points.len() - 1]);
    out
}

/// Cardinal directions a stroke may be straightened to, in degrees as
/// measured by `atan2` on a y-down canvas.
const CARDINAL_DEG: [f64; 5] = [0.0, 90.0, 180.0, 270.0, -90.0];

/// Straighten a stroke whose start-to-end direction is within
/// `tolerance_deg` of a cardinal direction.
///
/// The result keeps the point count and spaces points evenly from the start
/// point along the exact cardinal direction, for the start-to-end distance.
/// Other strokes are returned unchanged.
#[must_use]
pub fn straighten_path(points: &[Point], tolerance_deg: f64) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let start = points[0];
    let end = points[points.len() - 1];
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let angle = dy.atan2(dx).to_degrees();

    let mut closest = CARDINAL_DEG[0];
    let mut min_diff = (angle - closest).abs();
    for a in CARDINAL_DEG {
        let diff = (angle - a).abs();
        if diff < min_diff {
            min_diff = diff;
            closest = a;
        }
    }
    if min_diff > tolerance_deg {
        return points.to_vec();
    }

    let radians = closest.to_radians();
    let distance = (dx * dx + dy * dy).sqrt();
    #[allow(clippy::cast_precision_loss)]
    let last = (points.len() - 1) as f64;
    (0..points.len())
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f64 / last;
            Point {
                x: start.x + t * distance * radians.cos(),
                y: start.y + t * distance * radians.sin(),
            }
        })
        .collect()
}
