//! Rendering: draws the field and the routes to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the engine session and produces pixels; it
//! does not mutate any application state. Layout of the field markings is
//! computed by the pure helpers below so it can be tested without a browser.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::config::EditorConfig;
use crate::engine::EngineCore;
use crate::geom::{Point, Size};
use crate::path::Path;

/// Snapping grid stroke. Fully transparent: the grid is an alignment aid only.
const GRID_STYLE: &str = "rgba(255,255,255,0)";
const GRID_WIDTH: f64 = 1.0;

const FIELD_LINE_STYLE: &str = "rgba(255,255,255,0.4)";
const FIELD_LINE_WIDTH: f64 = 4.0;

const HASHMARK_STYLE: &str = "rgba(255,255,255,0.4)";

const ROUTE_STYLE: &str = "black";

/// One straight grid line from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Draw the full scene: grid, field lines, hashmarks, committed routes, live route.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let size = core.size;
    let cfg = &core.config;

    // Layer 1: clear.
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, size.width, size.height);

    // Layer 2: snapping grid.
    ctx.set_stroke_style_str(GRID_STYLE);
    ctx.set_line_width(GRID_WIDTH);
    for seg in grid_lines(size, cfg.grid_pitch) {
        stroke_segment(ctx, seg);
    }

    // Layer 3: field lines.
    let lines = field_line_ys(size.height, cfg.field_line_spacing);
    ctx.set_stroke_style_str(FIELD_LINE_STYLE);
    ctx.set_line_width(FIELD_LINE_WIDTH);
    for &y in &lines {
        stroke_segment(ctx, Segment { from: Point::new(0.0, y), to: Point::new(size.width, y) });
    }

    // Layer 4: hashmarks.
    ctx.set_fill_style_str(HASHMARK_STYLE);
    let columns = hashmark_columns(size.width, cfg);
    for y in hashmark_rows(size.height, cfg.hashmark_spacing, &lines, cfg.hashmark_clearance) {
        for x in columns {
            ctx.fill_rect(x, y, cfg.hashmark_width, cfg.hashmark_height);
        }
    }

    // Layer 5: routes, committed first, live on top.
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    ctx.set_stroke_style_str(ROUTE_STYLE);
    ctx.set_line_width(cfg.route_stroke_width);
    for path in core.paths.committed() {
        stroke_path(ctx, path);
    }
    if let Some(live) = core.paths.live_path() {
        if live.points.len() > 1 {
            stroke_path(ctx, live);
        }
    }

    Ok(())
}

fn stroke_segment(ctx: &CanvasRenderingContext2d, seg: Segment) {
    ctx.begin_path();
    ctx.move_to(seg.from.x, seg.from.y);
    ctx.line_to(seg.to.x, seg.to.y);
    ctx.stroke();
}

fn stroke_path(ctx: &CanvasRenderingContext2d, path: &Path) {
    let mut points = path.points.iter();
    let Some(first) = points.next() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in points {
        ctx.line_to(p.x, p.y);
    }
    ctx.stroke();
}

// =============================================================
// Layout
// =============================================================

/// Values `0, step, 2*step, ...` up to `limit`, inclusive when `inclusive`.
fn steps(limit: f64, step: f64, inclusive: bool) -> Vec<f64> {
    let mut out = Vec::new();
    if step <= 0.0 {
        return out;
    }
    let mut i = 0_u32;
    loop {
        let v = f64::from(i) * step;
        if v > limit || (!inclusive && v >= limit) {
            break;
        }
        out.push(v);
        i += 1;
    }
    out
}

/// Vertical then horizontal grid lines every `pitch`, edges included.
#[must_use]
pub fn grid_lines(size: Size, pitch: f64) -> Vec<Segment> {
    let vertical = steps(size.width, pitch, true)
        .into_iter()
        .map(|x| Segment { from: Point::new(x, 0.0), to: Point::new(x, size.height) });
    let horizontal = steps(size.height, pitch, true)
        .into_iter()
        .map(|y| Segment { from: Point::new(0.0, y), to: Point::new(size.width, y) });
    vertical.chain(horizontal).collect()
}

/// Y coordinates of the horizontal field lines, from the top edge down to and
/// including `height`.
#[must_use]
pub fn field_line_ys(height: f64, spacing: f64) -> Vec<f64> {
    steps(height, spacing, true)
}

/// Y coordinates of the hashmark rows above `height`, skipping any row within
/// `clearance` of a field line.
#[must_use]
pub fn hashmark_rows(height: f64, spacing: f64, field_lines: &[f64], clearance: f64) -> Vec<f64> {
    steps(height, spacing, false)
        .into_iter()
        .filter(|y| !field_lines.iter().any(|line| (y - line).abs() < clearance))
        .collect()
}

/// Left edges of the four hashmark columns: both sidelines, then the inner
/// pair equidistant from the centerline.
#[must_use]
pub fn hashmark_columns(width: f64, cfg: &EditorConfig) -> [f64; 4] {
    let center = width / 2.0;
    let inner = width * cfg.hashmark_inner_fraction;
    [
        0.0,
        width - cfg.hashmark_width,
        center - inner,
        center + inner - cfg.hashmark_width,
    ]
}
