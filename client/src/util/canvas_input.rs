//! Canvas pointer and sizing helpers.
//!
//! Pointer events on the canvas carry canvas-local offsets directly. Token
//! presses and window-level drag events only carry client coordinates, which
//! are translated through the canvas's bounding rect.

#[cfg(test)]
#[path = "canvas_input_test.rs"]
mod canvas_input_test;

use canvas::geom::Point;
#[cfg(feature = "csr")]
use canvas::{config::EditorConfig, error::EngineError, geom::Size};

/// Translate client coordinates into canvas-local coordinates given the
/// canvas's top-left corner in client space.
pub fn local_point(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Point {
    Point::new(client_x - rect_left, client_y - rect_top)
}

/// Canvas-local point of a pointer event targeted at the canvas itself.
#[cfg(feature = "csr")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Canvas-local point for client coordinates from any event on the page.
#[cfg(feature = "csr")]
pub fn client_point(canvas: &web_sys::HtmlCanvasElement, client_x: i32, client_y: i32) -> Point {
    let rect = canvas.get_bounding_client_rect();
    local_point(f64::from(client_x), f64::from(client_y), rect.left(), rect.top())
}

/// Canvas size that fits the current browser window.
///
/// # Errors
///
/// Returns [`EngineError::WindowUnavailable`] outside a browser window, or
/// [`EngineError::Canvas`] when the viewport dimensions cannot be read.
#[cfg(feature = "csr")]
pub fn window_canvas_size(config: &EditorConfig) -> Result<Size, EngineError> {
    let window = web_sys::window().ok_or(EngineError::WindowUnavailable)?;
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or_else(|| EngineError::Canvas("viewport width is not a number".to_owned()))?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or_else(|| EngineError::Canvas("viewport height is not a number".to_owned()))?;
    Ok(canvas::geom::fit_canvas(width, height, config))
}
