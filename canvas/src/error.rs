//! Engine error type.
//!
//! Canvas acquisition and 2D drawing calls report failures as `JsValue`s;
//! they are folded into [`EngineError`] so the host can log and surface them
//! instead of silently skipping a frame.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("browser window is not available")]
    WindowUnavailable,
    #[error("canvas has no 2d rendering context")]
    ContextUnavailable,
    #[error("canvas call failed: {0}")]
    Canvas(String),
    #[error("invalid editor config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Canvas(message)
    }
}
