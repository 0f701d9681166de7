//! Editor configuration.
//!
//! Every tunable the interaction model and renderer read lives here. The
//! defaults come from [`crate::consts`]; a host may override any subset by
//! handing a JSON object to [`EditorConfig::from_json`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::EngineError;

/// A named palette color offered by the color picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swatch {
    /// Human-readable name, used as the swatch tooltip.
    pub name: String,
    /// CSS color value written into the token color map.
    pub value: String,
}

impl Swatch {
    fn new(name: &str, value: &str) -> Self {
        Self { name: name.to_owned(), value: value.to_owned() }
    }
}

/// Tunable editor constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    pub grid_pitch: f64,
    pub erase_radius: f64,
    pub drag_threshold: f64,
    pub settle_delay_ms: u32,
    pub token_size: f64,
    pub picker_gap: f64,
    /// Run [`crate::path::straighten_path`] on each finished stroke.
    pub straighten_strokes: bool,
    pub straighten_tolerance_deg: f64,
    pub field_line_spacing: f64,
    pub hashmark_spacing: f64,
    pub hashmark_clearance: f64,
    pub hashmark_width: f64,
    pub hashmark_height: f64,
    pub hashmark_inner_fraction: f64,
    pub route_stroke_width: f64,
    pub max_canvas_width: f64,
    pub max_canvas_height: f64,
    pub viewport_pad_x: f64,
    pub viewport_pad_y: f64,
    pub palette: Vec<Swatch>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_pitch: GRID_PITCH_PX,
            erase_radius: ERASE_RADIUS_PX,
            drag_threshold: DRAG_THRESHOLD_PX,
            settle_delay_ms: DRAG_SETTLE_MS,
            token_size: TOKEN_SIZE_PX,
            picker_gap: PICKER_GAP_PX,
            straighten_strokes: false,
            straighten_tolerance_deg: STRAIGHTEN_TOLERANCE_DEG,
            field_line_spacing: FIELD_LINE_SPACING_PX,
            hashmark_spacing: HASHMARK_SPACING_PX,
            hashmark_clearance: HASHMARK_CLEARANCE_PX,
            hashmark_width: HASHMARK_WIDTH_PX,
            hashmark_height: HASHMARK_HEIGHT_PX,
            hashmark_inner_fraction: HASHMARK_INNER_FRACTION,
            route_stroke_width: ROUTE_STROKE_WIDTH_PX,
            max_canvas_width: MAX_CANVAS_WIDTH_PX,
            max_canvas_height: MAX_CANVAS_HEIGHT_PX,
            viewport_pad_x: VIEWPORT_PAD_X_PX,
            viewport_pad_y: VIEWPORT_PAD_Y_PX,
            palette: vec![
                Swatch::new("red", "#ff4444"),
                Swatch::new("blue", "#4444ff"),
                Swatch::new("yellow", "#ffff44"),
                Swatch::new("purple", "#aa44aa"),
            ],
        }
    }
}

impl EditorConfig {
    /// Parse a JSON object of overrides; absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Config`] when `raw` is not a valid config object.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Whether `color` is one of the palette values.
    #[must_use]
    pub fn has_swatch(&self, color: &str) -> bool {
        self.palette.iter().any(|s| s.value == color)
    }
}
