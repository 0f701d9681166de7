//! Input model: tools, UI state, and the gesture state machine.
//!
//! `Tool` captures what a canvas press does. `InputState` is the active
//! gesture being tracked between press and release, carrying the context
//! needed to compute positions on move and to classify the release.
//! `UiState` is the persistent interaction state visible to the host.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::formation::Formation;
use crate::geom::Point;
use crate::token::TokenId;

/// What a press on the canvas does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    /// Draw freehand routes.
    #[default]
    Draw,
    /// Erase route points under the pointer.
    Erase,
}

/// The color palette overlay, bound to one token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickerState {
    /// Token whose color is being chosen.
    pub token: TokenId,
    /// Canvas-local point the palette hangs from: the token's horizontal
    /// center, just below its bottom edge.
    pub anchor: Point,
}

/// Persistent UI state visible to the host.
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Active canvas tool.
    pub tool: Tool,
    /// Selected formation.
    pub formation: Formation,
    /// Open color palette, if any.
    pub picker: Option<PickerState>,
    /// Pointer position for the eraser ring while the eraser is active.
    pub eraser_cursor: Option<Point>,
    /// Set after a drag release until the settle delay elapses; token clicks
    /// arriving in that window belong to the drag and are ignored.
    pub suppress_click: bool,
}

/// Internal state for the gesture state machine.
#[derive(Debug, Clone, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// Pointer is down on the canvas with the draw tool.
    Drawing,
    /// Pointer is down on the canvas with the eraser tool.
    Erasing,
    /// Pointer went down on a draggable token.
    DraggingToken {
        /// Token being moved.
        id: TokenId,
        /// Pointer position minus token origin at press time.
        offset: Point,
        /// Pointer position at press time, for the drag threshold.
        press: Point,
        /// Whether the pointer has travelled past the drag threshold.
        moved: bool,
    },
}

impl InputState {
    /// Whether a token gesture holds window-level move/release listeners.
    #[must_use]
    pub fn holds_drag_listeners(&self) -> bool {
        matches!(self, Self::DraggingToken { .. })
    }

    /// Whether a canvas stroke (draw or erase) is in progress.
    #[must_use]
    pub fn is_stroking(&self) -> bool {
        matches!(self, Self::Drawing | Self::Erasing)
    }
}

/// Whether pointer travel from `press` to `now` exceeds `threshold` on either axis.
#[must_use]
pub fn exceeds_threshold(press: Point, now: Point, threshold: f64) -> bool {
    (now.x - press.x).abs() > threshold || (now.y - press.y).abs() > threshold
}
