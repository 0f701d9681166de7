//! Field view state mirrored from the engine session.
//!
//! DESIGN
//! ======
//! The engine owns token positions, routes and the interaction state. This
//! snapshot is what the DOM layer reads: token overlays, the color palette,
//! the eraser ring and the controls bar all render from it. The session
//! re-syncs it after every batch of engine actions.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use canvas::config::{EditorConfig, Swatch};
use canvas::engine::EngineCore;
use canvas::formation::Formation;
use canvas::geom::{Point, Size};
use canvas::input::{PickerState, Tool};
use canvas::token::{Token, TokenId};

/// Diameter of the eraser ring overlay.
pub const ERASER_RING_PX: f64 = 40.0;

/// One token overlay as the DOM draws it.
#[derive(Clone, Debug, PartialEq)]
pub struct TokenView {
    pub id: TokenId,
    pub left: f64,
    pub top: f64,
    pub color: Option<String>,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            id: token.id,
            left: token.left,
            top: token.top,
            color: token.color.clone(),
        }
    }
}

/// CSS classes for a token: the shared token class plus the role modifier.
pub fn token_class(id: TokenId) -> String {
    format!("token token--{}", id.class())
}

impl TokenView {
    pub fn class(&self) -> String {
        token_class(self.id)
    }

    /// Inline style placing the token over the canvas.
    pub fn style(&self, size: f64) -> String {
        let mut style = format!(
            "left: {:.2}px; top: {:.2}px; width: {size:.2}px; height: {size:.2}px;",
            self.left, self.top
        );
        if let Some(color) = &self.color {
            style.push_str(&format!(" background-color: {color};"));
        }
        style
    }
}

/// Everything the DOM layer renders besides the canvas pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldState {
    pub canvas_size: Size,
    pub token_size: f64,
    pub tokens: Vec<TokenView>,
    pub formation: Formation,
    pub tool: Tool,
    pub picker: Option<PickerState>,
    pub eraser_cursor: Option<Point>,
    pub palette: Vec<Swatch>,
    /// Set when the field could not be initialized.
    pub error: Option<String>,
}

impl FieldState {
    /// Initial snapshot before the engine has mounted: no tokens yet.
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            canvas_size: Size::default(),
            token_size: config.token_size,
            tokens: Vec::new(),
            formation: Formation::default(),
            tool: Tool::default(),
            picker: None,
            eraser_cursor: None,
            palette: config.palette.clone(),
            error: None,
        }
    }

    /// Copy the engine session into this snapshot.
    pub fn sync(&mut self, core: &EngineCore) {
        self.canvas_size = core.size;
        self.token_size = core.config.token_size;
        self.tokens = core.roster.iter().map(TokenView::from).collect();
        self.formation = core.formation();
        self.tool = core.tool();
        self.picker = core.picker();
        self.eraser_cursor = core.ui.eraser_cursor;
    }

    pub fn token(&self, id: TokenId) -> Option<&TokenView> {
        self.tokens.iter().find(|t| t.id == id)
    }

    /// Inline style for a token overlay; hidden until the engine has synced.
    pub fn token_style(&self, id: TokenId) -> String {
        self.token(id)
            .map_or_else(|| "display: none;".to_owned(), |t| t.style(self.token_size))
    }

    /// Inline style for the color palette, centered under its token.
    pub fn picker_style(&self) -> Option<String> {
        self.picker
            .map(|p| format!("left: {:.2}px; top: {:.2}px;", p.anchor.x, p.anchor.y))
    }

    /// Inline style for the eraser ring, centered on the pointer.
    pub fn eraser_style(&self) -> Option<String> {
        if self.tool != Tool::Erase {
            return None;
        }
        let radius = ERASER_RING_PX / 2.0;
        self.eraser_cursor.map(|p| {
            format!(
                "left: {:.2}px; top: {:.2}px; width: {ERASER_RING_PX:.2}px; height: {ERASER_RING_PX:.2}px;",
                p.x - radius,
                p.y - radius
            )
        })
    }

    /// Size of the field wrapper so overlays share the canvas's coordinate space.
    pub fn field_style(&self) -> String {
        format!(
            "width: {:.2}px; height: {:.2}px;",
            self.canvas_size.width, self.canvas_size.height
        )
    }
}
