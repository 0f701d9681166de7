use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::config::EditorConfig;
use crate::error::EngineError;
use crate::formation::{Formation, apply_preset, mirror_receivers};
use crate::geom::{Point, Size, snap};
use crate::hit::token_at;
use crate::input::{InputState, PickerState, Tool, UiState, exceeds_threshold};
use crate::path::PathHistory;
use crate::render;
use crate::token::{Roster, Token, TokenId};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The canvas must be redrawn.
    RenderNeeded,
    /// Token positions or colors changed; the host re-reads the roster.
    TokensChanged,
    /// The formation selection changed.
    FormationChanged(Formation),
    /// The color palette opened or moved.
    PickerOpened(PickerState),
    PickerClosed,
    /// A token gesture started: listen for move/release on the window.
    AttachDragListeners,
    /// The token gesture ended: remove the window listeners.
    DetachDragListeners,
    /// Start the post-drag settle timer and call
    /// [`EngineCore::settle_drag`] when it fires.
    ScheduleDragSettle { delay_ms: u32 },
    /// Drop the pending settle timer without firing it.
    CancelDragSettle,
    /// The eraser ring moved or hid.
    CursorChanged(Option<Point>),
}

/// Core engine state: the interaction session for one mounted field.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub config: EditorConfig,
    pub size: Size,
    pub roster: Roster,
    pub paths: PathHistory,
    pub ui: UiState,
    pub input: InputState,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EngineCore {
    /// Create a session at the default canvas size with the default formation applied.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        let size = Size::default();
        let mut roster = Roster::new(size, config.token_size);
        let ui = UiState::default();
        if let Some(preset) = ui.formation.preset() {
            apply_preset(&mut roster, preset, size, config.token_size);
        }
        Self {
            config,
            size,
            roster,
            paths: PathHistory::new(),
            ui,
            input: InputState::Idle,
        }
    }

    // --- Canvas size ---

    /// Adopt a new canvas size.
    ///
    /// An active preset is re-resolved against the new size; a custom
    /// arrangement and all routes are rescaled proportionally. Any gesture in
    /// progress is ended.
    pub fn set_canvas_size(&mut self, size: Size) -> Vec<Action> {
        if size == self.size {
            return Vec::new();
        }
        let mut actions = self.end_gesture();

        let (sx, sy) = self.size.scale_factors(size);
        log::debug!("canvas resized {}x{} -> {}x{}", self.size.width, self.size.height, size.width, size.height);
        self.size = size;
        self.paths.scale(sx, sy);
        match self.ui.formation.preset() {
            Some(preset) => apply_preset(&mut self.roster, preset, size, self.config.token_size),
            None => self.roster.scale(sx, sy, size, self.config.token_size),
        }

        actions.push(Action::TokensChanged);
        self.refresh_picker(&mut actions);
        actions.push(Action::RenderNeeded);
        actions
    }

    // --- Toolbar commands ---

    /// Switch between drawing and erasing.
    pub fn set_tool(&mut self, tool: Tool) -> Vec<Action> {
        self.ui.tool = tool;
        if tool == Tool::Draw && self.ui.eraser_cursor.take().is_some() {
            return vec![Action::CursorChanged(None)];
        }
        Vec::new()
    }

    /// Select a formation. A named preset repositions all tokens and clears
    /// the routes; selecting custom changes nothing but the selection.
    pub fn select_formation(&mut self, formation: Formation) -> Vec<Action> {
        self.ui.formation = formation;
        let mut actions = vec![Action::FormationChanged(formation)];
        if let Some(preset) = formation.preset() {
            log::debug!("applying formation {}", preset.key());
            apply_preset(&mut self.roster, preset, self.size, self.config.token_size);
            self.paths.clear();
            actions.push(Action::TokensChanged);
            self.refresh_picker(&mut actions);
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Mirror the receivers about the vertical centerline.
    pub fn mirror(&mut self) -> Vec<Action> {
        mirror_receivers(&mut self.roster, self.size.width, self.config.token_size);
        let mut actions = vec![Action::TokensChanged];
        self.mark_custom(&mut actions);
        self.refresh_picker(&mut actions);
        actions
    }

    /// Remove the newest route.
    pub fn undo(&mut self) -> Vec<Action> {
        if self.input.is_stroking() {
            return Vec::new();
        }
        match self.paths.undo() {
            Some(_) => vec![Action::RenderNeeded],
            None => Vec::new(),
        }
    }

    /// Remove every route.
    pub fn clear(&mut self) -> Vec<Action> {
        if self.paths.is_empty() {
            return Vec::new();
        }
        self.paths.clear();
        if self.input.is_stroking() {
            self.input = InputState::Idle;
        }
        vec![Action::RenderNeeded]
    }

    // --- Token gestures ---

    /// Pointer pressed on a token.
    pub fn on_token_pointer_down(&mut self, id: TokenId, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        // The click synthesized by the previous release has already landed.
        if self.ui.suppress_click {
            self.ui.suppress_click = false;
            actions.push(Action::CancelDragSettle);
        }
        if !matches!(self.input, InputState::Idle) || !id.is_draggable() {
            return actions;
        }

        let token = self.roster.get(id);
        self.input = InputState::DraggingToken {
            id,
            offset: Point::new(pt.x - token.left, pt.y - token.top),
            press: pt,
            moved: false,
        };
        log::debug!("token press {}", id.key());
        actions.push(Action::AttachDragListeners);
        actions
    }

    /// Pointer moved while a token is pressed.
    ///
    /// The token only moves once the pointer has left the drag threshold, so
    /// a click never disturbs a preset arrangement.
    pub fn on_token_drag_move(&mut self, pt: Point) -> Vec<Action> {
        let InputState::DraggingToken { id, offset, press, moved } = &mut self.input else {
            return Vec::new();
        };
        if !*moved && exceeds_threshold(*press, pt, self.config.drag_threshold) {
            *moved = true;
        }
        if !*moved {
            return Vec::new();
        }

        let id = *id;
        let pitch = self.config.grid_pitch;
        let mut left = snap(pt.x - offset.x, pitch);
        let mut top = snap(pt.y - offset.y, pitch);
        if id == TokenId::Qb {
            left = self.size.center_x() - self.config.token_size / 2.0;
        }
        let center_top = self.roster.get(TokenId::Center).top;
        if top < center_top {
            top = center_top;
        }

        let token = self.roster.get(id);
        if token.left == left && token.top == top {
            return Vec::new();
        }
        self.roster.set_position(id, left, top);
        let mut actions = vec![Action::TokensChanged];
        self.refresh_picker(&mut actions);
        actions
    }

    /// Pointer released after a token press.
    pub fn on_token_drag_end(&mut self) -> Vec<Action> {
        let InputState::DraggingToken { id, moved, .. } = std::mem::take(&mut self.input) else {
            return Vec::new();
        };
        let mut actions = vec![Action::DetachDragListeners];
        if moved {
            log::debug!("token drag end {}", id.key());
            self.mark_custom(&mut actions);
            self.ui.suppress_click = true;
            actions.push(Action::ScheduleDragSettle { delay_ms: self.config.settle_delay_ms });
        }
        actions
    }

    /// Touch cancelled during a token press. Ends the gesture like a release.
    pub fn on_token_drag_cancel(&mut self) -> Vec<Action> {
        self.on_token_drag_end()
    }

    /// The settle delay after a drag elapsed; token clicks open the palette again.
    pub fn settle_drag(&mut self) {
        self.ui.suppress_click = false;
    }

    /// Click on a token. Opens its color palette unless the click belongs to a drag.
    pub fn on_token_click(&mut self, id: TokenId) -> Vec<Action> {
        if self.ui.suppress_click {
            return Vec::new();
        }
        let picker = PickerState { token: id, anchor: self.picker_anchor(self.roster.get(id)) };
        self.ui.picker = Some(picker);
        vec![Action::PickerOpened(picker)]
    }

    // --- Canvas gestures ---

    /// Pointer pressed on the canvas: start a stroke or start erasing.
    pub fn on_canvas_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        if !matches!(self.input, InputState::Idle) {
            return Vec::new();
        }
        match self.ui.tool {
            Tool::Draw => {
                self.paths.begin(pt);
                self.input = InputState::Drawing;
                vec![Action::RenderNeeded]
            }
            Tool::Erase => {
                self.input = InputState::Erasing;
                self.ui.eraser_cursor = Some(pt);
                let mut actions = vec![Action::CursorChanged(Some(pt))];
                if self.paths.erase_at(pt, self.config.erase_radius) {
                    actions.push(Action::RenderNeeded);
                }
                actions
            }
        }
    }

    /// Pointer moved over the canvas, pressed or not.
    pub fn on_canvas_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.ui.tool == Tool::Erase {
            self.ui.eraser_cursor = Some(pt);
            actions.push(Action::CursorChanged(Some(pt)));
        }
        match self.input {
            InputState::Drawing => {
                if self.paths.extend(pt) {
                    actions.push(Action::RenderNeeded);
                }
            }
            InputState::Erasing => {
                if self.paths.erase_at(pt, self.config.erase_radius) {
                    actions.push(Action::RenderNeeded);
                }
            }
            InputState::Idle | InputState::DraggingToken { .. } => {}
        }
        actions
    }

    /// Pointer released over the canvas: commit the stroke.
    pub fn on_canvas_pointer_up(&mut self) -> Vec<Action> {
        self.finish_stroke()
    }

    /// Pointer left the canvas: commit the stroke and hide the eraser ring.
    pub fn on_canvas_pointer_leave(&mut self) -> Vec<Action> {
        let mut actions = self.finish_stroke();
        if self.ui.eraser_cursor.take().is_some() {
            actions.push(Action::CursorChanged(None));
        }
        actions
    }

    /// Touch cancelled on the canvas.
    pub fn on_canvas_pointer_cancel(&mut self) -> Vec<Action> {
        self.finish_stroke()
    }

    // --- Color palette ---

    /// Write a palette color to the token the palette is bound to and close it.
    pub fn choose_color(&mut self, color: &str) -> Vec<Action> {
        let Some(picker) = self.ui.picker else {
            return Vec::new();
        };
        if !self.config.has_swatch(color) {
            log::warn!("ignoring color outside the palette: {color}");
            return Vec::new();
        }
        self.roster.set_color(picker.token, color);
        self.ui.picker = None;
        vec![Action::TokensChanged, Action::PickerClosed]
    }

    /// Close the palette without changing anything.
    pub fn dismiss_picker(&mut self) -> Vec<Action> {
        match self.ui.picker.take() {
            Some(_) => vec![Action::PickerClosed],
            None => Vec::new(),
        }
    }

    /// A click landed somewhere on the page. Closes the palette unless the
    /// click was inside it or on a token.
    pub fn on_outside_click(&mut self, pt: Option<Point>, inside_picker: bool) -> Vec<Action> {
        if inside_picker || self.ui.picker.is_none() {
            return Vec::new();
        }
        if pt.is_some_and(|p| token_at(p, &self.roster, self.config.token_size).is_some()) {
            return Vec::new();
        }
        self.dismiss_picker()
    }

    // --- Lifecycle ---

    /// End every in-flight interaction before the host unmounts the field.
    pub fn teardown(&mut self) -> Vec<Action> {
        let mut actions = self.end_gesture();
        if self.ui.suppress_click {
            self.ui.suppress_click = false;
            actions.push(Action::CancelDragSettle);
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn formation(&self) -> Formation {
        self.ui.formation
    }

    #[must_use]
    pub fn tool(&self) -> Tool {
        self.ui.tool
    }

    #[must_use]
    pub fn token(&self, id: TokenId) -> &Token {
        self.roster.get(id)
    }

    #[must_use]
    pub fn picker(&self) -> Option<PickerState> {
        self.ui.picker
    }

    #[must_use]
    pub fn is_dragging_token(&self) -> bool {
        self.input.holds_drag_listeners()
    }

    // --- Internals ---

    fn picker_anchor(&self, token: &Token) -> Point {
        let size = self.config.token_size;
        Point::new(token.left + size / 2.0, token.top + size + self.config.picker_gap)
    }

    fn refresh_picker(&mut self, actions: &mut Vec<Action>) {
        let Some(picker) = self.ui.picker else {
            return;
        };
        let anchor = self.picker_anchor(self.roster.get(picker.token));
        if anchor != picker.anchor {
            let moved = PickerState { token: picker.token, anchor };
            self.ui.picker = Some(moved);
            actions.push(Action::PickerOpened(moved));
        }
    }

    fn mark_custom(&mut self, actions: &mut Vec<Action>) {
        if self.ui.formation != Formation::Custom {
            self.ui.formation = Formation::Custom;
            actions.push(Action::FormationChanged(Formation::Custom));
        }
    }

    fn finish_stroke(&mut self) -> Vec<Action> {
        match self.input {
            InputState::Drawing => {
                self.input = InputState::Idle;
                let tolerance = self
                    .config
                    .straighten_strokes
                    .then_some(self.config.straighten_tolerance_deg);
                if self.paths.finish(tolerance) {
                    vec![Action::RenderNeeded]
                } else {
                    Vec::new()
                }
            }
            InputState::Erasing => {
                self.input = InputState::Idle;
                Vec::new()
            }
            InputState::Idle | InputState::DraggingToken { .. } => Vec::new(),
        }
    }

    fn end_gesture(&mut self) -> Vec<Action> {
        if self.input.holds_drag_listeners() {
            return self.on_token_drag_end();
        }
        self.finish_stroke()
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ContextUnavailable`] when the element has no 2D
    /// context, or [`EngineError::Canvas`] when the browser rejects the request.
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, EngineError> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or(EngineError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| EngineError::ContextUnavailable)?;
        Ok(Self { canvas, ctx, core: EngineCore::new(config) })
    }

    /// Resize the backing store and the session.
    ///
    /// Resizing the backing store wipes it, so a redraw is requested whenever
    /// the pixel dimensions change even if the session size did not.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_canvas_size(&mut self, size: Size) -> Vec<Action> {
        let width = size.width as u32;
        let height = size.height as u32;
        let resized = self.canvas.width() != width || self.canvas.height() != height;
        if resized {
            self.canvas.set_width(width);
            self.canvas.set_height(height);
        }
        let mut actions = self.core.set_canvas_size(size);
        if resized && !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Canvas`] if a 2D context call fails.
    pub fn render(&self) -> Result<(), EngineError> {
        render::draw(&self.ctx, &self.core)?;
        Ok(())
    }

    // --- Delegated input events ---

    pub fn on_token_pointer_down(&mut self, id: TokenId, pt: Point) -> Vec<Action> {
        self.core.on_token_pointer_down(id, pt)
    }

    pub fn on_token_drag_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_token_drag_move(pt)
    }

    pub fn on_token_drag_end(&mut self) -> Vec<Action> {
        self.core.on_token_drag_end()
    }

    pub fn on_token_drag_cancel(&mut self) -> Vec<Action> {
        self.core.on_token_drag_cancel()
    }

    pub fn on_token_click(&mut self, id: TokenId) -> Vec<Action> {
        self.core.on_token_click(id)
    }

    pub fn on_canvas_pointer_down(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_canvas_pointer_down(pt)
    }

    pub fn on_canvas_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_canvas_pointer_move(pt)
    }

    pub fn on_canvas_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_canvas_pointer_up()
    }

    pub fn on_canvas_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_canvas_pointer_leave()
    }

    pub fn on_canvas_pointer_cancel(&mut self) -> Vec<Action> {
        self.core.on_canvas_pointer_cancel()
    }

    /// Canvas's position in the page, for translating client coordinates.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }
}
