//! Bridge between Leptos components and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The engine decides what every gesture means and answers with a list of
//! [`Action`]s. The session carries those actions out in the browser: it
//! redraws the canvas, attaches and removes the window listeners a token drag
//! needs, runs the post-drag settle timer, and re-syncs the [`FieldState`]
//! snapshot the DOM renders from.
//!
//! Listener handles and the timer live here and are released on every exit
//! path: release, cancel, and unmount via [`Session::teardown`].

use std::cell::RefCell;
use std::rc::Rc;

use canvas::config::EditorConfig;
use canvas::engine::{Action, Engine};
use canvas::geom::Point;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use crate::state::field::FieldState;
use crate::util::canvas_input::{client_point, window_canvas_size};

/// Class of the palette overlay; clicks inside it never dismiss it.
const PALETTE_SELECTOR: &str = ".color-palette";

struct Inner {
    config: EditorConfig,
    field: RwSignal<FieldState>,
    engine: RefCell<Option<Engine>>,
    drag_listeners: RefCell<Vec<WindowListenerHandle>>,
    settle: RefCell<Option<Timeout>>,
}

/// Shared handle to the mounted field. Cheap to clone; provided via context.
#[derive(Clone)]
pub struct Session(SendWrapper<Rc<Inner>>);

impl Session {
    pub fn new(config: EditorConfig, field: RwSignal<FieldState>) -> Self {
        Self(SendWrapper::new(Rc::new(Inner {
            config,
            field,
            engine: RefCell::new(None),
            drag_listeners: RefCell::new(Vec::new()),
            settle: RefCell::new(None),
        })))
    }

    /// Bind the engine to the mounted canvas and size it to the window.
    pub fn mount(&self, canvas: HtmlCanvasElement) {
        if self.0.engine.borrow().is_some() {
            return;
        }
        match Engine::new(canvas, self.0.config.clone()) {
            Ok(engine) => {
                log::debug!("field mounted");
                *self.0.engine.borrow_mut() = Some(engine);
            }
            Err(err) => {
                log::error!("field init failed: {err}");
                self.0.field.update(|f| f.error = Some(err.to_string()));
                return;
            }
        }
        self.fit_to_window();
        self.render();
        self.sync_field();
    }

    /// Resize the canvas to the largest 16:9 area the window allows.
    pub fn fit_to_window(&self) {
        match window_canvas_size(&self.0.config) {
            Ok(size) => self.dispatch(|engine| engine.set_canvas_size(size)),
            Err(err) => log::warn!("cannot size field: {err}"),
        }
    }

    /// Run an engine handler and carry out the actions it returns.
    pub fn dispatch(&self, handler: impl FnOnce(&mut Engine) -> Vec<Action>) {
        let actions = {
            let mut engine = self.0.engine.borrow_mut();
            let Some(engine) = engine.as_mut() else {
                return;
            };
            handler(engine)
        };
        self.process(actions);
    }

    /// Canvas-local point for client coordinates, once the canvas is mounted.
    pub fn canvas_point(&self, client_x: i32, client_y: i32) -> Option<Point> {
        let engine = self.0.engine.borrow();
        engine
            .as_ref()
            .map(|engine| client_point(engine.canvas(), client_x, client_y))
    }

    /// A click landed anywhere on the page; dismiss the palette if it missed.
    pub fn outside_click(&self, ev: &web_sys::MouseEvent) {
        let inside_picker = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| matches!(el.closest(PALETTE_SELECTOR), Ok(Some(_))));
        let pt = self.canvas_point(ev.client_x(), ev.client_y());
        self.dispatch(|engine| engine.core.on_outside_click(pt, inside_picker));
    }

    /// End all in-flight interaction and release every browser resource.
    pub fn teardown(&self) {
        self.dispatch(|engine| engine.core.teardown());
        self.detach_drag_listeners();
        drop(self.0.settle.replace(None));
        drop(self.0.engine.replace(None));
        log::debug!("field unmounted");
    }

    // --- Action processing ---

    fn process(&self, actions: Vec<Action>) {
        if actions.is_empty() {
            return;
        }
        let mut render = false;
        for action in actions {
            match action {
                Action::RenderNeeded => render = true,
                Action::AttachDragListeners => self.attach_drag_listeners(),
                Action::DetachDragListeners => self.detach_drag_listeners(),
                Action::ScheduleDragSettle { delay_ms } => self.schedule_settle(delay_ms),
                Action::CancelDragSettle => drop(self.0.settle.replace(None)),
                Action::TokensChanged
                | Action::FormationChanged(_)
                | Action::PickerOpened(_)
                | Action::PickerClosed
                | Action::CursorChanged(_) => {}
            }
        }
        if render {
            self.render();
        }
        self.sync_field();
    }

    fn render(&self) {
        if let Some(engine) = self.0.engine.borrow().as_ref() {
            if let Err(err) = engine.render() {
                log::error!("render failed: {err}");
            }
        }
    }

    fn sync_field(&self) {
        if let Some(engine) = self.0.engine.borrow().as_ref() {
            self.0.field.update(|f| f.sync(&engine.core));
        }
    }

    // --- Token drag listeners ---

    fn attach_drag_listeners(&self) {
        self.detach_drag_listeners();

        let on_move = {
            let session = self.clone();
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(pt) = session.canvas_point(ev.client_x(), ev.client_y()) {
                    session.dispatch(|engine| engine.on_token_drag_move(pt));
                }
            }
        };
        let on_up = {
            let session = self.clone();
            move |_: leptos::ev::PointerEvent| session.dispatch(Engine::on_token_drag_end)
        };
        let on_cancel = {
            let session = self.clone();
            move |_: leptos::ev::PointerEvent| session.dispatch(Engine::on_token_drag_cancel)
        };

        let mut handles = self.0.drag_listeners.borrow_mut();
        handles.push(window_event_listener(leptos::ev::pointermove, on_move));
        handles.push(window_event_listener(leptos::ev::pointerup, on_up));
        handles.push(window_event_listener(leptos::ev::pointercancel, on_cancel));
    }

    fn detach_drag_listeners(&self) {
        let handles = std::mem::take(&mut *self.0.drag_listeners.borrow_mut());
        for handle in handles {
            handle.remove();
        }
    }

    // --- Settle timer ---

    /// The fired timer stays in its slot until the next schedule or cancel
    /// replaces it; it must not be dropped from inside its own callback.
    fn schedule_settle(&self, delay_ms: u32) {
        let session = self.clone();
        let timeout = Timeout::new(delay_ms, move || {
            session.dispatch(|engine| {
                engine.core.settle_drag();
                Vec::new()
            });
        });
        drop(self.0.settle.replace(Some(timeout)));
    }
}
