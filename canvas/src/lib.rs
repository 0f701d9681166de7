//! Canvas engine for the flag-football play designer.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! interaction model of the field: dragging the six player tokens into
//! formations, drawing and erasing freehand routes, applying and mirroring
//! formation presets, and redrawing the field. The host UI layer is
//! responsible only for wiring DOM events to the engine and reacting to the
//! resulting [`engine::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] session |
//! | [`geom`] | Points, canvas size, grid snapping, canvas fitting |
//! | [`path`] | Freehand route history: draw, smooth, straighten, erase, undo |
//! | [`token`] | The six fixed player tokens and their keyed roster |
//! | [`formation`] | Named presets, formation selection, and mirroring |
//! | [`hit`] | Hit-testing pointer positions against tokens |
//! | [`input`] | Tools, UI state, and the gesture state machine |
//! | [`render`] | Field and route rendering to a 2D context |
//! | [`config`] | Tunable editor constants with serde overrides |
//! | [`error`] | Engine error type |
//! | [`consts`] | Shared numeric defaults |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod formation;
pub mod geom;
pub mod hit;
pub mod input;
pub mod path;
pub mod render;
pub mod token;
