//! # playbook
//!
//! Leptos + WASM frontend for the flag-football play designer.
//!
//! This crate hosts the `canvas` engine: it renders the controls bar, the
//! token overlays and the color palette, and carries out the engine's actions
//! in the browser. State and pure helpers compile natively for testing; the
//! browser-facing modules are gated behind the `csr` feature.

#[cfg(feature = "csr")]
pub mod app;
#[cfg(feature = "csr")]
pub mod components;
#[cfg(feature = "csr")]
pub mod session;
pub mod state;
pub mod util;

/// Route `log` records to the browser console.
///
/// Debug builds log everything from `debug` up; release builds only warnings
/// and errors.
#[cfg(feature = "csr")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Warn };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger not installed: {err}");
    }
}
