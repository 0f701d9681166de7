//! UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the editor chrome and the field overlays while reading
//! [`crate::state::field::FieldState`] from context and forwarding input to
//! the shared [`crate::session::Session`].

pub mod color_palette;
pub mod controls_bar;
pub mod field_host;
