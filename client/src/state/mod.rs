//! Client-side view state.
//!
//! SYSTEM CONTEXT
//! ==============
//! State modules hold plain data snapshots that components read through
//! Leptos context. They carry no browser dependencies so they test natively.

pub mod field;
