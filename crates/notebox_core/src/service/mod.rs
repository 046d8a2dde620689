//! Core use-case services.
//!
//! # Responsibility
//! - Own the note collection lifecycle (`note_store`).
//! - Hold per-view state and route user actions (`view_controller`).
//! - Persist small independent preferences (`theme`).

pub mod note_store;
pub mod theme;
pub mod view_controller;
