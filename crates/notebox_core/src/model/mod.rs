//! Domain model for notes and categories.
//!
//! # Responsibility
//! - Define canonical data structures used by store and view logic.
//! - Keep the persisted wire shape next to the types it describes.
//!
//! # Invariants
//! - Every note is identified by a `NoteId` unique within the collection.
//! - Categories are a fixed lookup table referenced by name.

pub mod category;
pub mod note;
