//! Presentation-independent view helpers.
//!
//! # Responsibility
//! - Derive display values (relative time, stats, previews) from notes.
//! - Provide pure text-editing and export helpers for UI actions.

use once_cell::sync::Lazy;
use regex::Regex;

pub mod export;
pub mod preview;
pub mod relative_time;
pub mod stats;
pub mod text_edit;

pub(crate) static WHITESPACE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));
