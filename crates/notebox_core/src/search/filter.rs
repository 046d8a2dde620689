//! Note filter predicates.
//!
//! # Invariants
//! - Filtering is pure and order-preserving.
//! - All active criteria must match (query AND category AND every tag).

use crate::model::note::Note;

/// Active filter criteria. Default matches every note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteFilter {
    /// Free text; ignored when blank after trimming.
    pub query: String,
    /// Exact category name, or `None` for any.
    pub category: Option<String>,
    /// Notes must carry all of these tags.
    pub tags: Vec<String>,
}

impl NoteFilter {
    /// Returns whether no criterion is active.
    pub fn is_empty(&self) -> bool {
        self.query.trim().is_empty() && self.category.is_none() && self.tags.is_empty()
    }

    pub fn matches(&self, note: &Note) -> bool {
        self.matches_query(note) && self.matches_category(note) && note.has_all_tags(&self.tags)
    }

    /// Matching notes, in input order.
    pub fn apply(&self, notes: &[Note]) -> Vec<Note> {
        notes
            .iter()
            .filter(|note| self.matches(note))
            .cloned()
            .collect()
    }

    fn matches_query(&self, note: &Note) -> bool {
        if self.query.trim().is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        note.title.to_lowercase().contains(&needle) || note.content.to_lowercase().contains(&needle)
    }

    fn matches_category(&self, note: &Note) -> bool {
        self.category
            .as_deref()
            .map_or(true, |category| note.category == category)
    }
}
