//! Collection statistics.

use crate::model::note::Note;
use crate::view::WHITESPACE_RE;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Aggregate counts over a note collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteStats {
    pub total_notes: usize,
    pub total_words: usize,
    /// Only categories that occur in the data.
    pub per_category: BTreeMap<String, usize>,
    pub favorites: usize,
    /// Most recent `last_modified`, `None` for an empty collection.
    pub last_edited: Option<DateTime<Utc>>,
}

pub fn compute_stats(notes: &[Note]) -> NoteStats {
    let mut stats = NoteStats {
        total_notes: notes.len(),
        ..NoteStats::default()
    };
    for note in notes {
        stats.total_words += word_count(&note.content);
        *stats.per_category.entry(note.category.clone()).or_insert(0) += 1;
        if note.is_favorite {
            stats.favorites += 1;
        }
        stats.last_edited = stats.last_edited.max(Some(note.last_modified));
    }
    stats
}

/// Counts whitespace-separated words; blank content counts as zero.
pub fn word_count(content: &str) -> usize {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return 0;
    }
    WHITESPACE_RE.split(trimmed).count()
}

#[cfg(test)]
mod tests {
    use super::word_count;

    #[test]
    fn word_count_collapses_whitespace_runs() {
        assert_eq!(word_count("  one\t\ttwo\n\nthree  "), 3);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n "), 0);
    }
}
