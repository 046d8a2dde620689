//! Sort modes for note projections.
//!
//! # Invariants
//! - Selecting the active field again flips the direction; selecting a new
//!   field keeps the current direction.
//! - Sorting is stable, so equal keys keep collection order.

use crate::model::note::Note;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    /// `last_modified`.
    Date,
    Title,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Ascending,
    /// Most recent / last in order first.
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Current sort mode. No field is active until the first selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    field: Option<SortField>,
    direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            field: Some(field),
            direction,
        }
    }

    pub fn field(&self) -> Option<SortField> {
        self.field
    }

    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Applies a user selection of `field`.
    pub fn select(&mut self, field: SortField) {
        if self.field == Some(field) {
            self.direction = self.direction.flipped();
        } else {
            self.field = Some(field);
        }
    }

    /// Sorts `notes` in place; no-op when no field is active.
    pub fn apply(&self, notes: &mut [Note]) {
        let Some(field) = self.field else {
            return;
        };
        notes.sort_by(|left, right| {
            let ordering = compare_by(field, left, right);
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

/// Ascending comparison of two notes on `field`.
pub fn compare_by(field: SortField, left: &Note, right: &Note) -> Ordering {
    match field {
        SortField::Date => left.last_modified.cmp(&right.last_modified),
        SortField::Title => locale_compare(&left.title, &right.title),
        SortField::Category => left.category.cmp(&right.category),
    }
}

/// Case-aware comparison in the style of a UI locale collation.
///
/// Letters compare case-insensitively first; on a tie lowercase sorts before
/// uppercase, so `apple < Banana < banana < Cherry`.
pub fn locale_compare(left: &str, right: &str) -> Ordering {
    left.to_lowercase()
        .cmp(&right.to_lowercase())
        .then_with(|| swap_case(left).cmp(&swap_case(right)))
        .then_with(|| left.cmp(right))
}

fn swap_case(value: &str) -> String {
    value
        .chars()
        .flat_map(|c| {
            if c.is_uppercase() {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                c.to_uppercase().collect::<Vec<_>>()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{locale_compare, SortDirection, SortField, SortState};
    use std::cmp::Ordering;

    #[test]
    fn reselecting_field_flips_direction() {
        let mut state = SortState::default();
        state.select(SortField::Title);
        assert_eq!(state.direction(), SortDirection::Descending);
        state.select(SortField::Title);
        assert_eq!(state.direction(), SortDirection::Ascending);
    }

    #[test]
    fn switching_field_keeps_direction() {
        let mut state = SortState::new(SortField::Title, SortDirection::Ascending);
        state.select(SortField::Date);
        assert_eq!(state.field(), Some(SortField::Date));
        assert_eq!(state.direction(), SortDirection::Ascending);
    }

    #[test]
    fn locale_compare_orders_lowercase_before_uppercase_on_ties() {
        assert_eq!(locale_compare("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("banana", "Banana"), Ordering::Less);
        assert_eq!(locale_compare("", "a"), Ordering::Less);
        assert_eq!(locale_compare("Same", "Same"), Ordering::Equal);
    }
}
