//! Transient view state and user-action routing.
//!
//! # Responsibility
//! - Hold filter, sort and selection state for one view.
//! - Compute the filtered/sorted projection of a note collection.
//! - Translate user actions into [`NoteStore`] mutations.
//!
//! # Invariants
//! - The controller never owns notes; it keeps only the selected note id and
//!   routes every change through the store.
//! - Projection is recomputed from the full collection on every call.

use crate::model::note::{Note, NoteId};
use crate::repo::kv_repo::KvStore;
use crate::search::filter::NoteFilter;
use crate::search::sort::{SortField, SortState};
use crate::service::note_store::{NoteStore, StoreResult};
use crate::view::relative_time::format_relative_at;
use crate::view::stats::{compute_stats, NoteStats};
use crate::view::text_edit::TextEdit;
use chrono::{DateTime, Utc};
use log::debug;

/// Result of feeding the tag input box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagInputOutcome {
    /// Input contained a comma; the text before it was committed.
    ///
    /// `added` is the updated note when a new tag was attached; `remainder`
    /// is what stays in the input box.
    Committed {
        added: Option<Note>,
        remainder: String,
    },
    /// No comma yet; matching known tags for autocompletion.
    Suggestions(Vec<String>),
}

#[derive(Debug, Clone, Default)]
pub struct ViewController {
    filter: NoteFilter,
    sort: SortState,
    selected: Option<NoteId>,
}

impl ViewController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &NoteFilter {
        &self.filter
    }

    pub fn sort_state(&self) -> SortState {
        self.sort
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    /// Sets or clears the single category filter.
    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.filter.category = category;
    }

    /// Selecting the active category clears it; any other replaces it.
    pub fn toggle_category_filter(&mut self, category: &str) {
        if self.filter.category.as_deref() == Some(category) {
            self.filter.category = None;
        } else {
            self.filter.category = Some(category.to_string());
        }
    }

    /// Adds `tag` to the required tags, or removes it if already required.
    pub fn toggle_tag_filter(&mut self, tag: &str) {
        if let Some(index) = self.filter.tags.iter().position(|value| value == tag) {
            self.filter.tags.remove(index);
        } else {
            self.filter.tags.push(tag.to_string());
        }
    }

    /// Resets query, category and tag filters. Sort mode is kept.
    pub fn clear_filters(&mut self) {
        self.filter = NoteFilter::default();
    }

    /// Applies a sort selection; see [`SortState::select`].
    pub fn sort(&mut self, field: SortField) {
        self.sort.select(field);
        debug!(
            "event=view_sort module=view status=ok field={:?} direction={:?}",
            field,
            self.sort.direction()
        );
    }

    /// Filtered, then sorted, copy of `all`.
    pub fn compute_view(&self, all: &[Note]) -> Vec<Note> {
        let mut projected = self.filter.apply(all);
        self.sort.apply(&mut projected);
        projected
    }

    pub fn stats(&self, all: &[Note]) -> NoteStats {
        compute_stats(all)
    }

    /// "No notes", or the relative age of the most recently edited note.
    pub fn last_edited_label(&self, all: &[Note]) -> String {
        self.last_edited_label_at(all, Utc::now())
    }

    pub fn last_edited_label_at(&self, all: &[Note], now: DateTime<Utc>) -> String {
        match all.iter().map(|note| note.last_modified).max() {
            Some(latest) => format_relative_at(latest, now),
            None => "No notes".to_string(),
        }
    }

    pub fn select_note(&mut self, id: impl Into<NoteId>) {
        self.selected = Some(id.into());
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected note as currently stored, if it still exists.
    pub fn selected_note<'a>(&self, all: &'a [Note]) -> Option<&'a Note> {
        let id = self.selected.as_deref()?;
        all.iter().find(|note| note.id == id)
    }

    /// Creates a note and selects it.
    pub fn create_note<S: KvStore>(&mut self, store: &mut NoteStore<S>) -> StoreResult<Note> {
        let note = store.create()?;
        self.selected = Some(note.id.clone());
        Ok(note)
    }

    /// Persists an edited copy of a note.
    pub fn save_note<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        note: &Note,
    ) -> StoreResult<Option<Note>> {
        store.update(note)
    }

    /// Deletes a note, dropping the selection if it pointed at it.
    pub fn delete_note<S: KvStore>(
        &mut self,
        store: &mut NoteStore<S>,
        id: &str,
    ) -> StoreResult<bool> {
        let removed = store.delete(id)?;
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        Ok(removed)
    }

    pub fn toggle_favorite<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        id: &str,
    ) -> StoreResult<Option<Note>> {
        Self::modify(store, id, |note| note.is_favorite = !note.is_favorite)
    }

    pub fn change_category<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        id: &str,
        category: &str,
    ) -> StoreResult<Option<Note>> {
        let Some(current) = store.get(id).cloned() else {
            return Ok(None);
        };
        store.set_category(&current, category)
    }

    pub fn remove_tag<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        id: &str,
        tag: &str,
    ) -> StoreResult<Option<Note>> {
        Self::modify(store, id, |note| note.tags.retain(|value| value != tag))
    }

    /// Handles tag-box input for the selected note.
    ///
    /// With a comma, the trimmed text before the first comma becomes a tag
    /// (unless blank or already present) and the text after it is returned
    /// as the remainder. Without a comma, suggestions are returned.
    pub fn submit_tag_input<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        input: &str,
    ) -> StoreResult<TagInputOutcome> {
        let Some((head, rest)) = input.split_once(',') else {
            return Ok(TagInputOutcome::Suggestions(store.tag_suggestions(input)));
        };
        let remainder = rest.split(',').next().unwrap_or_default().to_string();
        let added = self.attach_tag(store, head.trim())?;
        Ok(TagInputOutcome::Committed { added, remainder })
    }

    /// Attaches a suggested tag to the selected note.
    pub fn select_tag_suggestion<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        tag: &str,
    ) -> StoreResult<Option<Note>> {
        self.attach_tag(store, tag)
    }

    /// Applies a text edit to the selected note's content and saves it.
    ///
    /// Returns `Ok(None)` when nothing is selected or the edit is a no-op.
    pub fn edit_selected<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        edit: &TextEdit,
    ) -> StoreResult<Option<Note>> {
        let Some(current) = self.selected_note(store.notes()).cloned() else {
            return Ok(None);
        };
        let Some(content) = edit.apply(&current.content) else {
            return Ok(None);
        };
        let mut changed = current;
        changed.content = content;
        store.update(&changed)
    }

    fn attach_tag<S: KvStore>(
        &self,
        store: &mut NoteStore<S>,
        tag: &str,
    ) -> StoreResult<Option<Note>> {
        let Some(id) = self.selected.as_deref() else {
            return Ok(None);
        };
        if tag.is_empty() || store.get(id).map_or(true, |note| note.has_tag(tag)) {
            return Ok(None);
        }
        Self::modify(store, id, |note| note.tags.push(tag.to_string()))
    }

    fn modify<S: KvStore>(
        store: &mut NoteStore<S>,
        id: &str,
        change: impl FnOnce(&mut Note),
    ) -> StoreResult<Option<Note>> {
        let Some(mut note) = store.get(id).cloned() else {
            return Ok(None);
        };
        change(&mut note);
        store.update(&note)
    }
}

#[cfg(test)]
mod tests {
    use super::ViewController;

    #[test]
    fn toggling_active_category_clears_it() {
        let mut view = ViewController::new();
        view.toggle_category_filter("Work");
        assert_eq!(view.filter().category.as_deref(), Some("Work"));
        view.toggle_category_filter("Study");
        assert_eq!(view.filter().category.as_deref(), Some("Study"));
        view.toggle_category_filter("Study");
        assert!(view.filter().category.is_none());
    }

    #[test]
    fn toggling_tag_filter_adds_then_removes() {
        let mut view = ViewController::new();
        view.toggle_tag_filter("x");
        view.toggle_tag_filter("y");
        view.toggle_tag_filter("x");
        assert_eq!(view.filter().tags, vec!["y".to_string()]);
    }

    #[test]
    fn clear_filters_resets_everything_but_sort() {
        let mut view = ViewController::new();
        view.set_query("abc");
        view.toggle_tag_filter("x");
        view.toggle_category_filter("Work");
        view.sort(crate::search::sort::SortField::Title);
        view.clear_filters();
        assert!(view.filter().is_empty());
        assert!(view.sort_state().field().is_some());
    }
}
