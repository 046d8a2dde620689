//! Note collection store.
//!
//! # Responsibility
//! - Own the in-memory note collection and the derived tag universe.
//! - Rehydrate from and persist to a [`KvStore`] backend.
//! - Publish the collection and tag set to registered observers.
//!
//! # Invariants
//! - Every mutation persists before observers are notified, so observers
//!   never see state that is not yet durable.
//! - A failed write leaves the in-memory collection and tags unchanged.
//! - The tag universe is always the union of all notes' tags.
//! - Mutations naming an unknown note id are silent no-ops and do not write.
//! - Note ids are unique within the collection for the store lifetime.

use crate::model::category::find_category;
use crate::model::note::{dedupe_tags, now_millis, Note, NoteId};
use crate::repo::kv_repo::{KvStore, RepoError};
use log::{debug, error, info, warn};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized note collection.
pub const DEFAULT_NOTES_KEY: &str = "notes";

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle returned by subscription calls; pass to [`NoteStore::unsubscribe`].
pub type SubscriptionId = u64;

type NotesListener = Box<dyn FnMut(&[Note])>;
type TagsListener = Box<dyn FnMut(&[String])>;

/// Store-level failure.
#[derive(Debug)]
pub enum StoreError {
    /// Backend read/write failed.
    Storage(RepoError),
    /// Persisted collection could not be parsed.
    Corrupt(serde_json::Error),
    /// In-memory collection could not be serialized.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "note storage failed: {err}"),
            Self::Corrupt(err) => write!(f, "persisted notes are malformed: {err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Corrupt(err) | Self::Serialize(err) => Some(err),
        }
    }
}

impl From<RepoError> for StoreError {
    fn from(value: RepoError) -> Self {
        Self::Storage(value)
    }
}

/// Owner of the note collection.
pub struct NoteStore<S: KvStore> {
    storage: S,
    notes_key: String,
    notes: Vec<Note>,
    tags: Vec<String>,
    last_issued_id: i64,
    next_subscription: SubscriptionId,
    note_listeners: Vec<(SubscriptionId, NotesListener)>,
    tag_listeners: Vec<(SubscriptionId, TagsListener)>,
}

impl<S: KvStore> NoteStore<S> {
    /// Loads the collection stored under [`DEFAULT_NOTES_KEY`].
    pub fn open(storage: S) -> StoreResult<Self> {
        Self::open_with_key(storage, DEFAULT_NOTES_KEY)
    }

    /// Loads the collection stored under `notes_key`.
    ///
    /// An absent key yields an empty collection. Records missing optional
    /// fields are defaulted; unparseable data is returned as
    /// [`StoreError::Corrupt`].
    pub fn open_with_key(storage: S, notes_key: impl Into<String>) -> StoreResult<Self> {
        let notes_key = notes_key.into();
        let notes = match storage.get(&notes_key)? {
            Some(bytes) => serde_json::from_slice::<Vec<Note>>(&bytes).map_err(|err| {
                error!(
                    "event=store_load module=store status=error error_code=corrupt_notes bytes={} error={}",
                    bytes.len(),
                    err
                );
                StoreError::Corrupt(err)
            })?,
            None => Vec::new(),
        };

        let mut store = Self {
            storage,
            notes_key,
            notes,
            tags: Vec::new(),
            last_issued_id: 0,
            next_subscription: 1,
            note_listeners: Vec::new(),
            tag_listeners: Vec::new(),
        };
        store.recompute_tags();
        info!(
            "event=store_load module=store status=ok notes={} tags={}",
            store.notes.len(),
            store.tags.len()
        );
        Ok(store)
    }

    /// Current collection, newest-created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Current tag universe, sorted.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Mutable access to the backend, e.g. for sibling preferences.
    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Inserts an empty note at the front of the collection.
    pub fn create(&mut self) -> StoreResult<Note> {
        let id = self.next_note_id();
        let note = Note::new(id, now_millis());
        let mut candidate = Vec::with_capacity(self.notes.len() + 1);
        candidate.push(note.clone());
        candidate.extend(self.notes.iter().cloned());
        self.commit(candidate)?;
        info!(
            "event=note_create module=store status=ok note_id={} total={}",
            note.id,
            self.notes.len()
        );
        Ok(note)
    }

    /// Replaces the note with the same id.
    ///
    /// The stored copy gets a fresh `last_modified` and de-duplicated tags.
    /// Returns `Ok(None)` without writing when the id is unknown.
    pub fn update(&mut self, note: &Note) -> StoreResult<Option<Note>> {
        let Some(index) = self.position(&note.id) else {
            debug!(
                "event=note_update module=store status=skipped reason=not_found note_id={}",
                note.id
            );
            return Ok(None);
        };

        let mut stored = note.clone();
        stored.last_modified = now_millis();
        stored.tags = dedupe_tags(&note.tags);
        let mut candidate = self.notes.clone();
        candidate[index] = stored.clone();
        self.commit(candidate)?;
        debug!(
            "event=note_update module=store status=ok note_id={} tags={}",
            stored.id,
            stored.tags.len()
        );
        Ok(Some(stored))
    }

    /// Removes every note with `id`. Returns whether anything was removed.
    pub fn delete(&mut self, id: &str) -> StoreResult<bool> {
        let mut candidate = self.notes.clone();
        candidate.retain(|note| note.id != id);
        if candidate.len() == self.notes.len() {
            debug!(
                "event=note_delete module=store status=skipped reason=not_found note_id={}",
                id
            );
            return Ok(false);
        }

        self.commit(candidate)?;
        info!(
            "event=note_delete module=store status=ok note_id={} total={}",
            id,
            self.notes.len()
        );
        Ok(true)
    }

    /// Assigns a known category (and its color) and performs [`Self::update`].
    ///
    /// Unknown category names are ignored.
    pub fn set_category(&mut self, note: &Note, category_name: &str) -> StoreResult<Option<Note>> {
        let Some(category) = find_category(category_name) else {
            warn!(
                "event=note_set_category module=store status=skipped reason=unknown_category note_id={}",
                note.id
            );
            return Ok(None);
        };

        let mut changed = note.clone();
        changed.category = category.name.to_string();
        changed.color = category.color.to_string();
        self.update(&changed)
    }

    /// Known tags containing `query`, case-insensitively, sorted.
    pub fn tag_suggestions(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.tags
            .iter()
            .filter(|tag| tag.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Registers a collection observer.
    ///
    /// The observer is called immediately with the current collection, then
    /// after every mutation.
    pub fn subscribe_notes(&mut self, mut listener: impl FnMut(&[Note]) + 'static) -> SubscriptionId {
        listener(&self.notes);
        let id = self.allocate_subscription();
        self.note_listeners.push((id, Box::new(listener)));
        id
    }

    /// Registers a tag-universe observer, called immediately and on change.
    pub fn subscribe_tags(&mut self, mut listener: impl FnMut(&[String]) + 'static) -> SubscriptionId {
        listener(&self.tags);
        let id = self.allocate_subscription();
        self.tag_listeners.push((id, Box::new(listener)));
        id
    }

    /// Drops an observer. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.note_listeners.len() + self.tag_listeners.len();
        self.note_listeners.retain(|(current, _)| *current != id);
        self.tag_listeners.retain(|(current, _)| *current != id);
        before != self.note_listeners.len() + self.tag_listeners.len()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn allocate_subscription(&mut self) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        id
    }

    /// Persists `candidate`, then adopts it and publishes.
    ///
    /// On a failed write the in-memory collection is left untouched.
    fn commit(&mut self, candidate: Vec<Note>) -> StoreResult<()> {
        self.persist(&candidate)?;
        self.notes = candidate;
        self.recompute_tags();
        self.publish();
        Ok(())
    }

    fn recompute_tags(&mut self) {
        let universe: BTreeSet<&String> = self.notes.iter().flat_map(|note| &note.tags).collect();
        self.tags = universe.into_iter().cloned().collect();
    }

    fn persist(&mut self, notes: &[Note]) -> StoreResult<()> {
        let bytes = serde_json::to_vec(notes).map_err(StoreError::Serialize)?;
        if let Err(err) = self.storage.set(&self.notes_key, &bytes) {
            error!(
                "event=store_persist module=store status=error bytes={} error={}",
                bytes.len(),
                err
            );
            return Err(err.into());
        }
        Ok(())
    }

    fn publish(&mut self) {
        for (_, listener) in &mut self.note_listeners {
            listener(&self.notes);
        }
        for (_, listener) in &mut self.tag_listeners {
            listener(&self.tags);
        }
    }

    /// Millisecond timestamp id, bumped past any id already issued or stored.
    fn next_note_id(&mut self) -> NoteId {
        let mut candidate = now_millis().timestamp_millis().max(self.last_issued_id + 1);
        while self.position(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        self.last_issued_id = candidate;
        candidate.to_string()
    }
}

impl<S: KvStore> std::fmt::Debug for NoteStore<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes_key", &self.notes_key)
            .field("notes", &self.notes.len())
            .field("tags", &self.tags.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::NoteStore;
    use crate::repo::kv_repo::MemoryKvStore;

    #[test]
    fn ids_stay_unique_when_created_within_one_millisecond() {
        let mut store = NoteStore::open(MemoryKvStore::new()).unwrap();
        let ids: Vec<String> = (0..20).map(|_| store.create().unwrap().id).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn unsubscribe_reports_unknown_handles() {
        let mut store = NoteStore::open(MemoryKvStore::new()).unwrap();
        let id = store.subscribe_notes(|_| {});
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
    }
}
