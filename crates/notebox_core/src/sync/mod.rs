//! Sync collaborator seam.
//!
//! # Responsibility
//! - Define the capability a UI calls when the user asks to sync.
//! - Ship a simulated implementation that only waits and reports back.
//!
//! # Invariants
//! - The simulated service performs no I/O and never touches notes.
//! - At most one simulated run is in flight at a time.

mod simulated;

pub use simulated::SimulatedSyncService;

use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Completion payload of one sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    /// Correlates start/finish log lines of one run.
    pub run_id: Uuid,
    /// Number of notes handed to the run.
    pub notes_seen: usize,
    pub finished_at: DateTime<Utc>,
}

pub type SyncCallback = Box<dyn FnOnce(SyncReport) + Send + 'static>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncError {
    /// A previous run has not completed yet.
    AlreadyRunning,
    /// The timer thread could not be started.
    Spawn(String),
}

impl Display for SyncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRunning => write!(f, "a sync run is already in progress"),
            Self::Spawn(details) => write!(f, "failed to schedule sync: {details}"),
        }
    }
}

impl Error for SyncError {}

/// Capability for pushing the collection somewhere else.
pub trait SyncService {
    /// Starts a run and invokes `on_complete` when it finishes.
    fn request_sync(&self, notes_seen: usize, on_complete: SyncCallback) -> Result<Uuid, SyncError>;

    /// Whether a run is currently in flight.
    fn is_syncing(&self) -> bool;
}
