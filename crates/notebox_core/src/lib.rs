//! Core domain logic for notebox.
//! This crate is the single source of truth for note invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;
pub mod sync;
pub mod view;

pub use config::{AppConfig, ConfigError};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::{categories, category_color, find_category, Category};
pub use model::note::{Note, NoteId};
pub use repo::kv_repo::{KvStore, MemoryKvStore, RepoError, RepoResult, SqliteKvStore};
pub use search::filter::NoteFilter;
pub use search::sort::{SortDirection, SortField, SortState};
pub use service::note_store::{NoteStore, StoreError, StoreResult, SubscriptionId};
pub use service::theme::{load_theme, toggle_theme, Theme};
pub use service::view_controller::{TagInputOutcome, ViewController};
pub use sync::{SimulatedSyncService, SyncError, SyncReport, SyncService};
pub use view::preview::derive_preview;
pub use view::relative_time::{format_relative, format_relative_at};
pub use view::stats::{compute_stats, word_count, NoteStats};
pub use view::text_edit::{Format, ListKind, TextEdit, TextRange};

/// Version of the core crate, reported by front ends.
pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
