//! Schema migrations for the key-value database.
//!
//! # Invariants
//! - Steps are listed in strictly increasing `version` order.
//! - The applied version is mirrored to `PRAGMA user_version`.
//! - All pending steps run inside one transaction.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct MigrationStep {
    version: u32,
    sql: &'static str,
}

const STEPS: &[MigrationStep] = &[MigrationStep {
    version: 1,
    sql: include_str!("0001_kv_entries.sql"),
}];

/// Returns the newest schema version this binary can write.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |step| step.version)
}

/// Brings the connection's schema up to [`latest_version`].
///
/// Returns how many steps were applied (zero when already current).
pub fn apply_migrations(conn: &mut Connection) -> DbResult<u32> {
    let from_version: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;
    let latest = latest_version();
    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending: Vec<&MigrationStep> = STEPS
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if pending.is_empty() {
        return Ok(0);
    }

    let tx = conn.transaction()?;
    for step in &pending {
        tx.execute_batch(step.sql)?;
        tx.pragma_update(None, "user_version", step.version)?;
    }
    tx.commit()?;

    info!(
        "event=db_migrate module=db status=ok from_version={} to_version={} steps={}",
        from_version,
        latest,
        pending.len()
    );
    Ok(pending.len() as u32)
}
