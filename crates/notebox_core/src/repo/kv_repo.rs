//! Key-value storage contracts and backends.
//!
//! # Responsibility
//! - Define the byte-level `get`/`set` capability the note store persists
//!   through.
//! - Provide an in-memory backend and a SQLite-backed one.
//!
//! # Invariants
//! - `set` is durable when it returns `Ok`; there is no write batching.
//! - `get` of a key never written returns `Ok(None)`.

use crate::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage backend failure.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Key rejected before reaching the backend.
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid storage key: `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Byte-oriented key-value persistence capability.
pub trait KvStore {
    fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;
    fn set(&mut self, key: &str, value: &[u8]) -> RepoResult<()>;
}

impl<T: KvStore + ?Sized> KvStore for &mut T {
    fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> RepoResult<()> {
        (**self).set(key, value)
    }
}

/// Volatile backend, mainly for tests and previews.
#[derive(Debug, Default, Clone)]
pub struct MemoryKvStore {
    entries: HashMap<String, Vec<u8>>,
}

impl MemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KvStore for MemoryKvStore {
    fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        Ok(self.entries.get(validate_key(key)?).cloned())
    }

    fn set(&mut self, key: &str, value: &[u8]) -> RepoResult<()> {
        let key = validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

/// SQLite-backed key-value store over the `kv_entries` table.
pub struct SqliteKvStore {
    conn: Connection,
}

impl SqliteKvStore {
    /// Opens (creating if needed) a database file and migrates it.
    pub fn open(path: impl AsRef<Path>) -> RepoResult<Self> {
        Ok(Self {
            conn: open_db(path)?,
        })
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> RepoResult<Self> {
        Ok(Self {
            conn: open_db_in_memory()?,
        })
    }

    /// Lists stored keys in ascending order.
    pub fn keys(&self) -> RepoResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_entries ORDER BY key ASC;")?;
        let mut rows = stmt.query([])?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next()? {
            keys.push(row.get("key")?);
        }
        Ok(keys)
    }
}

impl KvStore for SqliteKvStore {
    fn get(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        let key = validate_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, Vec<u8>>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &[u8]) -> RepoResult<()> {
        let key = validate_key(key)?;
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value, epoch_millis()],
        )?;
        Ok(())
    }
}

fn validate_key(key: &str) -> RepoResult<&str> {
    if key.trim().is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(key)
}

fn epoch_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| {
            i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX)
        })
}
