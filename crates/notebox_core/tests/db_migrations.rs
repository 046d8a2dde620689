use notebox_core::db::migrations::{apply_migrations, latest_version};
use notebox_core::db::{open_db, open_db_in_memory, DbError};
use notebox_core::{KvStore, RepoError, SqliteKvStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_creates_kv_table_at_latest_version() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn migrations_are_not_reapplied() {
    let mut conn = open_db_in_memory().unwrap();
    assert_eq!(apply_migrations(&mut conn).unwrap(), 0);
}

#[test]
fn reopening_file_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notebox.sqlite3");

    {
        let mut store = SqliteKvStore::open(&path).unwrap();
        store.set("theme", b"dark").unwrap();
    }

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), latest_version());
    drop(conn);

    let store = SqliteKvStore::open(&path).unwrap();
    assert_eq!(store.get("theme").unwrap().as_deref(), Some(&b"dark"[..]));
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    match open_db(&path).unwrap_err() {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = SqliteKvStore::open(&path).err().unwrap();
    assert!(matches!(err, RepoError::Db(DbError::UnsupportedSchemaVersion { .. })));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
