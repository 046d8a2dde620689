//! Persistence abstractions and backends.
//!
//! # Responsibility
//! - Define the key-value capability the store writes through.
//! - Isolate SQLite details from store/view orchestration.
//!
//! # Invariants
//! - Backends store opaque bytes; serialization belongs to the caller.

pub mod kv_repo;
