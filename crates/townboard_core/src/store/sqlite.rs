//! SQLite-backed document store.
//!
//! # Responsibility
//! - Persist JSON documents in the `documents` key-value table.
//! - Map read-path failures to absence per the store contract.
//!
//! # Invariants
//! - One row per key; writes are `INSERT OR REPLACE`.
//! - The connection must come from `db::open_db`/`open_db_in_memory` so the
//!   schema is migrated before use.

use log::warn;
use rusqlite::Connection;
use serde_json::Value;

use super::{DocumentStore, StoreResult};

/// Document store over a migrated SQLite connection.
pub struct SqliteDocumentStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteDocumentStore<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl DocumentStore for SqliteDocumentStore<'_> {
    fn contains(&self, key: &str) -> bool {
        let result = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM documents WHERE key = ?1);",
            [key],
            |row| row.get::<_, i64>(0),
        );
        match result {
            Ok(exists) => exists == 1,
            Err(err) => {
                warn!("event=doc_contains module=store status=error key={key} error={err}");
                false
            }
        }
    }

    fn read(&self, key: &str) -> Option<Value> {
        let raw = match self.conn.query_row(
            "SELECT value FROM documents WHERE key = ?1;",
            [key],
            |row| row.get::<_, String>(0),
        ) {
            Ok(raw) => raw,
            Err(rusqlite::Error::QueryReturnedNoRows) => return None,
            Err(err) => {
                warn!("event=doc_read module=store status=error key={key} error={err}");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                // Corrupt document: treated as a cache miss, not a failure.
                warn!("event=doc_read module=store status=corrupt key={key} error={err}");
                None
            }
        }
    }

    fn write(&self, key: &str, document: &Value) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO documents (key, value) VALUES (?1, ?2);",
            rusqlite::params![key, document.to_string()],
        )?;
        Ok(())
    }
}
