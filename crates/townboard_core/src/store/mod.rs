//! Document store contracts and implementations.
//!
//! # Responsibility
//! - Define the string-keyed JSON document storage handle used by the
//!   catalogs and seeding.
//! - Keep storage-medium details behind the `DocumentStore` seam.
//!
//! # Invariants
//! - Reads never raise: absent, unreadable, and unparseable keys all read
//!   as absent. Corruption is a cache miss, not a failure.
//! - Writes fully replace the document at a key; there are no partial or
//!   merge semantics and no cross-key atomicity.

use std::error::Error;
use std::fmt::{Display, Formatter};

use serde_json::Value;

mod memory;
mod sqlite;

pub use memory::MemoryDocumentStore;
pub use sqlite::SqliteDocumentStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Write-path storage failure.
///
/// The read path deliberately has no error channel; only writes (and the
/// serialization feeding them) can fail.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize document: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Durable string-keyed JSON document storage.
///
/// Implementations are injected into the catalogs and the facade so tests
/// can substitute an in-memory fake for the durable medium.
pub trait DocumentStore {
    /// Returns whether `key` holds any value at all, parseable or not.
    ///
    /// Seeding relies on raw presence: an empty-but-present or even corrupt
    /// document must never be overwritten by seed data.
    fn contains(&self, key: &str) -> bool;

    /// Reads the document at `key`.
    ///
    /// Absent keys, storage read failures, and unparseable values all
    /// return `None`.
    fn read(&self, key: &str) -> Option<Value>;

    /// Replaces the document at `key` in full.
    fn write(&self, key: &str, document: &Value) -> StoreResult<()>;
}
