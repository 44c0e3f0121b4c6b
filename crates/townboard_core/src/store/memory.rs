//! In-memory document store fake for tests and smoke probes.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::warn;
use serde_json::Value;

use super::{DocumentStore, StoreResult};

/// Map-backed store with the same read/write contract as the durable one.
///
/// Entries hold raw strings so tests can inject unparseable documents and
/// exercise the corruption-as-absence path.
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a raw string at `key`, bypassing JSON validation.
    pub fn insert_raw(&self, key: &str, raw: &str) {
        self.lock().insert(key.to_string(), raw.to_string());
    }

    /// Returns the raw string at `key`, if any.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn contains(&self, key: &str) -> bool {
        self.lock().contains_key(key)
    }

    fn read(&self, key: &str) -> Option<Value> {
        let raw = self.lock().get(key).cloned()?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!("event=doc_read module=store status=corrupt key={key} error={err}");
                None
            }
        }
    }

    fn write(&self, key: &str, document: &Value) -> StoreResult<()> {
        self.lock().insert(key.to_string(), document.to_string());
        Ok(())
    }
}
