//! Announcement catalog contract and document-store implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the persisted announcement collection.
//! - Own id generation, `updated_at` stamping, and patch merging.
//!
//! # Invariants
//! - `id` is assigned once, at creation; updates never reassign it.
//! - Every mutation re-stamps `updated_at` and rewrites the full collection.
//! - A corrupt or absent collection document reads as the empty collection.

use log::{info, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::clock;
use crate::model::announcement::{Announcement, AnnouncementPatch, NewAnnouncement};
use crate::repo::{CatalogError, CatalogResult};
use crate::store::{DocumentStore, StoreError};

/// Storage key holding the full announcement collection.
pub const ANNOUNCEMENTS_KEY: &str = "mod:announcements";

/// Catalog interface for announcement CRUD operations.
pub trait AnnouncementRepository {
    /// Returns all records in stored order; sorting is a caller concern.
    fn list(&self) -> CatalogResult<Vec<Announcement>>;
    /// Linear search by exact id; absence is `Ok(None)`, not an error.
    fn get(&self, id: &str) -> CatalogResult<Option<Announcement>>;
    /// Appends a new record with a fresh id and current stamp.
    fn create(&self, input: NewAnnouncement) -> CatalogResult<Announcement>;
    /// Shallow-merges `patch` over the record with `id`, re-stamping it.
    fn update(&self, id: &str, patch: &AnnouncementPatch) -> CatalogResult<Announcement>;
}

/// Announcement catalog over an injected document store.
pub struct StoreAnnouncementRepository<'s, S: DocumentStore> {
    store: &'s S,
}

impl<'s, S: DocumentStore> StoreAnnouncementRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    fn persist(&self, all: &[Announcement]) -> CatalogResult<()> {
        let document = serde_json::to_value(all).map_err(StoreError::from)?;
        self.store.write(ANNOUNCEMENTS_KEY, &document)?;
        Ok(())
    }
}

impl<S: DocumentStore> AnnouncementRepository for StoreAnnouncementRepository<'_, S> {
    fn list(&self) -> CatalogResult<Vec<Announcement>> {
        Ok(read_collection(self.store))
    }

    fn get(&self, id: &str) -> CatalogResult<Option<Announcement>> {
        let found = read_collection(self.store)
            .into_iter()
            .find(|record| record.id == id);
        Ok(found)
    }

    fn create(&self, input: NewAnnouncement) -> CatalogResult<Announcement> {
        let mut all = read_collection(self.store);
        let record = input.into_record(Uuid::new_v4().to_string(), clock::now_rfc3339());
        all.push(record.clone());
        self.persist(&all)?;
        info!(
            "event=announcement_create module=repo status=ok id={} total={}",
            record.id,
            all.len()
        );
        Ok(record)
    }

    fn update(&self, id: &str, patch: &AnnouncementPatch) -> CatalogResult<Announcement> {
        let mut all = read_collection(self.store);
        let Some(index) = all.iter().position(|record| record.id == id) else {
            warn!("event=announcement_update module=repo status=not_found id={id}");
            return Err(CatalogError::NotFound(id.to_string()));
        };

        let mut merged = patch.apply_to(&all[index]);
        merged.updated_at = clock::now_rfc3339();
        all[index] = merged.clone();
        self.persist(&all)?;
        info!("event=announcement_update module=repo status=ok id={id}");
        Ok(merged)
    }
}

/// Reads the persisted collection, mapping absence and corruption to empty.
fn read_collection<S: DocumentStore>(store: &S) -> Vec<Announcement> {
    decode_collection(store.read(ANNOUNCEMENTS_KEY))
}

fn decode_collection(document: Option<Value>) -> Vec<Announcement> {
    let Some(document) = document else {
        return Vec::new();
    };
    match serde_json::from_value(document) {
        Ok(records) => records,
        Err(err) => {
            warn!("event=announcement_list module=repo status=corrupt error={err}");
            Vec::new()
        }
    }
}
