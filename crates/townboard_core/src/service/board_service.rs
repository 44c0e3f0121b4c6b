//! Announcement-board facade.
//!
//! # Responsibility
//! - Expose async list/get/create/update entry points over the catalogs.
//! - Run the idempotent seed-check before every operation.
//! - Emulate remote-call latency via the injected [`LatencyProfile`].
//!
//! # Invariants
//! - The facade holds no domain state of its own; all records live in the
//!   store.
//! - Failures pass through unchanged: no wrapping, no retry, no backoff.
//! - The suspension is pure latency emulation; no work happens during it.

use std::collections::HashMap;

use tokio::time::sleep;

use crate::model::announcement::{Announcement, AnnouncementPatch, NewAnnouncement};
use crate::model::category::Category;
use crate::repo::announcement_repo::{AnnouncementRepository, StoreAnnouncementRepository};
use crate::repo::category_repo::{CategoryRepository, StoreCategoryRepository};
use crate::repo::CatalogResult;
use crate::seed::ensure_seeded;
use crate::service::latency::LatencyProfile;
use crate::store::DocumentStore;

/// Stateless async pass-through over the two catalogs.
pub struct BoardService<S: DocumentStore> {
    store: S,
    latency: LatencyProfile,
}

impl<S: DocumentStore> BoardService<S> {
    /// Creates a facade over the given store with the given delay strategy.
    pub fn new(store: S, latency: LatencyProfile) -> Self {
        Self { store, latency }
    }

    /// Borrows the underlying store, e.g. for test inspection.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists all announcements. Default UI ordering (`updated_at`
    /// descending) is a presentation concern, not applied here.
    pub async fn list_announcements(&self) -> CatalogResult<Vec<Announcement>> {
        ensure_seeded(&self.store)?;
        sleep(self.latency.query).await;
        StoreAnnouncementRepository::new(&self.store).list()
    }

    /// Fetches one announcement; `Ok(None)` when the id is unknown.
    pub async fn get_announcement(&self, id: &str) -> CatalogResult<Option<Announcement>> {
        ensure_seeded(&self.store)?;
        sleep(self.latency.query).await;
        StoreAnnouncementRepository::new(&self.store).get(id)
    }

    /// Creates an announcement and returns the complete stored record.
    pub async fn create_announcement(&self, input: NewAnnouncement) -> CatalogResult<Announcement> {
        ensure_seeded(&self.store)?;
        sleep(self.latency.mutation).await;
        StoreAnnouncementRepository::new(&self.store).create(input)
    }

    /// Applies a partial update; `NotFound` propagates to the caller with
    /// its human-readable message and leaves the catalog untouched.
    pub async fn update_announcement(
        &self,
        id: &str,
        patch: &AnnouncementPatch,
    ) -> CatalogResult<Announcement> {
        ensure_seeded(&self.store)?;
        sleep(self.latency.mutation).await;
        StoreAnnouncementRepository::new(&self.store).update(id, patch)
    }

    /// Lists categories in stored order, for selects and rendering.
    pub async fn list_categories(&self) -> CatalogResult<Vec<Category>> {
        ensure_seeded(&self.store)?;
        sleep(self.latency.categories).await;
        StoreCategoryRepository::new(&self.store).list()
    }

    /// Returns the category id-to-title index; unknown ids in announcements
    /// are rendered from the raw id by the caller.
    pub async fn category_titles(&self) -> CatalogResult<HashMap<String, String>> {
        ensure_seeded(&self.store)?;
        sleep(self.latency.categories).await;
        StoreCategoryRepository::new(&self.store).title_index()
    }
}
