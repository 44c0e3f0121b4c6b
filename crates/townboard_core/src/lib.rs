//! Core domain logic for Townboard municipal announcements.
//! This crate is the single source of truth for catalog invariants.

pub mod clock;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::announcement::{Announcement, AnnouncementPatch, NewAnnouncement};
pub use model::category::Category;
pub use repo::announcement_repo::{AnnouncementRepository, StoreAnnouncementRepository};
pub use repo::category_repo::{CategoryRepository, StoreCategoryRepository};
pub use repo::{CatalogError, CatalogResult};
pub use seed::ensure_seeded;
pub use service::board_service::BoardService;
pub use service::latency::LatencyProfile;
pub use store::{DocumentStore, MemoryDocumentStore, SqliteDocumentStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
