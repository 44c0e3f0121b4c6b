//! Fixed-seed bootstrap for both catalogs.
//!
//! # Responsibility
//! - Guarantee the category and announcement collections exist on first use.
//! - Keep seeding idempotent across sessions.
//!
//! # Invariants
//! - Presence is checked per key via raw key existence: an empty-but-present
//!   (or even corrupt) document is never overwritten.
//! - Seeding the two keys is not atomic; each key is handled independently.

use log::info;

use crate::model::announcement::Announcement;
use crate::model::category::Category;
use crate::repo::announcement_repo::ANNOUNCEMENTS_KEY;
use crate::repo::category_repo::CATEGORIES_KEY;
use crate::store::{DocumentStore, StoreError, StoreResult};

/// Writes seed documents for any catalog key that does not exist yet.
///
/// Safe to call before every catalog operation; a present key is left
/// untouched regardless of its content.
pub fn ensure_seeded<S: DocumentStore>(store: &S) -> StoreResult<()> {
    if !store.contains(CATEGORIES_KEY) {
        let document = serde_json::to_value(seed_categories()).map_err(StoreError::from)?;
        store.write(CATEGORIES_KEY, &document)?;
        info!("event=seed module=seed status=ok key={CATEGORIES_KEY}");
    }

    if !store.contains(ANNOUNCEMENTS_KEY) {
        let document = serde_json::to_value(seed_announcements()).map_err(StoreError::from)?;
        store.write(ANNOUNCEMENTS_KEY, &document)?;
        info!("event=seed module=seed status=ok key={ANNOUNCEMENTS_KEY}");
    }

    Ok(())
}

/// Fixed category seed records.
pub fn seed_categories() -> Vec<Category> {
    vec![
        Category::new("cat-city", "City"),
        Category::new("cat-events", "Community events"),
        Category::new("cat-health", "Health"),
    ]
}

/// Fixed announcement seed records.
pub fn seed_announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: "1".to_string(),
            title: "Road maintenance on Main St.".to_string(),
            content: "Please be advised that Main St. will be closed for maintenance \
                      from Sept 1 to Sept 5."
                .to_string(),
            categories: vec!["cat-city".to_string()],
            publication_date: "2025-09-01T09:00:00Z".to_string(),
            updated_at: "2025-09-01T09:00:00Z".to_string(),
        },
        Announcement {
            id: "2".to_string(),
            title: "Free flu shots this weekend".to_string(),
            content: "Get your free flu shots at the community center this Saturday \
                      and Sunday from 10am to 4pm."
                .to_string(),
            categories: vec!["cat-health".to_string(), "cat-events".to_string()],
            publication_date: "2025-09-03T12:30:00Z".to_string(),
            updated_at: "2025-09-03T12:30:00Z".to_string(),
        },
    ]
}
