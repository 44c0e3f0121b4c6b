//! Announcement domain model.
//!
//! # Responsibility
//! - Define the canonical announcement record and its request models.
//! - Provide the shallow-merge semantics used by catalog updates.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reassigned by a patch.
//! - `updated_at` is stamped by the catalog, never carried in caller input.
//! - `categories` holds category ids; dangling ids are tolerated by design.

use serde::{Deserialize, Serialize};

/// Canonical announcement record as persisted and served to the UI layer.
///
/// Timestamps are RFC 3339 strings; `categories` is a set represented as a
/// sequence whose order carries no meaning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Announcement {
    /// Stable store-generated identifier.
    pub id: String,
    /// Human-readable headline.
    pub title: String,
    /// Descriptive body text.
    pub content: String,
    /// Category ids referencing `Category::id`; not referentially checked.
    pub categories: Vec<String>,
    /// Intended public-visibility date, RFC 3339.
    pub publication_date: String,
    /// Store-stamped, refreshed on every create or update, RFC 3339.
    pub updated_at: String,
}

/// Create input: everything the caller supplies, i.e. all fields except the
/// store-assigned `id` and `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAnnouncement {
    pub title: String,
    pub content: String,
    pub categories: Vec<String>,
    pub publication_date: String,
}

impl NewAnnouncement {
    /// Completes this input into a full record with store-assigned fields.
    pub fn into_record(self, id: String, updated_at: String) -> Announcement {
        Announcement {
            id,
            title: self.title,
            content: self.content,
            categories: self.categories,
            publication_date: self.publication_date,
            updated_at,
        }
    }
}

/// Partial update over the mutable announcement fields.
///
/// Absent fields retain their prior values; `id` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnouncementPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub categories: Option<Vec<String>>,
    pub publication_date: Option<String>,
}

impl AnnouncementPatch {
    /// Shallow-merges this patch over `existing`.
    ///
    /// # Contract
    /// - Fields present in the patch overwrite; all others are retained.
    /// - `id` and `updated_at` are carried over unchanged; re-stamping
    ///   `updated_at` is the catalog's job.
    pub fn apply_to(&self, existing: &Announcement) -> Announcement {
        Announcement {
            id: existing.id.clone(),
            title: self.title.clone().unwrap_or_else(|| existing.title.clone()),
            content: self
                .content
                .clone()
                .unwrap_or_else(|| existing.content.clone()),
            categories: self
                .categories
                .clone()
                .unwrap_or_else(|| existing.categories.clone()),
            publication_date: self
                .publication_date
                .clone()
                .unwrap_or_else(|| existing.publication_date.clone()),
            updated_at: existing.updated_at.clone(),
        }
    }

    /// Returns whether the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.content.is_none()
            && self.categories.is_none()
            && self.publication_date.is_none()
    }
}
