//! Category domain model.

use serde::{Deserialize, Serialize};

/// Display category for announcements.
///
/// Categories are append/update-only in the current scope; there is no
/// delete lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier, immutable after creation.
    pub id: String,
    /// Human-readable display label.
    pub title: String,
}

impl Category {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
