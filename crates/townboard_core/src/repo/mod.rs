//! Catalog layer: CRUD contracts over the document store.
//!
//! # Responsibility
//! - Define use-case oriented catalog contracts for announcements and
//!   categories.
//! - Isolate read-modify-write document handling from service orchestration.
//!
//! # Invariants
//! - Catalogs persist the full collection on every mutation.
//! - `NotFound` is raised only by announcement update on a missing id; read
//!   paths surface absence as empty collections or `None`.

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::store::StoreError;

pub mod announcement_repo;
pub mod category_repo;

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog-level failure for announcement and category operations.
#[derive(Debug)]
pub enum CatalogError {
    /// Update targeted an id that is not in the catalog.
    NotFound(String),
    /// The storage medium rejected a write.
    Store(StoreError),
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "announcement not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for CatalogError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}
