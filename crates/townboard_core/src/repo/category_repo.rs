//! Category catalog contract and document-store implementation.
//!
//! # Responsibility
//! - Provide list/upsert APIs over the persisted category collection.
//! - Serve the id-to-title index used for display-label lookups.
//!
//! # Invariants
//! - Listing preserves stored (insertion) order; no implicit sort.
//! - Upsert replaces in place on id match, preserving position, else
//!   appends; the full collection is rewritten either way.
//! - There is no delete in the current scope.

use std::collections::HashMap;

use log::{info, warn};
use serde_json::Value;

use crate::model::category::Category;
use crate::repo::CatalogResult;
use crate::store::{DocumentStore, StoreError};

/// Storage key holding the full category collection.
pub const CATEGORIES_KEY: &str = "mod:announcements:categories";

/// Catalog interface for category operations.
pub trait CategoryRepository {
    /// Returns all categories in stored order.
    fn list(&self) -> CatalogResult<Vec<Category>>;
    /// Replaces the category with the same id, or appends a new one.
    fn upsert(&self, category: Category) -> CatalogResult<()>;
    /// Returns an id-to-title map for label rendering.
    ///
    /// Announcements may carry ids missing from this map; callers fall back
    /// to the raw id as the label.
    fn title_index(&self) -> CatalogResult<HashMap<String, String>>;
}

/// Category catalog over an injected document store.
pub struct StoreCategoryRepository<'s, S: DocumentStore> {
    store: &'s S,
}

impl<'s, S: DocumentStore> StoreCategoryRepository<'s, S> {
    pub fn new(store: &'s S) -> Self {
        Self { store }
    }

    fn persist(&self, all: &[Category]) -> CatalogResult<()> {
        let document = serde_json::to_value(all).map_err(StoreError::from)?;
        self.store.write(CATEGORIES_KEY, &document)?;
        Ok(())
    }
}

impl<S: DocumentStore> CategoryRepository for StoreCategoryRepository<'_, S> {
    fn list(&self) -> CatalogResult<Vec<Category>> {
        Ok(read_collection(self.store))
    }

    fn upsert(&self, category: Category) -> CatalogResult<()> {
        let mut all = read_collection(self.store);
        match all.iter().position(|existing| existing.id == category.id) {
            Some(index) => {
                info!(
                    "event=category_upsert module=repo status=ok id={} mode=replace",
                    category.id
                );
                all[index] = category;
            }
            None => {
                info!(
                    "event=category_upsert module=repo status=ok id={} mode=append",
                    category.id
                );
                all.push(category);
            }
        }
        self.persist(&all)
    }

    fn title_index(&self) -> CatalogResult<HashMap<String, String>> {
        let index = read_collection(self.store)
            .into_iter()
            .map(|category| (category.id, category.title))
            .collect();
        Ok(index)
    }
}

fn read_collection<S: DocumentStore>(store: &S) -> Vec<Category> {
    decode_collection(store.read(CATEGORIES_KEY))
}

fn decode_collection(document: Option<Value>) -> Vec<Category> {
    let Some(document) = document else {
        return Vec::new();
    };
    match serde_json::from_value(document) {
        Ok(records) => records,
        Err(err) => {
            warn!("event=category_list module=repo status=corrupt error={err}");
            Vec::new()
        }
    }
}
