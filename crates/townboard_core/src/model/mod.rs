//! Domain model for announcement and category records.
//!
//! # Responsibility
//! - Define the canonical record shapes persisted by the catalogs.
//! - Own the shallow-merge patch semantics, independent of storage.
//!
//! # Invariants
//! - Every announcement is identified by a stable string `id`.
//! - Wire field names are camelCase to match the persisted JSON layout.

pub mod announcement;
pub mod category;
