//! Driven port for slot persistence.

use async_trait::async_trait;

use crate::domain::slot::{Slot, SlotChanges};

use super::StoreError;

/// Per-document persistence operations for slots.
///
/// Single-document operations are atomic; nothing here spans documents, so
/// multi-step service flows remain unserialised by design.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SlotStore: Send + Sync {
    /// Fetch the slot for a calendar date, if any.
    async fn find_by_date(&self, date: &str) -> Result<Option<Slot>, StoreError>;

    /// Fetch a slot by its human-readable identifier.
    async fn find_by_id(&self, id: &str) -> Result<Option<Slot>, StoreError>;

    /// List every slot in insertion order.
    async fn list(&self) -> Result<Vec<Slot>, StoreError>;

    /// Insert a new slot record.
    async fn insert(&self, slot: &Slot) -> Result<(), StoreError>;

    /// Replace the whole record whose date matches `slot.date`.
    ///
    /// Returns whether a record was found and written; the capacity ledger
    /// relies on the silent `false` when the slot vanished in the interim.
    async fn replace_by_date(&self, slot: &Slot) -> Result<bool, StoreError>;

    /// Apply field changes to the slot with the given identifier.
    ///
    /// Returns whether any field actually changed.
    async fn update(&self, id: &str, changes: &SlotChanges) -> Result<bool, StoreError>;

    /// Delete the slot with the given identifier, reporting whether a record
    /// was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Fetch the most recently created slot, for identifier allocation.
    async fn find_latest(&self) -> Result<Option<Slot>, StoreError>;
}
