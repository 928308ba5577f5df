//! Driving port for slot CRUD use-cases.

use async_trait::async_trait;

use crate::domain::slot::{SlotChanges, SlotView};
use crate::domain::slot_service::{SlotDraft, SlotError};

/// Slot lifecycle operations exposed to inbound adapters.
#[async_trait]
pub trait SlotLifecycle: Send + Sync {
    /// Create a slot and return its projection.
    async fn create(&self, draft: SlotDraft) -> Result<SlotView, SlotError>;

    /// Fetch a slot by identifier.
    async fn get(&self, id: &str) -> Result<SlotView, SlotError>;

    /// List every slot.
    async fn list(&self) -> Result<Vec<SlotView>, SlotError>;

    /// Apply field updates; returns whether anything changed.
    async fn update(&self, id: &str, changes: SlotChanges) -> Result<bool, SlotError>;

    /// Delete a slot unless bookings still reference its date.
    async fn delete(&self, id: &str) -> Result<(), SlotError>;
}
