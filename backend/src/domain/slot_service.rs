//! Slot lifecycle service.
//!
//! Orchestrates date validation, duplicate-date prevention, identifier
//! allocation, and the deletion guard for slots. Duplicate checks apply
//! regardless of the existing slot's status.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::booking::Booking;
use crate::domain::ports::{BookingStore, SlotLifecycle, SlotStore, StoreError};
use crate::domain::sequence::{next_in_sequence, SLOT_ID_PREFIX};
use crate::domain::slot::{Slot, SlotChanges, SlotDate, SlotDateValidationError, SlotStatus, SlotView};

/// Fields accepted when creating a slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotDraft {
    /// Requested calendar date; validated for the canonical length.
    pub date: String,
    /// Initial remaining capacity. Non-negative by construction; only the
    /// capacity ledger may later drive the stored count below zero.
    pub count: u32,
    /// Requested status; defaults to available.
    pub status: Option<SlotStatus>,
    /// Requested active flag; defaults to true.
    pub active: Option<bool>,
}

/// Expected domain conditions and failures raised by slot operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotError {
    /// The requested date is not a canonical date string.
    #[error(transparent)]
    InvalidSlotDate(#[from] SlotDateValidationError),
    /// A slot already exists for the requested date.
    #[error("slot already exists for {0}")]
    SlotAlreadyExists(String),
    /// No slot matches the identifier.
    #[error("slot not found: {0}")]
    SlotNotFound(String),
    /// Bookings still reference the slot's date; deletion refused.
    #[error("bookings still reference slot date {0}")]
    BookingExists(String),
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Slot lifecycle service over injected store ports.
#[derive(Debug)]
pub struct SlotService<S, B> {
    slots: Arc<S>,
    bookings: Arc<B>,
}

impl<S, B> Clone for SlotService<S, B> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
            bookings: Arc::clone(&self.bookings),
        }
    }
}

impl<S, B> SlotService<S, B> {
    /// Create a service over the given stores.
    pub fn new(slots: Arc<S>, bookings: Arc<B>) -> Self {
        Self { slots, bookings }
    }
}

#[async_trait]
impl<S, B> SlotLifecycle for SlotService<S, B>
where
    S: SlotStore,
    B: BookingStore,
{
    async fn create(&self, draft: SlotDraft) -> Result<SlotView, SlotError> {
        let date = SlotDate::new(draft.date)?;

        if self.slots.find_by_date(date.as_ref()).await?.is_some() {
            return Err(SlotError::SlotAlreadyExists(date.to_string()));
        }

        let latest = self.slots.find_latest().await?;
        let id = next_in_sequence(SLOT_ID_PREFIX, latest.as_ref().map(|s| s.id.as_str()));

        let slot = Slot::new(
            id,
            date,
            i64::from(draft.count),
            draft.status.unwrap_or_default(),
            draft.active.unwrap_or(true),
        );
        self.slots.insert(&slot).await?;

        debug!(slot_id = %slot.id, date = %slot.date, count = slot.count, "slot created");
        Ok(SlotView::from(&slot))
    }

    async fn get(&self, id: &str) -> Result<SlotView, SlotError> {
        let slot = self
            .slots
            .find_by_id(id)
            .await?
            .ok_or_else(|| SlotError::SlotNotFound(id.to_owned()))?;
        Ok(SlotView::from(&slot))
    }

    async fn list(&self) -> Result<Vec<SlotView>, SlotError> {
        let slots = self.slots.list().await?;
        Ok(slots.iter().map(SlotView::from).collect())
    }

    async fn update(&self, id: &str, changes: SlotChanges) -> Result<bool, SlotError> {
        if self.slots.find_by_id(id).await?.is_none() {
            return Err(SlotError::SlotNotFound(id.to_owned()));
        }
        Ok(self.slots.update(id, &changes).await?)
    }

    async fn delete(&self, id: &str) -> Result<(), SlotError> {
        let slot = self
            .slots
            .find_by_id(id)
            .await?
            .ok_or_else(|| SlotError::SlotNotFound(id.to_owned()))?;

        let referencing: Option<Booking> = self.bookings.find_by_date(&slot.date).await?;
        if referencing.is_some() {
            return Err(SlotError::BookingExists(slot.date));
        }

        self.slots.delete_by_id(id).await?;
        debug!(slot_id = %id, "slot deleted");
        Ok(())
    }
}
