//! Capacity ledger keeping a slot's remaining count in step with bookings.
//!
//! The ledger reads the whole slot, adjusts the count in memory, and writes
//! the record back; there is no atomic increment primitive, so concurrent
//! reserve/release calls on the same date can race and lose an adjustment.
//! That relaxed model is carried over deliberately from the system this one
//! replaces, together with two more documented gaps: `reserve` applies no
//! positive-capacity precondition (the count may go negative), and `release`
//! is a silent no-op when the slot has been deleted in the interim.

use std::sync::Arc;

use crate::domain::ports::{SlotStore, StoreError};

/// Failure raised by ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LedgerError {
    /// No slot exists for the date being reserved.
    #[error("no slot exists for {0}")]
    SlotNotFound(String),
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Adjusts a slot's remaining count as bookings are created and removed.
#[derive(Debug)]
pub struct CapacityLedger<S> {
    slots: Arc<S>,
}

impl<S> Clone for CapacityLedger<S> {
    fn clone(&self) -> Self {
        Self {
            slots: Arc::clone(&self.slots),
        }
    }
}

impl<S> CapacityLedger<S> {
    /// Create a ledger over the given slot store.
    pub fn new(slots: Arc<S>) -> Self {
        Self { slots }
    }
}

impl<S: SlotStore> CapacityLedger<S> {
    /// Consume one unit of the slot for `date`.
    ///
    /// Fails with [`LedgerError::SlotNotFound`] when no slot exists for the
    /// date. The decrement is applied unconditionally.
    pub async fn reserve(&self, date: &str) -> Result<(), LedgerError> {
        let Some(mut slot) = self.slots.find_by_date(date).await? else {
            return Err(LedgerError::SlotNotFound(date.to_owned()));
        };
        slot.count -= 1;
        self.slots.replace_by_date(&slot).await?;
        Ok(())
    }

    /// Return one unit to the slot for `date`.
    ///
    /// A missing slot makes this a no-op: the booking being deleted may
    /// outlive its slot, and nothing is persisted in that case.
    pub async fn release(&self, date: &str) -> Result<(), LedgerError> {
        let Some(mut slot) = self.slots.find_by_date(date).await? else {
            return Ok(());
        };
        slot.count += 1;
        self.slots.replace_by_date(&slot).await?;
        Ok(())
    }
}
