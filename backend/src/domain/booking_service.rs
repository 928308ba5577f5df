//! Booking lifecycle service.
//!
//! Orchestrates user validation, duplicate prevention, slot existence checks,
//! identifier allocation, and capacity accounting for booking CRUD. The
//! check-then-write sequences here are not transactional: concurrent requests
//! against the same date or identifier sequence can interleave. That relaxed
//! model is preserved from the system this one replaces and is documented in
//! the design notes rather than silently tightened.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::booking::{Booking, BookingChanges, BookingDraft, BookingView};
use crate::domain::capacity::{CapacityLedger, LedgerError};
use crate::domain::ports::{BookingLifecycle, BookingStore, SlotStore, StoreError, UserStore};
use crate::domain::sequence::{next_in_sequence, BOOKING_ID_PREFIX};
use crate::domain::user::LoginId;

/// Expected domain conditions and failures raised by booking operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingError {
    /// The calling login does not resolve to an existing active user.
    #[error("user not found: {0}")]
    UserNotFound(String),
    /// The login already holds a booking for the requested date.
    #[error("booking already exists for {date}")]
    BookingAlreadyExists {
        /// The contested date.
        date: String,
    },
    /// No slot exists for the requested date.
    #[error("no slot exists for {0}")]
    SlotNotFound(String),
    /// No booking matches both identifier and owning login.
    #[error("booking not found: {0}")]
    BookingNotFound(String),
    /// The underlying store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<LedgerError> for BookingError {
    fn from(error: LedgerError) -> Self {
        match error {
            LedgerError::SlotNotFound(date) => Self::SlotNotFound(date),
            LedgerError::Store(err) => Self::Store(err),
        }
    }
}

/// Booking lifecycle service over injected store ports.
#[derive(Debug)]
pub struct BookingService<U, B, S> {
    users: Arc<U>,
    bookings: Arc<B>,
    slots: Arc<S>,
    ledger: CapacityLedger<S>,
}

impl<U, B, S> Clone for BookingService<U, B, S> {
    fn clone(&self) -> Self {
        Self {
            users: Arc::clone(&self.users),
            bookings: Arc::clone(&self.bookings),
            slots: Arc::clone(&self.slots),
            ledger: self.ledger.clone(),
        }
    }
}

impl<U, B, S> BookingService<U, B, S> {
    /// Create a service over the given stores.
    pub fn new(users: Arc<U>, bookings: Arc<B>, slots: Arc<S>) -> Self {
        let ledger = CapacityLedger::new(Arc::clone(&slots));
        Self {
            users,
            bookings,
            slots,
            ledger,
        }
    }
}

impl<U, B, S> BookingService<U, B, S>
where
    U: UserStore,
    B: BookingStore,
    S: SlotStore,
{
    /// Validate the date change carried by `changes`, if any: a non-empty
    /// replacement date must resolve to an existing slot.
    async fn validate_date_change(&self, changes: &BookingChanges) -> Result<(), BookingError> {
        if let Some(date) = changes.effective_date() {
            if self.slots.find_by_date(date).await?.is_none() {
                return Err(BookingError::SlotNotFound(date.to_owned()));
            }
        }
        Ok(())
    }

    /// Resolve a booking by identifier scoped to its owning login.
    async fn resolve_owned(&self, login: &LoginId, id: &str) -> Result<Booking, BookingError> {
        self.bookings
            .find_for_login(login, id)
            .await?
            .ok_or_else(|| BookingError::BookingNotFound(id.to_owned()))
    }

    /// Shared body of `update` and `patch`: both resolve the booking by
    /// (identifier, login), validate any date change against the slots, and
    /// apply the write scoped by both identifier and login.
    async fn apply_changes(
        &self,
        login: &LoginId,
        id: &str,
        changes: BookingChanges,
    ) -> Result<bool, BookingError> {
        self.resolve_owned(login, id).await?;
        self.validate_date_change(&changes).await?;
        Ok(self.bookings.update_scoped(login, id, &changes).await?)
    }
}

#[async_trait]
impl<U, B, S> BookingLifecycle for BookingService<U, B, S>
where
    U: UserStore,
    B: BookingStore,
    S: SlotStore,
{
    async fn create(
        &self,
        login: &LoginId,
        draft: BookingDraft,
    ) -> Result<BookingView, BookingError> {
        let user = self
            .users
            .find_by_login(login)
            .await?
            .filter(|user| user.active)
            .ok_or_else(|| BookingError::UserNotFound(login.to_string()))?;

        if self
            .bookings
            .find_by_login_and_date(login, &draft.date)
            .await?
            .is_some()
        {
            return Err(BookingError::BookingAlreadyExists { date: draft.date });
        }

        if self.slots.find_by_date(&draft.date).await?.is_none() {
            return Err(BookingError::SlotNotFound(draft.date));
        }

        let latest = self.bookings.find_latest().await?;
        let id = next_in_sequence(BOOKING_ID_PREFIX, latest.as_ref().map(|b| b.id.as_str()));

        let booking = Booking::new(id, &user, draft.date, draft.status.unwrap_or_default());
        self.bookings.insert(&booking).await?;
        self.ledger.reserve(&booking.date).await?;

        debug!(booking_id = %booking.id, date = %booking.date, "booking created");
        Ok(BookingView::from(&booking))
    }

    async fn get(&self, login: &LoginId, id: &str) -> Result<BookingView, BookingError> {
        let booking = self.resolve_owned(login, id).await?;
        Ok(BookingView::from(&booking))
    }

    async fn list(&self, login: &LoginId) -> Result<Vec<BookingView>, BookingError> {
        let bookings = self.bookings.list_for_login(login).await?;
        Ok(bookings.iter().map(BookingView::from).collect())
    }

    async fn update(
        &self,
        login: &LoginId,
        id: &str,
        changes: BookingChanges,
    ) -> Result<bool, BookingError> {
        // Capacity is deliberately not re-adjusted when the date changes: the
        // old slot keeps its reservation and the new one gains none. Known
        // gap, carried over; see the design notes.
        self.apply_changes(login, id, changes).await
    }

    async fn patch(
        &self,
        login: &LoginId,
        id: &str,
        changes: BookingChanges,
    ) -> Result<bool, BookingError> {
        self.apply_changes(login, id, changes).await
    }

    async fn delete(&self, login: &LoginId, id: &str) -> Result<(), BookingError> {
        let booking = self.resolve_owned(login, id).await?;
        let slot = self.slots.find_by_date(&booking.date).await?;
        self.bookings.delete_by_id(&booking.id).await?;
        if slot.is_some() {
            self.ledger.release(&booking.date).await?;
        }
        debug!(booking_id = %booking.id, date = %booking.date, "booking deleted");
        Ok(())
    }
}
