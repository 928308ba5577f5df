//! Driven port for booking persistence.

use async_trait::async_trait;

use crate::domain::booking::{Booking, BookingChanges};
use crate::domain::user::LoginId;

use super::StoreError;

/// Per-document persistence operations for bookings.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Fetch a booking matching both identifier and owning login.
    ///
    /// Ownership scoping happens in the filter, so cross-user lookups are
    /// indistinguishable from missing records.
    async fn find_for_login(
        &self,
        login: &LoginId,
        id: &str,
    ) -> Result<Option<Booking>, StoreError>;

    /// Fetch the booking a login holds for a date, if any.
    async fn find_by_login_and_date(
        &self,
        login: &LoginId,
        date: &str,
    ) -> Result<Option<Booking>, StoreError>;

    /// Fetch any booking referencing a date, regardless of owner. Used by
    /// the slot deletion guard.
    async fn find_by_date(&self, date: &str) -> Result<Option<Booking>, StoreError>;

    /// List every booking owned by a login, in insertion order.
    async fn list_for_login(&self, login: &LoginId) -> Result<Vec<Booking>, StoreError>;

    /// Insert a new booking record.
    async fn insert(&self, booking: &Booking) -> Result<(), StoreError>;

    /// Apply field changes to the booking matching both identifier and
    /// owning login. Returns whether any field actually changed.
    async fn update_scoped(
        &self,
        login: &LoginId,
        id: &str,
        changes: &BookingChanges,
    ) -> Result<bool, StoreError>;

    /// Delete the booking with the given identifier, reporting whether a
    /// record was removed.
    async fn delete_by_id(&self, id: &str) -> Result<bool, StoreError>;

    /// Fetch the most recently created booking, for identifier allocation.
    async fn find_latest(&self) -> Result<Option<Booking>, StoreError>;
}
