//! Driving port for booking CRUD use-cases.

use async_trait::async_trait;

use crate::domain::booking::{BookingChanges, BookingDraft, BookingView};
use crate::domain::booking_service::BookingError;
use crate::domain::user::LoginId;

/// Booking lifecycle operations exposed to inbound adapters.
///
/// All expected domain conditions are named [`BookingError`] variants; only
/// store failures surface through the `Store` variant.
#[async_trait]
pub trait BookingLifecycle: Send + Sync {
    /// Create a booking for the calling login and return its projection.
    async fn create(
        &self,
        login: &LoginId,
        draft: BookingDraft,
    ) -> Result<BookingView, BookingError>;

    /// Fetch a booking owned by the calling login.
    async fn get(&self, login: &LoginId, id: &str) -> Result<BookingView, BookingError>;

    /// List the calling login's bookings.
    async fn list(&self, login: &LoginId) -> Result<Vec<BookingView>, BookingError>;

    /// Replace fields of a booking; returns whether anything changed.
    async fn update(
        &self,
        login: &LoginId,
        id: &str,
        changes: BookingChanges,
    ) -> Result<bool, BookingError>;

    /// Partially update a booking; returns whether anything changed.
    async fn patch(
        &self,
        login: &LoginId,
        id: &str,
        changes: BookingChanges,
    ) -> Result<bool, BookingError>;

    /// Delete a booking, releasing its slot capacity when the slot still
    /// exists.
    async fn delete(&self, login: &LoginId, id: &str) -> Result<(), BookingError>;
}
