//! Booking records: one user's reservation against a slot's date.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::user::{LoginId, User};

/// Booking lifecycle status. Stored as data; no transition engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    /// Awaiting confirmation.
    Pending,
    /// Confirmed reservation.
    #[default]
    Confirmed,
    /// Cancelled reservation.
    Cancelled,
}

/// Stored booking record.
///
/// The relation to the slot is a soft date reference: resolved by string
/// equality against the slot's date, never by stored identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Human-readable identifier (`BKG` + zero-padded sequence).
    pub id: String,
    /// Owning user's internal reference.
    pub user_ref: Uuid,
    /// Owning user's login identifier; lookups are scoped by it.
    pub user_login: LoginId,
    /// Reserved date; must match an existing slot's date at creation.
    pub date: String,
    /// Lifecycle status.
    pub status: BookingStatus,
    /// Soft-deletion flag carried on every record.
    pub active: bool,
    /// Creation timestamp; identifier allocation reads the newest record.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    /// Build a new booking for `owner` stamped with the current time.
    pub fn new(id: String, owner: &User, date: impl Into<String>, status: BookingStatus) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_ref: owner.id,
            user_login: owner.login.clone(),
            date: date.into(),
            status,
            active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply field changes, returning whether anything was modified.
    pub fn apply(&mut self, changes: &BookingChanges) -> bool {
        let mut changed = false;
        if let Some(date) = changes.effective_date() {
            if self.date != date {
                self.date = date.to_owned();
                changed = true;
            }
        }
        if let Some(status) = changes.status {
            if self.status != status {
                self.status = status;
                changed = true;
            }
        }
        if let Some(active) = changes.active {
            if self.active != active {
                self.active = active;
                changed = true;
            }
        }
        if changed {
            self.updated_at = Utc::now();
        }
        changed
    }
}

/// Field updates accepted by the booking update and patch operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingChanges {
    /// Replacement date; triggers slot-existence validation when non-empty.
    pub date: Option<String>,
    /// Replacement status.
    pub status: Option<BookingStatus>,
    /// Replacement active flag.
    pub active: Option<bool>,
}

impl BookingChanges {
    /// The date change to act on, if any. Empty strings are treated as "no
    /// date change": they trigger neither slot validation nor a field write.
    pub fn effective_date(&self) -> Option<&str> {
        self.date.as_deref().filter(|date| !date.is_empty())
    }
}

/// Fields accepted when creating a booking.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingDraft {
    /// Requested date; must resolve to an existing slot.
    pub date: String,
    /// Requested status; defaults to [`BookingStatus::Confirmed`].
    pub status: Option<BookingStatus>,
}

/// Public projection of a booking returned by the API. Internal identifiers
/// (the owning user's reference) are never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookingView {
    /// Human-readable booking identifier.
    #[serde(rename = "bookingid")]
    #[schema(example = "BKG0001")]
    pub booking_id: String,
    /// Owning user's login identifier.
    #[serde(rename = "userloginid")]
    #[schema(example = "alice")]
    pub user_login: String,
    /// Reserved date.
    #[serde(rename = "bookingdate")]
    #[schema(example = "2025-05-23")]
    pub booking_date: String,
    /// Lifecycle status.
    pub status: BookingStatus,
}

impl From<&Booking> for BookingView {
    fn from(booking: &Booking) -> Self {
        Self {
            booking_id: booking.id.clone(),
            user_login: booking.user_login.to_string(),
            booking_date: booking.date.clone(),
            status: booking.status,
        }
    }
}
