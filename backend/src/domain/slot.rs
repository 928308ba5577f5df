//! Slot records: dated, capacity-limited booking windows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Canonical slot date length (`YYYY-MM-DD`).
pub const SLOT_DATE_LEN: usize = 10;

/// Validation errors returned by [`SlotDate::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SlotDateValidationError {
    /// The date string is not exactly [`SLOT_DATE_LEN`] characters.
    #[error("slot date must be a non-empty string of exactly {SLOT_DATE_LEN} characters")]
    InvalidLength,
}

/// Calendar date a slot is bookable on.
///
/// Validated only for the canonical string length; the relation to bookings
/// is resolved by exact string equality, so no further parsing happens here.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotDate(String);

impl SlotDate {
    /// Validate and construct a [`SlotDate`].
    ///
    /// # Examples
    /// ```
    /// use backend::domain::SlotDate;
    ///
    /// assert!(SlotDate::new("2025-05-23").is_ok());
    /// assert!(SlotDate::new("23-May-25").is_err());
    /// ```
    pub fn new(raw: impl Into<String>) -> Result<Self, SlotDateValidationError> {
        let raw = raw.into();
        if raw.is_empty() || raw.chars().count() != SLOT_DATE_LEN {
            return Err(SlotDateValidationError::InvalidLength);
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for SlotDate {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl std::fmt::Display for SlotDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<SlotDate> for String {
    fn from(value: SlotDate) -> Self {
        value.0
    }
}

impl TryFrom<String> for SlotDate {
    type Error = SlotDateValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Slot lifecycle status. Stored as data; the services impose no transition
/// rules beyond the documented deletion guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum SlotStatus {
    /// Open for booking.
    #[default]
    Available,
    /// Fully booked.
    Booked,
    /// Withdrawn from booking.
    Cancelled,
}

/// Stored slot record.
#[derive(Debug, Clone, PartialEq)]
pub struct Slot {
    /// Human-readable identifier (`SLT` + zero-padded sequence).
    pub id: String,
    /// Calendar date; at most one slot exists per date.
    pub date: String,
    /// Lifecycle status.
    pub status: SlotStatus,
    /// Remaining capacity. Non-negative at creation; the capacity ledger may
    /// drive it negative (see the ledger documentation).
    pub count: i64,
    /// Soft-deletion flag carried on every record.
    pub active: bool,
    /// Creation timestamp; identifier allocation reads the newest record.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Slot {
    /// Build a new slot record stamped with the current time.
    pub fn new(id: String, date: SlotDate, count: i64, status: SlotStatus, active: bool) -> Self {
        let now = Utc::now();
        Self {
            id,
            date: date.into(),
            status,
            count,
            active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply field changes, returning whether anything was modified.
    ///
    /// Bumps `updated_at` only when a field actually changed, so a no-op
    /// update reports `false` to callers.
    pub fn apply(&mut self, changes: &SlotChanges) -> bool {
        let mut changed = false;
        if let Some(date) = changes.date.as_deref() {
            if !date.is_empty() && self.date != date {
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
        if let Some(count) = changes.count {
            if self.count != count {
                self.count = count;
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

/// Field updates accepted by the slot update operation.
///
/// Absent fields are left untouched. The update path performs no date
/// re-validation or uniqueness check; that matches the observed behaviour of
/// the system this one replaces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SlotChanges {
    /// Replacement date string; empty strings are ignored.
    pub date: Option<String>,
    /// Replacement status.
    pub status: Option<SlotStatus>,
    /// Replacement capacity count.
    pub count: Option<i64>,
    /// Replacement active flag.
    pub active: Option<bool>,
}

/// Public projection of a slot returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SlotView {
    /// Human-readable slot identifier.
    #[serde(rename = "slotid")]
    #[schema(example = "SLT0001")]
    pub slot_id: String,
    /// Calendar date.
    #[serde(rename = "slotdate")]
    #[schema(example = "2025-05-23")]
    pub slot_date: String,
    /// Remaining capacity.
    #[serde(rename = "slotcount")]
    pub slot_count: i64,
    /// Lifecycle status.
    #[serde(rename = "slotstatus")]
    pub slot_status: SlotStatus,
}

impl From<&Slot> for SlotView {
    fn from(slot: &Slot) -> Self {
        Self {
            slot_id: slot.id.clone(),
            slot_date: slot.date.clone(),
            slot_count: slot.count,
            slot_status: slot.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample_slot() -> Slot {
        Slot::new(
            "SLT0001".to_owned(),
            SlotDate::new("2025-05-23").expect("valid date"),
            5,
            SlotStatus::default(),
            true,
        )
    }

    #[rstest]
    #[case("2025-05-23", true)]
    #[case("23-May-25", false)]
    #[case("", false)]
    #[case("2025-5-2", false)]
    fn slot_date_enforces_canonical_length(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(SlotDate::new(raw).is_ok(), ok);
    }

    #[test]
    fn apply_reports_no_change_for_identical_fields() {
        let mut slot = sample_slot();
        let before = slot.updated_at;
        let changed = slot.apply(&SlotChanges {
            count: Some(5),
            ..SlotChanges::default()
        });
        assert!(!changed);
        assert_eq!(slot.updated_at, before);
    }

    #[test]
    fn apply_updates_fields_and_timestamp() {
        let mut slot = sample_slot();
        let changed = slot.apply(&SlotChanges {
            status: Some(SlotStatus::Booked),
            count: Some(0),
            ..SlotChanges::default()
        });
        assert!(changed);
        assert_eq!(slot.status, SlotStatus::Booked);
        assert_eq!(slot.count, 0);
    }

    #[test]
    fn apply_ignores_empty_date() {
        let mut slot = sample_slot();
        let changed = slot.apply(&SlotChanges {
            date: Some(String::new()),
            ..SlotChanges::default()
        });
        assert!(!changed);
        assert_eq!(slot.date, "2025-05-23");
    }

    #[test]
    fn view_uses_wire_field_names() {
        let view = SlotView::from(&sample_slot());
        let value = serde_json::to_value(&view).expect("serialise view");
        assert_eq!(value.get("slotid"), Some(&serde_json::json!("SLT0001")));
        assert_eq!(value.get("slotdate"), Some(&serde_json::json!("2025-05-23")));
        assert_eq!(value.get("slotcount"), Some(&serde_json::json!(5)));
        assert_eq!(value.get("slotstatus"), Some(&serde_json::json!("available")));
    }
}
