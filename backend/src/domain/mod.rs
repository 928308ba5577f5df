//! Domain entities, lifecycle services, and ports.
//!
//! Everything here is transport-agnostic: inbound adapters translate the
//! typed service errors into HTTP responses, and outbound adapters implement
//! the store ports. Invariants and serialisation contracts live in each
//! type's Rustdoc.

pub mod booking;
pub mod booking_service;
pub mod capacity;
pub mod error;
pub mod ports;
pub mod sequence;
pub mod slot;
pub mod slot_service;
pub mod user;

pub use self::booking::{Booking, BookingChanges, BookingDraft, BookingStatus, BookingView};
pub use self::booking_service::{BookingError, BookingService};
pub use self::capacity::{CapacityLedger, LedgerError};
pub use self::error::{Error, ErrorCode};
pub use self::slot::{Slot, SlotChanges, SlotDate, SlotStatus, SlotView, SLOT_DATE_LEN};
pub use self::slot_service::{SlotDraft, SlotError, SlotService};
pub use self::user::{LoginId, User, UserRole};
