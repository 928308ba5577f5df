//! Domain ports for the hexagonal boundary.
//!
//! Driven ports describe the per-entity document-store capability set the
//! lifecycle services are written against (find-one, find-many, insert,
//! update, delete, find-most-recent-by-creation). Driving ports expose the
//! lifecycle services and the credential gate to inbound adapters. Adapters
//! are substituted freely in tests; the store ports carry `mockall` mocks.

mod booking_lifecycle;
mod booking_store;
mod credential_gate;
mod slot_lifecycle;
mod slot_store;
mod user_store;

pub use booking_lifecycle::BookingLifecycle;
#[cfg(test)]
pub use booking_store::MockBookingStore;
pub use booking_store::BookingStore;
pub use credential_gate::{CredentialGate, GateError, StoreCredentialGate};
pub use slot_lifecycle::SlotLifecycle;
#[cfg(test)]
pub use slot_store::MockSlotStore;
pub use slot_store::SlotStore;
#[cfg(test)]
pub use user_store::MockUserStore;
pub use user_store::UserStore;

/// Failure raised by store adapters.
///
/// Expected domain conditions (missing records, duplicates) are modelled as
/// `Option`/`bool` results on the port methods; this error covers genuine
/// adapter failures only, which services propagate unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("store connection failed: {message}")]
    Connection {
        /// Adapter-supplied context.
        message: String,
    },
    /// A query or mutation failed during execution.
    #[error("store query failed: {message}")]
    Query {
        /// Adapter-supplied context.
        message: String,
    },
}

impl StoreError {
    /// Build a [`StoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`StoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}
