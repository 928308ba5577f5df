//! Shared HTTP adapter state.
//!
//! Handlers receive this bundle via `actix_web::web::Data`, so they depend
//! only on the driving ports and remain testable against any adapter
//! combination.

use std::sync::Arc;

use crate::domain::ports::{BookingLifecycle, CredentialGate, SlotLifecycle};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Credential gate guarding every endpoint.
    pub gate: Arc<dyn CredentialGate>,
    /// Booking lifecycle use-cases.
    pub bookings: Arc<dyn BookingLifecycle>,
    /// Slot lifecycle use-cases.
    pub slots: Arc<dyn SlotLifecycle>,
}

impl HttpState {
    /// Bundle the given port implementations.
    pub fn new(
        gate: Arc<dyn CredentialGate>,
        bookings: Arc<dyn BookingLifecycle>,
        slots: Arc<dyn SlotLifecycle>,
    ) -> Self {
        Self {
            gate,
            bookings,
            slots,
        }
    }
}
