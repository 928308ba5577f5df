//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the specification for the REST surface: booking and
//! slot routes, health probes, and the shared schemas. The document backs
//! Swagger UI in debug builds and is exported via `cargo run --bin
//! openapi-dump` for external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{BookingStatus, BookingView, Error, ErrorCode, SlotStatus, SlotView};
use crate::inbound::http::bookings::{CreateBookingRequest, MessageResponse, UpdateBookingRequest};
use crate::inbound::http::slots::{CreateSlotRequest, UpdateSlotRequest};

/// Register the header-credential security schemes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "LoginId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "loginid",
                "Login identifier of the calling user.",
            ))),
        );
        components.add_security_scheme(
            "Passkey",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "passkey",
                "Shared secret matching the login identifier.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Booking backend API",
        description = "HTTP interface for managing appointment slots and bookings."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("LoginId" = [], "Passkey" = [])),
    paths(
        crate::inbound::http::bookings::list_bookings,
        crate::inbound::http::bookings::get_booking,
        crate::inbound::http::bookings::create_booking,
        crate::inbound::http::bookings::update_booking,
        crate::inbound::http::bookings::patch_booking,
        crate::inbound::http::bookings::delete_booking,
        crate::inbound::http::slots::list_slots,
        crate::inbound::http::slots::get_slot,
        crate::inbound::http::slots::create_slot,
        crate::inbound::http::slots::update_slot,
        crate::inbound::http::slots::delete_slot,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BookingView,
        BookingStatus,
        CreateBookingRequest,
        UpdateBookingRequest,
        SlotView,
        SlotStatus,
        CreateSlotRequest,
        UpdateSlotRequest,
        MessageResponse,
        Error,
        ErrorCode,
    )),
    tags(
        (name = "bookings", description = "Reservations against slot capacity"),
        (name = "slots", description = "Administration of bookable slots"),
        (name = "health", description = "Liveness and readiness probes")
    )
)]
pub struct ApiDoc;
