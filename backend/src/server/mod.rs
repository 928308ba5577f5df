//! HTTP server assembly: state construction, route mounting, bootstrap.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::{App, HttpServer, Scope, web};
use tracing::info;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::ports::StoreCredentialGate;
use crate::domain::{BookingService, Error, SlotService, User};
use crate::inbound::http::health::{HealthState, live, ready};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::{bookings, slots};
use crate::middleware::Trace;
use crate::outbound::persistence::{MemoryBookingStore, MemorySlotStore, MemoryUserStore};

/// Build handler state over fresh in-memory stores seeded with `users`.
pub fn memory_state(users: Vec<User>) -> HttpState {
    let user_store = Arc::new(MemoryUserStore::seeded(users));
    let slot_store = Arc::new(MemorySlotStore::new());
    let booking_store = Arc::new(MemoryBookingStore::new());

    HttpState::new(
        Arc::new(StoreCredentialGate::new(Arc::clone(&user_store))),
        Arc::new(BookingService::new(
            user_store,
            Arc::clone(&booking_store),
            Arc::clone(&slot_store),
        )),
        Arc::new(SlotService::new(slot_store, booking_store)),
    )
}

/// JSON extractor configuration mapping malformed or missing bodies onto the
/// shared error schema instead of Actix's plain-text default.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "rejecting malformed JSON body");
        Error::invalid_request("Bad Request").into()
    })
}

/// The `/api` scope with every booking and slot route mounted.
pub fn api_scope(state: HttpState) -> Scope {
    web::scope("/api")
        .app_data(web::Data::new(state))
        .app_data(json_config())
        .service(bookings::list_bookings)
        .service(bookings::get_booking)
        .service(bookings::create_booking)
        .service(bookings::update_booking)
        .service(bookings::patch_booking)
        .service(bookings::delete_booking)
        .service(slots::list_slots)
        .service(slots::get_slot)
        .service(slots::create_slot)
        .service(slots::update_slot)
        .service(slots::delete_slot)
}

/// Run the HTTP server until shutdown.
///
/// Swagger UI is mounted at `/docs` in debug builds only.
pub async fn run(config: ServerConfig, state: HttpState) -> std::io::Result<()> {
    let health_state = web::Data::new(HealthState::new());
    let server_health_state = health_state.clone();

    let server = HttpServer::new(move || {
        let app = App::new()
            .app_data(server_health_state.clone())
            .wrap(Trace)
            .service(api_scope(state.clone()))
            .service(ready)
            .service(live);

        #[cfg(debug_assertions)]
        let app = app.service(
            SwaggerUi::new("/docs/{_:.*}")
                .url("/api-docs/openapi.json", crate::doc::ApiDoc::openapi()),
        );

        app
    })
    .bind(config.bind_addr)?;

    info!(addr = %config.bind_addr, "server listening");
    health_state.mark_ready();
    server.run().await
}
