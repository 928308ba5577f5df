//! Booking backend library modules.
//!
//! Hexagonal layout: `domain` holds the entities, services, and ports;
//! `inbound` and `outbound` hold the HTTP and persistence adapters;
//! `server` wires everything together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
/// Request-scoped trace middleware.
pub use middleware::Trace;
