//! Booking API handlers.
//!
//! ```text
//! GET    /api/bookings
//! GET    /api/bookings/{id}
//! POST   /api/bookings
//! PUT    /api/bookings/{id}
//! PATCH  /api/bookings/{id}
//! DELETE /api/bookings/{id}
//! ```
//!
//! Every route requires the `loginid`/`passkey` header pair; bookings are
//! always scoped to the authenticated caller's login.

use actix_web::{HttpRequest, HttpResponse, delete, get, patch, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::booking_service::BookingError;
use crate::domain::{BookingChanges, BookingDraft, BookingStatus, BookingView, Error};
use crate::inbound::http::auth::require_user;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/bookings`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateBookingRequest {
    /// Date to reserve; must match an existing slot's date.
    #[serde(rename = "bookingdate")]
    #[schema(example = "2025-05-23")]
    pub booking_date: String,
    /// Initial status; defaults to `confirmed`.
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

/// Request body for `PUT`/`PATCH /api/bookings/{id}`. Absent fields are left
/// untouched; an empty date string is ignored.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateBookingRequest {
    /// Replacement date; must match an existing slot's date when non-empty.
    #[serde(rename = "bookingdate", default)]
    pub booking_date: Option<String>,
    /// Replacement status.
    #[serde(default)]
    pub status: Option<BookingStatus>,
    /// Replacement active flag.
    #[serde(default)]
    pub active: Option<bool>,
}

impl From<UpdateBookingRequest> for BookingChanges {
    fn from(value: UpdateBookingRequest) -> Self {
        Self {
            date: value.booking_date,
            status: value.status,
            active: value.active,
        }
    }
}

/// Message-only response body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Human-readable outcome description.
    pub message: String,
}

impl MessageResponse {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

fn outcome_code(err: &BookingError) -> &'static str {
    match err {
        BookingError::UserNotFound(_) => "user_not_found",
        BookingError::BookingAlreadyExists { .. } => "booking_already_exists",
        BookingError::SlotNotFound(_) => "slot_not_found",
        BookingError::BookingNotFound(_) => "booking_not_found",
        BookingError::Store(_) => "store_failure",
    }
}

fn create_rejection(err: BookingError) -> Error {
    match err {
        BookingError::Store(store) => Error::internal(store.to_string()),
        other => Error::invalid_request(format!("error creating booking: {other}"))
            .with_details(json!({ "code": outcome_code(&other) })),
    }
}

fn lookup_rejection(err: BookingError) -> Error {
    match err {
        BookingError::Store(store) => Error::internal(store.to_string()),
        other => {
            Error::not_found("Booking not found").with_details(json!({ "code": outcome_code(&other) }))
        }
    }
}

fn update_rejection(err: BookingError) -> Error {
    match err {
        BookingError::Store(store) => Error::internal(store.to_string()),
        BookingError::BookingNotFound(_) => Error::not_found("Booking not found")
            .with_details(json!({ "code": "booking_not_found" })),
        other => Error::not_found(format!("error updating booking: {other}"))
            .with_details(json!({ "code": outcome_code(&other) })),
    }
}

/// List the caller's bookings.
#[utoipa::path(
    get,
    path = "/api/bookings",
    tags = ["bookings"],
    operation_id = "listBookings",
    responses(
        (status = 200, description = "Bookings owned by the caller", body = [BookingView]),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "No bookings found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[get("/bookings")]
pub async fn list_bookings(
    req: HttpRequest,
    state: web::Data<HttpState>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&req, state.gate.as_ref()).await?;
    let bookings = state
        .bookings
        .list(&user.login)
        .await
        .map_err(lookup_rejection)?;
    if bookings.is_empty() {
        return Err(Error::not_found("Bookings not found"));
    }
    Ok(HttpResponse::Ok().json(bookings))
}

/// Fetch one of the caller's bookings by identifier.
#[utoipa::path(
    get,
    path = "/api/bookings/{id}",
    tags = ["bookings"],
    operation_id = "getBookingById",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking details", body = BookingView),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Booking not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[get("/bookings/{id}")]
pub async fn get_booking(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&req, state.gate.as_ref()).await?;
    let booking = state
        .bookings
        .get(&user.login, &path.into_inner())
        .await
        .map_err(lookup_rejection)?;
    Ok(HttpResponse::Ok().json(booking))
}

/// Create a booking for the caller.
#[utoipa::path(
    post,
    path = "/api/bookings",
    tags = ["bookings"],
    operation_id = "createBooking",
    request_body = CreateBookingRequest,
    responses(
        (status = 201, description = "Booking created", body = BookingView),
        (status = 400, description = "Invalid request or domain rejection", body = Error),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[post("/bookings")]
pub async fn create_booking(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<CreateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&req, state.gate.as_ref()).await?;
    let body = payload.into_inner();
    let draft = BookingDraft {
        date: body.booking_date,
        status: body.status,
    };
    let booking = state
        .bookings
        .create(&user.login, draft)
        .await
        .map_err(create_rejection)?;
    Ok(HttpResponse::Created().json(booking))
}

/// Replace fields of one of the caller's bookings.
#[utoipa::path(
    put,
    path = "/api/bookings/{id}",
    tags = ["bookings"],
    operation_id = "updateBooking",
    params(("id" = String, Path, description = "Booking identifier")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated (or nothing to update)", body = MessageResponse),
        (status = 400, description = "Malformed body", body = Error),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Booking or target slot not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[put("/bookings/{id}")]
pub async fn update_booking(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&req, state.gate.as_ref()).await?;
    let changed = state
        .bookings
        .update(&user.login, &path.into_inner(), payload.into_inner().into())
        .await
        .map_err(update_rejection)?;
    let message = if changed {
        "Booking updated successfully"
    } else {
        "Nothing to update"
    };
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

/// Partially update one of the caller's bookings.
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}",
    tags = ["bookings"],
    operation_id = "patchBooking",
    params(("id" = String, Path, description = "Booking identifier")),
    request_body = UpdateBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = MessageResponse),
        (status = 400, description = "Malformed body", body = Error),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Booking or target slot not found, or nothing to update", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[patch("/bookings/{id}")]
pub async fn patch_booking(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateBookingRequest>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&req, state.gate.as_ref()).await?;
    let changed = state
        .bookings
        .patch(&user.login, &path.into_inner(), payload.into_inner().into())
        .await
        .map_err(update_rejection)?;
    if !changed {
        // The partial-update path reports an untouched record as not-found
        // rather than success; carried over from the replaced system.
        return Err(Error::not_found("Nothing to update"));
    }
    Ok(HttpResponse::Ok().json(MessageResponse::new("Booking updated successfully")))
}

/// Delete one of the caller's bookings, returning its slot capacity.
#[utoipa::path(
    delete,
    path = "/api/bookings/{id}",
    tags = ["bookings"],
    operation_id = "deleteBooking",
    params(("id" = String, Path, description = "Booking identifier")),
    responses(
        (status = 200, description = "Booking deleted", body = MessageResponse),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Booking not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[delete("/bookings/{id}")]
pub async fn delete_booking(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let user = require_user(&req, state.gate.as_ref()).await?;
    state
        .bookings
        .delete(&user.login, &path.into_inner())
        .await
        .map_err(lookup_rejection)?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Booking deleted successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inbound::http::test_utils::{ADMIN, ALICE, BOB, authed, test_app};
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    async fn create_slot<S>(app: &S, date: &str, count: u32)
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let req = authed(actix_test::TestRequest::post().uri("/api/slots"), ADMIN)
            .set_json(json!({ "slotdate": date, "slotcount": count }))
            .to_request();
        let res = actix_test::call_service(app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    async fn slot_count<S>(app: &S, slot_id: &str) -> i64
    where
        S: actix_web::dev::Service<
                actix_http::Request,
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
            >,
    {
        let req = authed(
            actix_test::TestRequest::get().uri(&format!("/api/slots/{slot_id}")),
            ADMIN,
        )
        .to_request();
        let res = actix_test::call_service(app, req).await;
        assert!(res.status().is_success());
        let value: Value = actix_test::read_body_json(res).await;
        value
            .get("slotcount")
            .and_then(Value::as_i64)
            .expect("slot count")
    }

    #[actix_web::test]
    async fn rejects_requests_without_credentials() {
        let app = actix_test::init_service(test_app()).await;
        let res = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/bookings").to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Unauthorized")
        );
    }

    #[actix_web::test]
    async fn create_returns_projection_and_decrements_slot_capacity() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let req = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("bookingid").and_then(Value::as_str),
            Some("BKG0001")
        );
        assert_eq!(
            value.get("userloginid").and_then(Value::as_str),
            Some("alice")
        );
        assert_eq!(
            value.get("status").and_then(Value::as_str),
            Some("confirmed")
        );
        assert!(value.get("userid").is_none());

        assert_eq!(slot_count(&app, "SLT0001").await, 4);
    }

    #[actix_web::test]
    async fn create_rejects_second_booking_for_same_date() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let first = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, first).await.status(),
            StatusCode::CREATED
        );

        let second = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        let res = actix_test::call_service(&app, second).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.pointer("/details/code"),
            Some(&json!("booking_already_exists"))
        );
    }

    #[actix_web::test]
    async fn create_rejects_date_without_slot() {
        let app = actix_test::init_service(test_app()).await;
        let req = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2030-01-01" }))
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.pointer("/details/code"), Some(&json!("slot_not_found")));
    }

    #[actix_web::test]
    async fn lookup_is_scoped_to_the_owning_login() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let create = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let foreign = authed(
            actix_test::TestRequest::get().uri("/api/bookings/BKG0001"),
            BOB,
        )
        .to_request();
        let res = actix_test::call_service(&app, foreign).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let owned = authed(
            actix_test::TestRequest::get().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .to_request();
        let res = actix_test::call_service(&app, owned).await;
        assert!(res.status().is_success());
    }

    #[actix_web::test]
    async fn list_returns_not_found_when_caller_has_no_bookings() {
        let app = actix_test::init_service(test_app()).await;
        let req = authed(actix_test::TestRequest::get().uri("/api/bookings"), ALICE).to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Bookings not found")
        );
    }

    #[actix_web::test]
    async fn delete_round_trips_slot_capacity() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let create = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );
        assert_eq!(slot_count(&app, "SLT0001").await, 4);

        let delete = authed(
            actix_test::TestRequest::delete().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .to_request();
        let res = actix_test::call_service(&app, delete).await;
        assert!(res.status().is_success());
        assert_eq!(slot_count(&app, "SLT0001").await, 5);

        let lookup = authed(
            actix_test::TestRequest::get().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .to_request();
        let res = actix_test::call_service(&app, lookup).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_rejects_new_date_without_slot() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let create = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let update = authed(
            actix_test::TestRequest::put().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .set_json(json!({ "bookingdate": "2030-01-01" }))
        .to_request();
        let res = actix_test::call_service(&app, update).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(value.pointer("/details/code"), Some(&json!("slot_not_found")));
    }

    #[actix_web::test]
    async fn update_reports_nothing_to_update_for_identical_fields() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let create = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let update = authed(
            actix_test::TestRequest::put().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .set_json(json!({ "status": "confirmed" }))
        .to_request();
        let res = actix_test::call_service(&app, update).await;
        assert_eq!(res.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Nothing to update")
        );
    }

    #[actix_web::test]
    async fn patch_changes_status_and_misses_foreign_bookings() {
        let app = actix_test::init_service(test_app()).await;
        create_slot(&app, "2025-05-23", 5).await;

        let create = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .set_json(json!({ "bookingdate": "2025-05-23" }))
            .to_request();
        assert_eq!(
            actix_test::call_service(&app, create).await.status(),
            StatusCode::CREATED
        );

        let foreign = authed(
            actix_test::TestRequest::patch().uri("/api/bookings/BKG0001"),
            BOB,
        )
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
        let res = actix_test::call_service(&app, foreign).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);

        let owned = authed(
            actix_test::TestRequest::patch().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .set_json(json!({ "status": "cancelled" }))
        .to_request();
        let res = actix_test::call_service(&app, owned).await;
        assert_eq!(res.status(), StatusCode::OK);

        let lookup = authed(
            actix_test::TestRequest::get().uri("/api/bookings/BKG0001"),
            ALICE,
        )
        .to_request();
        let res = actix_test::call_service(&app, lookup).await;
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("status").and_then(Value::as_str),
            Some("cancelled")
        );
    }

    #[actix_web::test]
    async fn malformed_body_yields_bad_request() {
        let app = actix_test::init_service(test_app()).await;
        let req = authed(actix_test::TestRequest::post().uri("/api/bookings"), ALICE)
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = actix_test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(res).await;
        assert_eq!(
            value.get("message").and_then(Value::as_str),
            Some("Bad Request")
        );
    }
}
