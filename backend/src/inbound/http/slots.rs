//! Slot API handlers.
//!
//! ```text
//! GET    /api/slots
//! GET    /api/slots/{id}
//! POST   /api/slots
//! PUT    /api/slots/{id}
//! DELETE /api/slots/{id}
//! ```
//!
//! Every route requires the `loginid`/`passkey` header pair resolving to a
//! user with the admin role.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use utoipa::ToSchema;

use crate::domain::slot_service::{SlotDraft, SlotError};
use crate::domain::{Error, SlotChanges, SlotStatus, SlotView};
use crate::inbound::http::auth::require_admin;
use crate::inbound::http::bookings::MessageResponse;
use crate::inbound::http::error::ApiResult;
use crate::inbound::http::state::HttpState;

/// Request body for `POST /api/slots`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateSlotRequest {
    /// Calendar date of the slot; canonical date-string length enforced.
    #[serde(rename = "slotdate")]
    #[schema(example = "2025-05-23")]
    pub slot_date: String,
    /// Initial remaining capacity.
    #[serde(rename = "slotcount")]
    #[schema(example = 5)]
    pub slot_count: u32,
    /// Initial status; defaults to `available`.
    #[serde(rename = "slotstatus", default)]
    pub slot_status: Option<SlotStatus>,
    /// Initial active flag; defaults to true.
    #[serde(default)]
    pub active: Option<bool>,
}

/// Request body for `PUT /api/slots/{id}`. Absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
pub struct UpdateSlotRequest {
    /// Replacement date string; empty strings are ignored.
    #[serde(rename = "slotdate", default)]
    pub slot_date: Option<String>,
    /// Replacement capacity count.
    #[serde(rename = "slotcount", default)]
    pub slot_count: Option<i64>,
    /// Replacement status.
    #[serde(rename = "slotstatus", default)]
    pub slot_status: Option<SlotStatus>,
    /// Replacement active flag.
    #[serde(default)]
    pub active: Option<bool>,
}

impl From<UpdateSlotRequest> for SlotChanges {
    fn from(value: UpdateSlotRequest) -> Self {
        Self {
            date: value.slot_date,
            count: value.slot_count,
            status: value.slot_status,
            active: value.active,
        }
    }
}

fn outcome_code(err: &SlotError) -> &'static str {
    match err {
        SlotError::InvalidSlotDate(_) => "invalid_slot_date",
        SlotError::SlotAlreadyExists(_) => "slot_already_exists",
        SlotError::SlotNotFound(_) => "slot_not_found",
        SlotError::BookingExists(_) => "booking_exists",
        SlotError::Store(_) => "store_failure",
    }
}

fn create_rejection(err: SlotError) -> Error {
    match err {
        SlotError::Store(store) => Error::internal(store.to_string()),
        other => Error::invalid_request(format!("error creating slot: {other}"))
            .with_details(json!({ "code": outcome_code(&other) })),
    }
}

fn lookup_rejection(err: SlotError) -> Error {
    match err {
        SlotError::Store(store) => Error::internal(store.to_string()),
        other => {
            Error::not_found("Slot not found").with_details(json!({ "code": outcome_code(&other) }))
        }
    }
}

fn delete_rejection(err: SlotError) -> Error {
    match err {
        SlotError::Store(store) => Error::internal(store.to_string()),
        SlotError::BookingExists(_) => {
            Error::not_found("Unable to delete, booking exists on this slot")
                .with_details(json!({ "code": "booking_exists" }))
        }
        other => {
            Error::not_found("Slot not found").with_details(json!({ "code": outcome_code(&other) }))
        }
    }
}

/// List every slot.
#[utoipa::path(
    get,
    path = "/api/slots",
    tags = ["slots"],
    operation_id = "listSlots",
    responses(
        (status = 200, description = "All slots", body = [SlotView]),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "No slots found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[get("/slots")]
pub async fn list_slots(req: HttpRequest, state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    require_admin(&req, state.gate.as_ref()).await?;
    let slots = state.slots.list().await.map_err(lookup_rejection)?;
    if slots.is_empty() {
        return Err(Error::not_found("Slots not found"));
    }
    Ok(HttpResponse::Ok().json(slots))
}

/// Fetch a slot by identifier.
#[utoipa::path(
    get,
    path = "/api/slots/{id}",
    tags = ["slots"],
    operation_id = "getSlotById",
    params(("id" = String, Path, description = "Slot identifier")),
    responses(
        (status = 200, description = "Slot details", body = SlotView),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Slot not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[get("/slots/{id}")]
pub async fn get_slot(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    require_admin(&req, state.gate.as_ref()).await?;
    let slot = state
        .slots
        .get(&path.into_inner())
        .await
        .map_err(lookup_rejection)?;
    Ok(HttpResponse::Ok().json(slot))
}

/// Create a slot.
#[utoipa::path(
    post,
    path = "/api/slots",
    tags = ["slots"],
    operation_id = "createSlot",
    request_body = CreateSlotRequest,
    responses(
        (status = 201, description = "Slot created", body = SlotView),
        (status = 400, description = "Invalid request or domain rejection", body = Error),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[post("/slots")]
pub async fn create_slot(
    req: HttpRequest,
    state: web::Data<HttpState>,
    payload: web::Json<CreateSlotRequest>,
) -> ApiResult<HttpResponse> {
    require_admin(&req, state.gate.as_ref()).await?;
    let body = payload.into_inner();
    let draft = SlotDraft {
        date: body.slot_date,
        count: body.slot_count,
        status: body.slot_status,
        active: body.active,
    };
    let slot = state.slots.create(draft).await.map_err(create_rejection)?;
    Ok(HttpResponse::Created().json(slot))
}

/// Replace fields of a slot.
#[utoipa::path(
    put,
    path = "/api/slots/{id}",
    tags = ["slots"],
    operation_id = "updateSlot",
    params(("id" = String, Path, description = "Slot identifier")),
    request_body = UpdateSlotRequest,
    responses(
        (status = 200, description = "Slot updated (or nothing to update)", body = MessageResponse),
        (status = 400, description = "Malformed body", body = Error),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Slot not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[put("/slots/{id}")]
pub async fn update_slot(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateSlotRequest>,
) -> ApiResult<HttpResponse> {
    require_admin(&req, state.gate.as_ref()).await?;
    let changed = state
        .slots
        .update(&path.into_inner(), payload.into_inner().into())
        .await
        .map_err(lookup_rejection)?;
    let message = if changed {
        "Slot updated successfully"
    } else {
        "Nothing to update"
    };
    Ok(HttpResponse::Ok().json(MessageResponse::new(message)))
}

/// Delete a slot with no referencing bookings.
#[utoipa::path(
    delete,
    path = "/api/slots/{id}",
    tags = ["slots"],
    operation_id = "deleteSlot",
    params(("id" = String, Path, description = "Slot identifier")),
    responses(
        (status = 200, description = "Slot deleted", body = MessageResponse),
        (status = 401, description = "Credential check failed", body = Error),
        (status = 404, description = "Slot not found or bookings still reference it", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    )
)]
#[delete("/slots/{id}")]
pub async fn delete_slot(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    require_admin(&req, state.gate.as_ref()).await?;
    state
        .slots
        .delete(&path.into_inner())
        .await
        .map_err(delete_rejection)?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Slot deleted successfully")))
}
