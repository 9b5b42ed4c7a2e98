//! Sale booking handlers

use axum::{
    extract::{Path, State},
    Json,
};
use estate_service::dto::{BookingResponse, CreateBookingRequest, UpdateBookingRequest};
use estate_service::SaleService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all sale bookings
///
/// GET /sales
pub async fn list_bookings(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<BookingResponse>>> {
    let service = SaleService::new(state.service_context());
    let bookings = service.list().await?;
    Ok(Json(bookings.iter().map(BookingResponse::from).collect()))
}

/// Get a single booking
///
/// GET /sales/:booking_id
pub async fn get_booking(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(booking_id): Path<i64>,
) -> ApiResult<Json<BookingResponse>> {
    let service = SaleService::new(state.service_context());
    let booking = service.get(booking_id).await?;
    Ok(Json(BookingResponse::from(&booking)))
}

/// Create a new booking
///
/// POST /sales
pub async fn create_booking(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateBookingRequest>,
) -> ApiResult<Created<Json<BookingResponse>>> {
    let service = SaleService::new(state.service_context());
    let booking = service.create(request).await?;
    Ok(Created(Json(BookingResponse::from(&booking))))
}

/// Update a booking
///
/// PATCH /sales/:booking_id
pub async fn update_booking(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(booking_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateBookingRequest>,
) -> ApiResult<Json<BookingResponse>> {
    let service = SaleService::new(state.service_context());
    let booking = service.update(booking_id, request).await?;
    Ok(Json(BookingResponse::from(&booking)))
}

/// Delete a booking
///
/// DELETE /sales/:booking_id
pub async fn delete_booking(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(booking_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = SaleService::new(state.service_context());
    service.delete(booking_id).await?;
    Ok(NoContent)
}
