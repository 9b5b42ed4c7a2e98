//! Property listing handlers

use axum::{
    extract::{Path, State},
    Json,
};
use estate_service::dto::{CreatePropertyRequest, PropertyResponse, UpdatePropertyRequest};
use estate_service::PropertyService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all property listings
///
/// GET /properties
pub async fn list_properties(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let properties = service.list().await?;
    Ok(Json(properties.iter().map(PropertyResponse::from).collect()))
}

/// Get a single listing
///
/// GET /properties/:property_id
pub async fn get_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<i64>,
) -> ApiResult<Json<PropertyResponse>> {
    let service = PropertyService::new(state.service_context());
    let property = service.get(property_id).await?;
    Ok(Json(PropertyResponse::from(&property)))
}

/// Create a new listing
///
/// POST /properties
pub async fn create_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreatePropertyRequest>,
) -> ApiResult<Created<Json<PropertyResponse>>> {
    let service = PropertyService::new(state.service_context());
    let property = service.create(request).await?;
    Ok(Created(Json(PropertyResponse::from(&property))))
}

/// Update a listing
///
/// PATCH /properties/:property_id
pub async fn update_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePropertyRequest>,
) -> ApiResult<Json<PropertyResponse>> {
    let service = PropertyService::new(state.service_context());
    let property = service.update(property_id, request).await?;
    Ok(Json(PropertyResponse::from(&property)))
}

/// Delete a listing
///
/// DELETE /properties/:property_id
pub async fn delete_property(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(property_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = PropertyService::new(state.service_context());
    service.delete(property_id).await?;
    Ok(NoContent)
}
