//! Role and role assignment handlers

use axum::{
    extract::{Path, State},
    Json,
};
use estate_service::dto::{
    AssignRoleRequest, AssignmentResponse, CreateRoleRequest, RoleResponse, UpdateRoleRequest,
};
use estate_service::RoleService;
use serde::Serialize;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Changing who holds which role is reserved for admins
fn ensure_admin(auth: &AuthUser) -> Result<(), ApiError> {
    if auth.has_role("admin") {
        Ok(())
    } else {
        Err(ApiError::forbidden(
            "Only admins may manage role assignments",
        ))
    }
}

/// List all roles
///
/// GET /roles
pub async fn list_roles(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<RoleResponse>>> {
    let service = RoleService::new(state.service_context());
    let roles = service.list().await?;
    Ok(Json(roles.iter().map(RoleResponse::from).collect()))
}

/// Get a single role
///
/// GET /roles/:role_id
pub async fn get_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(role_id): Path<i64>,
) -> ApiResult<Json<RoleResponse>> {
    let service = RoleService::new(state.service_context());
    let role = service.get(role_id).await?;
    Ok(Json(RoleResponse::from(&role)))
}

/// Create a new role
///
/// POST /roles
pub async fn create_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateRoleRequest>,
) -> ApiResult<Created<Json<RoleResponse>>> {
    let service = RoleService::new(state.service_context());
    let role = service.create(request).await?;
    Ok(Created(Json(RoleResponse::from(&role))))
}

/// Rename a role
///
/// PATCH /roles/:role_id
pub async fn update_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(role_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateRoleRequest>,
) -> ApiResult<Json<RoleResponse>> {
    let service = RoleService::new(state.service_context());
    let role = service.update(role_id, request).await?;
    Ok(Json(RoleResponse::from(&role)))
}

/// Delete a role
///
/// DELETE /roles/:role_id
pub async fn delete_role(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(role_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = RoleService::new(state.service_context());
    service.delete(role_id).await?;
    Ok(NoContent)
}

/// List every role assignment with joined names
///
/// GET /roles/assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<AssignmentResponse>>> {
    let service = RoleService::new(state.service_context());
    let assignments = service.list_assignments().await?;
    Ok(Json(
        assignments.iter().map(AssignmentResponse::from).collect(),
    ))
}

/// List a single user's role assignments
///
/// GET /users/:user_id/roles
pub async fn user_assignments(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<Vec<AssignmentResponse>>> {
    let service = RoleService::new(state.service_context());
    let assignments = service.assignments_for_user(user_id).await?;
    Ok(Json(
        assignments.iter().map(AssignmentResponse::from).collect(),
    ))
}

/// Response for a fresh assignment
#[derive(Debug, Serialize)]
pub struct AssignedResponse {
    pub id: i64,
}

/// Assign a role to a user
///
/// POST /roles/assignments
pub async fn assign_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<AssignRoleRequest>,
) -> ApiResult<Created<Json<AssignedResponse>>> {
    ensure_admin(&auth)?;
    let service = RoleService::new(state.service_context());
    let id = service.assign(request).await?;
    Ok(Created(Json(AssignedResponse { id })))
}

/// Remove a role assignment
///
/// DELETE /roles/assignments/:assignment_id
pub async fn unassign_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(assignment_id): Path<i64>,
) -> ApiResult<NoContent> {
    ensure_admin(&auth)?;
    let service = RoleService::new(state.service_context());
    service.unassign(assignment_id).await?;
    Ok(NoContent)
}
