//! User management handlers

use axum::{
    extract::{Path, State},
    Json,
};
use estate_service::dto::{
    CreateUserRequest, DeletedResponse, MessageResponse, UpdatePasswordRequest, UpdateUserRequest,
    UserResponse,
};
use estate_service::UserService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// A user may edit their own account; everyone else's requires the
/// `admin` role
fn ensure_self_or_admin(auth: &AuthUser, user_id: i64) -> Result<(), ApiError> {
    if auth.user_id == user_id || auth.has_role("admin") {
        Ok(())
    } else {
        Err(ApiError::forbidden("Only admins may modify other users"))
    }
}

/// List all users
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list().await?;
    Ok(Json(users.iter().map(UserResponse::from).collect()))
}

/// Get a single user
///
/// GET /users/:user_id
pub async fn get_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<UserResponse>> {
    let service = UserService::new(state.service_context());
    let user = service.get(user_id).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// Create a new user
///
/// POST /users
pub async fn create_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateUserRequest>,
) -> ApiResult<Created<Json<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let user = service.create(request).await?;
    Ok(Created(Json(UserResponse::from(&user))))
}

/// Update a user's profile fields
///
/// PATCH /users/:user_id
pub async fn update_user(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    ensure_self_or_admin(&auth, user_id)?;
    let service = UserService::new(state.service_context());
    let user = service.update(user_id, request).await?;
    Ok(Json(UserResponse::from(&user)))
}

/// Change a user's password
///
/// PUT /users/:user_id/password
pub async fn update_password(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(user_id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdatePasswordRequest>,
) -> ApiResult<NoContent> {
    ensure_self_or_admin(&auth, user_id)?;
    let service = UserService::new(state.service_context());
    service.change_password(user_id, request).await?;
    Ok(NoContent)
}

/// Soft-delete: move a user to the trash status
///
/// POST /users/:user_id/trash
pub async fn trash_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<MessageResponse>> {
    let service = UserService::new(state.service_context());
    service.trash(user_id).await?;
    Ok(Json(MessageResponse::new("User moved to trash")))
}

/// Hard-delete a user and its role assignments atomically
///
/// DELETE /users/:user_id
pub async fn delete_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(user_id): Path<i64>,
) -> ApiResult<Json<DeletedResponse>> {
    let service = UserService::new(state.service_context());
    let response = service.delete(user_id).await?;
    Ok(Json(response))
}
