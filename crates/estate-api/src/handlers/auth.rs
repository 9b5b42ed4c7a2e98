//! Authentication handlers
//!
//! Endpoints for admin login, logout and the current-user lookup.

use axum::{extract::State, Json};
use estate_service::dto::{AuthResponse, CurrentUserResponse, LoginRequest};
use estate_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;
    Ok(Json(response))
}

/// Logout by blacklisting the current session
///
/// POST /auth/logout
pub async fn logout(State(state): State<AppState>, auth: AuthUser) -> ApiResult<NoContent> {
    let service = AuthService::new(state.service_context());
    service.logout(&auth.claims).await?;
    Ok(NoContent)
}

/// Get the currently authenticated user
///
/// GET /auth/me
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let user = service.current_user(&auth.claims).await?;
    Ok(Json(CurrentUserResponse::from_user(
        &user,
        auth.claims.roles.clone(),
    )))
}
