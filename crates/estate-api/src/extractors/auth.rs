//! Authentication extractor
//!
//! Extracts and validates JWT tokens from the Authorization header, checks
//! the session against the blacklist and refreshes its activity marker.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use estate_common::auth::Claims;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the JWT token
    pub user_id: i64,
    /// Full decoded claims (session id and role names included)
    pub claims: Claims,
}

impl AuthUser {
    /// Check whether the authenticated user holds a role
    pub fn has_role(&self, role: &str) -> bool {
        self.claims.has_role(role)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::MissingAuth)?;

        // Get the app state to access JWT service and session store
        let app_state = AppState::from_ref(state);

        // Validate the token signature and expiry
        let claims = app_state
            .jwt_service()
            .decode_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        // A blacklisted (or already purged) session fails even while the
        // signature is still within its validity window
        let ctx = app_state.service_context();
        if ctx.token_repo().is_blacklisted(&claims.sid).await? {
            tracing::warn!(session_id = %claims.sid, "Rejected blacklisted session");
            return Err(ApiError::App(estate_common::AppError::InvalidToken));
        }

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::App(e)
        })?;

        // Refresh the session's activity marker off the request path. The
        // marker is what keeps an active session out of the sweeper's expire
        // pass, so a lost update only costs an earlier blacklisting.
        let touch_ctx = ctx.clone();
        let session_id = claims.sid.clone();
        tokio::spawn(async move {
            if let Err(e) = touch_ctx.token_repo().touch_activity(&session_id).await {
                tracing::debug!(error = %e, "Failed to refresh session activity");
            }
        });

        Ok(AuthUser { user_id, claims })
    }
}
