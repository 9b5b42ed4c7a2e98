//! Authentication service
//!
//! Handles admin login, logout and access-token validation. Every issued
//! token gets a row in `active_tokens`; logout blacklists that row, and the
//! background sweeper eventually reclaims sessions that simply went idle.

use estate_common::auth::{verify_password, Claims};
use estate_common::AppError;
use estate_core::entities::User;
use estate_core::traits::NewSession;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{AuthResponse, CurrentUserResponse, LoginRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %request.email, "Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Trashed or blocked accounts cannot sign in
        if !user.can_login() {
            warn!(user_id = user.id, status = user.status.as_str(), "Login failed: account disabled");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Get password hash
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Role names go into the token claims
        let roles = self.ctx.assignment_repo().role_names(user.id).await?;

        // Issue the access token under a fresh session id
        let session_id = Uuid::new_v4().to_string();
        let access = self
            .ctx
            .jwt_service()
            .issue(user.id, &session_id, roles.clone())
            .map_err(ServiceError::from)?;

        // Record the session so logout and the sweeper can see it
        self.ctx
            .token_repo()
            .insert(&NewSession {
                user_id: user.id,
                session_id,
                access_expires_at: access.expires_at,
            })
            .await?;

        info!(user_id = user.id, "User logged in successfully");

        Ok(AuthResponse::new(
            access.token,
            access.expires_in,
            CurrentUserResponse::from_user(&user, roles),
        ))
    }

    /// Logout by blacklisting the session carried in the token claims.
    /// The purged row disappears on the sweeper's next purge pass.
    #[instrument(skip(self, claims), fields(user_id = %claims.sub))]
    pub async fn logout(&self, claims: &Claims) -> ServiceResult<()> {
        self.ctx.token_repo().blacklist_session(&claims.sid).await?;

        info!(session_id = %claims.sid, "User logged out successfully");
        Ok(())
    }

    /// Validate an access token against both the signature and the session
    /// row, returning the decoded claims
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<Claims> {
        let claims = self
            .ctx
            .jwt_service()
            .decode_token(token)
            .map_err(ServiceError::from)?;

        // A blacklisted (or already purged) session is no longer usable even
        // while the signature is still within its validity window
        if self.ctx.token_repo().is_blacklisted(&claims.sid).await? {
            return Err(ServiceError::App(AppError::InvalidToken));
        }

        Ok(claims)
    }

    /// Get the authenticated user behind a set of validated claims
    #[instrument(skip(self, claims))]
    pub async fn current_user(&self, claims: &Claims) -> ServiceResult<User> {
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }
}
