//! User management service
//!
//! Covers the admin panel's user CRUD: listing, creation with hashed
//! credentials, partial updates, the soft `trash` transition and the hard
//! cascading delete that removes the user together with its role
//! assignments.

use std::str::FromStr;

use estate_common::auth::{hash_password, validate_password_strength};
use estate_core::entities::User;
use estate_core::error::DomainError;
use estate_core::traits::NewUser;
use estate_core::value_objects::UserStatus;
use tracing::{info, instrument};

use crate::dto::{CreateUserRequest, DeletedResponse, UpdatePasswordRequest, UpdateUserRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User management service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all users
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<User>> {
        Ok(self.ctx.user_repo().find_all().await?)
    }

    /// Get a single user
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<User> {
        self.ctx
            .user_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::UserNotFound(id)))
    }

    /// Create a new user with a hashed password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn create(&self, request: CreateUserRequest) -> ServiceResult<User> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self.ctx.user_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        let id = self
            .ctx
            .user_repo()
            .create(&NewUser {
                name: request.name,
                email: request.email,
                number: request.number,
                alt_number: request.alt_number,
                password_hash,
                img: request.img,
                status: UserStatus::Active,
                address: request.address,
            })
            .await?;

        info!(user_id = id, "User created successfully");

        self.get(id).await
    }

    /// Update a user's profile fields. Absent request fields keep their
    /// stored value, so a request without `img` never clears the image.
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateUserRequest) -> ServiceResult<User> {
        let mut user = self.get(id).await?;

        if let Some(email) = &request.email {
            if email != &user.email && self.ctx.user_repo().email_exists(email).await? {
                return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
            }
        }

        if let Some(name) = request.name {
            user.name = Some(name);
        }
        if let Some(email) = request.email {
            user.email = email;
        }
        if let Some(number) = request.number {
            user.number = Some(number);
        }
        if let Some(alt_number) = request.alt_number {
            user.alt_number = Some(alt_number);
        }
        if let Some(img) = request.img {
            user.img = Some(img);
        }
        if let Some(address) = request.address {
            user.address = Some(address);
        }
        if let Some(status) = request.status {
            let status = UserStatus::from_str(&status)
                .map_err(|e| ServiceError::Domain(DomainError::InvalidStatus(e.0)))?;
            user.set_status(status);
        }

        self.ctx.user_repo().update(&user).await?;

        info!(user_id = id, "User updated successfully");

        self.get(id).await
    }

    /// Change a user's password
    #[instrument(skip(self, request))]
    pub async fn change_password(
        &self,
        id: i64,
        request: UpdatePasswordRequest,
    ) -> ServiceResult<()> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        self.ctx.user_repo().update_password(id, &password_hash).await?;

        info!(user_id = id, "Password updated successfully");
        Ok(())
    }

    /// Soft-delete: move the user to the trash status. The row and its role
    /// assignments stay in place and the user can be restored later.
    #[instrument(skip(self))]
    pub async fn trash(&self, id: i64) -> ServiceResult<()> {
        self.ctx.user_repo().set_status(id, UserStatus::Trash).await?;

        info!(user_id = id, "User moved to trash");
        Ok(())
    }

    /// Hard-delete the user and all of its role assignments atomically.
    /// A missing user id rolls the transaction back and reports not-found.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<DeletedResponse> {
        self.ctx.user_repo().delete_with_roles(id).await?;

        info!(user_id = id, "User and related role assignments deleted");

        Ok(DeletedResponse {
            id,
            message: "User and related roles deleted successfully".to_string(),
        })
    }
}
