//! Role and role assignment service

use estate_core::entities::Role;
use estate_core::error::DomainError;
use estate_core::traits::AssignmentDetail;
use tracing::{info, instrument};

use crate::dto::{AssignRoleRequest, CreateRoleRequest, UpdateRoleRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Role and assignment management service
pub struct RoleService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RoleService<'a> {
    /// Create a new RoleService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // === Roles ===

    /// List all roles
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Role>> {
        Ok(self.ctx.role_repo().find_all().await?)
    }

    /// Get a single role
    #[instrument(skip(self))]
    pub async fn get(&self, id: i64) -> ServiceResult<Role> {
        self.ctx
            .role_repo()
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::Domain(DomainError::RoleNotFound(id)))
    }

    /// Create a new role
    #[instrument(skip(self, request), fields(name = %request.name))]
    pub async fn create(&self, request: CreateRoleRequest) -> ServiceResult<Role> {
        let id = self.ctx.role_repo().create(&request.name).await?;

        info!(role_id = id, "Role created successfully");

        self.get(id).await
    }

    /// Rename a role
    #[instrument(skip(self, request))]
    pub async fn update(&self, id: i64, request: UpdateRoleRequest) -> ServiceResult<Role> {
        let mut role = self.get(id).await?;
        role.name = request.name;

        self.ctx.role_repo().update(&role).await?;

        info!(role_id = id, "Role updated successfully");

        self.get(id).await
    }

    /// Delete a role. Fails while assignments still reference it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ServiceResult<()> {
        self.ctx.role_repo().delete(id).await?;

        info!(role_id = id, "Role deleted successfully");
        Ok(())
    }

    // === Assignments ===

    /// List every assignment with joined user and role names
    #[instrument(skip(self))]
    pub async fn list_assignments(&self) -> ServiceResult<Vec<AssignmentDetail>> {
        Ok(self.ctx.assignment_repo().find_all().await?)
    }

    /// List a single user's assignments
    #[instrument(skip(self))]
    pub async fn assignments_for_user(&self, user_id: i64) -> ServiceResult<Vec<AssignmentDetail>> {
        Ok(self.ctx.assignment_repo().find_by_user(user_id).await?)
    }

    /// Assign a role to a user. Verifies both sides exist first so the
    /// caller gets a precise not-found instead of a foreign key failure;
    /// a duplicate pair surfaces as a conflict.
    #[instrument(skip(self, request), fields(user_id = request.user_id, role_id = request.role_id))]
    pub async fn assign(&self, request: AssignRoleRequest) -> ServiceResult<i64> {
        if self
            .ctx
            .user_repo()
            .find_by_id(request.user_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::UserNotFound(
                request.user_id,
            )));
        }
        if self
            .ctx
            .role_repo()
            .find_by_id(request.role_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::Domain(DomainError::RoleNotFound(
                request.role_id,
            )));
        }

        let id = self
            .ctx
            .assignment_repo()
            .assign(request.user_id, request.role_id)
            .await?;

        info!(assignment_id = id, "Role assigned successfully");
        Ok(id)
    }

    /// Remove a single assignment
    #[instrument(skip(self))]
    pub async fn unassign(&self, id: i64) -> ServiceResult<()> {
        self.ctx.assignment_repo().remove(id).await?;

        info!(assignment_id = id, "Role assignment removed");
        Ok(())
    }
}
