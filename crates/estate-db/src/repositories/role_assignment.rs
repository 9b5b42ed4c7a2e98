//! PostgreSQL implementation of RoleAssignmentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::error::DomainError;
use estate_core::traits::{AssignmentDetail, RepoResult, RoleAssignmentRepository};

use crate::models::AssignmentDetailModel;

use super::error::{assignment_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of RoleAssignmentRepository
#[derive(Clone)]
pub struct PgRoleAssignmentRepository {
    pool: PgPool,
}

impl PgRoleAssignmentRepository {
    /// Create a new PgRoleAssignmentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleAssignmentRepository for PgRoleAssignmentRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<AssignmentDetail>> {
        let results = sqlx::query_as::<_, AssignmentDetailModel>(
            r"
            SELECT ur.id, ur.user_id, ur.role_id,
                   u.name AS user_name, u.email AS user_email, r.name AS role_name,
                   ur.created_at, ur.updated_at
            FROM users_roles ur
            JOIN users u ON u.id = ur.user_id
            JOIN roles r ON r.id = ur.role_id
            ORDER BY ur.id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AssignmentDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<AssignmentDetail>> {
        let results = sqlx::query_as::<_, AssignmentDetailModel>(
            r"
            SELECT ur.id, ur.user_id, ur.role_id,
                   u.name AS user_name, u.email AS user_email, r.name AS role_name,
                   ur.created_at, ur.updated_at
            FROM users_roles ur
            JOIN users u ON u.id = ur.user_id
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = $1
            ORDER BY ur.id
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(AssignmentDetail::from).collect())
    }

    #[instrument(skip(self))]
    async fn role_names(&self, user_id: i64) -> RepoResult<Vec<String>> {
        let names = sqlx::query_scalar::<_, String>(
            r"
            SELECT r.name
            FROM users_roles ur
            JOIN roles r ON r.id = ur.role_id
            WHERE ur.user_id = $1
            ORDER BY r.name
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(names)
    }

    /// Duplicate (user, role) pairs are rejected by the unique index on
    /// users_roles rather than a check-then-insert, so concurrent assigns
    /// cannot race past the check.
    #[instrument(skip(self))]
    async fn assign(&self, user_id: i64, role_id: i64) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users_roles (user_id, role_id)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(user_id)
        .bind(role_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoleAlreadyAssigned))?;

        Ok(id)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM users_roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(assignment_not_found(id));
        }

        Ok(())
    }
}
