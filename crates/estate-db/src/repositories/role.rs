//! PostgreSQL implementation of RoleRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::entities::Role;
use estate_core::error::DomainError;
use estate_core::traits::{RepoResult, RoleRepository};

use crate::models::RoleModel;

use super::error::{map_db_error, map_unique_violation, role_not_found};

/// PostgreSQL implementation of RoleRepository
#[derive(Clone)]
pub struct PgRoleRepository {
    pool: PgPool,
}

impl PgRoleRepository {
    /// Create a new PgRoleRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoleRepository for PgRoleRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Role>> {
        let results = sqlx::query_as::<_, RoleModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM roles
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Role::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Role>> {
        let result = sqlx::query_as::<_, RoleModel>(
            r"
            SELECT id, name, created_at, updated_at
            FROM roles
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Role::from))
    }

    #[instrument(skip(self))]
    async fn create(&self, name: &str) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO roles (name)
            VALUES ($1)
            RETURNING id
            ",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoleNameExists))?;

        Ok(id)
    }

    #[instrument(skip(self, role))]
    async fn update(&self, role: &Role) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE roles
            SET name = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(role.id)
        .bind(&role.name)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoleNameExists))?;

        if result.rows_affected() == 0 {
            return Err(role_not_found(role.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(role_not_found(id));
        }

        Ok(())
    }
}
