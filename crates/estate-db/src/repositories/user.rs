//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::instrument;

use estate_core::entities::User;
use estate_core::error::DomainError;
use estate_core::traits::{NewUser, RepoResult, UserRepository};
use estate_core::value_objects::UserStatus;

use crate::models::UserModel;

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run both cascade statements on a caller-supplied connection:
    /// role assignments first, then the user row. Returns whether the user
    /// row existed. The caller owns the transaction boundary, which is what
    /// lets tests abort between the statements and the commit.
    pub async fn delete_cascade_on(conn: &mut PgConnection, id: i64) -> RepoResult<bool> {
        sqlx::query("DELETE FROM users_roles WHERE user_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(map_db_error)?;

        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(map_db_error)?;

        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let results = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, number, alt_number, password_hash, img, status,
                   address, created_at, updated_at
            FROM users
            ORDER BY id
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        results.into_iter().map(User::try_from).collect()
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, number, alt_number, password_hash, img, status,
                   address, created_at, updated_at
            FROM users
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let result = sqlx::query_as::<_, UserModel>(
            r"
            SELECT id, name, email, number, alt_number, password_hash, img, status,
                   address, created_at, updated_at
            FROM users
            WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(User::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)
            ",
        )
        .bind(email)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    #[instrument(skip(self, user))]
    async fn create(&self, user: &NewUser) -> RepoResult<i64> {
        let id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO users (name, email, number, alt_number, password_hash, img, status, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            ",
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.number)
        .bind(&user.alt_number)
        .bind(&user.password_hash)
        .bind(&user.img)
        .bind(user.status.as_str())
        .bind(&user.address)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        Ok(id)
    }

    #[instrument(skip(self, user))]
    async fn update(&self, user: &User) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET name = $2, email = $3, number = $4, alt_number = $5, img = $6,
                status = $7, address = $8, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(user.id)
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.number)
        .bind(&user.alt_number)
        .bind(&user.img)
        .bind(user.status.as_str())
        .bind(&user.address)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::EmailAlreadyExists))?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(user.id));
        }

        Ok(())
    }

    #[instrument(skip(self, password_hash))]
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET password_hash = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_status(&self, id: i64, status: UserStatus) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE users
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            ",
        )
        .bind(id)
        .bind(status.as_str())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(user_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT password_hash FROM users WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result)
    }

    /// Cascade delete: role assignments first, then the user row, in one
    /// transaction. Assignment rows pointing at a row about to disappear are
    /// harmless to delete early, so that ordering is the safe one for any
    /// concurrent reader. Zero assignment rows is fine (a user may have no
    /// roles); zero user rows means the id never existed and the whole
    /// transaction rolls back. The `Transaction` guard rolls back on drop,
    /// so the connection goes back to the pool on every exit path.
    #[instrument(skip(self))]
    async fn delete_with_roles(&self, id: i64) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        if !Self::delete_cascade_on(&mut tx, id).await? {
            tx.rollback().await.map_err(map_db_error)?;
            return Err(user_not_found(id));
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }
}
