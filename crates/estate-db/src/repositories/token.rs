//! PostgreSQL implementation of TokenRepository
//!
//! Backs session authentication and the token lifecycle sweeper. The two
//! sweeper statements keep their predicates exactly as the session-renewal
//! policy requires: a token whose `last_activity` moved past its original
//! expiry was renewed in-flight and is never blacklisted by the expire pass.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use estate_core::traits::{NewSession, RepoResult, TokenRepository};

use super::error::{map_db_error, session_not_found};

/// PostgreSQL implementation of TokenRepository
#[derive(Clone)]
pub struct PgTokenRepository {
    pool: PgPool,
}

impl PgTokenRepository {
    /// Create a new PgTokenRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TokenRepository for PgTokenRepository {
    #[instrument(skip(self, session))]
    async fn insert(&self, session: &NewSession) -> RepoResult<()> {
        sqlx::query(
            r"
            INSERT INTO active_tokens (user_id, session_id, access_expires_at, last_activity)
            VALUES ($1, $2, $3, NOW())
            ",
        )
        .bind(session.user_id)
        .bind(&session.session_id)
        .bind(session.access_expires_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn is_blacklisted(&self, session_id: &str) -> RepoResult<bool> {
        let result = sqlx::query_scalar::<_, bool>(
            r"
            SELECT is_blacklisted FROM active_tokens WHERE session_id = $1
            ",
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        // A session the purge pass already removed is treated as blacklisted.
        Ok(result.unwrap_or(true))
    }

    #[instrument(skip(self))]
    async fn touch_activity(&self, session_id: &str) -> RepoResult<()> {
        sqlx::query(
            r"
            UPDATE active_tokens SET last_activity = NOW() WHERE session_id = $1
            ",
        )
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn blacklist_session(&self, session_id: &str) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE active_tokens SET is_blacklisted = TRUE WHERE session_id = $1
            ",
        )
        .bind(session_id)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(session_not_found(session_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn blacklist_expired(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            UPDATE active_tokens
            SET is_blacklisted = TRUE
            WHERE access_expires_at < NOW()
              AND last_activity < access_expires_at
              AND is_blacklisted = FALSE
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self))]
    async fn purge_blacklisted(&self) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM active_tokens WHERE is_blacklisted = TRUE
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
