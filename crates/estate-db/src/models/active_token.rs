//! Active token database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for active_tokens table
#[derive(Debug, Clone, FromRow)]
pub struct ActiveTokenModel {
    pub id: i64,
    pub user_id: i64,
    pub session_id: String,
    pub access_expires_at: DateTime<Utc>,
    pub last_activity: DateTime<Utc>,
    pub is_blacklisted: bool,
    pub created_at: DateTime<Utc>,
}

impl ActiveTokenModel {
    /// Check if the access validity window has passed
    #[inline]
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.access_expires_at
    }

    /// Check if the token is usable for authentication
    #[inline]
    pub fn is_valid(&self) -> bool {
        !self.is_blacklisted && !self.is_expired()
    }
}
