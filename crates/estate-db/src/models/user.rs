//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users table
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub number: Option<String>,
    pub alt_number: Option<String>,
    pub password_hash: String,
    pub img: Option<String>,
    pub status: String,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserModel {
    /// Check if the account has been moved to the trash
    #[inline]
    pub fn is_trashed(&self) -> bool {
        self.status == "trash"
    }
}
