//! User entity - represents an admin-panel user account

use chrono::{DateTime, Utc};

use crate::value_objects::UserStatus;

/// User entity representing an account in the admin panel
///
/// The password hash never lives on the entity; it stays in the
/// infrastructure layer and is fetched separately for authentication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub number: Option<String>,
    pub alt_number: Option<String>,
    pub img: Option<String>,
    pub status: UserStatus,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: i64, email: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: None,
            email,
            number: None,
            alt_number: None,
            img: None,
            status: UserStatus::Active,
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Display name for listings: the name if set, otherwise the email
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }

    /// Check if the account is soft-deleted
    #[inline]
    pub fn is_trashed(&self) -> bool {
        self.status == UserStatus::Trash
    }

    /// Check if the account may log in
    #[inline]
    pub fn can_login(&self) -> bool {
        self.status.is_active()
    }

    /// Move the account to a new lifecycle status
    pub fn set_status(&mut self, status: UserStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }
}
