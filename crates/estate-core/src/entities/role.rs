//! Role entity and the user-role assignment record

use chrono::{DateTime, Utc};

/// Named permission label (admin, buyer, seller, broker, retailer, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Role {
    /// Create a new Role
    pub fn new(id: i64, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check whether this role grants administrative access
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.name == "admin"
    }
}

/// Assignment of one role to one user
///
/// Invariant: a given (user_id, role_id) pair exists at most once; the store
/// enforces this with a unique index and duplicate assignments are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleAssignment {
    pub id: i64,
    pub user_id: i64,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
