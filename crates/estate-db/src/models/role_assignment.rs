//! Role assignment database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for users_roles join table
#[derive(Debug, Clone, FromRow)]
pub struct RoleAssignmentModel {
    pub id: i64,
    pub user_id: i64,
    pub role_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Assignment row joined with user and role names for listings
#[derive(Debug, Clone, FromRow)]
pub struct AssignmentDetailModel {
    pub id: i64,
    pub user_id: i64,
    pub role_id: i64,
    pub user_name: Option<String>,
    pub user_email: String,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
