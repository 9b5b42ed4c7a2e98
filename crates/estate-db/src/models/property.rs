//! Property database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for properties table
#[derive(Debug, Clone, FromRow)]
pub struct PropertyModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub address: Option<String>,
    pub img: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
