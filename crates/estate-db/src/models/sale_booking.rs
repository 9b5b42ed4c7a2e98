//! Sale booking database model

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

/// Database model for sale_bookings table
#[derive(Debug, Clone, FromRow)]
pub struct SaleBookingModel {
    pub id: i64,
    pub property_id: Option<i64>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_number: Option<String>,
    pub amount: f64,
    pub booking_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
