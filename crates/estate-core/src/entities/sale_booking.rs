//! Sale booking entity - a client's booking against a property

use chrono::{DateTime, NaiveDate, Utc};

use crate::value_objects::BookingStatus;

/// Sale booking submitted by a client and managed by administrators
#[derive(Debug, Clone, PartialEq)]
pub struct SaleBooking {
    pub id: i64,
    /// The booked property, if it still exists as a listing
    pub property_id: Option<i64>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_number: Option<String>,
    pub amount: f64,
    pub booking_date: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SaleBooking {
    /// Check if the booking still counts as an open sale
    #[inline]
    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// Cancel the booking
    pub fn cancel(&mut self) {
        self.status = BookingStatus::Cancelled;
        self.updated_at = Utc::now();
    }
}
