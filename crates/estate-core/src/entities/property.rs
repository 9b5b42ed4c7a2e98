//! Property entity - a listed real-estate property

use chrono::{DateTime, Utc};

use crate::value_objects::PropertyStatus;

/// Property listing managed through the admin panel
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub address: Option<String>,
    /// Stored image reference (filename or URL), never file contents
    pub img: Option<String>,
    pub status: PropertyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// Create a new Property listing
    pub fn new(id: i64, title: String, price: f64) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            price,
            address: None,
            img: None,
            status: PropertyStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the listing can still be booked
    #[inline]
    pub fn is_available(&self) -> bool {
        self.status == PropertyStatus::Available
    }
}
