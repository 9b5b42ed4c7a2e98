//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

// ============================================================================
// Common Response Types
// ============================================================================

/// Generic API response wrapper
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Plain message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response for a completed deletion
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub id: i64,
    pub message: String,
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with the access token
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Admin panel user listing entry
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Currently authenticated user (includes held roles)
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub status: String,
    pub roles: Vec<String>,
}

// ============================================================================
// Role Responses
// ============================================================================

/// Role response
#[derive(Debug, Clone, Serialize)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Role assignment with joined user and role names
#[derive(Debug, Clone, Serialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub user_id: i64,
    pub role_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    pub user_email: String,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Property Responses
// ============================================================================

/// Property listing response
#[derive(Debug, Clone, Serialize)]
pub struct PropertyResponse {
    pub id: i64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Sale Booking Responses
// ============================================================================

/// Sale booking response
#[derive(Debug, Clone, Serialize)]
pub struct BookingResponse {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_id: Option<i64>,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_number: Option<String>,
    pub amount: f64,
    pub booking_date: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Maintenance Responses
// ============================================================================

/// Outcome of one token sweeper cycle
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepReport {
    pub expired: u64,
    pub purged: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: String,
}
