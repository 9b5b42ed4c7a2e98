//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Admin login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    pub password: String,
}

// ============================================================================
// User Requests
// ============================================================================

/// Create user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,

    #[validate(length(max = 20, message = "Number must be at most 20 characters"))]
    pub number: Option<String>,

    #[validate(length(max = 20, message = "Alternate number must be at most 20 characters"))]
    pub alt_number: Option<String>,

    /// Image path or URL
    pub img: Option<String>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,
}

/// Update user request (partial; absent fields keep their stored value)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "Number must be at most 20 characters"))]
    pub number: Option<String>,

    #[validate(length(max = 20, message = "Alternate number must be at most 20 characters"))]
    pub alt_number: Option<String>,

    /// Image path; absent keeps the stored image
    pub img: Option<String>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    /// Lifecycle status: active, trash or block
    pub status: Option<String>,
}

/// Password change request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePasswordRequest {
    #[validate(length(min = 8, max = 72, message = "Password must be 8-72 characters"))]
    pub password: String,
}

// ============================================================================
// Role Requests
// ============================================================================

/// Create role request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateRoleRequest {
    #[validate(length(min = 2, max = 50, message = "Role name must be 2-50 characters"))]
    pub name: String,
}

/// Update role request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 2, max = 50, message = "Role name must be 2-50 characters"))]
    pub name: String,
}

/// Assign a role to a user
#[derive(Debug, Clone, Deserialize)]
pub struct AssignRoleRequest {
    pub user_id: i64,
    pub role_id: i64,
}

// ============================================================================
// Property Requests
// ============================================================================

/// Create property listing request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreatePropertyRequest {
    #[validate(length(min = 2, max = 200, message = "Title must be 2-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    /// Image path or URL
    pub img: Option<String>,
}

/// Update property listing request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdatePropertyRequest {
    #[validate(length(min = 2, max = 200, message = "Title must be 2-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: Option<f64>,

    #[validate(length(max = 500, message = "Address must be at most 500 characters"))]
    pub address: Option<String>,

    pub img: Option<String>,

    /// Lifecycle status: available, sold or trash
    pub status: Option<String>,
}

// ============================================================================
// Sale Booking Requests
// ============================================================================

/// Create sale booking request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub property_id: Option<i64>,

    #[validate(length(min = 2, max = 100, message = "Client name must be 2-100 characters"))]
    pub client_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub client_email: Option<String>,

    #[validate(length(max = 20, message = "Number must be at most 20 characters"))]
    pub client_number: Option<String>,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: f64,

    pub booking_date: NaiveDate,
}

/// Update sale booking request (partial)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateBookingRequest {
    pub property_id: Option<i64>,

    #[validate(length(min = 2, max = 100, message = "Client name must be 2-100 characters"))]
    pub client_name: Option<String>,

    #[validate(email(message = "Invalid email format"))]
    pub client_email: Option<String>,

    #[validate(length(max = 20, message = "Number must be at most 20 characters"))]
    pub client_number: Option<String>,

    #[validate(range(min = 0.0, message = "Amount must not be negative"))]
    pub amount: Option<f64>,

    pub booking_date: Option<NaiveDate>,

    /// Lifecycle status: pending, confirmed or cancelled
    pub status: Option<String>,
}
