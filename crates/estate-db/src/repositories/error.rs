//! Error handling utilities for repositories

use estate_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: i64) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "role not found" error
pub fn role_not_found(id: i64) -> DomainError {
    DomainError::RoleNotFound(id)
}

/// Create a "role assignment not found" error
pub fn assignment_not_found(id: i64) -> DomainError {
    DomainError::RoleAssignmentNotFound(id)
}

/// Create a "session not found" error
pub fn session_not_found(session_id: &str) -> DomainError {
    DomainError::SessionNotFound(session_id.to_string())
}

/// Create a "property not found" error
pub fn property_not_found(id: i64) -> DomainError {
    DomainError::PropertyNotFound(id)
}

/// Create a "sale booking not found" error
pub fn booking_not_found(id: i64) -> DomainError {
    DomainError::BookingNotFound(id)
}
