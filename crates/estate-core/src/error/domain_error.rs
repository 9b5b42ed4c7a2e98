//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Role not found: {0}")]
    RoleNotFound(i64),

    #[error("Role assignment not found: {0}")]
    RoleAssignmentNotFound(i64),

    #[error("Session not found: {0}")]
    SessionNotFound(String),

    #[error("Property not found: {0}")]
    PropertyNotFound(i64),

    #[error("Sale booking not found: {0}")]
    BookingNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Invalid status value: {0}")]
    InvalidStatus(String),

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Email already in use")]
    EmailAlreadyExists,

    #[error("Role name already in use")]
    RoleNameExists,

    #[error("Role already assigned to this user")]
    RoleAlreadyAssigned,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::RoleNotFound(_) => "UNKNOWN_ROLE",
            Self::RoleAssignmentNotFound(_) => "UNKNOWN_ROLE_ASSIGNMENT",
            Self::SessionNotFound(_) => "UNKNOWN_SESSION",
            Self::PropertyNotFound(_) => "UNKNOWN_PROPERTY",
            Self::BookingNotFound(_) => "UNKNOWN_BOOKING",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::WeakPassword(_) => "WEAK_PASSWORD",

            // Conflict
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::RoleNameExists => "ROLE_NAME_EXISTS",
            Self::RoleAlreadyAssigned => "ROLE_ALREADY_ASSIGNED",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::RoleNotFound(_)
                | Self::RoleAssignmentNotFound(_)
                | Self::SessionNotFound(_)
                | Self::PropertyNotFound(_)
                | Self::BookingNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::InvalidStatus(_)
                | Self::WeakPassword(_)
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::EmailAlreadyExists | Self::RoleNameExists | Self::RoleAlreadyAssigned
        )
    }
}
