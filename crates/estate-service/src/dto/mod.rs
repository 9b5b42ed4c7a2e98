//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    AssignRoleRequest, CreateBookingRequest, CreatePropertyRequest, CreateRoleRequest,
    CreateUserRequest, LoginRequest, UpdateBookingRequest, UpdatePasswordRequest,
    UpdatePropertyRequest, UpdateRoleRequest, UpdateUserRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, AssignmentResponse, AuthResponse, BookingResponse, CurrentUserResponse,
    DeletedResponse, HealthResponse, MessageResponse, PropertyResponse, RoleResponse,
    SweepReport, UserResponse,
};
