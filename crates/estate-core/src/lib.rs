//! # estate-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{ActiveToken, Property, Role, RoleAssignment, SaleBooking, User};
pub use error::DomainError;
pub use traits::{
    PropertyRepository, RepoResult, RoleAssignmentRepository, RoleRepository, SaleRepository,
    TokenRepository, UserRepository,
};
pub use value_objects::{BookingStatus, PropertyStatus, StatusParseError, UserStatus};
