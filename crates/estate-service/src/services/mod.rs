//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod context;
pub mod error;
pub mod property;
pub mod role;
pub mod sale;
pub mod token_sweeper;
pub mod user;

// Re-export all services for convenience
pub use auth::AuthService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use property::PropertyService;
pub use role::RoleService;
pub use sale::SaleService;
pub use token_sweeper::{SweeperHandle, TokenSweeper};
pub use user::UserService;
