//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in estate-core.
//! Each repository handles database operations for a specific domain entity.

mod error;
mod property;
mod role;
mod role_assignment;
mod sale;
mod token;
mod user;

pub use property::PgPropertyRepository;
pub use role::PgRoleRepository;
pub use role_assignment::PgRoleAssignmentRepository;
pub use sale::PgSaleRepository;
pub use token::PgTokenRepository;
pub use user::PgUserRepository;
