//! Database models - SQLx-compatible structs for PostgreSQL tables

mod active_token;
mod property;
mod role;
mod role_assignment;
mod sale_booking;
mod user;

pub use active_token::ActiveTokenModel;
pub use property::PropertyModel;
pub use role::RoleModel;
pub use role_assignment::{AssignmentDetailModel, RoleAssignmentModel};
pub use sale_booking::SaleBookingModel;
pub use user::UserModel;
