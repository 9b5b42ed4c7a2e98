//! Domain entities - core business objects

mod active_token;
mod property;
mod role;
mod sale_booking;
mod user;

pub use active_token::ActiveToken;
pub use property::Property;
pub use role::{Role, RoleAssignment};
pub use sale_booking::SaleBooking;
pub use user::User;
