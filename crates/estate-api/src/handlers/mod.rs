//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod health;
pub mod properties;
pub mod roles;
pub mod sales;
pub mod users;
