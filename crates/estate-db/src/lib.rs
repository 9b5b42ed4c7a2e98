//! # estate-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `estate-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - Repository implementations, including the transactional cascade delete
//!   of a user and its role assignments, and the token sweeper's bulk passes

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgPropertyRepository, PgRoleAssignmentRepository, PgRoleRepository, PgSaleRepository,
    PgTokenRepository, PgUserRepository,
};
