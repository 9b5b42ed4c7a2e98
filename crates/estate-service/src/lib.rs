//! # estate-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, PropertyService, RoleService, SaleService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, SweeperHandle, TokenSweeper, UserService,
};
