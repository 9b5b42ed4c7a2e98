//! Model to entity mappers
//!
//! Conversions between database models and domain entities (estate-core).
//! Rows with stored status strings convert via `TryFrom`, surfacing a
//! `DomainError::InvalidStatus` for corrupted data instead of guessing.

mod active_token;
mod property;
mod role;
mod role_assignment;
mod sale_booking;
mod user;
