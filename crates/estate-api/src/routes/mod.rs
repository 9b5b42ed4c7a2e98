//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{auth, health, properties, roles, sales, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(role_routes())
        .merge(property_routes())
        .merge(sale_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/auth/me", get(auth::current_user))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users", post(users::create_user))
        .route("/users/:user_id", get(users::get_user))
        .route("/users/:user_id", patch(users::update_user))
        .route("/users/:user_id", delete(users::delete_user))
        .route("/users/:user_id/password", put(users::update_password))
        .route("/users/:user_id/trash", post(users::trash_user))
        .route("/users/:user_id/roles", get(roles::user_assignments))
}

/// Role and assignment routes
fn role_routes() -> Router<AppState> {
    Router::new()
        // Assignments first: "/roles/assignments" must not be captured by
        // the "/roles/:role_id" path parameter
        .route("/roles/assignments", get(roles::list_assignments))
        .route("/roles/assignments", post(roles::assign_role))
        .route(
            "/roles/assignments/:assignment_id",
            delete(roles::unassign_role),
        )
        // Role CRUD
        .route("/roles", get(roles::list_roles))
        .route("/roles", post(roles::create_role))
        .route("/roles/:role_id", get(roles::get_role))
        .route("/roles/:role_id", patch(roles::update_role))
        .route("/roles/:role_id", delete(roles::delete_role))
}

/// Property routes
fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/properties", get(properties::list_properties))
        .route("/properties", post(properties::create_property))
        .route("/properties/:property_id", get(properties::get_property))
        .route("/properties/:property_id", patch(properties::update_property))
        .route("/properties/:property_id", delete(properties::delete_property))
}

/// Sale booking routes
fn sale_routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(sales::list_bookings))
        .route("/sales", post(sales::create_booking))
        .route("/sales/:booking_id", get(sales::get_booking))
        .route("/sales/:booking_id", patch(sales::update_booking))
        .route("/sales/:booking_id", delete(sales::delete_booking))
}
