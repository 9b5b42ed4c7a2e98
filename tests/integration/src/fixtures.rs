//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests. Because the admin
//! panel has no public registration endpoint, the initial login user is
//! seeded directly through the repository layer.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use estate_common::hash_password;
use estate_core::traits::NewUser;
use estate_core::{
    DomainError, RoleAssignmentRepository, RoleRepository, UserRepository, UserStatus,
};
use estate_db::{
    create_pool, DatabaseConfig, PgRoleAssignmentRepository, PgRoleRepository, PgUserRepository,
};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::helpers::{assert_json, TestServer};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Password used for all seeded test accounts
pub const TEST_PASSWORD: &str = "TestPass123!";

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

async fn fixture_pool() -> Result<estate_db::PgPool> {
    let config = DatabaseConfig {
        max_connections: 2,
        ..DatabaseConfig::from_env()
    };
    Ok(create_pool(&config).await?)
}

/// Insert a login-capable user (no roles) directly into the database.
///
/// Returns the new user's id and email.
pub async fn seed_user() -> Result<(i64, String)> {
    let pool = fixture_pool().await?;
    let repo = PgUserRepository::new(pool);

    let suffix = unique_suffix();
    let email = format!("seeded{suffix}@example.com");
    let user = NewUser {
        name: Some(format!("Seeded User {suffix}")),
        email: email.clone(),
        number: None,
        alt_number: None,
        password_hash: hash_password(TEST_PASSWORD)?,
        img: None,
        status: UserStatus::Active,
        address: None,
    };
    let id = repo.create(&user).await?;

    Ok((id, email))
}

/// Insert a user holding the `admin` role. The role itself is shared
/// between test runs, so a name conflict means it already exists.
pub async fn seed_admin() -> Result<(i64, String)> {
    let (user_id, email) = seed_user().await?;

    let pool = fixture_pool().await?;
    let role_repo = PgRoleRepository::new(pool.clone());
    let assignment_repo = PgRoleAssignmentRepository::new(pool);

    let role_id = match role_repo.create("admin").await {
        Ok(id) => id,
        Err(DomainError::RoleNameExists) => role_repo
            .find_all()
            .await?
            .into_iter()
            .find(|r| r.name == "admin")
            .map(|r| r.id)
            .ok_or_else(|| anyhow::anyhow!("admin role vanished between create and lookup"))?,
        Err(e) => return Err(e.into()),
    };
    assignment_repo.assign(user_id, role_id).await?;

    Ok((user_id, email))
}

async fn login(server: &TestServer, email: String) -> Result<AuthResponse> {
    let request = LoginRequest {
        email,
        password: TEST_PASSWORD.to_string(),
    };
    let response = server.post("/api/v1/auth/login", &request).await?;
    assert_json(response, StatusCode::OK).await
}

/// Seed an admin and log in through the API, returning the auth payload
pub async fn login_seeded(server: &TestServer) -> Result<AuthResponse> {
    let (_, email) = seed_admin().await?;
    login(server, email).await
}

/// Seed a role-less user and log in, for exercising authorization limits
pub async fn login_member(server: &TestServer) -> Result<AuthResponse> {
    let (_, email) = seed_user().await?;
    login(server, email).await
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

/// Currently authenticated user
#[derive(Debug, Deserialize)]
pub struct CurrentUserResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub img: Option<String>,
    pub status: String,
    pub roles: Vec<String>,
}

/// Create user request
#[derive(Debug, Serialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: String,
    pub password: String,
    pub number: Option<String>,
    pub alt_number: Option<String>,
    pub img: Option<String>,
    pub address: Option<String>,
}

impl CreateUserRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: Some(format!("Test User {suffix}")),
            email: format!("test{suffix}@example.com"),
            password: TEST_PASSWORD.to_string(),
            number: Some("01700000000".to_string()),
            alt_number: None,
            img: None,
            address: Some("42 Test Street".to_string()),
        }
    }
}

/// Update user request
#[derive(Debug, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Update password request
#[derive(Debug, Serialize)]
pub struct UpdatePasswordRequest {
    pub password: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: Option<String>,
    pub email: String,
    pub number: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Deletion response
#[derive(Debug, Deserialize)]
pub struct DeletedResponse {
    pub id: i64,
    pub message: String,
}

/// Plain message response
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Create role request
#[derive(Debug, Serialize)]
pub struct CreateRoleRequest {
    pub name: String,
}

impl CreateRoleRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Role {suffix}"),
        }
    }
}

/// Role response
#[derive(Debug, Deserialize)]
pub struct RoleResponse {
    pub id: i64,
    pub name: String,
}

/// Assign role request
#[derive(Debug, Serialize)]
pub struct AssignRoleRequest {
    pub user_id: i64,
    pub role_id: i64,
}

/// Response for a fresh assignment
#[derive(Debug, Deserialize)]
pub struct AssignedResponse {
    pub id: i64,
}

/// Role assignment with joined names
#[derive(Debug, Deserialize)]
pub struct AssignmentResponse {
    pub id: i64,
    pub user_id: i64,
    pub role_id: i64,
    pub user_email: String,
    pub role_name: String,
}

/// Create property request
#[derive(Debug, Serialize)]
pub struct CreatePropertyRequest {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub address: Option<String>,
    pub img: Option<String>,
}

impl CreatePropertyRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Property {suffix}"),
            description: Some("Three bed apartment".to_string()),
            price: 250_000.0,
            address: Some("7 Harbour Road".to_string()),
            img: None,
        }
    }
}

/// Update property request
#[derive(Debug, Default, Serialize)]
pub struct UpdatePropertyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Property response
#[derive(Debug, Deserialize)]
pub struct PropertyResponse {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub status: String,
}

/// Create sale booking request
#[derive(Debug, Serialize)]
pub struct CreateBookingRequest {
    pub property_id: Option<i64>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_number: Option<String>,
    pub amount: f64,
    pub booking_date: String,
}

impl CreateBookingRequest {
    pub fn for_property(property_id: i64) -> Self {
        let suffix = unique_suffix();
        Self {
            property_id: Some(property_id),
            client_name: format!("Client {suffix}"),
            client_email: Some(format!("client{suffix}@example.com")),
            client_number: None,
            amount: 5_000.0,
            booking_date: "2026-09-15".to_string(),
        }
    }
}

/// Update sale booking request
#[derive(Debug, Default, Serialize)]
pub struct UpdateBookingRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Sale booking response
#[derive(Debug, Deserialize)]
pub struct BookingResponse {
    pub id: i64,
    pub property_id: Option<i64>,
    pub client_name: String,
    pub amount: f64,
    pub booking_date: String,
    pub status: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
