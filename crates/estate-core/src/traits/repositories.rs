//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::entities::{Property, Role, SaleBooking, User};
use crate::error::DomainError;
use crate::value_objects::{BookingStatus, PropertyStatus, UserStatus};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

/// Fields for inserting a new user row
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: Option<String>,
    pub email: String,
    pub number: Option<String>,
    pub alt_number: Option<String>,
    pub password_hash: String,
    pub img: Option<String>,
    pub status: UserStatus,
    pub address: Option<String>,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List all users
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by email (login key)
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if email is already taken
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Insert a new user, returning the generated identifier
    async fn create(&self, user: &NewUser) -> RepoResult<i64>;

    /// Update an existing user's mutable fields
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Update password hash
    async fn update_password(&self, id: i64, password_hash: &str) -> RepoResult<()>;

    /// Transition the lifecycle status (soft delete = `trash`)
    async fn set_status(&self, id: i64, status: UserStatus) -> RepoResult<()>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: i64) -> RepoResult<Option<String>>;

    /// Hard-delete the user together with every role assignment that
    /// references it, atomically: both deletions commit together or neither
    /// takes effect. A user without assignments is deleted normally; a
    /// missing user id rolls back and reports not-found.
    async fn delete_with_roles(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Role Repository
// ============================================================================

#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// List all roles
    async fn find_all(&self) -> RepoResult<Vec<Role>>;

    /// Find role by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Role>>;

    /// Insert a new role, returning the generated identifier
    async fn create(&self, name: &str) -> RepoResult<i64>;

    /// Update an existing role
    async fn update(&self, role: &Role) -> RepoResult<()>;

    /// Delete a role (fails while assignments still reference it)
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Role Assignment Repository
// ============================================================================

/// Assignment row joined with user and role names for listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentDetail {
    pub id: i64,
    pub user_id: i64,
    pub role_id: i64,
    pub user_name: Option<String>,
    pub user_email: String,
    pub role_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[async_trait]
pub trait RoleAssignmentRepository: Send + Sync {
    /// List all assignments with joined user/role names
    async fn find_all(&self) -> RepoResult<Vec<AssignmentDetail>>;

    /// List assignments for a single user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<AssignmentDetail>>;

    /// Role names held by a user (for token claims and authorization)
    async fn role_names(&self, user_id: i64) -> RepoResult<Vec<String>>;

    /// Assign a role to a user, returning the generated assignment id.
    /// Rejects a duplicate (user, role) pair with a conflict.
    async fn assign(&self, user_id: i64, role_id: i64) -> RepoResult<i64>;

    /// Remove a single assignment by its own id
    async fn remove(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Token Repository
// ============================================================================

/// Fields for recording a freshly issued session
#[derive(Debug, Clone)]
pub struct NewSession {
    pub user_id: i64,
    pub session_id: String,
    pub access_expires_at: DateTime<Utc>,
}

#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Record a new session at login
    async fn insert(&self, session: &NewSession) -> RepoResult<()>;

    /// Check whether a session has been blacklisted
    async fn is_blacklisted(&self, session_id: &str) -> RepoResult<bool>;

    /// Refresh `last_activity` for a session; a missing row is a no-op
    async fn touch_activity(&self, session_id: &str) -> RepoResult<()>;

    /// Blacklist a single session (logout)
    async fn blacklist_session(&self, session_id: &str) -> RepoResult<()>;

    /// Sweeper expire pass: blacklist every token whose access validity has
    /// passed and whose `last_activity` is still earlier than that expiry.
    /// A session whose activity moved past its own expiry counts as renewed
    /// and is skipped. Returns the number of rows affected; zero is a valid
    /// outcome.
    async fn blacklist_expired(&self) -> RepoResult<u64>;

    /// Sweeper purge pass: delete every blacklisted token unconditionally.
    /// Returns the number of rows affected; zero is a valid outcome.
    async fn purge_blacklisted(&self) -> RepoResult<u64>;
}

// ============================================================================
// Property Repository
// ============================================================================

/// Fields for inserting a new property listing
#[derive(Debug, Clone)]
pub struct NewProperty {
    pub title: String,
    pub description: Option<String>,
    pub price: f64,
    pub address: Option<String>,
    pub img: Option<String>,
    pub status: PropertyStatus,
}

#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List all property listings
    async fn find_all(&self) -> RepoResult<Vec<Property>>;

    /// Find property by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Property>>;

    /// Insert a new listing, returning the generated identifier
    async fn create(&self, property: &NewProperty) -> RepoResult<i64>;

    /// Update an existing listing
    async fn update(&self, property: &Property) -> RepoResult<()>;

    /// Delete a listing
    async fn delete(&self, id: i64) -> RepoResult<()>;
}

// ============================================================================
// Sale Booking Repository
// ============================================================================

/// Fields for inserting a new sale booking
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub property_id: Option<i64>,
    pub client_name: String,
    pub client_email: Option<String>,
    pub client_number: Option<String>,
    pub amount: f64,
    pub booking_date: NaiveDate,
    pub status: BookingStatus,
}

#[async_trait]
pub trait SaleRepository: Send + Sync {
    /// List all sale bookings
    async fn find_all(&self) -> RepoResult<Vec<SaleBooking>>;

    /// Find booking by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<SaleBooking>>;

    /// Insert a new booking, returning the generated identifier
    async fn create(&self, booking: &NewBooking) -> RepoResult<i64>;

    /// Update an existing booking
    async fn update(&self, booking: &SaleBooking) -> RepoResult<()>;

    /// Delete a booking
    async fn delete(&self, id: i64) -> RepoResult<()>;
}
