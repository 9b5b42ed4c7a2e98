//! Service context - dependency container for services
//!
//! Holds all repositories and shared services needed by the business layer.

use std::sync::Arc;

use estate_common::auth::JwtService;
use estate_core::traits::{
    PropertyRepository, RoleAssignmentRepository, RoleRepository, SaleRepository,
    TokenRepository, UserRepository,
};
use estate_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - JWT service for authentication
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    role_repo: Arc<dyn RoleRepository>,
    assignment_repo: Arc<dyn RoleAssignmentRepository>,
    token_repo: Arc<dyn TokenRepository>,
    property_repo: Arc<dyn PropertyRepository>,
    sale_repo: Arc<dyn SaleRepository>,

    // Services
    jwt_service: Arc<JwtService>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        role_repo: Arc<dyn RoleRepository>,
        assignment_repo: Arc<dyn RoleAssignmentRepository>,
        token_repo: Arc<dyn TokenRepository>,
        property_repo: Arc<dyn PropertyRepository>,
        sale_repo: Arc<dyn SaleRepository>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            role_repo,
            assignment_repo,
            token_repo,
            property_repo,
            sale_repo,
            jwt_service,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the role repository
    pub fn role_repo(&self) -> &dyn RoleRepository {
        self.role_repo.as_ref()
    }

    /// Get the role assignment repository
    pub fn assignment_repo(&self) -> &dyn RoleAssignmentRepository {
        self.assignment_repo.as_ref()
    }

    /// Get the active token repository
    pub fn token_repo(&self) -> &dyn TokenRepository {
        self.token_repo.as_ref()
    }

    /// Get the property repository
    pub fn property_repo(&self) -> &dyn PropertyRepository {
        self.property_repo.as_ref()
    }

    /// Get the sale booking repository
    pub fn sale_repo(&self) -> &dyn SaleRepository {
        self.sale_repo.as_ref()
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    role_repo: Option<Arc<dyn RoleRepository>>,
    assignment_repo: Option<Arc<dyn RoleAssignmentRepository>>,
    token_repo: Option<Arc<dyn TokenRepository>>,
    property_repo: Option<Arc<dyn PropertyRepository>>,
    sale_repo: Option<Arc<dyn SaleRepository>>,
    jwt_service: Option<Arc<JwtService>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self {
            pool: None,
            user_repo: None,
            role_repo: None,
            assignment_repo: None,
            token_repo: None,
            property_repo: None,
            sale_repo: None,
            jwt_service: None,
        }
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn role_repo(mut self, repo: Arc<dyn RoleRepository>) -> Self {
        self.role_repo = Some(repo);
        self
    }

    pub fn assignment_repo(mut self, repo: Arc<dyn RoleAssignmentRepository>) -> Self {
        self.assignment_repo = Some(repo);
        self
    }

    pub fn token_repo(mut self, repo: Arc<dyn TokenRepository>) -> Self {
        self.token_repo = Some(repo);
        self
    }

    pub fn property_repo(mut self, repo: Arc<dyn PropertyRepository>) -> Self {
        self.property_repo = Some(repo);
        self
    }

    pub fn sale_repo(mut self, repo: Arc<dyn SaleRepository>) -> Self {
        self.sale_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| super::error::ServiceError::validation("pool is required"))?,
            self.user_repo
                .ok_or_else(|| super::error::ServiceError::validation("user_repo is required"))?,
            self.role_repo
                .ok_or_else(|| super::error::ServiceError::validation("role_repo is required"))?,
            self.assignment_repo.ok_or_else(|| {
                super::error::ServiceError::validation("assignment_repo is required")
            })?,
            self.token_repo
                .ok_or_else(|| super::error::ServiceError::validation("token_repo is required"))?,
            self.property_repo.ok_or_else(|| {
                super::error::ServiceError::validation("property_repo is required")
            })?,
            self.sale_repo
                .ok_or_else(|| super::error::ServiceError::validation("sale_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| super::error::ServiceError::validation("jwt_service is required"))?,
        ))
    }
}

impl Default for ServiceContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
