//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use estate_common::{AppConfig, AppError, JwtService};
use estate_db::{
    create_pool, PgPropertyRepository, PgRoleAssignmentRepository, PgRoleRepository,
    PgSaleRepository, PgTokenRepository, PgUserRepository,
};
use estate_service::{ServiceContextBuilder, SweeperHandle, TokenSweeper};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    // Health probes stay outside the rate limiter
    api.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = estate_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Bring the schema up to date
    estate_db::run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
    ));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let role_repo = Arc::new(PgRoleRepository::new(pool.clone()));
    let assignment_repo = Arc::new(PgRoleAssignmentRepository::new(pool.clone()));
    let token_repo = Arc::new(PgTokenRepository::new(pool.clone()));
    let property_repo = Arc::new(PgPropertyRepository::new(pool.clone()));
    let sale_repo = Arc::new(PgSaleRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .role_repo(role_repo)
        .assignment_repo(assignment_repo)
        .token_repo(token_repo)
        .property_repo(property_repo)
        .sale_repo(sale_repo)
        .jwt_service(jwt_service)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Spawn the background token sweeper for this state
pub fn spawn_sweeper(state: &AppState) -> SweeperHandle {
    let interval = Duration::from_secs(state.config().sweeper.interval_secs);
    TokenSweeper::new(state.service_context().clone(), interval).spawn()
}

/// Run the HTTP server until shutdown is requested
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Start the token sweeper alongside the HTTP server
    let sweeper = spawn_sweeper(&state);

    // Build application
    let app = create_app(state);

    // Run server
    let result = run_server(app, addr).await;

    // Stop the sweeper once the server is down
    sweeper.shutdown().await;

    result
}
