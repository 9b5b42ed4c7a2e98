//! Estate API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p estate-api
//! ```
//!
//! Configuration is loaded from environment variables.

use estate_common::{try_init_tracing, AppConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Initialize tracing
    if let Err(e) = try_init_tracing() {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    // Run the server
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Estate API Server...");

    // Load configuration
    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        env = ?config.app.env,
        port = config.api.port,
        sweeper_interval_secs = config.sweeper.interval_secs,
        "Configuration loaded"
    );

    // Run the server
    estate_api::run(config).await?;

    Ok(())
}
