//! Todo Service - Main Application Entry Point
//!
//! # Startup Flow
//!
//! 1. Load configuration from environment variables
//! 2. Create the database pool (an unreachable database is logged, not fatal)
//! 3. Run database migrations if the database is reachable
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

use todo_web_server::{AppState, config::Config, db, router, store::PgStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    let pool = db::connect(&config.database_url).await?;

    let app = router(AppState::new(PgStore::new(pool)));

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server running on {}", addr);

    // Each request is handled on its own tokio task
    axum::serve(listener, app).await?;

    Ok(())
}
