//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating a PostgreSQL connection pool that survives an unreachable database
//! - Running database migrations automatically

use sqlx::{Pool, Postgres, postgres::PgPoolOptions};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create the process-wide connection pool.
///
/// The pool is created lazily, so an unreachable database at startup is not fatal. One
/// connection is attempted immediately to report the outcome:
/// - on success the migrations are run and `Database connected` is logged
/// - on failure the error is logged and the pool is returned anyway; requests will fail
///   at their first query until the database becomes reachable
///
/// # Configuration
///
/// - Maximum connections: 5
///
/// # Errors
///
/// Returns an error only if the connection string itself cannot be parsed.
pub async fn connect(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(database_url)?;

    match pool.acquire().await {
        Ok(_) => {
            tracing::info!("Database connected");

            match run_migrations(&pool).await {
                Ok(()) => tracing::info!("Database migrations complete"),
                Err(err) => tracing::error!(error = %err, "Database migration error"),
            }
        }
        Err(err) => tracing::error!(error = %err, "Database connection error"),
    }

    Ok(pool)
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each runs only once.
///
/// # Errors
///
/// Returns an error if:
/// - SQL syntax errors in migration files
/// - Database errors during migration execution
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds ./migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}
