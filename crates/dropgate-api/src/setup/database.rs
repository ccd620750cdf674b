//! Database setup and initialization
//!
//! The pool is created lazily: a down metadata store must never block startup
//! or the storage-facing operations. Connections are acquired per call.

use anyhow::{Context, Result};
use dropgate_core::Config;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use std::path::Path;
use std::time::Duration;

/// Create the (lazy) connection pool and apply migrations best-effort.
pub async fn setup_database(config: &Config) -> Result<PgPool> {
    let connect_options: PgConnectOptions = config
        .database_url()
        .parse()
        .context("Invalid database URL")?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections())
        .acquire_timeout(Duration::from_secs(config.db_timeout_seconds()))
        .connect_lazy_with(connect_options);

    tracing::info!(
        max_connections = config.db_max_connections(),
        "Database pool created (lazy)"
    );

    // Migrations run when the store is reachable; failure is logged, not
    // fatal - the recorder degrades instead.
    let migrations_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../migrations");
    match sqlx::migrate::Migrator::new(migrations_dir).await {
        Ok(migrator) => match migrator.run(&pool).await {
            Ok(()) => tracing::info!("Database migrations applied"),
            Err(e) => tracing::warn!(
                error = %e,
                "Skipping migrations; metadata store unreachable or behind"
            ),
        },
        Err(e) => tracing::warn!(error = %e, "Failed to load migrations"),
    }

    Ok(pool)
}
