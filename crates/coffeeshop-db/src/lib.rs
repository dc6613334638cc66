//! # Coffee Shop DB
//!
//! PostgreSQL pool initialization and the embedded schema migrations.
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_config::DatabaseConfig;
//! use coffeeshop_db::{init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()?).await?;
//! run_migrations(&pool).await?;
//! ```

use coffeeshop_config::DatabaseConfig;
use sqlx::migrate::{MigrateError, Migrator};
use sqlx::postgres::PgPoolOptions;
use tracing::{info, instrument};

pub use sqlx::PgPool;

/// Schema migrations, embedded at compile time from the workspace
/// `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Opens a connection pool sized by `config.max_connections`.
#[instrument(skip(config))]
pub async fn init_db_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );

    Ok(pool)
}

#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrateError> {
    MIGRATOR.run(pool).await?;
    info!("Migrations applied");
    Ok(())
}
