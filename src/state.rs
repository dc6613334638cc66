use std::sync::Arc;

use anyhow::Context;
use coffeeshop_auth::{TokenVerifier, verifier_from_config};
use coffeeshop_config::{AuthConfig, CorsConfig, DatabaseConfig};
use coffeeshop_db::{init_db_pool, run_migrations};

use crate::modules::drinks::repository::{DrinkRepository, PgDrinkRepository};

/// Shared, read-only request state. Cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    pub drinks: Arc<dyn DrinkRepository>,
    pub verifier: Arc<dyn TokenVerifier>,
    pub cors_config: CorsConfig,
}

impl AppState {
    pub fn new(
        drinks: Arc<dyn DrinkRepository>,
        verifier: Arc<dyn TokenVerifier>,
        cors_config: CorsConfig,
    ) -> Self {
        Self {
            drinks,
            verifier,
            cors_config,
        }
    }
}

/// Builds the production state: Postgres-backed repository and the verifier
/// selected by [`AuthConfig`].
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let pool = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;

    if database_config.run_migrations {
        run_migrations(&pool)
            .await
            .context("Failed to run migrations")?;
    }

    let verifier = verifier_from_config(&AuthConfig::from_env())
        .await
        .context("Failed to initialize token verifier")?;

    Ok(AppState::new(
        Arc::new(PgDrinkRepository::new(pool)),
        verifier,
        CorsConfig::from_env(),
    ))
}
