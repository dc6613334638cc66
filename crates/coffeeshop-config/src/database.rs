use std::env;

use crate::ConfigError;

/// PostgreSQL connection settings.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: connection string (required)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
/// - `RUN_MIGRATIONS`: apply embedded migrations on startup (default: true)
#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env::var("DATABASE_URL").map_err(|_| ConfigError::Missing("DATABASE_URL"))?;

        let max_connections = match env::var("DATABASE_MAX_CONNECTIONS") {
            Ok(value) => value.parse().map_err(|_| ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                value,
            })?,
            Err(_) => 5,
        };

        let run_migrations = env::var("RUN_MIGRATIONS")
            .map(|value| parse_flag(&value))
            .unwrap_or(true);

        Ok(Self {
            url,
            max_connections,
            run_migrations,
        })
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}
