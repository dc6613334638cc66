//! # Coffee Shop Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`auth`]: token verification (Auth0 domain, audience, shared secret)
//! - [`cors`]: allowed CORS origins
//! - [`database`]: PostgreSQL connection settings
//! - [`server`]: listen address
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_config::{AuthConfig, CorsConfig, DatabaseConfig, ServerConfig};
//!
//! let auth_config = AuthConfig::from_env();
//! let database_config = DatabaseConfig::from_env()?;
//! ```

pub mod auth;
pub mod cors;
pub mod database;
pub mod server;

pub use auth::AuthConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use server::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),
    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
