//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section. The merged [`AppConfig`] is loaded once at startup and handed to
//! components at construction; nothing reads configuration afterwards.

pub mod app;
pub mod auth;
pub mod bootstrap;
pub mod database;
pub mod events;
pub mod logging;
pub mod retry;
pub mod storage;

use serde::{Deserialize, Serialize};

use self::app::ServerConfig;
use self::auth::AuthConfig;
use self::bootstrap::BootstrapConfig;
use self::database::DatabaseConfig;
use self::events::EventsConfig;
use self::logging::LoggingConfig;
use self::retry::RetryConfig;
use self::storage::StorageConfig;

use crate::error::AppError;

/// Environment variable prefix for configuration overrides
/// (`EMS__AUTH__JWT_SECRET=...`).
pub const ENV_PREFIX: &str = "EMS";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Token signing and password hashing settings.
    pub auth: AuthConfig,
    /// Archive object storage settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Domain event topic settings.
    #[serde(default)]
    pub events: EventsConfig,
    /// Backoff settings for archive and publish.
    #[serde(default)]
    pub retry: RetryConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Initial staff account.
    #[serde(default)]
    pub bootstrap: BootstrapConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges the default configuration with an environment-specific overlay
    /// and environment variables prefixed with `EMS__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
