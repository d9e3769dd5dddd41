//! Application configuration schemas.
//!
//! Configuration is merged from `config/default.toml`, an environment
//! overlay `config/{env}.toml`, and `DEVWANT_*` environment variables.

pub mod app;
pub mod auth;
pub mod database;
pub mod logging;
pub mod thumbnail;

use serde::{Deserialize, Serialize};

pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::{AuthConfig, OAuthClientConfig, OAuthConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::thumbnail::ThumbnailConfig;

use crate::error::AppError;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Token and admin settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Social login provider credentials.
    #[serde(default)]
    pub oauth: OAuthConfig,
    /// Post thumbnail storage.
    #[serde(default)]
    pub thumbnail: ThumbnailConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the given environment name.
    pub fn load(env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("DEVWANT")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("auth.admin_emails")
                    .with_list_parse_key("server.cors.allowed_origins")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}
