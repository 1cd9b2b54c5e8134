//! Application configuration
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `HEALTH_HUB` prefix and
//! `__` between nested keys.
//!
//! # Example
//!
//! ```no_run
//! use health_hub::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod ai;
mod auth;
mod database;
mod error;
mod server;
mod speech;

pub use ai::{AiConfig, AiProvider};
pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};
pub use speech::SpeechConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Record store. Without it the server keeps records in memory.
    pub database: Option<DatabaseConfig>,

    pub auth: AuthConfig,

    #[serde(default)]
    pub ai: AiConfig,

    #[serde(default)]
    pub speech: SpeechConfig,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Reads `.env` when present, then `HEALTH_HUB__*` variables:
    ///
    /// - `HEALTH_HUB__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HEALTH_HUB__DATABASE__URL=...` -> `database.url = ...`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HEALTH_HUB")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let environment = self.server.environment;
        self.server.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        } else if environment == Environment::Production {
            return Err(ValidationError::MissingRequired("DATABASE__URL"));
        }
        self.auth.validate(environment)?;
        self.ai.validate(environment)?;
        self.speech.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
