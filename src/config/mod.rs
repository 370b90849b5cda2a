//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `FEEDBACK_PORTAL`
//! prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use feedback_portal::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod database;
mod error;
mod events;
mod server;

pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use events::EventsConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (host, port, environment)
    #[serde(default)]
    pub server: ServerConfig,

    /// Feedback store (PostgreSQL)
    pub database: DatabaseConfig,

    /// Submission event channel (Redis)
    pub events: EventsConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `FEEDBACK_PORTAL` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `FEEDBACK_PORTAL__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `FEEDBACK_PORTAL__DATABASE__URL=...` -> `database.url = ...`
    /// - `FEEDBACK_PORTAL__EVENTS__CHANNEL=...` -> `events.channel = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or values
    /// cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("FEEDBACK_PORTAL")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.events.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn set_minimal_env() {
        env::set_var(
            "FEEDBACK_PORTAL__DATABASE__URL",
            "postgresql://test@localhost/feedback",
        );
        env::set_var("FEEDBACK_PORTAL__EVENTS__URL", "redis://localhost:6379");
    }

    fn clear_env() {
        for key in [
            "FEEDBACK_PORTAL__DATABASE__URL",
            "FEEDBACK_PORTAL__EVENTS__URL",
            "FEEDBACK_PORTAL__EVENTS__CHANNEL",
            "FEEDBACK_PORTAL__SERVER__PORT",
            "FEEDBACK_PORTAL__SERVER__ENVIRONMENT",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        let result = AppConfig::load();
        clear_env();

        let config = result.expect("config should load");
        assert_eq!(config.database.url, "postgresql://test@localhost/feedback");
        assert_eq!(config.events.url, "redis://localhost:6379");
        assert_eq!(config.events.channel, "feedback-submitted");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_database_section_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("FEEDBACK_PORTAL__EVENTS__URL", "redis://localhost:6379");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        set_minimal_env();
        env::set_var("FEEDBACK_PORTAL__SERVER__PORT", "3000");
        env::set_var("FEEDBACK_PORTAL__SERVER__ENVIRONMENT", "production");
        env::set_var("FEEDBACK_PORTAL__EVENTS__CHANNEL", "feedback-audit");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.is_production());
        assert_eq!(config.events.channel, "feedback-audit");
    }
}
