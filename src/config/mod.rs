//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `HOTEL_BOOKING` prefix
//! and `__` between nesting levels.
//!
//! # Example
//!
//! ```no_run
//! use hotel_booking::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod auth;
mod database;
mod error;
mod server;

pub use auth::{AuthConfig, MIN_PRODUCTION_SECRET_LEN};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Listener, environment and logging
    #[serde(default)]
    pub server: ServerConfig,

    /// PostgreSQL pool
    pub database: DatabaseConfig,

    /// Session token verification
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// 1. Loads `.env` if present (development)
    /// 2. Reads variables with the `HOTEL_BOOKING` prefix
    /// 3. Splits nested keys on `__`
    ///
    /// - `HOTEL_BOOKING__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `HOTEL_BOOKING__DATABASE__URL=...` -> `database.url = ...`
    /// - `HOTEL_BOOKING__AUTH__JWT_SECRET=...` -> `auth.jwt_secret = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required variable is missing or a value
    /// cannot be parsed into its field type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("HOTEL_BOOKING")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Semantic validation of every section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate(&self.server.environment)?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::env;
    use std::sync::Mutex;

    // Env vars are process-global; serialize the tests that touch them.
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "HOTEL_BOOKING__DATABASE__URL",
        "HOTEL_BOOKING__AUTH__JWT_SECRET",
        "HOTEL_BOOKING__SERVER__PORT",
        "HOTEL_BOOKING__SERVER__ENVIRONMENT",
        "HOTEL_BOOKING__DATABASE__RUN_MIGRATIONS",
    ];

    fn set_minimal_env() {
        env::set_var("HOTEL_BOOKING__DATABASE__URL", "postgresql://test@localhost/booking");
        env::set_var("HOTEL_BOOKING__AUTH__JWT_SECRET", "top-secret");
    }

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    fn load_with(extra: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        set_minimal_env();
        for (key, value) in extra {
            env::set_var(key, value);
        }
        let result = AppConfig::load();
        clear_env();
        result
    }

    #[test]
    fn loads_minimal_environment_with_defaults() {
        let config = load_with(&[]).unwrap();

        assert_eq!(config.database.url, "postgresql://test@localhost/booking");
        assert_eq!(config.auth.jwt_secret.expose_secret(), "top-secret");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.environment, Environment::Development);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn nested_overrides_are_parsed() {
        let config = load_with(&[
            ("HOTEL_BOOKING__SERVER__PORT", "3000"),
            ("HOTEL_BOOKING__DATABASE__RUN_MIGRATIONS", "true"),
        ])
        .unwrap();

        assert_eq!(config.server.port, 3000);
        assert!(config.database.run_migrations);
    }

    #[test]
    fn production_rejects_short_secret() {
        let config = load_with(&[("HOTEL_BOOKING__SERVER__ENVIRONMENT", "production")]).unwrap();

        assert!(config.is_production());
        assert_eq!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN))
        );
    }

    #[test]
    fn missing_secret_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        env::set_var("HOTEL_BOOKING__DATABASE__URL", "postgresql://test@localhost/booking");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }
}
