//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `BURHAN_SCALE` prefix and nested values use double underscores as separators.
//!
//! Scoring rules are fixed and never read from configuration.
//!
//! # Example
//!
//! ```no_run
//! use burhan_scale::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Data stored under {}", config.storage.data_dir.display());
//! ```

mod error;
mod storage;
mod telemetry;

pub use error::{ConfigError, ValidationError};
pub use storage::{StorageBackend, StorageConfig};
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Application environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Test,
    Production,
}

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable config.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Logging (filter, output format)
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// Rubric and history persistence
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `BURHAN_SCALE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `BURHAN_SCALE__TELEMETRY__LOG_LEVEL=debug` -> `telemetry.log_level = "debug"`
    /// - `BURHAN_SCALE__STORAGE__BACKEND=memory` -> `storage.backend = Memory`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("BURHAN_SCALE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.telemetry.validate()?;
        self.storage.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "BURHAN_SCALE__ENVIRONMENT",
        "BURHAN_SCALE__TELEMETRY__LOG_LEVEL",
        "BURHAN_SCALE__TELEMETRY__JSON",
        "BURHAN_SCALE__STORAGE__BACKEND",
        "BURHAN_SCALE__STORAGE__DATA_DIR",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_nested_values() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BURHAN_SCALE__TELEMETRY__LOG_LEVEL", "warn");
        env::set_var("BURHAN_SCALE__TELEMETRY__JSON", "true");
        env::set_var("BURHAN_SCALE__STORAGE__BACKEND", "memory");
        env::set_var("BURHAN_SCALE__STORAGE__DATA_DIR", "/var/lib/burhan");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.telemetry.log_level, "warn");
        assert!(config.telemetry.json);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert_eq!(config.storage.data_dir, PathBuf::from("/var/lib/burhan"));
    }

    #[test]
    fn test_is_production() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BURHAN_SCALE__ENVIRONMENT", "production");
        let result = AppConfig::load();
        clear_env();

        assert!(result.unwrap().is_production());
    }

    #[test]
    fn test_unknown_backend_fails_to_load() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("BURHAN_SCALE__STORAGE__BACKEND", "postgres");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_validate_rejects_bad_log_level() {
        let config = AppConfig {
            telemetry: TelemetryConfig {
                log_level: "burhan_scale=loud".to_string(),
                json: false,
            },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
