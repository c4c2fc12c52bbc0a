//! Configuration module
//!
//! - `environment` - Environment detection and logging configuration
//! - `validation` - Limits applied by the form validators
//!
//! Values are layered with the `config` crate: built-in defaults, then
//! `config/default.toml`, then `config/<environment>.toml`, then
//! `EDU_`-prefixed environment variables (`EDU_VALIDATION__PASSWORD_MIN_LENGTH=10`).

pub mod environment;
pub mod validation;

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::types::Locale;

pub use environment::{Environment, LogFormat, LoggingConfig, ENVIRONMENT_VARS};
pub use validation::ValidationConfig;

/// Default directory searched for configuration files
pub const CONFIG_DIR: &str = "config";

/// Prefix for environment variable overrides
pub const ENV_PREFIX: &str = "EDU";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid configuration value for {field}: {reason}")]
    Invalid { field: String, reason: String },
}

impl ConfigError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Localization settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Locale used when a request carries no preference
    #[serde(default)]
    pub default_locale: Locale,
}

impl I18nConfig {
    /// Locale for a request: the first supported `Accept-Language` entry,
    /// else the configured default
    pub fn locale_for(&self, accept_language: Option<&str>) -> Locale {
        accept_language
            .and_then(Locale::from_accept_language)
            .unwrap_or(self.default_locale)
    }
}

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Validation limits
    #[serde(default)]
    pub validation: ValidationConfig,

    /// Localization settings
    #[serde(default)]
    pub i18n: I18nConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl AppConfig {
    /// Built-in defaults for an environment
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            environment,
            logging: LoggingConfig::for_environment(environment),
            validation: ValidationConfig::default(),
            i18n: I18nConfig::default(),
        }
    }

    /// Load configuration for the detected [`Environment`].
    ///
    /// `.env` and `.env.<environment>` are read first; variables already set
    /// in the process are never overridden.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let environment = Environment::detect();
        dotenvy::from_filename(environment.dotenv_file()).ok();

        Self::load_from(Path::new(CONFIG_DIR), environment)
    }

    /// Load configuration from an explicit directory
    pub fn load_from(dir: &Path, environment: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::for_environment(environment);
        let default_file = dir.join("default");
        let env_file = dir.join(environment.name());

        let loaded: AppConfig = ::config::Config::builder()
            .add_source(::config::Config::try_from(&defaults)?)
            .add_source(::config::File::with_name(&default_file.to_string_lossy()).required(false))
            .add_source(::config::File::with_name(&env_file.to_string_lossy()).required(false))
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        let config = Self {
            environment,
            ..loaded
        };
        config.validate()?;

        tracing::debug!(
            environment = %config.environment,
            default_locale = %config.i18n.default_locale,
            "Configuration loaded"
        );

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validation.validate()
    }
}
