//! Shared utilities and common types for EduMarket
//!
//! This crate provides common functionality used by the form layer:
//! - Locale types
//! - Configuration types and loading
//! - Tracing bootstrap
//! - Utility functions (phone normalization, text helpers)

pub mod config;
pub mod logging;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use crate::config::{
    AppConfig, ConfigError, Environment, I18nConfig, LogFormat, LoggingConfig, ValidationConfig,
};
pub use crate::logging::{init_tracing, LoggingError};
pub use crate::types::{Locale, LocalePreference};
pub use crate::utils::{phone, text};
