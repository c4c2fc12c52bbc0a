//! Tracing subscriber bootstrap

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LoggingConfig};

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter '{directive}': {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("failed to install tracing subscriber: {0}")]
    Install(String),
}

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `config.filter`. Returns
/// [`LoggingError::Install`] if a global subscriber is already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), LoggingError> {
    let filter = build_filter(config)?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.ansi)
        .with_file(config.source_location)
        .with_line_number(config.source_location);

    let installed = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    installed.map_err(|e| LoggingError::Install(e.to_string()))
}

fn build_filter(config: &LoggingConfig) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.filter).map_err(|e| LoggingError::InvalidFilter {
        directive: config.filter.clone(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_accepts_directives() {
        let config = LoggingConfig {
            filter: String::from("em_core=debug,warn"),
            ..Default::default()
        };
        assert!(build_filter(&config).is_ok());
    }

    #[test]
    fn test_second_init_reports_error() {
        let config = LoggingConfig {
            format: LogFormat::Compact,
            ansi: false,
            ..Default::default()
        };
        let _ = init_tracing(&config);
        assert!(matches!(init_tracing(&config), Err(LoggingError::Install(_))));
    }
}
