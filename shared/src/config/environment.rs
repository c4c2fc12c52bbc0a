//! Deployment environment and the log settings derived from it

use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

/// Variables consulted in order; the first recognized value wins
pub const ENVIRONMENT_VARS: [&str; 3] = ["EDUMARKET_ENV", "ENVIRONMENT", "APP_ENV"];

/// Crates whose events the default log filters raise above `warn`
const LIBRARY_TARGETS: [&str; 2] = ["em_core", "em_shared"];

/// Where the host application is running
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    pub const ALL: [Environment; 3] = [
        Environment::Development,
        Environment::Staging,
        Environment::Production,
    ];

    /// Canonical name, also the stem of `config/<name>.toml`
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Environment::Development => &["development", "dev", "local"],
            Environment::Staging => &["staging", "stage", "test"],
            Environment::Production => &["production", "prod"],
        }
    }

    /// Read [`ENVIRONMENT_VARS`] from the process, development if none is set
    pub fn detect() -> Self {
        Self::detect_from(|name| std::env::var(name).ok())
    }

    /// [`detect`](Self::detect) over any variable source. Unrecognized
    /// values are skipped, not treated as development.
    pub fn detect_from(lookup: impl Fn(&str) -> Option<String>) -> Self {
        ENVIRONMENT_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find_map(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Dotenv file loaded after `.env`
    pub fn dotenv_file(&self) -> String {
        format!(".env.{}", self.name())
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|env| env.aliases().contains(&value.as_str()))
            .ok_or_else(|| format!("Unknown environment: {}", s))
    }
}

/// How validation and mapping events are written
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `warn,em_core=debug`
    pub filter: String,

    pub format: LogFormat,

    /// Colored output
    pub ansi: bool,

    /// Include the file and line of each event
    pub source_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl LoggingConfig {
    /// Other targets stay at `warn`; only this library's crates are raised.
    /// Color is only enabled for human-readable output on a terminal.
    pub fn for_environment(environment: Environment) -> Self {
        let (library_level, format) = match environment {
            Environment::Development => ("debug", LogFormat::Pretty),
            Environment::Staging => ("info", LogFormat::Compact),
            Environment::Production => ("warn", LogFormat::Json),
        };

        Self {
            filter: library_filter(library_level),
            format,
            ansi: format != LogFormat::Json && std::io::stdout().is_terminal(),
            source_location: environment == Environment::Development,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Json,
    Pretty,
    Compact,
}

fn library_filter(level: &str) -> String {
    std::iter::once(String::from("warn"))
        .chain(LIBRARY_TARGETS.iter().map(|target| format!("{}={}", target, level)))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_environment_aliases() {
        assert_eq!(" Local ".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!("PROD".parse::<Environment>().unwrap(), Environment::Production);
        assert!("qa".parse::<Environment>().is_err());

        for env in Environment::ALL {
            assert_eq!(env.name().parse::<Environment>().unwrap(), env);
        }
    }

    #[test]
    fn test_detect_checks_variables_in_order() {
        let env = Environment::detect_from(vars(&[
            ("EDUMARKET_ENV", "staging"),
            ("ENVIRONMENT", "production"),
        ]));
        assert_eq!(env, Environment::Staging);

        let env = Environment::detect_from(vars(&[("EDUMARKET_ENV", "qa"), ("APP_ENV", "prod")]));
        assert_eq!(env, Environment::Production);

        assert_eq!(Environment::detect_from(vars(&[])), Environment::Development);
    }

    #[test]
    fn test_dotenv_file() {
        assert_eq!(Environment::Staging.dotenv_file(), ".env.staging");
    }

    #[test]
    fn test_logging_filters_target_library_crates() {
        let dev = LoggingConfig::for_environment(Environment::Development);
        assert_eq!(dev.filter, "warn,em_core=debug,em_shared=debug");
        assert_eq!(dev.format, LogFormat::Pretty);
        assert!(dev.source_location);

        let prod = LoggingConfig::for_environment(Environment::Production);
        assert_eq!(prod.filter, "warn,em_core=warn,em_shared=warn");
        assert_eq!(prod.format, LogFormat::Json);
        assert!(!prod.ansi);
        assert!(!prod.source_location);
    }

    #[test]
    fn test_partial_logging_section_keeps_defaults() {
        let config: LoggingConfig = serde_json::from_str(r#"{"format": "compact"}"#).unwrap();
        assert_eq!(config.format, LogFormat::Compact);
        assert_eq!(config.filter, LoggingConfig::default().filter);
    }
}
