//! Form validation limits

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Limits applied by the field validators
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ValidationConfig {
    /// Minimum password length in characters
    #[serde(default = "default_password_min_length")]
    pub password_min_length: usize,

    /// Maximum accepted upload size in bytes
    #[serde(default = "default_image_max_bytes")]
    pub image_max_bytes: u64,

    /// Accepted MIME types for identity document images
    #[serde(default = "default_image_mime_types")]
    pub image_mime_types: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            password_min_length: default_password_min_length(),
            image_max_bytes: default_image_max_bytes(),
            image_mime_types: default_image_mime_types(),
        }
    }
}

impl ValidationConfig {
    /// Upload limit in whole mebibytes, for display
    pub fn image_max_megabytes(&self) -> u64 {
        self.image_max_bytes / (1024 * 1024)
    }

    pub fn accepts_mime_type(&self, mime_type: &str) -> bool {
        let mime_type = mime_type.trim();
        self.image_mime_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(mime_type))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.password_min_length == 0 {
            return Err(ConfigError::invalid(
                "validation.password_min_length",
                "must be greater than zero",
            ));
        }
        if self.image_max_bytes == 0 {
            return Err(ConfigError::invalid(
                "validation.image_max_bytes",
                "must be greater than zero",
            ));
        }
        if self.image_mime_types.is_empty() {
            return Err(ConfigError::invalid(
                "validation.image_mime_types",
                "at least one MIME type is required",
            ));
        }
        Ok(())
    }
}

fn default_password_min_length() -> usize {
    8
}

fn default_image_max_bytes() -> u64 {
    5 * 1024 * 1024 // 5 MiB
}

fn default_image_mime_types() -> Vec<String> {
    ["image/jpeg", "image/png", "image/gif", "image/webp"]
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ValidationConfig::default();
        assert_eq!(config.password_min_length, 8);
        assert_eq!(config.image_max_bytes, 5_242_880);
        assert_eq!(config.image_max_megabytes(), 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_accepts_mime_type() {
        let config = ValidationConfig::default();
        assert!(config.accepts_mime_type("image/png"));
        assert!(config.accepts_mime_type("IMAGE/WEBP"));
        assert!(!config.accepts_mime_type("image/svg+xml"));
        assert!(!config.accepts_mime_type("application/pdf"));
    }

    #[test]
    fn test_validate_rejects_empty_limits() {
        let config = ValidationConfig {
            image_mime_types: Vec::new(),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ValidationConfig {
            password_min_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
