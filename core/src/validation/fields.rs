//! Single-field validators
//!
//! `check_*` methods report a typed [`Violation`]; `validate_*` methods turn
//! that into the localized message shown next to the field. Required checks
//! always run before format checks.

use em_shared::phone::{digits_only, strip_country_prefix};
use em_shared::text::is_blank;
use em_shared::ValidationConfig;
use once_cell::sync::Lazy;
use regex::Regex;

use super::phone::{expected_phone_length, normalize_country_code};
use super::upload::UploadedFile;
use super::violation::{localized, Field, ImageField, NameField, Violation};
use crate::i18n::Locale;

static USERNAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,150}$").unwrap());

// local@domain.tld without whitespace
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]{1,150}$").unwrap());

static PHONE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\-()+]{7,20}$").unwrap());

static PHONE_CHARS_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\d\s\-()+]*$").unwrap());

static EXPERTISE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9\s,'.\-]{1,255}$").unwrap());

/// Validators bound to a set of limits
#[derive(Debug, Clone, Default)]
pub struct FieldValidator {
    config: ValidationConfig,
}

impl FieldValidator {
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn check_username(&self, value: &str) -> Result<(), Violation> {
        require(value)?;
        matches(&USERNAME_REGEX, value)
    }

    pub fn check_email(&self, value: &str) -> Result<(), Violation> {
        require(value)?;
        matches(&EMAIL_REGEX, value.trim())
    }

    /// Ordered chain; only the first unmet rule is reported:
    /// length, lowercase, uppercase, digit, special character.
    pub fn check_password(&self, value: &str) -> Result<(), Violation> {
        require(value)?;

        let min = self.config.password_min_length;
        if value.chars().count() < min {
            return Err(Violation::TooShort { min });
        }
        if !value.chars().any(|c| c.is_ascii_lowercase()) {
            return Err(Violation::MissingLowercase);
        }
        if !value.chars().any(|c| c.is_ascii_uppercase()) {
            return Err(Violation::MissingUppercase);
        }
        if !value.chars().any(|c| c.is_ascii_digit()) {
            return Err(Violation::MissingDigit);
        }
        if !value.chars().any(|c| c.is_ascii_punctuation()) {
            return Err(Violation::MissingSpecialCharacter);
        }
        Ok(())
    }

    pub fn check_confirm_password(&self, password: &str, confirm: &str) -> Result<(), Violation> {
        require(confirm)?;
        if password != confirm {
            return Err(Violation::Mismatch);
        }
        Ok(())
    }

    pub fn check_name(&self, value: &str) -> Result<(), Violation> {
        require(value)?;
        matches(&NAME_REGEX, value)
    }

    pub fn check_phone(&self, value: &str) -> Result<(), Violation> {
        require(value)?;
        matches(&PHONE_REGEX, strip_country_prefix(value))
    }

    /// [`check_phone`](Self::check_phone) plus the national length for
    /// `country_code`. A number that already starts with the selected code
    /// is counted without it. Unlisted codes skip the length check.
    ///
    /// For listed codes a number made only of phone characters reports the
    /// digit count before the generic 7-20 character rule, so "50123" for
    /// +966 reads "must be 9 digits" rather than "invalid".
    pub fn check_phone_for_country(
        &self,
        value: &str,
        country_code: &str,
    ) -> Result<(), Violation> {
        let Some(expected) = expected_phone_length(country_code) else {
            return self.check_phone(value);
        };

        require(value)?;
        let code = normalize_country_code(country_code);
        let trimmed = value.trim();
        let national = trimmed.strip_prefix(code.as_str()).unwrap_or(trimmed);
        matches(&PHONE_CHARS_REGEX, national)?;

        if digits_only(national).len() != expected {
            return Err(Violation::DigitCount { expected });
        }
        self.check_phone(value)
    }

    pub fn check_expertise(&self, value: &str) -> Result<(), Violation> {
        require(value)?;
        matches(&EXPERTISE_REGEX, value)
    }

    pub fn check_image_file(&self, file: Option<&UploadedFile>) -> Result<(), Violation> {
        let file = file.ok_or(Violation::Required)?;

        if !self.config.accepts_mime_type(&file.mime_type) {
            return Err(Violation::UnsupportedFileType);
        }
        if file.size > self.config.image_max_bytes {
            return Err(Violation::FileTooLarge {
                max_mb: self.config.image_max_megabytes(),
            });
        }
        Ok(())
    }

    /// Presence only; used where the backend is authoritative for format
    pub fn check_present(&self, value: &str) -> Result<(), Violation> {
        require(value)
    }

    pub fn validate_username(&self, value: &str, locale: Locale) -> Option<String> {
        localized(self.check_username(value), Field::Username, locale)
    }

    pub fn validate_email(&self, value: &str, locale: Locale) -> Option<String> {
        localized(self.check_email(value), Field::Email, locale)
    }

    pub fn validate_password(&self, value: &str, locale: Locale) -> Option<String> {
        localized(self.check_password(value), Field::Password, locale)
    }

    pub fn validate_confirm_password(
        &self,
        password: &str,
        confirm: &str,
        locale: Locale,
    ) -> Option<String> {
        localized(
            self.check_confirm_password(password, confirm),
            Field::ConfirmPassword,
            locale,
        )
    }

    pub fn validate_name(&self, value: &str, kind: NameField, locale: Locale) -> Option<String> {
        localized(self.check_name(value), kind.into(), locale)
    }

    pub fn validate_phone(&self, value: &str, locale: Locale) -> Option<String> {
        localized(self.check_phone(value), Field::Phone, locale)
    }

    pub fn validate_phone_by_country(
        &self,
        value: &str,
        country_code: &str,
        locale: Locale,
    ) -> Option<String> {
        localized(
            self.check_phone_for_country(value, country_code),
            Field::Phone,
            locale,
        )
    }

    pub fn validate_expertise(&self, value: &str, locale: Locale) -> Option<String> {
        localized(self.check_expertise(value), Field::Expertise, locale)
    }

    pub fn validate_image_file(
        &self,
        file: Option<&UploadedFile>,
        kind: ImageField,
        locale: Locale,
    ) -> Option<String> {
        localized(self.check_image_file(file), kind.into(), locale)
    }
}

fn require(value: &str) -> Result<(), Violation> {
    if is_blank(value) {
        Err(Violation::Required)
    } else {
        Ok(())
    }
}

fn matches(pattern: &Regex, value: &str) -> Result<(), Violation> {
    if pattern.is_match(value) {
        Ok(())
    } else {
        Err(Violation::InvalidFormat)
    }
}
