//! Bilingual message catalog
//!
//! Messages live in `i18n/messages.toml`, embedded at compile time and parsed
//! once. Each entry carries both an English and an Arabic string, so a key can
//! never exist in one locale without the other.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

pub use em_shared::Locale;
use em_shared::LocalePreference;

const EMBEDDED_CATALOG: &str = include_str!("../../i18n/messages.toml");

/// One message in every supported locale
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedMessage {
    pub en: String,
    pub ar: String,
}

impl LocalizedMessage {
    pub fn text(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Ar => &self.ar,
        }
    }
}

/// Top-level catalog sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Client-side field validation messages
    Validation,
    /// Messages chosen by backend error heuristics
    Auth,
    /// Per-field fallbacks for signup responses
    Signup,
    /// Per-field fallbacks for login responses
    Login,
    /// Per-field fallbacks for password reset responses
    PasswordReset,
    General,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Validation,
        Section::Auth,
        Section::Signup,
        Section::Login,
        Section::PasswordReset,
        Section::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Validation => "validation",
            Section::Auth => "auth",
            Section::Signup => "signup",
            Section::Login => "login",
            Section::PasswordReset => "password_reset",
            Section::General => "general",
        }
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse message catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("message catalog is missing section [{0}]")]
    MissingSection(&'static str),
}

/// Immutable section -> key -> message table
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    sections: HashMap<String, BTreeMap<String, LocalizedMessage>>,
}

impl MessageCatalog {
    /// Parse a catalog from TOML text
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let sections: HashMap<String, BTreeMap<String, LocalizedMessage>> =
            toml::from_str(source)?;

        for section in Section::ALL {
            if !sections.contains_key(section.as_str()) {
                return Err(CatalogError::MissingSection(section.as_str()));
            }
        }

        Ok(Self { sections })
    }

    /// The catalog compiled into the crate
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_toml(EMBEDDED_CATALOG)
    }

    pub fn entry(&self, section: Section, key: &str) -> Option<&LocalizedMessage> {
        self.sections.get(section.as_str())?.get(key)
    }

    /// Text for `locale`, falling back along its [`LocalePreference`] chain
    /// when the translation is blank
    pub fn get(&self, section: Section, key: &str, locale: Locale) -> Option<&str> {
        let entry = self.entry(section, key)?;
        LocalePreference::new(locale)
            .chain()
            .map(|candidate| entry.text(candidate))
            .find(|text| !text.trim().is_empty())
    }

    /// Keys that have a non-empty translation for `locale`
    pub fn keys(&self, section: Section, locale: Locale) -> Vec<&str> {
        self.sections
            .get(section.as_str())
            .map(|entries| {
                entries
                    .iter()
                    .filter(|(_, message)| !message.text(locale).trim().is_empty())
                    .map(|(key, _)| key.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn contains(&self, section: Section, key: &str) -> bool {
        self.entry(section, key).is_some()
    }
}

static CATALOG: Lazy<MessageCatalog> = Lazy::new(|| match MessageCatalog::embedded() {
    Ok(catalog) => catalog,
    Err(e) => {
        tracing::error!(error = %e, "Embedded message catalog is invalid; using key fallbacks");
        MessageCatalog::default()
    }
});

/// The process-wide catalog
pub fn catalog() -> &'static MessageCatalog {
    &CATALOG
}

/// Look up a message, `None` if the key is unknown
pub fn get_message(section: Section, key: &str, locale: Locale) -> Option<String> {
    catalog().get(section, key, locale).map(str::to_owned)
}

/// Look up a message, falling back to `section.key` for missing translations
pub fn message(section: Section, key: &str, locale: Locale) -> String {
    match catalog().get(section, key, locale) {
        Some(text) => text.to_owned(),
        None => {
            tracing::warn!(
                section = section.as_str(),
                key,
                locale = %locale,
                "Missing translation"
            );
            format!("{}.{}", section.as_str(), key)
        }
    }
}

/// Look up a message and fill its `{name}` placeholders
pub fn message_with(
    section: Section,
    key: &str,
    locale: Locale,
    params: &[(&str, String)],
) -> String {
    format_message(&message(section, key, locale), params)
}

pub fn format_message(template: &str, params: &[(&str, String)]) -> String {
    let mut result = template.to_string();
    for (key, value) in params {
        let placeholder = format!("{{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let catalog = MessageCatalog::embedded().unwrap();
        assert!(catalog.contains(Section::Validation, "username_required"));
        assert!(catalog.contains(Section::Auth, "email_not_verified"));
        assert!(catalog.contains(Section::General, "unknown_error"));
    }

    #[test]
    fn test_message_lookup_by_locale() {
        assert_eq!(
            message(Section::Validation, "passwords_mismatch", Locale::En),
            "Passwords do not match"
        );
        assert_eq!(
            message(Section::Validation, "passwords_mismatch", Locale::Ar),
            "كلمتا المرور غير متطابقتين"
        );
    }

    #[test]
    fn test_missing_translation_falls_back_to_key() {
        assert_eq!(
            message(Section::Signup, "does_not_exist", Locale::Ar),
            "signup.does_not_exist"
        );
        assert!(get_message(Section::Signup, "does_not_exist", Locale::En).is_none());
    }

    #[test]
    fn test_format_message() {
        let text = message_with(
            Section::Validation,
            "password_too_short",
            Locale::En,
            &[("min", 8.to_string())],
        );
        assert_eq!(text, "Password must be at least 8 characters");
        assert_eq!(format_message("{a} and {a}", &[("a", "x".into())]), "x and x");
    }

    #[test]
    fn test_entry_missing_locale_is_rejected() {
        let source = r#"
            [validation]
            only_english = { en = "Only English" }
        "#;
        assert!(matches!(
            MessageCatalog::from_toml(source),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn test_missing_section_is_rejected() {
        let source = r#"
            [validation]
            ok = { en = "Ok", ar = "حسنًا" }
        "#;
        assert!(matches!(
            MessageCatalog::from_toml(source),
            Err(CatalogError::MissingSection(_))
        ));
    }

    #[test]
    fn test_keys_skip_blank_translations() {
        let source = r#"
            [validation]
            a = { en = "A", ar = "" }
            [auth]
            [signup]
            [login]
            [password_reset]
            [general]
        "#;
        let catalog = MessageCatalog::from_toml(source).unwrap();
        assert_eq!(catalog.keys(Section::Validation, Locale::En), vec!["a"]);
        assert!(catalog.keys(Section::Validation, Locale::Ar).is_empty());
    }

    #[test]
    fn test_blank_translation_falls_back_to_english() {
        let source = r#"
            [validation]
            a = { en = "A", ar = " " }
            b = { en = "", ar = "ب" }
            [auth]
            [signup]
            [login]
            [password_reset]
            [general]
        "#;
        let catalog = MessageCatalog::from_toml(source).unwrap();
        assert_eq!(catalog.get(Section::Validation, "a", Locale::Ar), Some("A"));
        assert_eq!(catalog.get(Section::Validation, "b", Locale::Ar), Some("ب"));
        assert_eq!(catalog.get(Section::Validation, "b", Locale::En), None);
    }
}
