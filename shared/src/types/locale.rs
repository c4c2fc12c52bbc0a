//! Locale and internationalization types

use serde::{Deserialize, Serialize};

/// UI language used to select localized messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[serde(rename = "ar")]
    Ar,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl Locale {
    /// Every supported locale, in catalog order
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ar];

    /// First supported language in an `Accept-Language` header, `None` when
    /// it names none. Quality weights are ignored; entries are taken in the
    /// order sent.
    pub fn from_accept_language(header: &str) -> Option<Self> {
        header
            .split(',')
            .filter_map(|entry| entry.split(';').next())
            .filter_map(|tag| tag.trim().split('-').next())
            .find_map(|primary| primary.parse::<Locale>().ok())
    }

    /// Get language code (ISO 639-1)
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ar => "ar",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Locale::En),
            "ar" | "ara" | "arabic" | "العربية" => Ok(Locale::Ar),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

/// Locale preference with fallback support
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalePreference {
    /// Primary locale
    pub primary: Locale,

    /// Fallback locale if a translation is not available
    #[serde(default)]
    pub fallback: Option<Locale>,
}

impl Default for LocalePreference {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl LocalePreference {
    pub fn new(primary: Locale) -> Self {
        Self {
            primary,
            fallback: if primary != Locale::En {
                Some(Locale::En)
            } else {
                None
            },
        }
    }

    /// Locales to try, primary first
    pub fn chain(&self) -> impl Iterator<Item = Locale> + '_ {
        std::iter::once(self.primary).chain(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_from_header() {
        assert_eq!(Locale::from_accept_language("en-US,en;q=0.9"), Some(Locale::En));
        assert_eq!(Locale::from_accept_language("ar-SA,ar;q=0.9"), Some(Locale::Ar));
        assert_eq!(Locale::from_accept_language("fr-FR,ar;q=0.5"), Some(Locale::Ar));
        assert_eq!(Locale::from_accept_language("AR-EG"), Some(Locale::Ar));
        assert_eq!(Locale::from_accept_language("fr-FR"), None);
        assert_eq!(Locale::from_accept_language(""), None);
    }

    #[test]
    fn test_locale_code_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(locale.code().parse::<Locale>().unwrap(), locale);
            assert_eq!(locale.to_string(), locale.code());
        }
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en".parse::<Locale>().unwrap(), Locale::En);
        assert_eq!("Arabic".parse::<Locale>().unwrap(), Locale::Ar);
        assert!("zh".parse::<Locale>().is_err());
    }

    #[test]
    fn test_locale_preference() {
        let pref = LocalePreference::new(Locale::Ar);
        assert_eq!(pref.fallback, Some(Locale::En));
        assert_eq!(pref.chain().collect::<Vec<_>>(), vec![Locale::Ar, Locale::En]);

        let pref = LocalePreference::new(Locale::En);
        assert_eq!(pref.fallback, None);
        assert_eq!(pref.chain().count(), 1);
    }
}
