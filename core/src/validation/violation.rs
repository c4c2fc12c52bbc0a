//! Typed validation failures and their localized messages

use thiserror::Error;

use crate::i18n::{message, message_with, Locale, Section};

/// Form fields the validators know how to describe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    ConfirmPassword,
    FirstName,
    LastName,
    Phone,
    Expertise,
    IdFront,
    IdBack,
    LoginUsername,
    LoginPassword,
}

impl Field {
    /// Key used in a [`FormErrors`](super::FormErrors) map
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Username | Field::LoginUsername => "username",
            Field::Email => "email",
            Field::Password | Field::LoginPassword => "password",
            Field::ConfirmPassword => "confirm_password",
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Phone => "phone",
            Field::Expertise => "expertise",
            Field::IdFront => "id_front",
            Field::IdBack => "id_back",
        }
    }

    // Prefix of this field's keys in the [validation] catalog section
    fn catalog_prefix(&self) -> &'static str {
        match self {
            Field::LoginUsername => "login_username",
            Field::LoginPassword => "login_password",
            other => other.as_str(),
        }
    }
}

/// Name fields sharing one format rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    FirstName,
    LastName,
}

impl From<NameField> for Field {
    fn from(kind: NameField) -> Self {
        match kind {
            NameField::FirstName => Field::FirstName,
            NameField::LastName => Field::LastName,
        }
    }
}

/// Identity document uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageField {
    IdFront,
    IdBack,
}

impl From<ImageField> for Field {
    fn from(kind: ImageField) -> Self {
        match kind {
            ImageField::IdFront => Field::IdFront,
            ImageField::IdBack => Field::IdBack,
        }
    }
}

/// Coarse failure class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Missing, empty or whitespace-only value
    Required,
    /// Present but fails a format or structural rule
    Format,
    /// Depends on more than one field
    CrossField,
}

/// Why a single field failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("Required field")]
    Required,

    #[error("Invalid format")]
    InvalidFormat,

    #[error("Too short (min: {min})")]
    TooShort { min: usize },

    #[error("Missing lowercase letter")]
    MissingLowercase,

    #[error("Missing uppercase letter")]
    MissingUppercase,

    #[error("Missing digit")]
    MissingDigit,

    #[error("Missing special character")]
    MissingSpecialCharacter,

    #[error("Values do not match")]
    Mismatch,

    #[error("Invalid digit count (expected: {expected})")]
    DigitCount { expected: usize },

    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("File too large (max: {max_mb} MB)")]
    FileTooLarge { max_mb: u64 },
}

impl Violation {
    pub fn kind(&self) -> ViolationKind {
        match self {
            Violation::Required => ViolationKind::Required,
            Violation::Mismatch => ViolationKind::CrossField,
            _ => ViolationKind::Format,
        }
    }

    pub fn is_required(&self) -> bool {
        self.kind() == ViolationKind::Required
    }

    /// Catalog key describing this violation on `field`
    pub fn message_key(&self, field: Field) -> String {
        let prefix = field.catalog_prefix();
        match self {
            Violation::Required => format!("{}_required", prefix),
            Violation::InvalidFormat => format!("{}_invalid", prefix),
            Violation::TooShort { .. } => "password_too_short".to_string(),
            Violation::MissingLowercase => "password_no_lowercase".to_string(),
            Violation::MissingUppercase => "password_no_uppercase".to_string(),
            Violation::MissingDigit => "password_no_digit".to_string(),
            Violation::MissingSpecialCharacter => "password_no_special".to_string(),
            Violation::Mismatch => "passwords_mismatch".to_string(),
            Violation::DigitCount { .. } => "phone_digit_count".to_string(),
            Violation::UnsupportedFileType => format!("{}_type_invalid", prefix),
            Violation::FileTooLarge { .. } => format!("{}_too_large", prefix),
        }
    }

    /// User-facing message for this violation on `field`
    pub fn localize(&self, field: Field, locale: Locale) -> String {
        let key = self.message_key(field);
        match self {
            Violation::TooShort { min } => {
                message_with(Section::Validation, &key, locale, &[("min", min.to_string())])
            }
            Violation::DigitCount { expected } => message_with(
                Section::Validation,
                &key,
                locale,
                &[("digits", expected.to_string())],
            ),
            Violation::FileTooLarge { max_mb } => message_with(
                Section::Validation,
                &key,
                locale,
                &[("max_mb", max_mb.to_string())],
            ),
            _ => message(Section::Validation, &key, locale),
        }
    }
}

/// Collapse a check result into the caller-facing `Option<String>`
pub(crate) fn localized(
    result: Result<(), Violation>,
    field: Field,
    locale: Locale,
) -> Option<String> {
    result.err().map(|violation| violation.localize(field, locale))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::catalog;

    #[test]
    fn test_required_and_format_are_distinct() {
        assert_eq!(Violation::Required.kind(), ViolationKind::Required);
        assert_eq!(Violation::InvalidFormat.kind(), ViolationKind::Format);
        assert_eq!(Violation::Mismatch.kind(), ViolationKind::CrossField);
        assert_ne!(
            Violation::Required.localize(Field::Username, Locale::En),
            Violation::InvalidFormat.localize(Field::Username, Locale::En)
        );
    }

    #[test]
    fn test_message_keys() {
        assert_eq!(
            Violation::Required.message_key(Field::LoginUsername),
            "login_username_required"
        );
        assert_eq!(Violation::InvalidFormat.message_key(Field::FirstName), "first_name_invalid");
        assert_eq!(
            Violation::UnsupportedFileType.message_key(Field::IdBack),
            "id_back_type_invalid"
        );
    }

    #[test]
    fn test_every_reachable_key_exists_in_catalog() {
        let pairs = [
            (Field::Username, Violation::Required),
            (Field::Username, Violation::InvalidFormat),
            (Field::Email, Violation::Required),
            (Field::Email, Violation::InvalidFormat),
            (Field::Password, Violation::Required),
            (Field::Password, Violation::TooShort { min: 8 }),
            (Field::Password, Violation::MissingLowercase),
            (Field::Password, Violation::MissingUppercase),
            (Field::Password, Violation::MissingDigit),
            (Field::Password, Violation::MissingSpecialCharacter),
            (Field::ConfirmPassword, Violation::Required),
            (Field::ConfirmPassword, Violation::Mismatch),
            (Field::FirstName, Violation::Required),
            (Field::FirstName, Violation::InvalidFormat),
            (Field::LastName, Violation::Required),
            (Field::LastName, Violation::InvalidFormat),
            (Field::Phone, Violation::Required),
            (Field::Phone, Violation::InvalidFormat),
            (Field::Phone, Violation::DigitCount { expected: 9 }),
            (Field::Expertise, Violation::Required),
            (Field::Expertise, Violation::InvalidFormat),
            (Field::IdFront, Violation::Required),
            (Field::IdFront, Violation::UnsupportedFileType),
            (Field::IdFront, Violation::FileTooLarge { max_mb: 5 }),
            (Field::IdBack, Violation::Required),
            (Field::IdBack, Violation::UnsupportedFileType),
            (Field::IdBack, Violation::FileTooLarge { max_mb: 5 }),
            (Field::LoginUsername, Violation::Required),
            (Field::LoginPassword, Violation::Required),
        ];

        for (field, violation) in pairs {
            let key = violation.message_key(field);
            assert!(
                catalog().contains(Section::Validation, &key),
                "missing validation.{}",
                key
            );
        }
    }

    #[test]
    fn test_placeholders_are_filled() {
        let text = Violation::DigitCount { expected: 9 }.localize(Field::Phone, Locale::En);
        assert_eq!(text, "Phone number must be 9 digits");

        let text = Violation::FileTooLarge { max_mb: 5 }.localize(Field::IdFront, Locale::Ar);
        assert!(text.contains('5'));
        assert!(!text.contains("{max_mb}"));
    }
}
