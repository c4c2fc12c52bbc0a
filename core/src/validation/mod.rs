//! Client-side field validation.
//!
//! The free functions validate against the default limits; build a
//! [`FieldValidator`] from a [`ValidationConfig`](em_shared::ValidationConfig)
//! to use configured ones.

pub mod fields;
pub mod form_errors;
pub mod forms;
pub mod phone;
pub mod upload;
pub mod violation;

use once_cell::sync::Lazy;

use crate::i18n::Locale;

pub use fields::FieldValidator;
pub use form_errors::{FormErrors, NON_FIELD_ERRORS};
pub use forms::{LoginForm, SignupForm};
pub use phone::{expected_phone_length, COUNTRY_PHONE_LENGTHS};
pub use upload::UploadedFile;
pub use violation::{Field, ImageField, NameField, Violation, ViolationKind};

static DEFAULT_VALIDATOR: Lazy<FieldValidator> = Lazy::new(FieldValidator::default);

/// Validator using the built-in limits
pub fn default_validator() -> &'static FieldValidator {
    &DEFAULT_VALIDATOR
}

pub fn validate_username(value: &str, locale: Locale) -> Option<String> {
    default_validator().validate_username(value, locale)
}

pub fn validate_email(value: &str, locale: Locale) -> Option<String> {
    default_validator().validate_email(value, locale)
}

pub fn validate_password(value: &str, locale: Locale) -> Option<String> {
    default_validator().validate_password(value, locale)
}

pub fn validate_confirm_password(password: &str, confirm: &str, locale: Locale) -> Option<String> {
    default_validator().validate_confirm_password(password, confirm, locale)
}

pub fn validate_name(value: &str, kind: NameField, locale: Locale) -> Option<String> {
    default_validator().validate_name(value, kind, locale)
}

pub fn validate_phone(value: &str, locale: Locale) -> Option<String> {
    default_validator().validate_phone(value, locale)
}

pub fn validate_phone_by_country(
    value: &str,
    country_code: &str,
    locale: Locale,
) -> Option<String> {
    default_validator().validate_phone_by_country(value, country_code, locale)
}

pub fn validate_expertise(value: &str, locale: Locale) -> Option<String> {
    default_validator().validate_expertise(value, locale)
}

pub fn validate_image_file(
    file: Option<&UploadedFile>,
    kind: ImageField,
    locale: Locale,
) -> Option<String> {
    default_validator().validate_image_file(file, kind, locale)
}

pub fn validate_signup_form(
    form: &SignupForm,
    id_front: Option<&UploadedFile>,
    id_back: Option<&UploadedFile>,
    is_instructor: bool,
    locale: Locale,
) -> FormErrors {
    default_validator().validate_signup_form(form, id_front, id_back, is_instructor, locale)
}

pub fn validate_login_form(username: &str, password: &str, locale: Locale) -> FormErrors {
    default_validator().validate_login_form(username, password, locale)
}

pub fn validate_password_reset_request(email: &str, locale: Locale) -> FormErrors {
    default_validator().validate_password_reset_request(email, locale)
}

pub fn validate_password_reset_confirm(
    password: &str,
    confirm: &str,
    locale: Locale,
) -> FormErrors {
    default_validator().validate_password_reset_confirm(password, confirm, locale)
}
