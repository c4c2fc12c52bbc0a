//! Whole-form validation for the signup, login and password reset screens

use em_shared::phone::mask_phone_number;
use em_shared::text::is_blank;
use serde::{Deserialize, Serialize};

use super::fields::FieldValidator;
use super::form_errors::FormErrors;
use super::upload::UploadedFile;
use super::violation::{localized, Field, ImageField, NameField};
use crate::i18n::Locale;

/// Raw signup input; absent fields deserialize as empty strings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    /// Dialing code selected next to the phone input, e.g. `+966`
    pub country_code: Option<String>,
    /// Instructor applicants only
    pub expertise: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    /// Username or email
    pub username: String,
    pub password: String,
}

impl FieldValidator {
    /// Validate every signup field. Expertise and both ID images are only
    /// checked for instructor applicants.
    pub fn validate_signup_form(
        &self,
        form: &SignupForm,
        id_front: Option<&UploadedFile>,
        id_back: Option<&UploadedFile>,
        is_instructor: bool,
        locale: Locale,
    ) -> FormErrors {
        let mut errors = FormErrors::new();

        errors.insert_opt(Field::Username.as_str(), self.validate_username(&form.username, locale));
        errors.insert_opt(Field::Email.as_str(), self.validate_email(&form.email, locale));
        errors.insert_opt(Field::Password.as_str(), self.validate_password(&form.password, locale));
        errors.insert_opt(
            Field::ConfirmPassword.as_str(),
            self.validate_confirm_password(&form.password, &form.confirm_password, locale),
        );
        errors.insert_opt(
            Field::FirstName.as_str(),
            self.validate_name(&form.first_name, NameField::FirstName, locale),
        );
        errors.insert_opt(
            Field::LastName.as_str(),
            self.validate_name(&form.last_name, NameField::LastName, locale),
        );

        let phone = match form.country_code.as_deref() {
            Some(code) if !is_blank(code) => {
                self.validate_phone_by_country(&form.phone, code, locale)
            }
            _ => self.validate_phone(&form.phone, locale),
        };
        if phone.is_some() && !is_blank(&form.phone) {
            tracing::debug!(
                phone = %mask_phone_number(&form.phone),
                country_code = ?form.country_code,
                "Phone number rejected"
            );
        }
        errors.insert_opt(Field::Phone.as_str(), phone);

        if is_instructor {
            errors.insert_opt(
                Field::Expertise.as_str(),
                self.validate_expertise(&form.expertise, locale),
            );
            errors.insert_opt(
                Field::IdFront.as_str(),
                self.validate_image_file(id_front, ImageField::IdFront, locale),
            );
            errors.insert_opt(
                Field::IdBack.as_str(),
                self.validate_image_file(id_back, ImageField::IdBack, locale),
            );
        }

        tracing::debug!(
            invalid_fields = errors.len(),
            is_instructor,
            "Signup form validated"
        );
        errors
    }

    /// Presence checks only; credential correctness is decided by the backend
    pub fn validate_login_form(
        &self,
        username: &str,
        password: &str,
        locale: Locale,
    ) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.insert_opt(
            Field::LoginUsername.as_str(),
            localized(self.check_present(username), Field::LoginUsername, locale),
        );
        errors.insert_opt(
            Field::LoginPassword.as_str(),
            localized(self.check_present(password), Field::LoginPassword, locale),
        );
        errors
    }

    /// "Forgot password" request: just the account email
    pub fn validate_password_reset_request(&self, email: &str, locale: Locale) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.insert_opt(Field::Email.as_str(), self.validate_email(email, locale));
        errors
    }

    /// New password chosen from a reset link
    pub fn validate_password_reset_confirm(
        &self,
        password: &str,
        confirm: &str,
        locale: Locale,
    ) -> FormErrors {
        let mut errors = FormErrors::new();
        errors.insert_opt(Field::Password.as_str(), self.validate_password(password, locale));
        errors.insert_opt(
            Field::ConfirmPassword.as_str(),
            self.validate_confirm_password(password, confirm, locale),
        );
        errors
    }
}
