//! Backend error mapping.
//!
//! Turns failed-request payloads into the same [`FormErrors`](crate::validation::FormErrors)
//! shape the client-side validators produce.

pub mod heuristics;
pub mod mapper;
pub mod payload;

use thiserror::Error;

use crate::i18n::Locale;
use crate::validation::FormErrors;

pub use heuristics::{classify, ErrorClue, MatchScope};
pub use mapper::{
    describe_error, error_message_for_field, parse_errors, parse_login_errors,
    parse_password_reset_errors, parse_signup_errors, user_friendly_message, ErrorContext,
};
pub use payload::BackendErrorPayload;

/// How a call to the backend failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The request never produced a response
    #[error("Network error: {message}")]
    Network { message: String },

    /// The backend answered with an error status; `body` is the raw response text
    #[error("{body}")]
    Rejected { status: u16, body: String },
}

impl RequestError {
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Network { .. } => None,
            RequestError::Rejected { status, .. } => Some(*status),
        }
    }

    /// Field-keyed messages for inline display
    pub fn form_errors(&self, context: ErrorContext, locale: Locale) -> FormErrors {
        match self {
            RequestError::Network { .. } => {
                FormErrors::general(ErrorClue::Network.message(locale))
            }
            RequestError::Rejected { body, .. } => match BackendErrorPayload::parse(body) {
                Ok(payload) if payload.is_structured() => parse_errors(&payload, context, locale),
                _ => FormErrors::general(user_friendly_message(
                    Some(body),
                    context,
                    locale,
                )),
            },
        }
    }

    /// Single banner message
    pub fn friendly_message(&self, context: ErrorContext, locale: Locale) -> String {
        match self {
            RequestError::Network { .. } => ErrorClue::Network.message(locale),
            RequestError::Rejected { body, .. } => {
                user_friendly_message(Some(body), context, locale)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message() {
        let err = RequestError::Network {
            message: "connection reset".to_string(),
        };
        assert_eq!(err.status(), None);
        assert_eq!(
            err.friendly_message(ErrorContext::Signup, Locale::En),
            "Unable to reach the server. Please check your connection and try again"
        );
        assert_eq!(
            describe_error(&err, ErrorContext::Signup, Locale::En),
            err.friendly_message(ErrorContext::Signup, Locale::En)
        );
    }

    #[test]
    fn test_rejected_form_errors() {
        let err = RequestError::Rejected {
            status: 400,
            body: r#"{"email": ["user with this email already exists."]}"#.to_string(),
        };
        assert_eq!(err.status(), Some(400));
        let errors = err.form_errors(ErrorContext::Signup, Locale::En);
        assert_eq!(errors.get("email"), Some("user with this email already exists."));
    }

    #[test]
    fn test_rejected_plain_text_body() {
        let err = RequestError::Rejected {
            status: 502,
            body: "<html>Bad Gateway</html>".to_string(),
        };
        let errors = err.form_errors(ErrorContext::Login, Locale::En);
        assert_eq!(errors.get("non_field_errors"), Some("Login failed. Please try again"));
    }
}
