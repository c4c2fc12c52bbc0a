//! Substring rules that recognize backend error wording.
//!
//! The backend does not send error codes, so its English wording is matched
//! here. This table is the only place that knows that wording; replacing it
//! with a code lookup leaves every caller unchanged.

use em_shared::text::contains_any_ci;

use crate::i18n::{message, Locale, Section};

/// What a backend error text appears to mean
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClue {
    InvalidCredentials,
    NoActiveAccount,
    AccountDisabled,
    EmailNotVerified,
    PasswordRule,
    DuplicateAccount,
    Network,
}

impl ErrorClue {
    /// Key in the `[auth]` catalog section
    pub fn message_key(&self) -> &'static str {
        match self {
            ErrorClue::InvalidCredentials => "invalid_credentials",
            ErrorClue::NoActiveAccount => "no_active_account",
            ErrorClue::AccountDisabled => "account_disabled",
            ErrorClue::EmailNotVerified => "email_not_verified",
            ErrorClue::PasswordRule => "password_validation",
            ErrorClue::DuplicateAccount => "account_exists",
            ErrorClue::Network => "network_error",
        }
    }

    pub fn message(&self, locale: Locale) -> String {
        message(Section::Auth, self.message_key(), locale)
    }
}

/// Where the text came from; each source has its own rule subset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchScope {
    /// A string value under a field key
    Field,
    /// The first entry of a list value under a field key
    FieldList,
    /// A login response `detail` or bare string body
    LoginDetail,
    /// Unstructured error text outside the login form
    Transport,
    /// Unstructured error text from the login form
    TransportLogin,
}

struct Rule {
    needles: &'static [&'static str],
    clue: ErrorClue,
    scopes: &'static [MatchScope],
}

use MatchScope::{Field, FieldList, LoginDetail, Transport, TransportLogin};

// Evaluated top to bottom; the first rule matching the scope wins.
static RULES: &[Rule] = &[
    Rule {
        needles: &[
            "network",
            "failed to fetch",
            "fetch failed",
            "timed out",
            "timeout",
            "connection refused",
            "econnrefused",
        ],
        clue: ErrorClue::Network,
        scopes: &[Transport, TransportLogin],
    },
    Rule {
        needles: &[
            "already exists",
            "already taken",
            "already registered",
            "already in use",
            "duplicate",
            "unique",
        ],
        clue: ErrorClue::DuplicateAccount,
        scopes: &[Transport, TransportLogin],
    },
    // Steers unverified users to email verification instead of "wrong password"
    Rule {
        needles: &["no active account", "email not verified", "not verified", "verify your email"],
        clue: ErrorClue::EmailNotVerified,
        scopes: &[LoginDetail, TransportLogin],
    },
    Rule {
        needles: &["credential", "invalid"],
        clue: ErrorClue::InvalidCredentials,
        scopes: &[Field, FieldList, LoginDetail],
    },
    Rule {
        needles: &["credential"],
        clue: ErrorClue::InvalidCredentials,
        scopes: &[TransportLogin],
    },
    Rule {
        needles: &["active"],
        clue: ErrorClue::NoActiveAccount,
        scopes: &[Field, FieldList],
    },
    Rule {
        needles: &["disabled"],
        clue: ErrorClue::AccountDisabled,
        scopes: &[Field, FieldList, LoginDetail],
    },
    Rule {
        needles: &["similar", "password", "match"],
        clue: ErrorClue::PasswordRule,
        scopes: &[FieldList],
    },
];

/// Recognize a backend error text, `None` when no rule matches
pub fn classify(text: &str, scope: MatchScope) -> Option<ErrorClue> {
    RULES
        .iter()
        .filter(|rule| rule.scopes.contains(&scope))
        .find(|rule| contains_any_ci(text, rule.needles))
        .map(|rule| rule.clue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scope() {
        assert_eq!(
            classify("Unable to log in with provided credentials.", MatchScope::Field),
            Some(ErrorClue::InvalidCredentials)
        );
        assert_eq!(
            classify("User account is not active", MatchScope::Field),
            Some(ErrorClue::NoActiveAccount)
        );
        assert_eq!(
            classify("User account is DISABLED.", MatchScope::Field),
            Some(ErrorClue::AccountDisabled)
        );
        assert_eq!(classify("This password is too common.", MatchScope::Field), None);
    }

    #[test]
    fn test_field_list_adds_password_rules() {
        assert_eq!(
            classify("The password is too similar to the username.", MatchScope::FieldList),
            Some(ErrorClue::PasswordRule)
        );
        assert_eq!(
            classify("Passwords didn't match.", MatchScope::FieldList),
            Some(ErrorClue::PasswordRule)
        );
    }

    #[test]
    fn test_login_detail_prefers_email_verification() {
        assert_eq!(
            classify(
                "No active account found with the given credentials",
                MatchScope::LoginDetail
            ),
            Some(ErrorClue::EmailNotVerified)
        );
        assert_eq!(
            classify("Invalid username or password", MatchScope::LoginDetail),
            Some(ErrorClue::InvalidCredentials)
        );
        assert_eq!(
            classify("User account is disabled.", MatchScope::LoginDetail),
            Some(ErrorClue::AccountDisabled)
        );
    }

    #[test]
    fn test_transport_scopes() {
        assert_eq!(
            classify("TypeError: Failed to fetch", MatchScope::Transport),
            Some(ErrorClue::Network)
        );
        assert_eq!(
            classify("A user with that username already exists.", MatchScope::Transport),
            Some(ErrorClue::DuplicateAccount)
        );
        assert_eq!(classify("Email not verified", MatchScope::Transport), None);
        assert_eq!(
            classify("Email not verified", MatchScope::TransportLogin),
            Some(ErrorClue::EmailNotVerified)
        );
        assert_eq!(
            classify("bad credentials", MatchScope::TransportLogin),
            Some(ErrorClue::InvalidCredentials)
        );
        assert_eq!(classify("Internal Server Error", MatchScope::Transport), None);
    }

    #[test]
    fn test_clue_messages_exist() {
        for clue in [
            ErrorClue::InvalidCredentials,
            ErrorClue::NoActiveAccount,
            ErrorClue::AccountDisabled,
            ErrorClue::EmailNotVerified,
            ErrorClue::PasswordRule,
            ErrorClue::DuplicateAccount,
            ErrorClue::Network,
        ] {
            assert!(crate::i18n::catalog().contains(Section::Auth, clue.message_key()));
        }
    }
}
