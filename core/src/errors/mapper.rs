//! Backend error payload -> localized [`FormErrors`]
//!
//! Nothing here fails: every path ends in a message, falling back to the
//! form's generic message when no rule applies.

use em_shared::text::is_blank;
use serde_json::Value;

use super::heuristics::{classify, MatchScope};
use super::payload::BackendErrorPayload;
use crate::i18n::{get_message, message, Locale, Section};
use crate::validation::{FormErrors, NON_FIELD_ERRORS};

/// Form whose backend errors are being mapped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorContext {
    Signup,
    Login,
    PasswordReset,
}

impl ErrorContext {
    /// Catalog section holding this form's per-field fallbacks
    pub fn section(&self) -> Section {
        match self {
            ErrorContext::Signup => Section::Signup,
            ErrorContext::Login => Section::Login,
            ErrorContext::PasswordReset => Section::PasswordReset,
        }
    }

    pub fn generic_message(&self, locale: Locale) -> String {
        get_message(self.section(), NON_FIELD_ERRORS, locale)
            .unwrap_or_else(|| message(Section::General, "unknown_error", locale))
    }

    fn transport_scope(&self) -> MatchScope {
        match self {
            ErrorContext::Login => MatchScope::TransportLogin,
            _ => MatchScope::Transport,
        }
    }
}

/// Message for one backend field error.
///
/// Strings and the first entry of lists go through the substring rules and
/// pass through unchanged when none match. Any other shape (or an empty
/// list) uses the field's fallback in `table`, `None` if it has none.
pub fn error_message_for_field(
    field: &str,
    value: &Value,
    table: Section,
    locale: Locale,
) -> Option<String> {
    let field_default = || get_message(table, field, locale);

    match value {
        Value::String(text) if !is_blank(text) => {
            Some(resolve_text(text, MatchScope::Field, locale))
        }
        Value::Array(items) => match items.first().and_then(Value::as_str) {
            Some(first) if !is_blank(first) => {
                Some(resolve_text(first, MatchScope::FieldList, locale))
            }
            _ => field_default(),
        },
        _ => field_default(),
    }
}

pub fn parse_signup_errors(payload: &BackendErrorPayload, locale: Locale) -> FormErrors {
    parse_field_payload(payload, ErrorContext::Signup, locale)
}

pub fn parse_password_reset_errors(payload: &BackendErrorPayload, locale: Locale) -> FormErrors {
    parse_field_payload(payload, ErrorContext::PasswordReset, locale)
}

/// Like signup, except bare strings and `detail` entries go through the
/// login rules, where "no active account" means the email is unverified.
pub fn parse_login_errors(payload: &BackendErrorPayload, locale: Locale) -> FormErrors {
    let context = ErrorContext::Login;
    let mut errors = FormErrors::new();

    match payload {
        BackendErrorPayload::Message(text) => {
            errors.insert_opt(NON_FIELD_ERRORS, login_detail_message(text, locale));
        }
        BackendErrorPayload::Messages(items) => {
            let first = items
                .first()
                .and_then(Value::as_str)
                .and_then(|text| login_detail_message(text, locale));
            errors.insert_opt(NON_FIELD_ERRORS, first);
        }
        BackendErrorPayload::Fields(fields) => {
            let detail = payload.detail();
            let remaining = fields
                .iter()
                .filter(|(key, _)| detail.is_none() || key.as_str() != "detail");
            errors.extend(map_fields(remaining, context, locale));
            if let Some(detail) = detail {
                errors.insert_opt(NON_FIELD_ERRORS, login_detail_message(detail, locale));
            }
        }
        BackendErrorPayload::Other(_) => {}
    }

    finish(errors, context, locale)
}

/// Dispatch to the parser for `context`
pub fn parse_errors(
    payload: &BackendErrorPayload,
    context: ErrorContext,
    locale: Locale,
) -> FormErrors {
    match context {
        ErrorContext::Signup => parse_signup_errors(payload, locale),
        ErrorContext::Login => parse_login_errors(payload, locale),
        ErrorContext::PasswordReset => parse_password_reset_errors(payload, locale),
    }
}

/// One banner message for a failed request.
///
/// `error` is the failure text, usually a JSON body. Structured bodies are
/// mapped with [`parse_errors`] and reduced with
/// [`FormErrors::primary_message`] (general message, else first field by
/// name); anything else is matched against the
/// transport rules (network failures, duplicate accounts, and on login
/// unverified email or bad credentials). Falls back to the form's generic
/// message.
pub fn user_friendly_message(error: Option<&str>, context: ErrorContext, locale: Locale) -> String {
    let raw = match error {
        Some(raw) if !is_blank(raw) => raw.trim(),
        _ => return context.generic_message(locale),
    };

    match BackendErrorPayload::parse(raw) {
        Ok(payload) if payload.is_structured() => {
            if let Some(first) = parse_errors(&payload, context, locale).primary_message() {
                return first.to_string();
            }
        }
        Ok(_) => tracing::debug!(?context, "Error body is JSON but not a known shape"),
        Err(e) => tracing::debug!(?context, error = %e, "Error body is not JSON; using text rules"),
    }

    match classify(raw, context.transport_scope()) {
        Some(clue) => clue.message(locale),
        None => {
            tracing::debug!(?context, "No error rule matched; using generic message");
            context.generic_message(locale)
        }
    }
}

/// [`user_friendly_message`] for any error value, using its `Display` text
pub fn describe_error(
    error: &dyn std::error::Error,
    context: ErrorContext,
    locale: Locale,
) -> String {
    user_friendly_message(Some(&error.to_string()), context, locale)
}

fn parse_field_payload(
    payload: &BackendErrorPayload,
    context: ErrorContext,
    locale: Locale,
) -> FormErrors {
    let table = context.section();
    let mut errors = FormErrors::new();

    match payload {
        BackendErrorPayload::Fields(fields) => {
            errors.extend(map_fields(fields.iter(), context, locale))
        }
        BackendErrorPayload::Message(text) => {
            let value = Value::String(text.clone());
            errors.insert_opt(
                NON_FIELD_ERRORS,
                error_message_for_field(NON_FIELD_ERRORS, &value, table, locale),
            );
        }
        BackendErrorPayload::Messages(items) => {
            let value = Value::Array(items.clone());
            errors.insert_opt(
                NON_FIELD_ERRORS,
                error_message_for_field(NON_FIELD_ERRORS, &value, table, locale),
            );
        }
        BackendErrorPayload::Other(_) => {}
    }

    finish(errors, context, locale)
}

fn map_fields<'a>(
    fields: impl Iterator<Item = (&'a String, &'a Value)>,
    context: ErrorContext,
    locale: Locale,
) -> FormErrors {
    let table = context.section();
    let mut errors = FormErrors::new();
    for (field, value) in fields {
        errors.insert_opt(field.as_str(), error_message_for_field(field, value, table, locale));
    }
    errors
}

fn finish(errors: FormErrors, context: ErrorContext, locale: Locale) -> FormErrors {
    if errors.is_empty() {
        FormErrors::general(context.generic_message(locale))
    } else {
        errors
    }
}

fn resolve_text(text: &str, scope: MatchScope, locale: Locale) -> String {
    match classify(text, scope) {
        Some(clue) => clue.message(locale),
        None => text.to_string(),
    }
}

fn login_detail_message(text: &str, locale: Locale) -> Option<String> {
    if is_blank(text) {
        return None;
    }
    Some(resolve_text(text, MatchScope::LoginDetail, locale))
}
