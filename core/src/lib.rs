//! # EduMarket Core
//!
//! Form validation and error messaging for the signup, login and password
//! reset screens. Client-side checks and backend rejections both end up as
//! a [`FormErrors`] map of field name to localized (English or Arabic)
//! message, so the UI renders them the same way.
//!
//! - [`validation`] - field validators and whole-form validation
//! - [`errors`] - mapping of backend error payloads to messages
//! - [`i18n`] - the bilingual message catalog

pub mod errors;
pub mod i18n;
pub mod validation;

// Re-export commonly used types for convenience
pub use em_shared::Locale;
pub use errors::{user_friendly_message, BackendErrorPayload, ErrorContext, RequestError};
pub use validation::{FieldValidator, FormErrors, Violation, ViolationKind};
