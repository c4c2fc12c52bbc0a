//! Type definitions shared across the workspace
//!
//! - `locale` - Supported UI languages and preference handling

pub mod locale;

pub use locale::{Locale, LocalePreference};
