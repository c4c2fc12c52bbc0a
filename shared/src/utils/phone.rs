//! Phone number utilities

use once_cell::sync::Lazy;
use regex::Regex;

// Leading international dialing prefix: "+" and one to three digits
static COUNTRY_PREFIX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+\d{1,3}").unwrap());

/// Remove a leading `+<1-3 digits>` country-code prefix, if present
pub fn strip_country_prefix(phone: &str) -> &str {
    let trimmed = phone.trim();
    match COUNTRY_PREFIX_REGEX.find(trimmed) {
        Some(prefix) => trimmed[prefix.end()..].trim_start(),
        None => trimmed,
    }
}

/// Keep only ASCII digits
pub fn digits_only(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Mask a phone number for display (e.g., 050****4567)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
