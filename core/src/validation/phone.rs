//! Per-country national number lengths

/// Expected digit count of a national number, keyed by dialing code
pub static COUNTRY_PHONE_LENGTHS: &[(&str, usize)] = &[
    ("+1", 10),   // United States / Canada
    ("+20", 10),  // Egypt
    ("+44", 10),  // United Kingdom
    ("+212", 9),  // Morocco
    ("+213", 9),  // Algeria
    ("+216", 8),  // Tunisia
    ("+218", 9),  // Libya
    ("+249", 9),  // Sudan
    ("+961", 8),  // Lebanon
    ("+962", 9),  // Jordan
    ("+963", 9),  // Syria
    ("+964", 10), // Iraq
    ("+965", 8),  // Kuwait
    ("+966", 9),  // Saudi Arabia
    ("+967", 9),  // Yemen
    ("+968", 8),  // Oman
    ("+970", 9),  // Palestine
    ("+971", 9),  // United Arab Emirates
    ("+973", 8),  // Bahrain
    ("+974", 8),  // Qatar
];

/// Canonical `+<digits>` form of a dialing code ("966", " +966 " -> "+966")
pub fn normalize_country_code(code: &str) -> String {
    let digits: String = code.chars().filter(|c| c.is_ascii_digit()).collect();
    format!("+{}", digits)
}

/// Expected national number length, `None` for unlisted codes
pub fn expected_phone_length(country_code: &str) -> Option<usize> {
    let code = normalize_country_code(country_code);
    COUNTRY_PHONE_LENGTHS
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, length)| *length)
}
