//! # Normalizer
//!
//! Strips display formatting from a raw value to produce the canonical
//! form for its kind: digits only for CPF, CNPJ and phone (phone without
//! the Brazilian country code), trimmed lower-case text for e-mail and EVP.
//!
//! Every function here is total. Empty input yields an empty string.

use crate::kind::KeyKind;

/// Brazilian country calling code.
pub const COUNTRY_CODE: &str = "55";

/// A phone number's digits split from an optional country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneDigits {
    /// Area code plus subscriber number.
    pub local: String,
    /// Whether a leading `55` was stripped.
    pub has_country_code: bool,
}

/// Keep only ASCII digits.
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Split off the country code.
///
/// A leading `55` counts as the country code only when the full digit
/// string has 12 or 13 digits, i.e. the length of a 10- or 11-digit local
/// number with the code prepended. A 10- or 11-digit number whose area code
/// is 55 is left alone.
pub fn split_country_code(value: &str) -> PhoneDigits {
    let digits = digits_only(value);
    let has_country_code =
        digits.starts_with(COUNTRY_CODE) && (digits.len() == 12 || digits.len() == 13);
    let local = if has_country_code {
        digits[COUNTRY_CODE.len()..].to_string()
    } else {
        digits
    };
    PhoneDigits {
        local,
        has_country_code,
    }
}

/// Whitespace for trimming and shape rules: Unicode whitespace plus the
/// byte-order mark, minus NEL (U+0085).
pub fn is_space(c: char) -> bool {
    c == '\u{feff}' || (c.is_whitespace() && c != '\u{85}')
}

/// Strip leading and trailing [`is_space`] characters.
pub fn trim_space(value: &str) -> &str {
    value.trim_matches(is_space)
}

/// Trim and lower-case.
pub fn fold_text(value: &str) -> String {
    trim_space(value).to_lowercase()
}

/// Canonical storage form of `value` as a key of `kind`.
pub fn clean(value: &str, kind: KeyKind) -> String {
    match kind {
        KeyKind::Cpf | KeyKind::Cnpj => digits_only(value),
        KeyKind::Phone => split_country_code(value).local,
        KeyKind::Email | KeyKind::Evp => fold_text(value),
    }
}
