//! # Detector
//!
//! Infers the kind of an unannotated PIX key. Several kinds share digit
//! counts, so the rules form a fixed priority list and the first match wins:
//!
//! 1. blank → none
//! 2. e-mail shape → [`KeyKind::Email`]
//! 3. UUID shape → [`KeyKind::Evp`]
//! 4. 12 or 13 digits starting with `55` → [`KeyKind::Phone`]
//! 5. 11 digits → [`KeyKind::Phone`] if the area code is valid and the third
//!    digit is `9`, otherwise [`KeyKind::Cpf`]
//! 6. 10 digits → [`KeyKind::Phone`]
//! 7. 14 digits → [`KeyKind::Cnpj`]
//! 8. anything else → none
//!
//! Detection is best-effort. An 11-digit CPF whose first digits look like a
//! mobile number is reported as a phone; callers that need certainty must
//! ask for the kind explicitly.

use crate::area_code;
use crate::kind::KeyKind;
use crate::normalize;
use crate::validate;

/// Infer the kind of `value`, or `None` if no rule matches.
pub fn detect(value: &str) -> Option<KeyKind> {
    let trimmed = normalize::trim_space(value);
    if trimmed.is_empty() {
        return None;
    }

    if validate::is_valid_email(trimmed) {
        tracing::trace!(rule = "email", "detected PIX key kind");
        return Some(KeyKind::Email);
    }
    if validate::is_valid_evp(trimmed) {
        tracing::trace!(rule = "evp", "detected PIX key kind");
        return Some(KeyKind::Evp);
    }

    let digits = normalize::digits_only(trimmed);
    let detected = match digits.len() {
        12 | 13 if digits.starts_with(normalize::COUNTRY_CODE) => Some(KeyKind::Phone),
        11 if looks_like_mobile(&digits) => Some(KeyKind::Phone),
        11 => Some(KeyKind::Cpf),
        10 => Some(KeyKind::Phone),
        14 => Some(KeyKind::Cnpj),
        _ => None,
    };
    tracing::trace!(digits = digits.len(), kind = ?detected, "digit-count rule applied");
    detected
}

/// Valid area code followed by the `9` mobile marker.
fn looks_like_mobile(digits: &str) -> bool {
    let known_area = area_code::leading(digits).is_some_and(area_code::is_valid);
    known_area && digits.as_bytes().get(2) == Some(&b'9')
}
