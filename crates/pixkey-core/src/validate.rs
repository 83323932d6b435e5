//! # Validators
//!
//! Kind-specific rules for PIX keys. [`check`] returns the reason a value
//! is rejected; [`validate`] is its boolean form and never distinguishes
//! between a wrong shape and a wrong checksum.
//!
//! | Kind | Rule |
//! |------|------|
//! | CPF | 11 digits, not all identical, modulo-11 check digits |
//! | CNPJ | 14 digits, not all identical, modulo-11 check digits |
//! | Phone | 10/11 local digits, known area code, `9` mobile marker for 11 digits, `2`-`9` for 10 |
//! | E-mail | `local@domain.tld` with no whitespace and a single `@` |
//! | EVP | UUID `8-4-4-4-12`, version `1`-`5`, variant `8`/`9`/`a`/`b` |

use crate::area_code;
use crate::checksum;
use crate::error::ValidationError;
use crate::kind::KeyKind;
use crate::normalize;

/// Whether `value` is a valid PIX key of `kind`. Empty input is never valid.
pub fn validate(value: &str, kind: KeyKind) -> bool {
    check(value, kind).is_ok()
}

/// Validate `value` as a key of `kind`, reporting why it fails.
///
/// # Errors
///
/// Returns the first [`ValidationError`] found for the value.
pub fn check(value: &str, kind: KeyKind) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty);
    }
    match kind {
        KeyKind::Cpf => check_cpf(value),
        KeyKind::Cnpj => check_cnpj(value),
        KeyKind::Phone => check_phone(value),
        KeyKind::Email => check_email(value),
        KeyKind::Evp => check_evp(value),
    }
}

/// Whether `value` is a valid CPF, formatted or not.
pub fn is_valid_cpf(value: &str) -> bool {
    check_cpf(value).is_ok()
}

/// Whether `value` is a valid CNPJ, formatted or not.
pub fn is_valid_cnpj(value: &str) -> bool {
    check_cnpj(value).is_ok()
}

/// Whether `value` is a valid Brazilian phone number, with or without `+55`.
pub fn is_valid_phone(value: &str) -> bool {
    check_phone(value).is_ok()
}

/// Whether `value` has the shape `local@domain.tld`.
pub fn is_valid_email(value: &str) -> bool {
    check_email(value).is_ok()
}

/// Whether `value`, trimmed, is a version 1-5 UUID.
pub fn is_valid_evp(value: &str) -> bool {
    check_evp(value).is_ok()
}

fn check_document(
    value: &str,
    kind: KeyKind,
    expected: &'static str,
    len: usize,
    matches: fn(&[u8]) -> bool,
) -> Result<(), ValidationError> {
    let digits = normalize::digits_only(value);
    if digits.len() != len {
        return Err(ValidationError::Length {
            kind,
            expected,
            actual: digits.len(),
        });
    }
    let values = checksum::digit_values(&digits).ok_or(ValidationError::Checksum(kind))?;
    if checksum::all_same(&values) {
        return Err(ValidationError::RepeatedDigits(kind));
    }
    if !matches(&values) {
        return Err(ValidationError::Checksum(kind));
    }
    Ok(())
}

fn check_cpf(value: &str) -> Result<(), ValidationError> {
    check_document(value, KeyKind::Cpf, "11", 11, checksum::cpf_matches)
}

fn check_cnpj(value: &str) -> Result<(), ValidationError> {
    check_document(value, KeyKind::Cnpj, "14", 14, checksum::cnpj_matches)
}

fn check_phone(value: &str) -> Result<(), ValidationError> {
    let local = normalize::split_country_code(value).local;
    if local.len() != 10 && local.len() != 11 {
        return Err(ValidationError::Length {
            kind: KeyKind::Phone,
            expected: "10 or 11",
            actual: local.len(),
        });
    }

    let code = area_code::leading(&local).filter(|c| area_code::is_valid(*c));
    if code.is_none() {
        return Err(ValidationError::AreaCode(local[..2].to_string()));
    }

    // Length was checked above, so the third digit exists.
    let third = local.as_bytes()[2] as char;
    if local.len() == 11 && third != '9' {
        return Err(ValidationError::SubscriberPrefix {
            expected: "9",
            actual: third,
        });
    }
    if local.len() == 10 && !('2'..='9').contains(&third) {
        return Err(ValidationError::SubscriberPrefix {
            expected: "2-9",
            actual: third,
        });
    }
    Ok(())
}

fn check_email(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(normalize::is_space) {
        return Err(ValidationError::MalformedEmail);
    }
    let (local, domain) = value.split_once('@').ok_or(ValidationError::MalformedEmail)?;
    if local.is_empty() || domain.contains('@') {
        return Err(ValidationError::MalformedEmail);
    }
    // Some dot in the domain must have at least one character on each side.
    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());
    if !has_inner_dot {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}

const UUID_GROUPS: [usize; 5] = [8, 4, 4, 4, 12];

fn check_evp(value: &str) -> Result<(), ValidationError> {
    let trimmed = normalize::trim_space(value);
    let groups: Vec<&str> = trimmed.split('-').collect();
    if groups.len() != UUID_GROUPS.len() {
        return Err(ValidationError::MalformedEvp);
    }
    let shape_ok = groups
        .iter()
        .zip(UUID_GROUPS)
        .all(|(g, len)| g.len() == len && g.bytes().all(|b| b.is_ascii_hexdigit()));
    if !shape_ok {
        return Err(ValidationError::MalformedEvp);
    }

    let version = groups[2].as_bytes()[0];
    let variant = groups[3].as_bytes()[0].to_ascii_lowercase();
    if !(b'1'..=b'5').contains(&version) || !matches!(variant, b'8' | b'9' | b'a' | b'b') {
        return Err(ValidationError::MalformedEvp);
    }
    Ok(())
}
