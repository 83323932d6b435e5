//! # Formatters
//!
//! Display formatting for PIX keys. Formatting is presentational only: it
//! does not imply validity, drops any non-digit junk for numeric kinds, and
//! truncates digits beyond the kind's full length.
//!
//! Numeric kinds are grouped progressively, so a partially typed value is
//! formatted as far as it goes:
//!
//! | Kind | Full form |
//! |------|-----------|
//! | CPF | `123.456.789-09` |
//! | CNPJ | `11.222.333/0001-81` |
//! | Phone | `(11) 98765-4321`, `(11) 3456-7890`, `+55 (11) 98765-4321` |

use crate::kind::KeyKind;
use crate::normalize;

/// Character that replaces hidden digits in [`mask`].
pub const MASK_CHAR: char = '*';

/// A progressive grouping: `prefix`, then chunks of `sizes` joined by
/// `separators` (one fewer than sizes).
struct Grouping {
    prefix: &'static str,
    sizes: &'static [usize],
    separators: &'static [&'static str],
}

const CPF: Grouping = Grouping {
    prefix: "",
    sizes: &[3, 3, 3, 2],
    separators: &[".", ".", "-"],
};

const CNPJ: Grouping = Grouping {
    prefix: "",
    sizes: &[2, 3, 3, 4, 2],
    separators: &[".", ".", "/", "-"],
};

const PHONE_LANDLINE: Grouping = Grouping {
    prefix: "(",
    sizes: &[2, 4, 4],
    separators: &[") ", "-"],
};

const PHONE_MOBILE: Grouping = Grouping {
    prefix: "(",
    sizes: &[2, 5, 4],
    separators: &[") ", "-"],
};

impl Grouping {
    fn capacity(&self) -> usize {
        self.sizes.iter().sum()
    }

    /// Format an ASCII digit string. Empty input stays empty; digits past
    /// the grouping's capacity are dropped.
    fn apply(&self, digits: &str) -> String {
        if digits.is_empty() {
            return String::new();
        }
        let digits = &digits[..digits.len().min(self.capacity())];
        let mut out = String::with_capacity(digits.len() + 8);
        out.push_str(self.prefix);
        let mut rest = digits;
        for (i, size) in self.sizes.iter().enumerate() {
            if rest.is_empty() {
                break;
            }
            if i > 0 {
                out.push_str(self.separators[i - 1]);
            }
            let (chunk, tail) = rest.split_at(rest.len().min(*size));
            out.push_str(chunk);
            rest = tail;
        }
        out
    }
}

/// Format `value` for display as a key of `kind`.
pub fn format(value: &str, kind: KeyKind) -> String {
    match kind {
        KeyKind::Cpf => format_cpf(value),
        KeyKind::Cnpj => format_cnpj(value),
        KeyKind::Phone => format_phone(value),
        KeyKind::Email | KeyKind::Evp => normalize::fold_text(value),
    }
}

/// Format as `DDD.DDD.DDD-DD`, progressively.
pub fn format_cpf(value: &str) -> String {
    CPF.apply(&normalize::digits_only(value))
}

/// Format as `DD.DDD.DDD/DDDD-DD`, progressively.
pub fn format_cnpj(value: &str) -> String {
    CNPJ.apply(&normalize::digits_only(value))
}

/// Format as `(DD) NNNNN-NNNN` or `(DD) NNNN-NNNN`, progressively,
/// prefixed with `+55 ` when the input carried the country code.
pub fn format_phone(value: &str) -> String {
    let phone = normalize::split_country_code(value);
    let grouping = if phone.local.len() > PHONE_LANDLINE.capacity() {
        &PHONE_MOBILE
    } else {
        &PHONE_LANDLINE
    };
    let local = grouping.apply(&phone.local);
    if phone.has_country_code && !local.is_empty() {
        format!("+{} {local}", normalize::COUNTRY_CODE)
    } else {
        local
    }
}

/// Digit positions hidden by [`mask`] for each document kind.
fn hidden_positions(kind: KeyKind) -> &'static [usize] {
    match kind {
        // ***.456.789-**
        KeyKind::Cpf => &[0, 1, 2, 9, 10],
        // 11.***.***/0001-81
        KeyKind::Cnpj => &[2, 3, 4, 5, 6, 7],
        KeyKind::Phone | KeyKind::Email | KeyKind::Evp => &[],
    }
}

/// Format `value` and hide part of it for privacy.
///
/// Only CPF and CNPJ are masked. CPF keeps the middle six digits
/// (`***.456.789-**`); CNPJ hides the six digits after the first two
/// (`11.***.***/0001-81`). Other kinds are returned formatted.
pub fn mask(value: &str, kind: KeyKind) -> String {
    let hidden = hidden_positions(kind);
    let formatted = format(value, kind);
    if hidden.is_empty() {
        return formatted;
    }
    let mut position = 0;
    formatted
        .chars()
        .map(|c| {
            if !c.is_ascii_digit() {
                return c;
            }
            let out = if hidden.contains(&position) { MASK_CHAR } else { c };
            position += 1;
            out
        })
        .collect()
}
