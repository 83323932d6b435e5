//! # Modulo-11 Check Digits
//!
//! CPF and CNPJ both end in two check digits computed from the preceding
//! digits with a weighted sum modulo 11. Weights are assigned right to left
//! starting at 2:
//!
//! - CPF weights grow without bound (2, 3, ..., 10 for the first check
//!   digit; 2, ..., 11 for the second).
//! - CNPJ weights cycle through 2..=9.
//!
//! For both, `r = sum mod 11` and the check digit is `0` when `r < 2`,
//! otherwise `11 - r`. The second check digit is computed over the base
//! digits followed by the first check digit.

/// Number of base digits in a CPF.
pub const CPF_BASE_LEN: usize = 9;
/// Number of base digits in a CNPJ.
pub const CNPJ_BASE_LEN: usize = 12;

/// Map an ASCII digit string to digit values. `None` if any byte is not
/// an ASCII digit.
pub fn digit_values(digits: &str) -> Option<Vec<u8>> {
    digits
        .bytes()
        .map(|b| b.is_ascii_digit().then(|| b - b'0'))
        .collect()
}

/// Whether every digit is the same (and there is at least one).
pub fn all_same(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}

fn mod11(sum: u32) -> u8 {
    let r = (sum % 11) as u8;
    if r < 2 {
        0
    } else {
        11 - r
    }
}

fn cpf_digit(digits: &[u8]) -> u8 {
    let sum = digits
        .iter()
        .rev()
        .zip(2u32..)
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    mod11(sum)
}

fn cnpj_digit(digits: &[u8]) -> u8 {
    let sum = digits
        .iter()
        .rev()
        .zip((2u32..=9).cycle())
        .map(|(d, w)| u32::from(*d) * w)
        .sum();
    mod11(sum)
}

fn two_digits(base: &[u8], digit: fn(&[u8]) -> u8) -> [u8; 2] {
    let first = digit(base);
    let mut extended = base.to_vec();
    extended.push(first);
    [first, digit(&extended)]
}

/// The two CPF check digits for a 9-digit base.
pub fn cpf_check_digits(base: &[u8; CPF_BASE_LEN]) -> [u8; 2] {
    two_digits(base, cpf_digit)
}

/// The two CNPJ check digits for a 12-digit base.
pub fn cnpj_check_digits(base: &[u8; CNPJ_BASE_LEN]) -> [u8; 2] {
    two_digits(base, cnpj_digit)
}

/// Whether an 11-digit CPF carries matching check digits.
///
/// Does not reject repeated-digit numbers; see [`all_same`].
pub fn cpf_matches(digits: &[u8]) -> bool {
    if digits.len() != CPF_BASE_LEN + 2 {
        return false;
    }
    let (base, check) = digits.split_at(CPF_BASE_LEN);
    two_digits(base, cpf_digit) == check
}

/// Whether a 14-digit CNPJ carries matching check digits.
///
/// Does not reject repeated-digit numbers; see [`all_same`].
pub fn cnpj_matches(digits: &[u8]) -> bool {
    if digits.len() != CNPJ_BASE_LEN + 2 {
        return false;
    }
    let (base, check) = digits.split_at(CNPJ_BASE_LEN);
    two_digits(base, cnpj_digit) == check
}

fn complete(base: &str, len: usize, digit: fn(&[u8]) -> u8) -> Option<String> {
    let values = digit_values(base)?;
    if values.len() != len {
        return None;
    }
    let [a, b] = two_digits(&values, digit);
    Some(format!("{base}{a}{b}"))
}

/// Append the check digits to a 9-digit CPF base.
///
/// Returns `None` unless `base` is exactly nine ASCII digits.
pub fn complete_cpf(base: &str) -> Option<String> {
    complete(base, CPF_BASE_LEN, cpf_digit)
}

/// Append the check digits to a 12-digit CNPJ base.
///
/// Returns `None` unless `base` is exactly twelve ASCII digits.
pub fn complete_cnpj(base: &str) -> Option<String> {
    complete(base, CNPJ_BASE_LEN, cnpj_digit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(s: &str) -> Vec<u8> {
        digit_values(s).unwrap()
    }

    #[test]
    fn digit_values_rejects_non_digits() {
        assert_eq!(digit_values("0129"), Some(vec![0, 1, 2, 9]));
        assert_eq!(digit_values("12a"), None);
        assert_eq!(digit_values(""), Some(vec![]));
    }

    #[test]
    fn all_same_detects_repeats() {
        assert!(all_same(&values("00000000000")));
        assert!(all_same(&values("7")));
        assert!(!all_same(&values("12345678909")));
        assert!(!all_same(&[]));
    }

    #[test]
    fn cpf_known_check_digits() {
        assert_eq!(cpf_check_digits(&[1, 2, 3, 4, 5, 6, 7, 8, 9]), [0, 9]);
        assert_eq!(complete_cpf("529982247").as_deref(), Some("52998224725"));
    }

    #[test]
    fn cnpj_known_check_digits() {
        assert_eq!(
            cnpj_check_digits(&[1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]),
            [8, 1]
        );
        assert_eq!(complete_cnpj("112223330001").as_deref(), Some("11222333000181"));
    }

    #[test]
    fn matches_rejects_wrong_length() {
        assert!(!cpf_matches(&values("1234567890")));
        assert!(!cpf_matches(&values("123456789090")));
        assert!(!cnpj_matches(&values("1122233300018")));
        assert!(!cpf_matches(&[]));
    }

    #[test]
    fn matches_accepts_known_good() {
        assert!(cpf_matches(&values("12345678909")));
        assert!(cnpj_matches(&values("11222333000181")));
        assert!(!cnpj_matches(&values("11222333000180")));
    }

    #[test]
    fn repeated_digits_pass_checksum_alone() {
        // The arithmetic accepts these; validators must reject them separately.
        assert!(cpf_matches(&values("11111111111")));
        assert!(cnpj_matches(&values("00000000000000")));
    }

    #[test]
    fn complete_requires_exact_base() {
        assert_eq!(complete_cpf("12345678"), None);
        assert_eq!(complete_cpf("12345678a"), None);
        assert_eq!(complete_cnpj("1122233300011"), None);
    }
}
