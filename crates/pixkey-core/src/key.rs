//! # Validated PIX Key
//!
//! [`PixKey`] pairs a [`KeyKind`] with the canonical form of a value that
//! passed validation for that kind. Two keys are equal exactly when their
//! kind and canonical form are equal, so `PixKey` is the type to use for
//! storage, comparison and uniqueness checks.
//!
//! Deserialization routes through [`PixKey::new`], so a stored key that no
//! longer validates is rejected instead of silently accepted.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::detect::detect;
use crate::error::ValidationError;
use crate::format;
use crate::kind::KeyKind;
use crate::normalize::{clean, trim_space};
use crate::validate::check;

/// A PIX key that has been validated and normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PixKey {
    kind: KeyKind,
    #[serde(rename = "key")]
    canonical: String,
}

#[derive(Deserialize)]
struct RawPixKey {
    kind: KeyKind,
    key: String,
}

impl<'de> Deserialize<'de> for PixKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawPixKey::deserialize(deserializer)?;
        Self::new(raw.kind, &raw.key).map_err(serde::de::Error::custom)
    }
}

impl PixKey {
    /// Validate `raw` as a key of `kind` and store its canonical form.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] explaining why `raw` is not a valid
    /// key of `kind`.
    pub fn new(kind: KeyKind, raw: &str) -> Result<Self, ValidationError> {
        check(raw, kind)?;
        Ok(Self {
            kind,
            canonical: clean(raw, kind),
        })
    }

    /// Detect the kind of `raw`, then validate it as that kind. Surrounding
    /// whitespace is ignored, as it is by detection.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for blank input,
    /// [`ValidationError::Undetected`] when no kind can be detected, or
    /// the validation failure for the detected kind.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let raw = trim_space(raw);
        if raw.is_empty() {
            return Err(ValidationError::Empty);
        }
        let kind = detect(raw).ok_or(ValidationError::Undetected)?;
        Self::new(kind, raw)
    }

    /// The key's kind.
    pub fn kind(&self) -> KeyKind {
        self.kind
    }

    /// The canonical (storage) form.
    pub fn as_str(&self) -> &str {
        &self.canonical
    }

    /// The display form, e.g. `123.456.789-09`.
    pub fn formatted(&self) -> String {
        format::format(&self.canonical, self.kind)
    }

    /// The display form with part of a CPF or CNPJ hidden.
    pub fn masked(&self) -> String {
        format::mask(&self.canonical, self.kind)
    }

    /// The UUID of an EVP key. `None` for other kinds.
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self.kind {
            KeyKind::Evp => Uuid::parse_str(&self.canonical).ok(),
            KeyKind::Cpf | KeyKind::Cnpj | KeyKind::Phone | KeyKind::Email => None,
        }
    }
}

impl std::fmt::Display for PixKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl std::str::FromStr for PixKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stores_canonical_form() {
        let key = PixKey::new(KeyKind::Cpf, "123.456.789-09").unwrap();
        assert_eq!(key.kind(), KeyKind::Cpf);
        assert_eq!(key.as_str(), "12345678909");
        assert_eq!(key.formatted(), "123.456.789-09");
        assert_eq!(key.masked(), "***.456.789-**");
    }

    #[test]
    fn new_rejects_invalid() {
        assert_eq!(
            PixKey::new(KeyKind::Cnpj, "11.222.333/0001-80"),
            Err(ValidationError::Checksum(KeyKind::Cnpj))
        );
        assert_eq!(PixKey::new(KeyKind::Email, ""), Err(ValidationError::Empty));
    }

    #[test]
    fn parse_detects_kind() {
        let key: PixKey = "+55 (11) 98765-4321".parse().unwrap();
        assert_eq!(key.kind(), KeyKind::Phone);
        assert_eq!(key.as_str(), "11987654321");
        assert_eq!(key.to_string(), "(11) 98765-4321");
    }

    #[test]
    fn parse_ignores_surrounding_whitespace() {
        let key = PixKey::parse(" user@example.com ").unwrap();
        assert_eq!(key.kind(), KeyKind::Email);
        assert_eq!(key.as_str(), "user@example.com");

        let key = PixKey::parse("\u{feff}user@example.com\n").unwrap();
        assert_eq!(key.as_str(), "user@example.com");
    }

    #[test]
    fn new_with_explicit_email_kind_is_not_trimmed() {
        assert_eq!(
            PixKey::new(KeyKind::Email, " user@example.com "),
            Err(ValidationError::MalformedEmail)
        );
    }

    #[test]
    fn parse_reports_undetectable() {
        assert_eq!(PixKey::parse("abc"), Err(ValidationError::Undetected));
        assert_eq!(PixKey::parse("  "), Err(ValidationError::Empty));
    }

    #[test]
    fn parse_validates_detected_kind() {
        // Detected as CPF by digit count, but the check digits are wrong.
        assert_eq!(
            PixKey::parse("123.456.789-00"),
            Err(ValidationError::Checksum(KeyKind::Cpf))
        );
    }

    #[test]
    fn formatting_variants_compare_equal() {
        let a = PixKey::new(KeyKind::Phone, "+55 11 98765-4321").unwrap();
        let b = PixKey::new(KeyKind::Phone, "(11)987654321").unwrap();
        assert_eq!(a, b);

        let c = PixKey::new(KeyKind::Email, "User@Example.com").unwrap();
        let d = PixKey::new(KeyKind::Email, "user@example.com").unwrap();
        assert_eq!(c, d);
    }

    #[test]
    fn evp_uuid() {
        let key = PixKey::new(KeyKind::Evp, "123E4567-E89B-12D3-A456-426614174000").unwrap();
        let uuid = key.as_uuid().unwrap();
        assert_eq!(uuid.to_string(), "123e4567-e89b-12d3-a456-426614174000");
        assert_eq!(uuid.get_version_num(), 1);

        let cpf = PixKey::new(KeyKind::Cpf, "12345678909").unwrap();
        assert_eq!(cpf.as_uuid(), None);
    }

    #[test]
    fn serde_roundtrip() {
        let key = PixKey::new(KeyKind::Cnpj, "11.222.333/0001-81").unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, r#"{"kind":"cnpj","key":"11222333000181"}"#);
        let back: PixKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, key);
    }

    #[test]
    fn deserialize_normalizes() {
        let key: PixKey = serde_json::from_str(r#"{"kind":"cpf","key":"123.456.789-09"}"#).unwrap();
        assert_eq!(key.as_str(), "12345678909");
    }

    #[test]
    fn deserialize_rejects_invalid() {
        let result: Result<PixKey, _> =
            serde_json::from_str(r#"{"kind":"cpf","key":"11111111111"}"#);
        assert!(result.is_err());
        let result: Result<PixKey, _> =
            serde_json::from_str(r#"{"kind":"rg","key":"123"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn keys_in_hashset() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(PixKey::new(KeyKind::Cpf, "123.456.789-09").unwrap());
        set.insert(PixKey::new(KeyKind::Cpf, "12345678909").unwrap());
        set.insert(PixKey::new(KeyKind::Cnpj, "11222333000181").unwrap());
        assert_eq!(set.len(), 2);
    }
}
