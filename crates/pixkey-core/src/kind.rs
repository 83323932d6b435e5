//! # PIX Key Kinds
//!
//! Defines the `KeyKind` enum with the five PIX key kinds. Every `match`
//! on `KeyKind` is exhaustive, so adding a kind forces every operation
//! (detect, validate, format, clean, mask) to handle it at compile time.
//!
//! Each kind also carries its static lookup data: the wire id used by
//! serde, the Brazilian Portuguese label, and an input placeholder.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// The five kinds of PIX key.
///
/// | Kind | id | Label | Canonical form |
/// |------|----|-------|----------------|
/// | Cpf | `cpf` | CPF | 11 digits |
/// | Cnpj | `cnpj` | CNPJ | 14 digits |
/// | Phone | `phone` | Telefone | 10 or 11 digits, no country code |
/// | Email | `email` | E-mail | trimmed, lower-case |
/// | Evp | `evp` | EVP (Aleatoria) | trimmed, lower-case UUID |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyKind {
    /// Individual taxpayer number (Cadastro de Pessoas Físicas).
    Cpf,
    /// Corporate taxpayer number (Cadastro Nacional da Pessoa Jurídica).
    Cnpj,
    /// Brazilian telephone number with area code.
    Phone,
    /// E-mail address.
    Email,
    /// Random key ("chave aleatória"), a UUID issued by the bank.
    Evp,
}

/// Total number of key kinds.
pub const KEY_KIND_COUNT: usize = 5;

impl KeyKind {
    /// Returns all key kinds in canonical order.
    pub fn all() -> &'static [KeyKind] {
        &[Self::Cpf, Self::Cnpj, Self::Phone, Self::Email, Self::Evp]
    }

    /// Returns the lowercase id for this kind, matching serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cpf => "cpf",
            Self::Cnpj => "cnpj",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Evp => "evp",
        }
    }

    /// Brazilian Portuguese display label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
            Self::Phone => "Telefone",
            Self::Email => "E-mail",
            Self::Evp => "EVP (Aleatoria)",
        }
    }

    /// Example input shown in an empty field. Not necessarily a valid key.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Cpf => "123.456.789-01",
            Self::Cnpj => "12.345.678/0001-90",
            Self::Phone => "+55 (11) 99999-9999",
            Self::Email => "exemplo@email.com",
            Self::Evp => "123e4567-e89b-12d3-a456-426614174000",
        }
    }

    /// Whether the canonical form of this kind is a digit string.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Cpf | Self::Cnpj | Self::Phone)
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for KeyKind {
    type Err = ValidationError;

    /// Parse a kind from its id or its label, ignoring case and
    /// surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|k| {
                k.as_str().eq_ignore_ascii_case(wanted) || k.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| ValidationError::UnknownKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_kinds_count() {
        assert_eq!(KeyKind::all().len(), KEY_KIND_COUNT);
    }

    #[test]
    fn all_kinds_unique() {
        let mut seen = std::collections::HashSet::new();
        for k in KeyKind::all() {
            assert!(seen.insert(k), "Duplicate kind: {k}");
        }
    }

    #[test]
    fn as_str_matches_serde() {
        for k in KeyKind::all() {
            let json = serde_json::to_string(k).unwrap();
            assert_eq!(json, format!("\"{}\"", k.as_str()));
            let back: KeyKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *k);
        }
    }

    #[test]
    fn from_str_accepts_id_and_label() {
        assert_eq!("cpf".parse::<KeyKind>().unwrap(), KeyKind::Cpf);
        assert_eq!("CNPJ".parse::<KeyKind>().unwrap(), KeyKind::Cnpj);
        assert_eq!("Telefone".parse::<KeyKind>().unwrap(), KeyKind::Phone);
        assert_eq!("e-mail".parse::<KeyKind>().unwrap(), KeyKind::Email);
        assert_eq!(" evp ".parse::<KeyKind>().unwrap(), KeyKind::Evp);
    }

    #[test]
    fn from_str_rejects_unknown() {
        let err = "rg".parse::<KeyKind>().unwrap_err();
        assert_eq!(err, ValidationError::UnknownKind("rg".into()));
        assert!("".parse::<KeyKind>().is_err());
    }

    #[test]
    fn unknown_kind_rejected_by_serde() {
        assert!(serde_json::from_str::<KeyKind>("\"passport\"").is_err());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(KeyKind::Phone.to_string(), "Telefone");
        assert_eq!(KeyKind::Evp.to_string(), "EVP (Aleatoria)");
    }

    #[test]
    fn numeric_kinds() {
        assert!(KeyKind::Cpf.is_numeric());
        assert!(KeyKind::Cnpj.is_numeric());
        assert!(KeyKind::Phone.is_numeric());
        assert!(!KeyKind::Email.is_numeric());
        assert!(!KeyKind::Evp.is_numeric());
    }
}
