//! # Key Acceptance Policy
//!
//! [`KeyPolicy`] decides whether a value entered by a user is accepted as a
//! PIX key: which kinds are allowed, whether the kind is auto-detected,
//! which kind applies when it is not, and whether the value must validate.
//!
//! Policies are plain serde documents, loaded from YAML or JSON:
//!
//! ```yaml
//! allowed_types: [cpf, cnpj]
//! default_type: cnpj
//! auto_detect_type: false
//! validate_key: true
//! required: true
//! ```
//!
//! Every field is optional; an empty document is the permissive default.

use serde::{Deserialize, Serialize};

use crate::detect::detect;
use crate::error::PolicyError;
use crate::format;
use crate::kind::KeyKind;
use crate::normalize::{clean, trim_space};
use crate::validate::check;

/// Acceptance rules for PIX key input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyPolicy {
    /// Kinds accepted. Empty means every kind.
    pub allowed_types: Vec<KeyKind>,
    /// Kind assumed when none is given and auto-detection is off.
    pub default_type: KeyKind,
    /// Detect the kind when none is given.
    pub auto_detect_type: bool,
    /// Reject values that fail validation for their kind.
    pub validate_key: bool,
    /// Reject blank input.
    pub required: bool,
}

impl Default for KeyPolicy {
    fn default() -> Self {
        Self {
            allowed_types: Vec::new(),
            default_type: KeyKind::Cpf,
            auto_detect_type: true,
            validate_key: true,
            required: false,
        }
    }
}

/// A value accepted by a [`KeyPolicy`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedKey {
    /// Kind the value was resolved as.
    pub kind: KeyKind,
    /// Canonical storage form.
    pub canonical: String,
    /// Display form.
    pub display: String,
    /// Whether the value validates. Always `true` when the policy
    /// enforces validation.
    pub valid: bool,
}

impl KeyPolicy {
    /// Parse a policy from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Config`] on malformed YAML, unknown fields, or
    /// unknown kind ids.
    pub fn from_yaml_str(text: &str) -> Result<Self, PolicyError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).map_err(|e| PolicyError::Config(e.to_string()))
    }

    /// Parse a policy from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Config`] on malformed JSON, unknown fields, or
    /// unknown kind ids.
    pub fn from_json_str(text: &str) -> Result<Self, PolicyError> {
        serde_json::from_str(text).map_err(|e| PolicyError::Config(e.to_string()))
    }

    /// Whether `kind` is in the allowed set.
    pub fn allows(&self, kind: KeyKind) -> bool {
        self.allowed_types.is_empty() || self.allowed_types.contains(&kind)
    }

    /// Kinds the policy accepts, in canonical order.
    pub fn allowed_kinds(&self) -> Vec<KeyKind> {
        KeyKind::all()
            .iter()
            .copied()
            .filter(|k| self.allows(*k))
            .collect()
    }

    /// Pick the kind for `raw`: the explicit kind if given, otherwise the
    /// detected kind (auto-detect on) or the default kind (auto-detect off).
    fn select_kind(&self, raw: &str, explicit: Option<KeyKind>) -> Result<KeyKind, PolicyError> {
        if let Some(kind) = explicit {
            return Ok(kind);
        }
        if self.auto_detect_type {
            detect(raw).ok_or(PolicyError::KindUndetermined)
        } else {
            Ok(self.default_type)
        }
    }

    /// Apply the policy to `raw`.
    ///
    /// Returns `Ok(None)` for blank input when the policy does not require
    /// a value. When the kind is detected, surrounding whitespace is ignored
    /// as it is by detection.
    ///
    /// # Errors
    ///
    /// - [`PolicyError::Required`] for blank input under `required`.
    /// - [`PolicyError::KindUndetermined`] when auto-detection finds nothing.
    /// - [`PolicyError::KindNotAllowed`] when the kind is outside `allowed_types`.
    /// - [`PolicyError::Invalid`] when `validate_key` is set and the value fails.
    pub fn resolve(
        &self,
        raw: &str,
        explicit: Option<KeyKind>,
    ) -> Result<Option<ResolvedKey>, PolicyError> {
        if trim_space(raw).is_empty() {
            if self.required {
                tracing::debug!("rejected blank PIX key: value required");
                return Err(PolicyError::Required);
            }
            return Ok(None);
        }

        let kind = self.select_kind(raw, explicit)?;
        if !self.allows(kind) {
            tracing::debug!(kind = kind.as_str(), "rejected PIX key: kind not allowed");
            return Err(PolicyError::KindNotAllowed(kind));
        }

        let detected = explicit.is_none() && self.auto_detect_type;
        let raw = if detected { trim_space(raw) } else { raw };

        let outcome = check(raw, kind);
        if let (true, Err(reason)) = (self.validate_key, &outcome) {
            tracing::debug!(kind = kind.as_str(), %reason, "rejected invalid PIX key");
            return Err(PolicyError::Invalid(reason.clone()));
        }

        Ok(Some(ResolvedKey {
            kind,
            canonical: clean(raw, kind),
            display: format::format(raw, kind),
            valid: outcome.is_ok(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn default_policy_matches_documented_defaults() {
        let p = KeyPolicy::default();
        assert!(p.allowed_types.is_empty());
        assert_eq!(p.default_type, KeyKind::Cpf);
        assert!(p.auto_detect_type);
        assert!(p.validate_key);
        assert!(!p.required);
        assert_eq!(p.allowed_kinds(), KeyKind::all());
    }

    #[test]
    fn blank_input_optional_or_required() {
        let p = KeyPolicy::default();
        assert_eq!(p.resolve("", None), Ok(None));
        assert_eq!(p.resolve("   ", None), Ok(None));

        let p = KeyPolicy {
            required: true,
            ..KeyPolicy::default()
        };
        assert_eq!(p.resolve(" ", None), Err(PolicyError::Required));
    }

    #[test]
    fn auto_detect_resolves_kind() {
        let p = KeyPolicy::default();
        let r = p.resolve("+55 11 98765-4321", None).unwrap().unwrap();
        assert_eq!(r.kind, KeyKind::Phone);
        assert_eq!(r.canonical, "11987654321");
        assert_eq!(r.display, "+55 (11) 98765-4321");
        assert!(r.valid);
    }

    #[test]
    fn detected_key_ignores_surrounding_whitespace() {
        let p = KeyPolicy::default();
        let r = p.resolve(" user@example.com ", None).unwrap().unwrap();
        assert_eq!(r.kind, KeyKind::Email);
        assert_eq!(r.canonical, "user@example.com");
        assert!(r.valid);

        let r = p.resolve("11222333000181 \n", None).unwrap().unwrap();
        assert_eq!(r.kind, KeyKind::Cnpj);
    }

    #[test]
    fn auto_detect_failure_requires_explicit_kind() {
        let p = KeyPolicy::default();
        assert_eq!(p.resolve("abc", None), Err(PolicyError::KindUndetermined));
    }

    #[test]
    fn explicit_kind_wins_over_detection() {
        let p = KeyPolicy::default();
        // Looks like a mobile number, but the caller says CPF.
        let err = p.resolve("11987654321", Some(KeyKind::Cpf)).unwrap_err();
        assert_eq!(err, PolicyError::Invalid(ValidationError::Checksum(KeyKind::Cpf)));
    }

    #[test]
    fn default_type_used_without_auto_detect() {
        let p = KeyPolicy {
            auto_detect_type: false,
            default_type: KeyKind::Email,
            ..KeyPolicy::default()
        };
        let r = p.resolve("User@Example.com", None).unwrap().unwrap();
        assert_eq!(r.kind, KeyKind::Email);
        assert_eq!(r.canonical, "user@example.com");
    }

    #[test]
    fn disallowed_kind_rejected() {
        let p = KeyPolicy {
            allowed_types: vec![KeyKind::Cpf, KeyKind::Cnpj],
            ..KeyPolicy::default()
        };
        assert_eq!(
            p.resolve("user@example.com", None),
            Err(PolicyError::KindNotAllowed(KeyKind::Email))
        );
        assert!(p.resolve("11.222.333/0001-81", None).unwrap().is_some());
        assert_eq!(p.allowed_kinds(), vec![KeyKind::Cpf, KeyKind::Cnpj]);
    }

    #[test]
    fn validation_can_be_disabled() {
        let p = KeyPolicy {
            validate_key: false,
            ..KeyPolicy::default()
        };
        let r = p.resolve("123.456.789-00", None).unwrap().unwrap();
        assert_eq!(r.kind, KeyKind::Cpf);
        assert_eq!(r.canonical, "12345678900");
        assert!(!r.valid);
    }

    #[test]
    fn yaml_policy() {
        let p = KeyPolicy::from_yaml_str(
            "allowed_types: [cpf, cnpj]\ndefault_type: cnpj\nauto_detect_type: false\nrequired: true\n",
        )
        .unwrap();
        assert_eq!(p.allowed_types, vec![KeyKind::Cpf, KeyKind::Cnpj]);
        assert_eq!(p.default_type, KeyKind::Cnpj);
        assert!(!p.auto_detect_type);
        assert!(p.validate_key);
        assert!(p.required);
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(KeyPolicy::from_yaml_str("").unwrap(), KeyPolicy::default());
        assert_eq!(KeyPolicy::from_yaml_str("{}").unwrap(), KeyPolicy::default());
    }

    #[test]
    fn json_policy() {
        let p = KeyPolicy::from_json_str(r#"{"allowed_types":["evp"],"validate_key":false}"#)
            .unwrap();
        assert_eq!(p.allowed_types, vec![KeyKind::Evp]);
        assert!(!p.validate_key);
    }

    #[test]
    fn config_errors() {
        assert!(matches!(
            KeyPolicy::from_yaml_str("allowed_types: [passport]"),
            Err(PolicyError::Config(_))
        ));
        assert!(matches!(
            KeyPolicy::from_yaml_str("show_qr_code: true"),
            Err(PolicyError::Config(_))
        ));
        assert!(matches!(
            KeyPolicy::from_json_str("{"),
            Err(PolicyError::Config(_))
        ));
    }
}
