//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used by the PIX key engine. All errors use
//! `thiserror` for derive-based `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - The four core operations (`detect`, `validate`, `format`, `clean`) are
//!   total and never return these errors. They surface failure as `false`
//!   or `None`.
//! - [`ValidationError`] is the reason-bearing form of a `false` from
//!   `validate`, produced by [`crate::validate::check`].
//! - [`PolicyError`] covers acceptance-policy rejections and policy
//!   configuration failures.

use thiserror::Error;

use crate::kind::KeyKind;

/// Why a value is not a valid PIX key of a given kind.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Empty input is never a valid key.
    #[error("empty value")]
    Empty,

    /// Digit count does not match the kind's fixed length(s).
    #[error("{kind} must have {expected} digits, got {actual}")]
    Length {
        /// Kind being validated.
        kind: KeyKind,
        /// Human-readable expected length (e.g. `"11"` or `"10 or 11"`).
        expected: &'static str,
        /// Digits present after normalization.
        actual: usize,
    },

    /// All digits identical (`000.000.000-00` and friends).
    #[error("{0} with all digits identical")]
    RepeatedDigits(KeyKind),

    /// Check digits do not match the modulo-11 computation.
    #[error("{0} check digits do not match")]
    Checksum(KeyKind),

    /// The two-digit prefix is not a Brazilian area code (DDD).
    #[error("unknown area code {0:?}")]
    AreaCode(String),

    /// The digit after the area code is not allowed for this number length.
    #[error("subscriber number must start with {expected}, got '{actual}'")]
    SubscriberPrefix {
        /// Allowed leading digit(s).
        expected: &'static str,
        /// Leading digit found.
        actual: char,
    },

    /// Not of the shape `local@domain.tld`.
    #[error("malformed e-mail address")]
    MalformedEmail,

    /// Not a canonical version 1-5 UUID.
    #[error("malformed EVP key (expected UUID v1-v5)")]
    MalformedEvp,

    /// No detection rule matched the value.
    #[error("could not determine the PIX key kind")]
    Undetected,

    /// Text does not name one of the five key kinds.
    #[error("unknown PIX key kind: {0:?}")]
    UnknownKind(String),
}

/// Rejection by a [`crate::policy::KeyPolicy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    /// The policy requires a value and none was given.
    #[error("a PIX key is required")]
    Required,

    /// Auto-detection was requested but the value matches no kind.
    #[error("could not determine the PIX key kind; select one explicitly")]
    KindUndetermined,

    /// The kind is outside the policy's allowed set.
    #[error("PIX key kind {0} is not allowed")]
    KindNotAllowed(KeyKind),

    /// The value failed validation for its kind.
    #[error("invalid PIX key: {0}")]
    Invalid(#[from] ValidationError),

    /// The policy document could not be parsed.
    #[error("invalid policy configuration: {0}")]
    Config(String),
}
