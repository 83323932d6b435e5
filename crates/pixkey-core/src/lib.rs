//! # pixkey-core — PIX Key Engine
//!
//! Classification, validation, formatting and normalization of Brazilian
//! PIX payment keys. The engine is a set of pure functions over text: no
//! I/O, no shared mutable state, safe to call from any thread.
//!
//! ## Operations
//!
//! | Operation | Signature | Use |
//! |-----------|-----------|-----|
//! | [`detect`] | `&str -> Option<KeyKind>` | infer the kind when none is pinned |
//! | [`validate`] | `(&str, KeyKind) -> bool` | gate acceptance and persistence |
//! | [`format`] | `(&str, KeyKind) -> String` | display only |
//! | [`clean`] | `(&str, KeyKind) -> String` | storage, comparison, uniqueness |
//!
//! ```
//! use pixkey_core::{clean, detect, format, validate, KeyKind};
//!
//! let raw = "+55 11 98765-4321";
//! let kind = detect(raw).unwrap();
//! assert_eq!(kind, KeyKind::Phone);
//! assert!(validate(raw, kind));
//! assert_eq!(clean(raw, kind), "11987654321");
//! assert_eq!(format(raw, kind), "+55 (11) 98765-4321");
//! ```
//!
//! ## Key Kinds
//!
//! CPF and CNPJ carry modulo-11 check digits ([`checksum`]); phone numbers
//! are checked against the national area-code table ([`area_code`]);
//! e-mail and EVP (UUID) keys are shape-checked.
//!
//! ## Crate Policy
//!
//! - The four operations are total: failures are `false` or `None`.
//! - Reason-bearing variants ([`validate::check`], [`PixKey::new`],
//!   [`KeyPolicy::resolve`]) return typed errors from [`error`].
//! - No `unsafe` code. No `panic!()` or `.unwrap()` outside tests.

pub mod area_code;
pub mod checksum;
pub mod detect;
pub mod error;
pub mod format;
pub mod key;
pub mod kind;
pub mod normalize;
pub mod policy;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use detect::detect;
pub use error::{PolicyError, ValidationError};
pub use format::{format, mask};
pub use key::PixKey;
pub use kind::{KeyKind, KEY_KIND_COUNT};
pub use normalize::clean;
pub use policy::{KeyPolicy, ResolvedKey};
pub use validate::{check, validate};
