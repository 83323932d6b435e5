//! # pixkey-cli — PIX Key Command-Line Interface
//!
//! A clap-based front end over `pixkey-core`. Each subcommand module owns
//! its argument struct and a `run_*` handler returning the process exit
//! code.
//!
//! ## Subcommands
//!
//! - `detect` — Infer the kind of one or more keys
//! - `validate` — Check a key against its kind's rules
//! - `format` — Display form, optionally masked
//! - `clean` — Canonical storage form
//! - `inspect` — Full report per key, from arguments or stdin
//! - `resolve` — Apply a key-acceptance policy loaded from `--config`
//!
//! ## Crate Policy
//!
//! - Argument parsing is separated from the engine; handlers only call
//!   into `pixkey-core` and print.
//! - Exit code 0 means success or valid, 1 means invalid, undetectable,
//!   or an error. clap reports usage errors with exit code 2.

pub mod config;
pub mod detect;
pub mod format;
pub mod input;
pub mod inspect;
pub mod output;
pub mod resolve;
pub mod validate;
