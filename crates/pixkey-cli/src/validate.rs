//! # Validate Subcommand
//!
//! Validates a value against its kind's rules and prints `valid` or
//! `invalid: <reason>`. Exit code 0 when valid, 1 otherwise.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pixkey_core::{check, KeyKind};

use crate::input::key_input;
use crate::output::{exit_code, print_json};

/// Arguments for the validate subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Value to validate.
    pub value: String,

    /// Key kind (cpf, cnpj, phone, email, evp). Detected when omitted.
    #[arg(long, short)]
    pub kind: Option<KeyKind>,
}

/// Validation outcome for one value.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Verdict {
    pub value: String,
    pub kind: KeyKind,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Validate `value` as `kind`.
pub fn verdict(value: &str, kind: KeyKind) -> Verdict {
    let outcome = check(value, kind);
    Verdict {
        value: value.to_string(),
        kind,
        valid: outcome.is_ok(),
        reason: outcome.err().map(|e| e.to_string()),
    }
}

/// Execute the validate subcommand.
pub fn run_validate(args: &ValidateArgs, json: bool) -> Result<u8> {
    let (kind, value) = key_input(&args.value, args.kind)?;
    let v = verdict(value, kind);

    if json {
        print_json(&v)?;
    } else {
        match &v.reason {
            None => println!("valid"),
            Some(reason) => println!("invalid: {reason}"),
        }
    }

    Ok(exit_code(v.valid))
}
