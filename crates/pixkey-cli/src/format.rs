//! # Format and Clean Subcommands
//!
//! `format` prints the display form of a value (masked with `--mask`);
//! `clean` prints its canonical storage form. Neither validates.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pixkey_core::{clean, format, mask, KeyKind};

use crate::input::key_input;
use crate::output::print_json;

/// Arguments for the format subcommand.
#[derive(Args, Debug)]
pub struct FormatArgs {
    /// Value to format.
    pub value: String,

    /// Key kind (cpf, cnpj, phone, email, evp). Detected when omitted.
    #[arg(long, short)]
    pub kind: Option<KeyKind>,

    /// Hide part of a CPF or CNPJ.
    #[arg(long)]
    pub mask: bool,
}

/// Arguments for the clean subcommand.
#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Value to normalize.
    pub value: String,

    /// Key kind (cpf, cnpj, phone, email, evp). Detected when omitted.
    #[arg(long, short)]
    pub kind: Option<KeyKind>,
}

/// A transformed value.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Rendered {
    pub value: String,
    pub kind: KeyKind,
    pub output: String,
}

/// Display form of `value`, masked if requested.
pub fn render(value: &str, kind: KeyKind, masked: bool) -> Rendered {
    let output = if masked {
        mask(value, kind)
    } else {
        format(value, kind)
    };
    Rendered {
        value: value.to_string(),
        kind,
        output,
    }
}

/// Canonical form of `value`.
pub fn normalize(value: &str, kind: KeyKind) -> Rendered {
    Rendered {
        value: value.to_string(),
        kind,
        output: clean(value, kind),
    }
}

fn emit(rendered: &Rendered, json: bool) -> Result<u8> {
    if json {
        print_json(rendered)?;
    } else {
        println!("{}", rendered.output);
    }
    Ok(0)
}

/// Execute the format subcommand.
pub fn run_format(args: &FormatArgs, json: bool) -> Result<u8> {
    let (kind, value) = key_input(&args.value, args.kind)?;
    emit(&render(value, kind, args.mask), json)
}

/// Execute the clean subcommand.
pub fn run_clean(args: &CleanArgs, json: bool) -> Result<u8> {
    let (kind, value) = key_input(&args.value, args.kind)?;
    emit(&normalize(value, kind), json)
}
