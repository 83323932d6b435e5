//! # Inspect Subcommand
//!
//! Full report for each value: detected kind, validity with reason,
//! canonical, display and masked forms, and the state of a phone number's
//! area code. Values come from the arguments, or from stdin one per line
//! when none are given.
//!
//! ```bash
//! printf '11.222.333/0001-81\nabc\n' | pixkey inspect --json
//! ```

use std::io::BufRead;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pixkey_core::normalize::{split_country_code, trim_space};
use pixkey_core::{area_code, check, clean, detect, format, mask, KeyKind};

use crate::input::read_values;
use crate::output::{exit_code, print_json};

/// Arguments for the inspect subcommand.
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Values to inspect. Reads stdin when empty.
    pub values: Vec<String>,
}

/// Everything the engine can say about one value.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Report {
    pub value: String,
    pub kind: Option<KeyKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<&'static str>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masked: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<&'static str>,
}

/// Build the report for `value`. Surrounding whitespace is ignored.
pub fn inspect(raw: &str) -> Report {
    let value = trim_space(raw);
    let Some(kind) = detect(value) else {
        return Report {
            value: raw.to_string(),
            kind: None,
            label: None,
            valid: false,
            reason: Some("could not determine the PIX key kind".to_string()),
            canonical: None,
            display: None,
            masked: None,
            state: None,
        };
    };

    let outcome = check(value, kind);
    let state = match kind {
        KeyKind::Phone => area_code::leading(&split_country_code(value).local)
            .and_then(area_code::state_of),
        _ => None,
    };

    Report {
        value: raw.to_string(),
        kind: Some(kind),
        label: Some(kind.label()),
        valid: outcome.is_ok(),
        reason: outcome.err().map(|e| e.to_string()),
        canonical: Some(clean(value, kind)),
        display: Some(format(value, kind)),
        masked: Some(mask(value, kind)),
        state,
    }
}

fn print_report(report: &Report) {
    println!("{}", report.value);
    match report.kind {
        Some(kind) => println!("  kind:      {} ({})", kind.as_str(), kind.label()),
        None => println!("  kind:      unknown"),
    }
    match &report.reason {
        None => println!("  valid:     yes"),
        Some(reason) => println!("  valid:     no ({reason})"),
    }
    if let Some(canonical) = &report.canonical {
        println!("  canonical: {canonical}");
    }
    if let Some(display) = &report.display {
        println!("  display:   {display}");
    }
    if let Some(masked) = &report.masked {
        println!("  masked:    {masked}");
    }
    if let Some(state) = report.state {
        println!("  state:     {state}");
    }
}

/// Execute the inspect subcommand against `stdin` when no values are given.
/// Exits 1 if any value is invalid.
pub fn run_inspect(args: &InspectArgs, json: bool, stdin: impl BufRead) -> Result<u8> {
    let values = if args.values.is_empty() {
        read_values(stdin)?
    } else {
        args.values.clone()
    };
    tracing::info!(count = values.len(), "inspecting PIX keys");

    let reports: Vec<Report> = values.iter().map(|v| inspect(v)).collect();
    let all_valid = reports.iter().all(|r| r.valid);

    if json {
        print_json(&reports)?;
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(exit_code(all_valid))
}
