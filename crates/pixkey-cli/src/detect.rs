//! # Detect Subcommand
//!
//! Prints the detected kind id of each value, or `unknown`.
//!
//! ```bash
//! pixkey detect 11987654321 user@example.com abc
//! # phone
//! # email
//! # unknown
//! ```

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pixkey_core::{detect, KeyKind};

use crate::output::{exit_code, print_json};

/// Arguments for the detect subcommand.
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Values to classify.
    #[arg(required = true)]
    pub values: Vec<String>,
}

/// Detection outcome for one value.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Detection {
    pub value: String,
    pub kind: Option<KeyKind>,
}

/// Classify every value.
pub fn detect_all(values: &[String]) -> Vec<Detection> {
    values
        .iter()
        .map(|v| Detection {
            value: v.clone(),
            kind: detect(v),
        })
        .collect()
}

/// Execute the detect subcommand. Exits 1 if any value is unclassifiable.
pub fn run_detect(args: &DetectArgs, json: bool) -> Result<u8> {
    let detections = detect_all(&args.values);
    let all_detected = detections.iter().all(|d| d.kind.is_some());

    if json {
        print_json(&detections)?;
    } else {
        for d in &detections {
            println!("{}", d.kind.map_or("unknown", |k| k.as_str()));
        }
    }

    Ok(exit_code(all_detected))
}
