//! Shared input handling: kind selection and stdin reading.

use std::io::BufRead;

use anyhow::{bail, Context, Result};
use pixkey_core::normalize::trim_space;
use pixkey_core::{detect, KeyKind};

/// The explicit kind if given, otherwise the detected one.
///
/// # Errors
///
/// Fails when no kind was given and none can be detected.
pub fn kind_for(value: &str, explicit: Option<KeyKind>) -> Result<KeyKind> {
    if let Some(kind) = explicit {
        return Ok(kind);
    }
    match detect(value) {
        Some(kind) => {
            tracing::debug!(kind = kind.as_str(), "detected PIX key kind");
            Ok(kind)
        }
        None => bail!("could not detect the PIX key kind of {value:?}; pass --kind"),
    }
}

/// The kind of `value` and the text to run it through. A detected kind
/// applies to the trimmed value, since detection ignores surrounding
/// whitespace; an explicit kind gets the value untouched.
///
/// # Errors
///
/// Fails when no kind was given and none can be detected.
pub fn key_input(value: &str, explicit: Option<KeyKind>) -> Result<(KeyKind, &str)> {
    let kind = kind_for(value, explicit)?;
    let value = if explicit.is_some() {
        value
    } else {
        trim_space(value)
    };
    Ok((kind, value))
}

/// Non-blank lines from `reader`, trimmed of their line terminator.
///
/// # Errors
///
/// Fails on a read error.
pub fn read_values(reader: impl BufRead) -> Result<Vec<String>> {
    let mut values = Vec::new();
    for line in reader.lines() {
        let line = line.context("failed to read PIX keys from stdin")?;
        if !line.trim().is_empty() {
            values.push(line);
        }
    }
    Ok(values)
}
