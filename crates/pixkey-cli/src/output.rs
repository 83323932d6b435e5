//! Output helpers shared by the subcommands.

use anyhow::{Context, Result};
use serde::Serialize;

/// Print `value` as pretty JSON on stdout.
///
/// # Errors
///
/// Fails if `value` cannot be serialized.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

/// Exit code for a pass/fail outcome.
pub fn exit_code(ok: bool) -> u8 {
    if ok {
        0
    } else {
        1
    }
}
