//! # Policy Configuration Loading
//!
//! Loads the [`KeyPolicy`] named by the global `--config` flag. Files ending
//! in `.json` are parsed as JSON, anything else as YAML. Without a path the
//! default policy applies.

use std::path::Path;

use anyhow::{Context, Result};
use pixkey_core::KeyPolicy;

/// Load a policy from `path`, or the default policy when `path` is `None`.
///
/// # Errors
///
/// Fails if the file cannot be read or does not parse as a policy.
pub fn load_policy(path: Option<&Path>) -> Result<KeyPolicy> {
    let Some(path) = path else {
        tracing::debug!("no policy file given, using defaults");
        return Ok(KeyPolicy::default());
    };

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read policy file {}", path.display()))?;

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let policy = if is_json {
        KeyPolicy::from_json_str(&text)
    } else {
        KeyPolicy::from_yaml_str(&text)
    }
    .with_context(|| format!("failed to parse policy file {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        allowed = policy.allowed_kinds().len(),
        "loaded PIX key policy"
    );
    Ok(policy)
}
