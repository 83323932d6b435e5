//! # Resolve Subcommand
//!
//! Applies the acceptance policy loaded from `--config` to one value and
//! prints the accepted key or the reason it was rejected. Exit code 0 when
//! accepted (or blank and optional), 1 when rejected.

use std::path::Path;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use pixkey_core::{KeyKind, KeyPolicy, PolicyError, ResolvedKey};

use crate::config::load_policy;
use crate::output::print_json;

/// Arguments for the resolve subcommand.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Value entered by the user. May be empty.
    #[arg(default_value = "")]
    pub value: String,

    /// Key kind chosen by the user. Overrides detection and the policy default.
    #[arg(long, short)]
    pub kind: Option<KeyKind>,
}

/// Policy outcome for one value.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Resolution {
    Accepted(ResolvedKey),
    Empty,
    Rejected { reason: String },
}

impl Resolution {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Accepted(_) | Self::Empty => 0,
            Self::Rejected { .. } => 1,
        }
    }
}

impl From<Result<Option<ResolvedKey>, PolicyError>> for Resolution {
    fn from(outcome: Result<Option<ResolvedKey>, PolicyError>) -> Self {
        match outcome {
            Ok(Some(key)) => Self::Accepted(key),
            Ok(None) => Self::Empty,
            Err(e) => Self::Rejected {
                reason: e.to_string(),
            },
        }
    }
}

/// Apply `policy` to the arguments.
pub fn resolve(policy: &KeyPolicy, args: &ResolveArgs) -> Resolution {
    policy.resolve(&args.value, args.kind).into()
}

/// Execute the resolve subcommand.
pub fn run_resolve(args: &ResolveArgs, config: Option<&Path>, json: bool) -> Result<u8> {
    let policy = load_policy(config)?;
    let resolution = resolve(&policy, args);

    if json {
        print_json(&resolution)?;
    } else {
        match &resolution {
            Resolution::Accepted(key) => {
                println!("{} {}", key.kind.as_str(), key.canonical);
                println!("{}", key.display);
                if !key.valid {
                    println!("(not validated)");
                }
            }
            Resolution::Empty => println!("empty"),
            Resolution::Rejected { reason } => println!("rejected: {reason}"),
        }
    }

    Ok(resolution.exit_code())
}
