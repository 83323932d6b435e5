//! # pixkey CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pixkey_cli::detect::{run_detect, DetectArgs};
use pixkey_cli::format::{run_clean, run_format, CleanArgs, FormatArgs};
use pixkey_cli::inspect::{run_inspect, InspectArgs};
use pixkey_cli::resolve::{run_resolve, ResolveArgs};
use pixkey_cli::validate::{run_validate, ValidateArgs};

/// PIX key toolkit.
///
/// Detects, validates, formats and normalizes Brazilian PIX payment keys
/// (CPF, CNPJ, phone, e-mail, EVP), and applies key-acceptance policies.
#[derive(Parser, Debug)]
#[command(name = "pixkey", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit JSON instead of text.
    #[arg(long, global = true)]
    json: bool,

    /// Emit log events as JSON lines on stderr.
    #[arg(long, global = true)]
    log_json: bool,

    /// Path to a key-acceptance policy file (YAML, or JSON by extension).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the detected kind of each value.
    Detect(DetectArgs),

    /// Check a value against the rules of its kind.
    Validate(ValidateArgs),

    /// Print the display form of a value.
    Format(FormatArgs),

    /// Print the canonical storage form of a value.
    Clean(CleanArgs),

    /// Full report for each value, from arguments or stdin.
    Inspect(InspectArgs),

    /// Apply the acceptance policy from --config to a value.
    Resolve(ResolveArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    if cli.log_json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    tracing::debug!("pixkey CLI v{} starting", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Commands::Detect(args) => run_detect(&args, cli.json),
        Commands::Validate(args) => run_validate(&args, cli.json),
        Commands::Format(args) => run_format(&args, cli.json),
        Commands::Clean(args) => run_clean(&args, cli.json),
        Commands::Inspect(args) => run_inspect(&args, cli.json, std::io::stdin().lock()),
        Commands::Resolve(args) => run_resolve(&args, cli.config.as_deref(), cli.json),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
