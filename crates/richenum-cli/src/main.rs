//! # richenum CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use richenum_cli::check::{run_check, CheckArgs};
use richenum_cli::choices::{run_choices, ChoicesArgs};
use richenum_cli::inspect::{run_inspect, InspectArgs};
use richenum_cli::lookup::{run_lookup, LookupArgs};
use richenum_cli::OutputFormat;

/// Check, inspect, and query rich enum catalogs.
#[derive(Parser, Debug)]
#[command(name = "richenum", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Render results as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load a catalog and validate every enum in it.
    Check(CheckArgs),

    /// List enums and their members.
    Inspect(InspectArgs),

    /// Find one member by canonical name, display name, index, or attribute.
    Lookup(LookupArgs),

    /// Print (value, display) pairs for an enum.
    Choices(ChoicesArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    tracing::debug!(version = richenum_core::VERSION, "richenum CLI starting");

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match cli.command {
        Commands::Check(args) => run_check(&args, format, &mut out),
        Commands::Inspect(args) => run_inspect(&args, format, &mut out),
        Commands::Lookup(args) => run_lookup(&args, format, &mut out),
        Commands::Choices(args) => run_choices(&args, format, &mut out),
    };

    ExitCode::from(exit_status(result))
}

/// Map a handler result to a process status, logging operational errors.
fn exit_status(result: anyhow::Result<u8>) -> u8 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            1
        }
    }
}
