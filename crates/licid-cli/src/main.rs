//! # licid CLI entry point
//!
//! Parses command-line arguments, installs the tracing subscriber, and
//! dispatches to subcommand handlers.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use licid_cli::compare::{run_compare, CompareArgs};
use licid_cli::dedup::{run_dedup, DedupArgs};
use licid_cli::digest::{run_digest, DigestArgs};
use licid_cli::output::{LogFormat, OutputFormat};

/// License identity toolkit.
///
/// Computes whitespace-insensitive digests of license texts, compares
/// licenses, and groups files that carry the same license.
#[derive(Parser, Debug)]
#[command(name = "licid", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    /// Ignored when RUST_LOG is set.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Result format on stdout.
    #[arg(long, value_enum, default_value_t, env = "LICID_FORMAT", global = true)]
    format: OutputFormat,

    /// Log format on stderr.
    #[arg(long, value_enum, default_value_t, env = "LICID_LOG_FORMAT", global = true)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the digest of each license file.
    Digest(DigestArgs),

    /// Compare two license files (exit 0 if equal, 1 if different).
    Compare(CompareArgs),

    /// Group license files by identical license.
    Dedup(DedupArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    match cli.log_format {
        LogFormat::Pretty => subscriber.init(),
        LogFormat::Json => subscriber.json().init(),
    }

    tracing::debug!(command = ?cli.command, "licid starting");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let result = match &cli.command {
        Commands::Digest(args) => run_digest(args, cli.format, &mut out),
        Commands::Compare(args) => run_compare(args, cli.format, &mut out),
        Commands::Dedup(args) => run_dedup(args, cli.format, &mut out),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
