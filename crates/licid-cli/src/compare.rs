//! # Compare Subcommand
//!
//! Decides whether two files hold the same license. Exit status `0` means
//! equal, `1` means different, mirroring `cmp`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use licid_core::LicenseDigest;

use crate::load_license;
use crate::output::{write_json, OutputFormat};

/// Arguments for the `licid compare` subcommand.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// First license text file.
    #[arg(value_name = "LEFT")]
    pub left: PathBuf,

    /// Second license text file.
    #[arg(value_name = "RIGHT")]
    pub right: PathBuf,
}

#[derive(Serialize)]
struct Comparison {
    equal: bool,
    left: LicenseDigest,
    right: LicenseDigest,
}

/// Execute the compare subcommand.
pub fn run_compare(args: &CompareArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let left = load_license(&args.left, None, false)?;
    let right = load_license(&args.right, None, false)?;

    let comparison = Comparison {
        equal: left == right,
        left: left.digest(),
        right: right.digest(),
    };

    match format {
        OutputFormat::Text => {
            let verdict = if comparison.equal { "equal" } else { "different" };
            writeln!(out, "{verdict}")?;
        }
        OutputFormat::Json => write_json(out, &comparison)?,
    }

    Ok(if comparison.equal { 0 } else { 1 })
}
