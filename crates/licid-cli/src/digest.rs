//! # Digest Subcommand
//!
//! Prints the license digest of each file, in the layout of `md5sum`:
//! `<32 hex digits>  <path>`. The digest is taken over the normalized body,
//! so reflowed copies of a license print the same value.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use licid_core::LicenseDigest;

use crate::load_license;
use crate::output::{write_json, OutputFormat};

/// Arguments for the `licid digest` subcommand.
#[derive(Args, Debug)]
pub struct DigestArgs {
    /// License text files.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// URL of the full license text, recorded with every file.
    #[arg(long)]
    pub url: Option<String>,

    /// Fail on a malformed --url instead of ignoring it.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct DigestRecord {
    path: String,
    digest: LicenseDigest,
    url: Option<String>,
}

/// Execute the digest subcommand.
pub fn run_digest(args: &DigestArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let mut records = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let license = load_license(path, args.url.as_deref(), args.strict)?;
        records.push(DigestRecord {
            path: path.display().to_string(),
            digest: license.digest(),
            url: license.url().map(|u| u.to_string()),
        });
    }

    match format {
        OutputFormat::Text => {
            for record in &records {
                writeln!(out, "{}  {}", record.digest, record.path)?;
            }
        }
        OutputFormat::Json => write_json(out, &records)?,
    }
    Ok(0)
}
