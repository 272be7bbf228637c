//! # Dedup Subcommand
//!
//! Groups files whose license bodies normalize to the same text. Groups are
//! printed in the order their first file was given.

use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use licid_core::{LicenseDigest, LicenseSet};

use crate::load_license;
use crate::output::{write_json, OutputFormat};

/// Arguments for the `licid dedup` subcommand.
#[derive(Args, Debug)]
pub struct DedupArgs {
    /// License text files.
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,
}

#[derive(Serialize)]
struct LicenseGroup {
    digest: LicenseDigest,
    files: Vec<String>,
}

/// Execute the dedup subcommand.
pub fn run_dedup(args: &DedupArgs, format: OutputFormat, out: &mut dyn Write) -> Result<u8> {
    let mut distinct = LicenseSet::with_capacity(args.files.len());
    let mut members: HashMap<LicenseDigest, Vec<String>> = HashMap::new();

    for path in &args.files {
        let license = load_license(path, None, false)?;
        members
            .entry(license.digest())
            .or_default()
            .push(path.display().to_string());
        distinct.insert(license);
    }

    let groups: Vec<LicenseGroup> = distinct
        .iter()
        .map(|license| {
            let digest = license.digest();
            LicenseGroup {
                digest,
                files: members.remove(&digest).unwrap_or_default(),
            }
        })
        .collect();

    tracing::info!(
        files = args.files.len(),
        distinct = groups.len(),
        "grouped license files"
    );

    match format {
        OutputFormat::Text => {
            for group in &groups {
                writeln!(out, "{}  {}", group.digest, group.files.join(" "))?;
            }
        }
        OutputFormat::Json => write_json(out, &groups)?,
    }
    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedup_groups_reflowed_copies() {
        let dir = tempfile::tempdir().unwrap();
        let files: Vec<PathBuf> = [("a", "EPL 1.0"), ("b", "GPL"), ("c", " EPL\n1.0 ")]
            .iter()
            .map(|(name, body)| {
                let path = dir.path().join(name);
                std::fs::write(&path, body).unwrap();
                path
            })
            .collect();

        let mut out = Vec::new();
        let code = run_dedup(&DedupArgs { files: files.clone() }, OutputFormat::Json, &mut out)
            .unwrap();
        assert_eq!(code, 0);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let groups = value.as_array().unwrap();
        assert_eq!(groups.len(), 2);
        assert_eq!(
            groups[0]["files"],
            serde_json::json!([files[0].display().to_string(), files[2].display().to_string()])
        );
        assert_eq!(
            groups[1]["files"],
            serde_json::json!([files[1].display().to_string()])
        );
    }

    #[test]
    fn dedup_text_output_one_line_per_group() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("only");
        std::fs::write(&path, "abc").unwrap();

        let mut out = Vec::new();
        run_dedup(&DedupArgs { files: vec![path.clone()] }, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("900150983cd24fb0d6963f7d28e17f72  {}\n", path.display())
        );
    }
}
