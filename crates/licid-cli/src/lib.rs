//! # licid-cli: License Identity CLI
//!
//! Provides the `licid` command-line interface over `licid-core`.
//!
//! ## Subcommands
//!
//! - `licid digest`: Print the digest of each license text file.
//! - `licid compare`: Decide whether two files hold the same license.
//! - `licid dedup`: Group files by identical license.
//!
//! ```bash
//! licid digest LICENSE NOTICE --url https://www.eclipse.org/legal/epl-2.0/
//! licid compare vendor/a/LICENSE vendor/b/LICENSE
//! licid --format json dedup vendor/*/LICENSE
//! ```
//!
//! Handlers write to a caller-supplied writer and return the process exit
//! status. `0` means success (or "equal" for `compare`), `1` means the
//! licenses differ.

pub mod compare;
pub mod dedup;
pub mod digest;
pub mod output;

use std::path::Path;

use anyhow::{Context, Result};

use licid_core::License;

/// Read a license body from `path`.
///
/// With `strict`, a malformed `url` is an error; otherwise it is dropped.
pub fn load_license(path: &Path, url: Option<&str>, strict: bool) -> Result<License> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read license file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = body.len(), "loaded license text");

    if strict {
        License::new_strict(url, body)
            .with_context(|| format!("invalid license URL for {}", path.display()))
    } else {
        Ok(License::new(url, body))
    }
}
