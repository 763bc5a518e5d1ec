//! User interface module - result output and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Writing results to stdout or files

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::domain::CommitInfo;

pub mod formatter;

pub use formatter::{
    display_boundary_warning, display_error, format_commits_oneline, format_keywords,
};

/// Write the version followed by a newline.
///
/// # Arguments
/// * `version` - The computed version
/// * `output` - Target file; `None` writes to `out`
/// * `out` - The stdout-like fallback writer
pub fn write_version(
    version: &semver::Version,
    output: Option<&Path>,
    out: &mut dyn Write,
) -> Result<()> {
    let text = format!("{}\n", version);
    match output {
        Some(path) => fs::write(path, text)
            .with_context(|| format!("cannot write version to {}", path.display())),
        None => out
            .write_all(text.as_bytes())
            .context("cannot write version"),
    }
}

/// Write the relevant commits in oneline format to `path`.
pub fn write_commits(commits: &[CommitInfo], path: &Path) -> Result<()> {
    fs::write(path, format_commits_oneline(commits))
        .with_context(|| format!("cannot write commits to {}", path.display()))
}
