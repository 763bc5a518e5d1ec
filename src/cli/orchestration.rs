//! Main workflow orchestration logic
//!
//! Ties the command line to the library: loads and merges configuration,
//! opens the repository, computes the version and writes the results. Kept
//! apart from `main.rs` so that it can be driven from tests.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::bumper::{bump, BumpOutcome};
use crate::cli::Args;
use crate::config::{load_config, write_config_file, Config};
use crate::git::{Git2Repository, GitHistory};
use crate::ui;

/// What a workflow run did
#[derive(Debug, Clone)]
pub enum WorkflowOutcome {
    /// Keyword patterns were printed
    Keywords,
    /// The effective configuration was written to this file
    ConfigWritten(PathBuf),
    /// A version was computed and written
    Bumped(BumpOutcome),
}

/// Run one semver-bump invocation.
///
/// Configuration precedence is command line, then the configuration file
/// found by [`load_config`], then built-in defaults.
///
/// # Arguments
/// * `args` - Parsed command line
/// * `out` - Receives the version (unless `--output` is set) and keyword listings
pub fn run_workflow(args: &Args, out: &mut dyn Write) -> Result<WorkflowOutcome> {
    let repo = Git2Repository::open(&args.repository);
    let project_dir = repo
        .as_ref()
        .ok()
        .and_then(|r| r.workdir())
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| args.repository.clone());

    let file_config = load_config(args.config_file.as_deref(), &project_dir)
        .context("failed to load configuration")?;
    let config = args.to_config().merge_missing_from(file_config);

    if let Some(path) = &args.write_config {
        write_config(&config, path)?;
        return Ok(WorkflowOutcome::ConfigWritten(path.clone()));
    }

    let settings = config.validate().context("invalid configuration")?;

    if args.print_keywords {
        out.write_all(ui::format_keywords(&settings.keywords).as_bytes())
            .context("cannot write keywords")?;
        return Ok(WorkflowOutcome::Keywords);
    }

    let repo = repo?;
    let history = GitHistory::new(
        repo,
        settings.tag_prefix.clone(),
        settings.path_filter.clone(),
    );
    let outcome = bump(&settings, &history, &settings.analyzer())
        .context("failed to compute the next version")?;

    tracing::info!(version = %outcome.version, commits = outcome.commits.len(), "computed version");

    if let Some(path) = &config.commits {
        ui::write_commits(&outcome.commits, path)?;
    }
    ui::write_version(&outcome.version, config.output.as_deref(), out)?;

    Ok(WorkflowOutcome::Bumped(outcome))
}

fn write_config(config: &Config, path: &Path) -> Result<()> {
    // a broken configuration is never persisted
    config.validate().context("invalid configuration")?;
    write_config_file(path, &config.clone().with_defaults())
        .with_context(|| format!("cannot write configuration to {}", path.display()))
}
