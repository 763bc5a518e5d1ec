//! Next version computation
//!
//! Combines the latest release, the commits made since then and, in
//! prerelease mode, the latest prerelease into the next version.

use semver::Version;

use crate::analyzer::Estimator;
use crate::boundary::BoundaryWarning;
use crate::config::Settings;
use crate::domain::version::{bump as bump_version, parse_strict, release_core, with_prerelease};
use crate::domain::{messages_from, CommitInfo};
use crate::error::{BumpError, Result};
use crate::git::{GitHistory, Repository};
use crate::ui;

/// The computed version and the commits that led to it
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    pub version: Version,
    /// Relevant commits since the latest release, newest first
    pub commits: Vec<CommitInfo>,
}

/// Compute the next version.
///
/// In release mode the result is the bumped latest release, or the initial
/// version when there is no release yet. In prerelease mode the result is
/// either the first prerelease of the next release or the latest
/// prerelease with its counter incremented, whichever is ahead.
///
/// # Errors
/// Any repository, version or prerelease format error aborts the whole
/// computation.
pub fn bump<R: Repository, E: Estimator>(
    settings: &Settings,
    history: &GitHistory<R>,
    estimator: &E,
) -> Result<BumpOutcome> {
    let (next_release, commits) = bump_release(settings, history, estimator)?;

    if !settings.bump_prerelease() {
        let version = next_release.unwrap_or_else(|| settings.initial_version.clone());
        return Ok(BumpOutcome { version, commits });
    }

    let anchor = match fake_prerelease(settings)? {
        Some(version) => Some(version),
        None => history.latest_prerelease()?.map(|tag| tag.version),
    };

    let version = match anchor {
        None => {
            let release = next_release.unwrap_or_else(|| settings.initial_version.clone());
            first_prerelease(estimator, &release)?
        }
        Some(anchor) => match next_release {
            Some(release) if release > release_core(&anchor) => {
                first_prerelease(estimator, &release)?
            }
            _ => {
                let pre = estimator.next_prerelease(anchor.pre.as_str())?;
                with_prerelease(&anchor, &pre)?
            }
        },
    };

    Ok(BumpOutcome { version, commits })
}

/// The bumped latest release, if there is one, and the commits since it
fn bump_release<R: Repository, E: Estimator>(
    settings: &Settings,
    history: &GitHistory<R>,
    estimator: &E,
) -> Result<(Option<Version>, Vec<CommitInfo>)> {
    let latest = history.latest_release()?;
    let commits = history.commits_since(latest.as_ref())?;

    let Some(latest) = latest else {
        ui::display_boundary_warning(&BoundaryWarning::NoReleaseTag {
            initial_version: settings.initial_version.to_string(),
        });
        return Ok((None, commits));
    };

    if commits.is_empty() {
        ui::display_boundary_warning(&BoundaryWarning::NoNewCommits {
            latest_tag: latest.name.clone(),
        });
    }

    let level = estimator.bump_level_from(&messages_from(&commits));
    let next = bump_version(&latest.version, level);
    tracing::debug!(latest = %latest.version, %level, next = %next, "bumped release");

    Ok((Some(next), commits))
}

fn fake_prerelease(settings: &Settings) -> Result<Option<Version>> {
    settings
        .fake_prerelease
        .as_deref()
        .map(|text| {
            parse_strict(text).map_err(|e| {
                BumpError::parse(format!("cannot parse given prerelease version: {}", e))
            })
        })
        .transpose()
}

fn first_prerelease<E: Estimator>(estimator: &E, release: &Version) -> Result<Version> {
    let pre = estimator.next_prerelease("")?;
    with_prerelease(release, &pre)
}
