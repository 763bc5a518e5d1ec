//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the read-only git
//! operations the version computation needs, with a real implementation and
//! an in-memory one for testing.
//!
//! # Overview
//!
//! - [Repository]: enumerate tags, resolve a tag to its commit, walk history
//! - [repository::Git2Repository]: implementation using the `git2` crate
//! - [mock::MockRepository]: in-memory implementation for tests
//! - [collector::TagCollector]: turns tags into an ordered version collection
//! - [filter::PathFilter]: include/exclude glob rules over changed paths
//! - [history::GitHistory]: latest release/prerelease lookup and filtered
//!   commit lists, built on top of any [Repository]
//!
//! ```rust
//! # use semver_bump::git::{GitHistory, PathFilter, Repository};
//! # use semver_bump::domain::TagPrefix;
//! # fn example<R: Repository>(repo: R) -> semver_bump::Result<()> {
//! let history = GitHistory::new(repo, TagPrefix::new("v"), PathFilter::accept_all());
//! let latest = history.latest_release()?;
//! let commits = history.commits_since(latest.as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod collector;
pub mod filter;
pub mod history;
pub mod mock;
pub mod repository;

pub use collector::TagCollector;
pub use filter::PathFilter;
pub use history::GitHistory;
pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::domain::CommitInfo;
use crate::error::Result;

/// Read-only git operations used by the version computation
///
/// Implementations never write to the repository.
pub trait Repository {
    /// Names of all tags in the repository, in no particular order
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names without the `refs/tags/` prefix
    /// * `Err` - If the tag references cannot be listed
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Resolve a tag to the commit it marks
    ///
    /// Lightweight tags point at the commit directly, annotated tags are
    /// followed to their target commit.
    ///
    /// # Arguments
    /// * `tag_name` - Name of the tag (e.g., "v1.0.0")
    ///
    /// # Returns
    /// * `Ok(CommitInfo)` - The tagged commit
    /// * `Err` - If the tag does not exist or does not lead to a commit
    fn resolve_tag(&self, tag_name: &str) -> Result<CommitInfo>;

    /// Walk history from HEAD, newest committer time first
    ///
    /// With `stop_at`, commits older than the stop commit are skipped and the
    /// walk ends when the stop commit itself is reached; it is never part of
    /// the result. Only commits passing `accept` are returned.
    ///
    /// A repository without any commit yields an empty list when `stop_at` is
    /// `None`.
    fn log(
        &self,
        stop_at: Option<&CommitInfo>,
        accept: &dyn Fn(&CommitInfo) -> bool,
    ) -> Result<Vec<CommitInfo>>;
}
