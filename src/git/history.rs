//! Tag and commit queries combined into one view of a repository

use semver::Version;

use crate::domain::{CommitInfo, TagPrefix, TaggedCommit, TaggedCommits};
use crate::error::Result;
use crate::git::{PathFilter, Repository, TagCollector};

/// Version tags and filtered commit history of one repository
pub struct GitHistory<R: Repository> {
    repo: R,
    tag_prefix: TagPrefix,
    path_filter: PathFilter,
}

impl<R: Repository> GitHistory<R> {
    pub fn new(repo: R, tag_prefix: TagPrefix, path_filter: PathFilter) -> Self {
        GitHistory {
            repo,
            tag_prefix,
            path_filter,
        }
    }

    /// All version tags, ascending; `strict` keeps plain releases only
    pub fn version_tags(&self, strict: bool) -> Result<TaggedCommits> {
        TagCollector::new(&self.repo, &self.tag_prefix, strict).collect()
    }

    /// The highest release tag, or None when there is none yet
    pub fn latest_release(&self) -> Result<Option<TaggedCommit>> {
        Ok(self.version_tags(true)?.into_latest())
    }

    /// The highest version tag of any kind
    ///
    /// Falls back to [`latest_release`](Self::latest_release) when the
    /// repository has no version tag at all.
    pub fn latest_prerelease(&self) -> Result<Option<TaggedCommit>> {
        let tags = self.version_tags(false)?;
        if tags.is_empty() {
            return self.latest_release();
        }
        Ok(tags.into_latest())
    }

    /// Relevant commits after the given tag, newest first
    ///
    /// Without a tag the whole history from HEAD is considered.
    pub fn commits_since(&self, tag: Option<&TaggedCommit>) -> Result<Vec<CommitInfo>> {
        let stop_at = tag.map(|t| &t.commit);
        let commits = self
            .repo
            .log(stop_at, &|commit: &CommitInfo| self.path_filter.accepts_commit(commit))?;

        tracing::debug!(
            since = tag.map(|t| t.name.as_str()).unwrap_or("<beginning>"),
            count = commits.len(),
            "collected commits"
        );

        Ok(commits)
    }

    /// Relevant commits after the release tag carrying `version`
    ///
    /// `None` means the whole history. A version that is not tagged as a
    /// release yields an empty list.
    pub fn commits_since_version(&self, version: Option<&Version>) -> Result<Vec<CommitInfo>> {
        let Some(version) = version else {
            return self.commits_since(None);
        };

        match self.version_tags(true)?.find_version(version) {
            Some(tag) => self.commits_since(Some(tag)),
            None => Ok(Vec::new()),
        }
    }
}
