//! Repository access backed by libgit2

use crate::domain::CommitInfo;
use crate::error::{BumpError, Result};
use git2::{Commit, ErrorCode, ObjectType, Repository as Git2Repo, Sort};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Git2Repo::discover(path).map_err(|e| {
            BumpError::repository(format!("cannot open git repository at {}: {}", path.display(), e))
        })?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Root of the working tree, None for a bare repository
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    fn commit_info(&self, commit: &Commit<'_>) -> Result<CommitInfo> {
        Ok(CommitInfo {
            hash: commit.id().to_string(),
            message: String::from_utf8_lossy(commit.message_bytes()).into_owned(),
            committed_at: commit.committer().when().seconds(),
            paths: self.changed_paths(commit)?,
        })
    }

    /// Paths touched by a commit compared to its first parent, or to the
    /// empty tree for a root commit
    fn changed_paths(&self, commit: &Commit<'_>) -> Result<Vec<String>> {
        let tree = commit.tree()?;
        let parent_tree = match commit.parent(0) {
            Ok(parent) => Some(parent.tree()?),
            Err(e) if e.code() == ErrorCode::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        let diff = self
            .repo
            .diff_tree_to_tree(parent_tree.as_ref(), Some(&tree), None)?;

        let paths = diff
            .deltas()
            .filter_map(|delta| {
                delta
                    .new_file()
                    .path()
                    .or_else(|| delta.old_file().path())
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
            })
            .collect();

        Ok(paths)
    }
}

impl super::Repository for Git2Repository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tags = self
            .repo
            .tag_names(None)
            .map_err(|e| BumpError::repository(format!("cannot list git tags: {}", e)))?;

        let names = tags
            .iter_bytes()
            .filter_map(|name| match std::str::from_utf8(name) {
                Ok(name) => Some(name.to_string()),
                Err(_) => {
                    tracing::debug!(
                        tag = %String::from_utf8_lossy(name),
                        "skipping tag name that is not utf-8"
                    );
                    None
                }
            })
            .collect();

        Ok(names)
    }

    fn resolve_tag(&self, tag_name: &str) -> Result<CommitInfo> {
        let reference_name = format!("refs/tags/{}", tag_name);

        let reference = self.repo.find_reference(&reference_name).map_err(|e| {
            BumpError::tag(format!("Cannot find tag '{}': {}", tag_name, e))
        })?;

        let target = reference
            .target()
            .ok_or_else(|| BumpError::tag(format!("Tag '{}' has no target", tag_name)))?;

        let object = self.repo.find_object(target, None).map_err(|e| {
            BumpError::tag(format!("failed to resolve tag {}: {}", tag_name, e))
        })?;

        let commit = match object.kind() {
            Some(ObjectType::Commit) => object.peel_to_commit(),
            Some(ObjectType::Tag) => {
                tracing::debug!(tag = tag_name, "following annotated tag");
                object.peel_to_commit()
            }
            other => {
                return Err(BumpError::tag(format!(
                    "Tag '{}' points to a {} instead of a commit",
                    tag_name,
                    other.map(|k| k.str()).unwrap_or("unknown object")
                )))
            }
        }
        .map_err(|e| {
            BumpError::tag(format!("failed to resolve commit for {}: {}", tag_name, e))
        })?;

        self.commit_info(&commit)
    }

    fn log(
        &self,
        stop_at: Option<&CommitInfo>,
        accept: &dyn Fn(&CommitInfo) -> bool,
    ) -> Result<Vec<CommitInfo>> {
        let mut revwalk = self
            .repo
            .revwalk()
            .map_err(|e| BumpError::repository(format!("cannot get log: {}", e)))?;
        revwalk.set_sorting(Sort::TIME)?;

        match revwalk.push_head() {
            Ok(()) => {}
            Err(e)
                if stop_at.is_none()
                    && matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) =>
            {
                // bare / no commits yet
                return Ok(Vec::new());
            }
            Err(e) => return Err(BumpError::Git(e)),
        }

        let mut commits = Vec::new();

        for oid in revwalk {
            let oid = oid?;

            if let Some(stop) = stop_at {
                if oid.to_string() == stop.hash {
                    break;
                }
            }

            let commit = self.repo.find_commit(oid)?;

            if let Some(stop) = stop_at {
                if commit.committer().when().seconds() < stop.committed_at {
                    continue;
                }
            }

            let info = self.commit_info(&commit)?;
            if accept(&info) {
                commits.push(info);
            } else {
                tracing::debug!(commit = %info.hash, "commit rejected by path filter");
            }
        }

        Ok(commits)
    }
}
