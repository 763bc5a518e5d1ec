use crate::domain::CommitInfo;
use crate::error::{BumpError, Result};
use crate::git::Repository;
use std::collections::HashMap;

/// Mock repository for testing without actual git operations
///
/// Commits form a single linear history. Every commit is one second newer
/// than the previous one, and tags are placed on the current head.
pub struct MockRepository {
    commits: Vec<CommitInfo>,
    tags: HashMap<String, String>,
    clock: i64,
    next_id: u64,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        MockRepository {
            commits: Vec::new(),
            tags: HashMap::new(),
            clock: 1_600_000_000,
            next_id: 1,
        }
    }

    /// Add commits that each touch a fresh file
    pub fn add_commits(&mut self, messages: &[&str]) -> &mut Self {
        for message in messages {
            self.add_commit(message);
        }
        self
    }

    /// Add a commit that touches a fresh file
    pub fn add_commit(&mut self, message: &str) -> &mut Self {
        let filename = format!("some-file-{}", self.next_id);
        self.add_commit_at(&filename, message)
    }

    /// Add a commit touching the given path
    pub fn add_commit_at(&mut self, path: &str, message: &str) -> &mut Self {
        let hash = format!("{:040x}", self.next_id);
        self.next_id += 1;
        self.clock += 1;
        self.commits.push(CommitInfo::new(
            hash,
            message,
            self.clock,
            vec![path.to_string()],
        ));
        self
    }

    /// Tag the current head commit
    pub fn add_tag(&mut self, name: &str) -> &mut Self {
        let head = self
            .commits
            .last()
            .map(|c| c.hash.clone())
            .unwrap_or_default();
        self.tags.insert(name.to_string(), head);
        self
    }

    /// Add a tag pointing at an arbitrary, possibly missing, commit hash
    pub fn add_tag_at(&mut self, name: &str, hash: &str) -> &mut Self {
        self.tags.insert(name.to_string(), hash.to_string());
        self
    }

    /// All commits, newest first
    pub fn commits(&self) -> Vec<CommitInfo> {
        self.commits.iter().rev().cloned().collect()
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        Ok(self.tags.keys().cloned().collect())
    }

    fn resolve_tag(&self, tag_name: &str) -> Result<CommitInfo> {
        let hash = self
            .tags
            .get(tag_name)
            .ok_or_else(|| BumpError::tag(format!("Cannot find tag '{}'", tag_name)))?;

        self.commits
            .iter()
            .find(|c| &c.hash == hash)
            .cloned()
            .ok_or_else(|| {
                BumpError::tag(format!("failed to resolve commit for {}", tag_name))
            })
    }

    fn log(
        &self,
        stop_at: Option<&CommitInfo>,
        accept: &dyn Fn(&CommitInfo) -> bool,
    ) -> Result<Vec<CommitInfo>> {
        let mut result = Vec::new();

        for commit in self.commits.iter().rev() {
            if let Some(stop) = stop_at {
                if commit.is_commit(stop) {
                    break;
                }
                if commit.committed_at < stop.committed_at {
                    continue;
                }
            }

            if accept(commit) {
                result.push(commit.clone());
            }
        }

        Ok(result)
    }
}
