//! Version tag scanning

use crate::domain::version::{self, is_release};
use crate::domain::{TagPrefix, TaggedCommit, TaggedCommits};
use crate::error::{BumpError, Result};
use crate::git::Repository;

/// Collects version tags from a repository
///
/// Tags without the configured prefix are ignored. Every remaining tag must
/// parse as a strict semantic version: a malformed version tag aborts the
/// scan instead of being skipped.
pub struct TagCollector<'a, R: Repository> {
    repo: &'a R,
    prefix: &'a TagPrefix,
    strict: bool,
}

impl<'a, R: Repository> TagCollector<'a, R> {
    /// Create a collector; `strict` restricts the scan to plain releases
    pub fn new(repo: &'a R, prefix: &'a TagPrefix, strict: bool) -> Self {
        TagCollector {
            repo,
            prefix,
            strict,
        }
    }

    /// Scan all tags and return them ordered ascending by version
    pub fn collect(&self) -> Result<TaggedCommits> {
        let mut result = Vec::new();

        for name in self.repo.list_tags()? {
            if let Some(tagged) = self.collect_one(&name)? {
                result.push(tagged);
            }
        }

        tracing::debug!(
            count = result.len(),
            strict = self.strict,
            "collected version tags"
        );

        Ok(TaggedCommits::new(result))
    }

    fn collect_one(&self, name: &str) -> Result<Option<TaggedCommit>> {
        let Some(text) = self.prefix.strip(name) else {
            return Ok(None);
        };

        let version = version::parse_strict(text)?;

        if self.strict && !is_release(&version) {
            return Ok(None);
        }

        let commit = self.repo.resolve_tag(name).map_err(|e| {
            BumpError::tag(format!("failed to resolve commit for {}: {}", name, e))
        })?;

        Ok(Some(TaggedCommit {
            name: name.to_string(),
            version,
            commit,
        }))
    }
}
