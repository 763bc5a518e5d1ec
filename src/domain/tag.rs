use semver::Version;

use crate::domain::CommitInfo;

/// Literal prefix separating version tags from unrelated tags
///
/// An empty prefix accepts every tag name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagPrefix {
    pub prefix: String,
}

impl TagPrefix {
    pub fn new(prefix: impl Into<String>) -> Self {
        TagPrefix {
            prefix: prefix.into(),
        }
    }

    /// Version part of a tag name, or None when the tag lacks the prefix
    /// Example: prefix="v", tag="v1.2.3" -> Some("1.2.3")
    pub fn strip<'a>(&self, tag: &'a str) -> Option<&'a str> {
        if self.prefix.is_empty() {
            return Some(tag);
        }
        tag.strip_prefix(self.prefix.as_str())
    }
}

/// A version tag together with the commit it resolves to
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedCommit {
    pub name: String,
    pub version: Version,
    pub commit: CommitInfo,
}

impl TaggedCommit {
    pub fn is_version(&self, version: &Version) -> bool {
        &self.version == version
    }
}

/// Version tags ordered ascending by semver precedence
#[derive(Debug, Clone, Default)]
pub struct TaggedCommits {
    items: Vec<TaggedCommit>,
}

impl TaggedCommits {
    pub fn new(mut items: Vec<TaggedCommit>) -> Self {
        items.sort_by(|a, b| a.version.cmp(&b.version));
        TaggedCommits { items }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The highest version, if any
    pub fn latest(&self) -> Option<&TaggedCommit> {
        self.items.last()
    }

    pub fn into_latest(mut self) -> Option<TaggedCommit> {
        self.items.pop()
    }

    pub fn find_version(&self, version: &Version) -> Option<&TaggedCommit> {
        self.items.iter().find(|t| t.is_version(version))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaggedCommit> {
        self.items.iter()
    }
}
