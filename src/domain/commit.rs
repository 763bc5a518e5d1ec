/// A commit as seen by the version computation
///
/// Identity is the hash: two `CommitInfo` values describe the same commit
/// when their hashes are equal, whatever else they carry.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// The full commit hash
    pub hash: String,
    /// The raw commit message, body included
    pub message: String,
    /// Committer timestamp in seconds since the epoch
    pub committed_at: i64,
    /// Paths changed by this commit relative to its first parent
    pub paths: Vec<String>,
}

impl CommitInfo {
    pub fn new(
        hash: impl Into<String>,
        message: impl Into<String>,
        committed_at: i64,
        paths: Vec<String>,
    ) -> Self {
        CommitInfo {
            hash: hash.into(),
            message: message.into(),
            committed_at,
            paths,
        }
    }

    pub fn is_commit(&self, other: &CommitInfo) -> bool {
        self.hash == other.hash
    }

    /// Message with trailing newlines removed
    pub fn summary_line(&self) -> &str {
        self.message.trim_end_matches('\n')
    }
}

impl PartialEq for CommitInfo {
    fn eq(&self, other: &Self) -> bool {
        self.is_commit(other)
    }
}

impl Eq for CommitInfo {}

/// Messages of the given commits, in the same order
pub fn messages_from(commits: &[CommitInfo]) -> Vec<String> {
    commits.iter().map(|c| c.message.clone()).collect()
}
