use std::fmt;

/// Warnings that occur when the version computation hits a history boundary.
/// These are non-fatal issues that should be reported to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No release tag exists yet, the initial version is used as the release core
    NoReleaseTag { initial_version: String },
    /// No relevant commits since the latest release tag
    NoNewCommits { latest_tag: String },
    /// A path filter pattern cannot be compiled
    InvalidPathPattern {
        kind: PatternKind,
        pattern: String,
        reason: String,
    },
}

/// Which list a path filter pattern belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Include,
    Exclude,
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternKind::Include => f.write_str("include"),
            PatternKind::Exclude => f.write_str("exclude"),
        }
    }
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoReleaseTag { initial_version } => {
                write!(
                    f,
                    "No release tag found, using initial version {}",
                    initial_version
                )
            }
            BoundaryWarning::NoNewCommits { latest_tag } => {
                write!(f, "No new commits since tag '{}'", latest_tag)
            }
            BoundaryWarning::InvalidPathPattern {
                kind,
                pattern,
                reason,
            } => {
                let effect = match kind {
                    PatternKind::Include => "it never matches",
                    PatternKind::Exclude => "it matches every path",
                };
                write!(
                    f,
                    "{} filter pattern '{}' is invalid ({}), {}",
                    kind, pattern, reason, effect
                )
            }
        }
    }
}
