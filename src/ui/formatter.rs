//! Pure formatting functions for UI output.
//!
//! This module contains all display/formatting logic separated from writing
//! results to files or stdout.

use crate::analyzer::KeywordSets;
use crate::boundary::BoundaryWarning;
use crate::domain::CommitInfo;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("\x1b[31mERROR:\x1b[0m {}", message);
}

/// Report a boundary warning through the logger.
///
/// Warnings never stop the computation; they are visible at the default
/// `warn` log level.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    tracing::warn!("{}", warning);
}

/// Format commits like `git log --format=oneline`, newest first.
///
/// Each line is the full hash, a space and the message without its
/// trailing newlines.
pub fn format_commits_oneline(commits: &[CommitInfo]) -> String {
    commits
        .iter()
        .map(|commit| format!("{} {}\n", commit.hash, commit.summary_line()))
        .collect()
}

/// Format the effective keyword patterns per bump level.
pub fn format_keywords(keywords: &KeywordSets) -> String {
    let mut out = String::from("the keywords for the different version bump level are:\n");
    for (level, patterns) in [
        ("major", &keywords.major),
        ("minor", &keywords.minor),
        ("patch", &keywords.patch),
    ] {
        out.push_str(level);
        out.push_str(":\n");
        for pattern in patterns {
            out.push_str(&format!("  {}\n", pattern.as_str()));
        }
    }
    out
}
