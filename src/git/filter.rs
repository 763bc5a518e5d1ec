//! Include/exclude glob rules applied to the paths a commit touches

use glob::{MatchOptions, Pattern};

use crate::boundary::{BoundaryWarning, PatternKind};
use crate::domain::CommitInfo;
use crate::ui;

/// `*` and `?` never cross a `/`, like shell globbing on paths.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

#[derive(Debug, Clone)]
enum Rule {
    Valid(Pattern),
    Invalid(String),
}

impl Rule {
    fn compile(kind: PatternKind, pattern: &str) -> Self {
        match Pattern::new(pattern) {
            Ok(compiled) => Rule::Valid(compiled),
            Err(e) => {
                ui::display_boundary_warning(&BoundaryWarning::InvalidPathPattern {
                    kind,
                    pattern: pattern.to_string(),
                    reason: e.msg.to_string(),
                });
                Rule::Invalid(pattern.to_string())
            }
        }
    }
}

/// Path filter built from include and exclude glob patterns
///
/// A path is accepted when it, or one of its ancestor directories, matches
/// an include pattern (or there are no include patterns at all), and none of
/// them matches an exclude pattern. Exclusion always wins.
///
/// Invalid patterns do not abort anything: an invalid include pattern never
/// matches, an invalid exclude pattern matches everything.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    include: Vec<Rule>,
    exclude: Vec<Rule>,
}

impl PathFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Self {
        PathFilter {
            include: include
                .iter()
                .map(|p| Rule::compile(PatternKind::Include, p))
                .collect(),
            exclude: exclude
                .iter()
                .map(|p| Rule::compile(PatternKind::Exclude, p))
                .collect(),
        }
    }

    /// Accepts everything
    pub fn accept_all() -> Self {
        PathFilter::default()
    }

    /// Decide whether a single changed path is relevant
    pub fn accepts(&self, path: &str) -> bool {
        let mut accepted = false;

        for name in all_the_way_down(path) {
            if self.include_accepts(name) {
                accepted = true;
            }

            if self.exclude_rejects(name) {
                return false;
            }
        }

        accepted
    }

    /// A commit is relevant when at least one of its changed paths is
    pub fn accepts_commit(&self, commit: &CommitInfo) -> bool {
        commit.paths.iter().any(|path| self.accepts(path))
    }

    fn include_accepts(&self, name: &str) -> bool {
        if self.include.is_empty() {
            return true;
        }

        self.include.iter().any(|rule| match rule {
            Rule::Valid(pattern) => pattern.matches_with(name, MATCH_OPTIONS),
            Rule::Invalid(pattern) => {
                tracing::debug!(pattern = %pattern, name, "invalid include pattern does not match");
                false
            }
        })
    }

    fn exclude_rejects(&self, name: &str) -> bool {
        self.exclude.iter().any(|rule| match rule {
            Rule::Valid(pattern) => pattern.matches_with(name, MATCH_OPTIONS),
            Rule::Invalid(pattern) => {
                tracing::debug!(pattern = %pattern, name, "invalid exclude pattern rejects");
                true
            }
        })
    }
}

/// The path itself followed by each ancestor directory up to the root,
/// e.g. `a/b/c` -> `["a/b/c", "a/b", "a"]`.
fn all_the_way_down(path: &str) -> Vec<&str> {
    let mut result = vec![path];
    let mut name = path;

    while let Some(idx) = name.rfind('/') {
        name = &name[..idx];
        if name.is_empty() {
            break;
        }
        result.push(name);
    }

    result
}
