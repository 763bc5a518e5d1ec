use regex::Regex;
use std::fmt;
use std::str::FromStr;

use crate::domain::{BumpLevel, PrereleaseCounter};
use crate::error::{BumpError, Result};

pub const DEFAULT_KEYWORDS_MAJOR: &[&str] = &["^BREAKING CHANGE:"];
pub const DEFAULT_KEYWORDS_MINOR: &[&str] = &["^feat:"];
pub const DEFAULT_KEYWORDS_PATCH: &[&str] = &["^fix:", "^chore:"];

/// What to bump when no commit message matches any keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackStrategy {
    #[default]
    None,
    Patch,
}

impl FallbackStrategy {
    pub fn level(&self) -> BumpLevel {
        match self {
            FallbackStrategy::None => BumpLevel::None,
            FallbackStrategy::Patch => BumpLevel::Patch,
        }
    }
}

impl FromStr for FallbackStrategy {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "none" => Ok(FallbackStrategy::None),
            "patch" => Ok(FallbackStrategy::Patch),
            other => Err(BumpError::config(format!(
                "invalid no match bump value: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for FallbackStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FallbackStrategy::None => f.write_str("none"),
            FallbackStrategy::Patch => f.write_str("patch"),
        }
    }
}

/// Compiled keyword patterns per bump level
#[derive(Debug, Clone)]
pub struct KeywordSets {
    pub major: Vec<Regex>,
    pub minor: Vec<Regex>,
    pub patch: Vec<Regex>,
}

impl KeywordSets {
    /// Compile the given pattern lists; an empty list selects the defaults
    pub fn compile(major: &[String], minor: &[String], patch: &[String]) -> Result<Self> {
        Ok(KeywordSets {
            major: compile_all(major, DEFAULT_KEYWORDS_MAJOR)?,
            minor: compile_all(minor, DEFAULT_KEYWORDS_MINOR)?,
            patch: compile_all(patch, DEFAULT_KEYWORDS_PATCH)?,
        })
    }
}

impl Default for KeywordSets {
    fn default() -> Self {
        let compile_defaults = |defaults: &[&str]| {
            defaults
                .iter()
                .filter_map(|p| Regex::new(p).ok())
                .collect::<Vec<_>>()
        };
        KeywordSets {
            major: compile_defaults(DEFAULT_KEYWORDS_MAJOR),
            minor: compile_defaults(DEFAULT_KEYWORDS_MINOR),
            patch: compile_defaults(DEFAULT_KEYWORDS_PATCH),
        }
    }
}

fn compile_all(patterns: &[String], defaults: &[&str]) -> Result<Vec<Regex>> {
    let compile = |pattern: &str| {
        Regex::new(pattern).map_err(|e| {
            BumpError::config(format!("invalid keyword pattern '{}': {}", pattern, e))
        })
    };

    if patterns.is_empty() {
        defaults.iter().map(|p| compile(p)).collect()
    } else {
        patterns.iter().map(|p| compile(p)).collect()
    }
}

fn contains_any(message: &str, patterns: &[Regex]) -> bool {
    patterns.iter().any(|re| re.is_match(message))
}

/// Turns commit messages into a bump level and counts prereleases
pub trait Estimator {
    /// Classify commit messages into a bump level
    fn bump_level_from(&self, messages: &[String]) -> BumpLevel;

    /// The prerelease identifier following `current` (empty for the first)
    fn next_prerelease(&self, current: &str) -> Result<String>;
}

/// Analyzes commit messages with configurable keyword patterns
pub struct VersionAnalyzer {
    keywords: KeywordSets,
    fallback: FallbackStrategy,
    prerelease: Option<PrereleaseCounter>,
}

impl VersionAnalyzer {
    /// Create a new version analyzer
    ///
    /// Without a prerelease counter, [`Estimator::next_prerelease`] fails.
    pub fn new(
        keywords: KeywordSets,
        fallback: FallbackStrategy,
        prerelease: Option<PrereleaseCounter>,
    ) -> Self {
        VersionAnalyzer {
            keywords,
            fallback,
            prerelease,
        }
    }

    /// Analyze commit messages and determine the bump level
    ///
    /// The running level starts at the fallback and never decreases. A major
    /// match ends the scan. A patch match only counts while the level is
    /// still below minor.
    pub fn analyze_messages(&self, messages: &[String]) -> BumpLevel {
        let mut level = self.fallback.level();

        for message in messages {
            if contains_any(message, &self.keywords.major) {
                level = BumpLevel::Major;
                break;
            }

            if contains_any(message, &self.keywords.minor) {
                if level < BumpLevel::Minor {
                    level = BumpLevel::Minor;
                }
                continue;
            }

            if contains_any(message, &self.keywords.patch) && level < BumpLevel::Minor {
                level = BumpLevel::Patch;
            }
        }

        tracing::debug!(%level, commits = messages.len(), "estimated bump level");
        level
    }
}

impl Estimator for VersionAnalyzer {
    fn bump_level_from(&self, messages: &[String]) -> BumpLevel {
        self.analyze_messages(messages)
    }

    fn next_prerelease(&self, current: &str) -> Result<String> {
        self.prerelease
            .as_ref()
            .ok_or_else(|| BumpError::config("no prerelease keyword configured"))?
            .next(current)
    }
}
