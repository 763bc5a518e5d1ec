//! Numbered prerelease counters
//!
//! A prerelease produced by semver-bump always has the shape `<keyword>.<n>`,
//! for example `rc.4` in `1.2.3-rc.4`. The counter starts at 1 and only ever
//! moves forward.

use crate::error::{BumpError, Result};

/// Parses and increments `<keyword>.<n>` prerelease identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrereleaseCounter {
    keyword: String,
}

impl PrereleaseCounter {
    /// Create a counter for the given keyword
    ///
    /// The keyword must be a single semver identifier: ASCII alphanumerics
    /// and hyphens, no dots, not empty.
    pub fn new(keyword: impl Into<String>) -> Result<Self> {
        let keyword = keyword.into();
        if keyword.is_empty()
            || !keyword
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
        {
            return Err(BumpError::config(format!(
                "Invalid prerelease keyword: '{}'",
                keyword
            )));
        }
        Ok(PrereleaseCounter { keyword })
    }

    fn prefix(&self) -> String {
        format!("{}.", self.keyword)
    }

    /// The prerelease that follows `current`
    ///
    /// An empty `current` starts the count at `<keyword>.1`.
    ///
    /// # Examples
    /// ```ignore
    /// let rc = PrereleaseCounter::new("rc")?;
    /// assert_eq!(rc.next("")?, "rc.1");
    /// assert_eq!(rc.next("rc.1")?, "rc.2");
    /// assert!(rc.next("beta.1").is_err());
    /// ```
    pub fn next(&self, current: &str) -> Result<String> {
        let prefix = self.prefix();

        if current.is_empty() {
            return Ok(format!("{}1", prefix));
        }

        let counter = current.strip_prefix(&prefix).ok_or_else(|| {
            BumpError::prerelease(format!(
                "expected prerelease to start with {} but found {}",
                self.keyword, current
            ))
        })?;

        let value = counter.parse::<u64>().map_err(|_| {
            BumpError::prerelease(format!(
                "expected prerelease to be an integer but found {}",
                counter
            ))
        })?;

        let next = value.checked_add(1).ok_or_else(|| {
            BumpError::prerelease(format!(
                "prerelease counter {} cannot be incremented any further",
                current
            ))
        })?;

        Ok(format!("{}{}", prefix, next))
    }
}
