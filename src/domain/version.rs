use semver::{BuildMetadata, Prerelease, Version};
use std::fmt;

use crate::error::{BumpError, Result};

/// Classification of a set of commits, ordered from least to most significant.
///
/// The derived ordering is what makes "maximum wins" aggregation work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum BumpLevel {
    #[default]
    None,
    Patch,
    Minor,
    Major,
}

impl fmt::Display for BumpLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BumpLevel::None => "none",
            BumpLevel::Patch => "patch",
            BumpLevel::Minor => "minor",
            BumpLevel::Major => "major",
        };
        f.write_str(name)
    }
}

/// Parse version text strictly: exactly `major.minor.patch` with optional
/// prerelease and build metadata, no prefix, no shorthand.
pub fn parse_strict(text: &str) -> Result<Version> {
    Version::parse(text).map_err(|e| BumpError::invalid_version(text, e))
}

/// Bump version according to bump level
///
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
/// - **None**: unchanged
///
/// Prerelease and build metadata are dropped by every increment.
pub fn bump(version: &Version, level: BumpLevel) -> Version {
    match level {
        BumpLevel::Major => Version::new(version.major + 1, 0, 0),
        BumpLevel::Minor => Version::new(version.major, version.minor + 1, 0),
        BumpLevel::Patch => Version::new(version.major, version.minor, version.patch + 1),
        BumpLevel::None => version.clone(),
    }
}

/// The release a prerelease is heading towards, e.g. `1.2.3-rc.4` -> `1.2.3`.
pub fn release_core(version: &Version) -> Version {
    Version {
        pre: Prerelease::EMPTY,
        ..version.clone()
    }
}

/// True when the version carries neither a prerelease nor build metadata.
pub fn is_release(version: &Version) -> bool {
    version.pre.is_empty() && version.build == BuildMetadata::EMPTY
}

/// Replace the prerelease component of a version.
pub fn with_prerelease(version: &Version, pre: &str) -> Result<Version> {
    let pre = Prerelease::new(pre)
        .map_err(|e| BumpError::parse(format!("invalid prerelease [{}]: {}", pre, e)))?;
    Ok(Version {
        pre,
        ..version.clone()
    })
}
