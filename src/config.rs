use semver::Version;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analyzer::version_analyzer::{
    DEFAULT_KEYWORDS_MAJOR, DEFAULT_KEYWORDS_MINOR, DEFAULT_KEYWORDS_PATCH,
};
use crate::analyzer::{FallbackStrategy, KeywordSets, VersionAnalyzer};
use crate::domain::version::parse_strict;
use crate::domain::{PrereleaseCounter, TagPrefix};
use crate::error::{BumpError, Result};
use crate::git::PathFilter;

pub const DEFAULT_INITIAL_VERSION: &str = "1.0.0";
pub const PROJECT_CONFIG_TOML: &str = ".semver-bump.toml";
pub const PROJECT_CONFIG_JSON: &str = ".semver-bump.json";
pub const PROJECT_CONFIG_YAML: &str = ".semver-bump.yaml";
pub const PROJECT_CONFIG_YML: &str = ".semver-bump.yml";

const PROJECT_CONFIG_FILES: [&str; 4] = [
    PROJECT_CONFIG_TOML,
    PROJECT_CONFIG_YAML,
    PROJECT_CONFIG_YML,
    PROJECT_CONFIG_JSON,
];
pub const USER_CONFIG_FILE: &str = "semver-bump.toml";

/// Represents the complete configuration for semver-bump.
///
/// Every field is optional so that a command line, a project file and a
/// user file can be layered on top of each other. Missing values are
/// filled in by [`Config::validate`].
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Prerelease keyword; when set, a prerelease is computed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prerelease: Option<String>,

    /// Only tags starting with this prefix are version tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag_prefix: Option<String>,

    /// Bump applied when no commit matches a keyword: "none" or "patch"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_match_bump: Option<String>,

    /// Write the version to this file instead of stdout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,

    /// Write the relevant commits to this file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commits: Option<PathBuf>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_include: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub path_exclude: Vec<String>,

    /// Version used when no release tag exists yet
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_version: Option<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub major_keywords: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub minor_keywords: Vec<String>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub patch_keywords: Vec<String>,

    /// Pretend this is the latest prerelease instead of looking at tags
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fake_prerelease: Option<String>,
}

fn take_or_vec(value: Vec<String>, other: Vec<String>) -> Vec<String> {
    if value.is_empty() {
        other
    } else {
        value
    }
}

fn defaults(patterns: &[&str]) -> Vec<String> {
    patterns.iter().map(|p| p.to_string()).collect()
}

impl Config {
    /// Fill every unset field from `other`; values already set win.
    pub fn merge_missing_from(self, other: Config) -> Config {
        Config {
            prerelease: self.prerelease.or(other.prerelease),
            tag_prefix: self.tag_prefix.or(other.tag_prefix),
            no_match_bump: self.no_match_bump.or(other.no_match_bump),
            output: self.output.or(other.output),
            commits: self.commits.or(other.commits),
            path_include: take_or_vec(self.path_include, other.path_include),
            path_exclude: take_or_vec(self.path_exclude, other.path_exclude),
            initial_version: self.initial_version.or(other.initial_version),
            major_keywords: take_or_vec(self.major_keywords, other.major_keywords),
            minor_keywords: take_or_vec(self.minor_keywords, other.minor_keywords),
            patch_keywords: take_or_vec(self.patch_keywords, other.patch_keywords),
            fake_prerelease: self.fake_prerelease.or(other.fake_prerelease),
        }
    }

    /// The effective configuration with built-in defaults made explicit
    pub fn with_defaults(self) -> Config {
        self.merge_missing_from(Config {
            no_match_bump: Some(FallbackStrategy::default().to_string()),
            initial_version: Some(DEFAULT_INITIAL_VERSION.to_string()),
            major_keywords: defaults(DEFAULT_KEYWORDS_MAJOR),
            minor_keywords: defaults(DEFAULT_KEYWORDS_MINOR),
            patch_keywords: defaults(DEFAULT_KEYWORDS_PATCH),
            ..Config::default()
        })
    }

    /// Check the configuration and turn it into ready-to-use settings.
    ///
    /// # Returns
    /// * `Ok(Settings)` - Parsed versions, compiled patterns and filters
    /// * `Err(BumpError::Config)` - If a value cannot be used
    pub fn validate(&self) -> Result<Settings> {
        let initial_text = self
            .initial_version
            .as_deref()
            .unwrap_or(DEFAULT_INITIAL_VERSION);
        let initial_version = parse_strict(initial_text).map_err(|e| {
            BumpError::config(format!("invalid initial version {}: {}", initial_text, e))
        })?;

        let fallback = match self.no_match_bump.as_deref() {
            Some(text) => text.parse::<FallbackStrategy>()?,
            None => FallbackStrategy::default(),
        };

        let keywords = KeywordSets::compile(
            &self.major_keywords,
            &self.minor_keywords,
            &self.patch_keywords,
        )?;

        let prerelease = self
            .prerelease
            .as_deref()
            .filter(|keyword| !keyword.is_empty())
            .map(PrereleaseCounter::new)
            .transpose()?;

        Ok(Settings {
            tag_prefix: TagPrefix::new(self.tag_prefix.clone().unwrap_or_default()),
            prerelease,
            fake_prerelease: self.fake_prerelease.clone(),
            initial_version,
            fallback,
            keywords,
            path_filter: PathFilter::new(&self.path_include, &self.path_exclude),
        })
    }
}

/// Validated configuration consumed by the version computation
#[derive(Debug, Clone)]
pub struct Settings {
    pub tag_prefix: TagPrefix,
    pub prerelease: Option<PrereleaseCounter>,
    pub fake_prerelease: Option<String>,
    pub initial_version: Version,
    pub fallback: FallbackStrategy,
    pub keywords: KeywordSets,
    pub path_filter: PathFilter,
}

impl Settings {
    /// True when a prerelease is requested instead of a release
    pub fn bump_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    pub fn analyzer(&self) -> VersionAnalyzer {
        VersionAnalyzer::new(self.keywords.clone(), self.fallback, self.prerelease.clone())
    }
}

/// Serialization format of a configuration file, chosen by its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FileFormat {
    Toml,
    Json,
    Yaml,
}

impl FileFormat {
    fn of(path: &Path) -> Self {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());
        match ext.as_deref() {
            Some("json") => FileFormat::Json,
            Some("yaml") | Some("yml") => FileFormat::Yaml,
            _ => FileFormat::Toml,
        }
    }
}

/// Read a configuration file: JSON for `.json`, YAML for `.yaml`/`.yml`,
/// TOML otherwise
pub fn read_config_file(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path).map_err(|e| {
        BumpError::config(format!("cannot read config file {}: {}", path.display(), e))
    })?;

    let config = match FileFormat::of(path) {
        FileFormat::Json => serde_json::from_str(&text)?,
        FileFormat::Yaml => {
            // an empty document carries no settings
            if text.trim().is_empty() {
                Config::default()
            } else {
                serde_yaml::from_str(&text)?
            }
        }
        FileFormat::Toml => toml::from_str(&text)?,
    };

    tracing::debug!(path = %path.display(), "loaded configuration");
    Ok(config)
}

/// Write a configuration file in the format its suffix selects
pub fn write_config_file(path: &Path, config: &Config) -> Result<()> {
    let text = match FileFormat::of(path) {
        FileFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)?;
            json.push('\n');
            json
        }
        FileFormat::Yaml => serde_yaml::to_string(config)?,
        FileFormat::Toml => toml::to_string_pretty(config)?,
    };

    fs::write(path, text)?;
    Ok(())
}

/// Find the project configuration file in `dir`, if any
///
/// More than one candidate is ambiguous and rejected.
pub fn search_project_config(dir: &Path) -> Result<Option<PathBuf>> {
    let found: Vec<PathBuf> = PROJECT_CONFIG_FILES
        .iter()
        .map(|name| dir.join(name))
        .filter(|path| path.is_file())
        .collect();

    match found.as_slice() {
        [] => Ok(None),
        [path] => Ok(Some(path.clone())),
        _ => Err(BumpError::config(format!(
            "multiple project configuration files found in {}: {}, keep only one",
            dir.display(),
            found
                .iter()
                .filter_map(|path| path.file_name())
                .map(|name| name.to_string_lossy())
                .collect::<Vec<_>>()
                .join(", ")
        ))),
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Explicit path provided as parameter
/// 2. `.semver-bump.toml`, `.yaml`, `.yml` or `.json` in the project directory
/// 3. `semver-bump.toml` in the user config directory
/// 4. Empty configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or empty configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(explicit: Option<&Path>, project_dir: &Path) -> Result<Config> {
    if let Some(path) = explicit {
        return read_config_file(path);
    }

    if let Some(path) = search_project_config(project_dir)? {
        return read_config_file(&path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(USER_CONFIG_FILE);
        if path.is_file() {
            return read_config_file(&path);
        }
    }

    Ok(Config::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BumpLevel;
    use tempfile::TempDir;

    #[test]
    fn test_validate_defaults() {
        let settings = Config::default().validate().unwrap();
        assert_eq!(settings.initial_version, Version::new(1, 0, 0));
        assert_eq!(settings.fallback, FallbackStrategy::None);
        assert!(!settings.bump_prerelease());
        assert!(settings.fake_prerelease.is_none());
        assert_eq!(settings.keywords.patch.len(), 2);
        assert_eq!(settings.tag_prefix, TagPrefix::default());
    }

    #[test]
    fn test_validate_invalid_initial_version() {
        let config = Config {
            initial_version: Some("1.0".to_string()),
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, BumpError::Config(_)));
        assert!(err.to_string().contains("invalid initial version 1.0"));
    }

    #[test]
    fn test_validate_invalid_fallback() {
        let config = Config {
            no_match_bump: Some("minor".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(BumpError::Config(_))));
    }

    #[test]
    fn test_validate_invalid_prerelease_keyword() {
        let config = Config {
            prerelease: Some("rc.1".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.validate(), Err(BumpError::Config(_))));
    }

    #[test]
    fn test_validate_builds_analyzer() {
        use crate::analyzer::Estimator;

        let config = Config {
            prerelease: Some("beta".to_string()),
            no_match_bump: Some("patch".to_string()),
            minor_keywords: vec!["^add".to_string()],
            ..Config::default()
        };
        let settings = config.validate().unwrap();
        let analyzer = settings.analyzer();

        assert!(settings.bump_prerelease());
        assert_eq!(
            analyzer.bump_level_from(&["add: x".to_string()]),
            BumpLevel::Minor
        );
        assert_eq!(
            analyzer.bump_level_from(&["feat: x".to_string()]),
            BumpLevel::Patch
        );
        assert_eq!(analyzer.next_prerelease("").unwrap(), "beta.1");
    }

    #[test]
    fn test_merge_missing_from_prefers_self() {
        let cli = Config {
            tag_prefix: Some("v".to_string()),
            path_include: vec!["src/**".to_string()],
            ..Config::default()
        };
        let file = Config {
            tag_prefix: Some("release-".to_string()),
            prerelease: Some("rc".to_string()),
            path_include: vec!["docs/**".to_string()],
            path_exclude: vec!["docs/tmp/*".to_string()],
            ..Config::default()
        };

        let merged = cli.merge_missing_from(file);
        assert_eq!(merged.tag_prefix.as_deref(), Some("v"));
        assert_eq!(merged.prerelease.as_deref(), Some("rc"));
        assert_eq!(merged.path_include, vec!["src/**"]);
        assert_eq!(merged.path_exclude, vec!["docs/tmp/*"]);
    }

    #[test]
    fn test_with_defaults_is_explicit() {
        let config = Config::default().with_defaults();
        assert_eq!(config.initial_version.as_deref(), Some("1.0.0"));
        assert_eq!(config.no_match_bump.as_deref(), Some("none"));
        assert_eq!(config.major_keywords, vec!["^BREAKING CHANGE:"]);
        assert_eq!(config.patch_keywords, vec!["^fix:", "^chore:"]);
        assert!(config.prerelease.is_none());
    }

    #[test]
    fn test_config_files_round_trip_in_every_format() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            prerelease: Some("rc".to_string()),
            path_exclude: vec!["vendor/**".to_string()],
            ..Config::default()
        }
        .with_defaults();

        for name in ["out.toml", "out.json", "out.yaml"] {
            let path = dir.path().join(name);
            write_config_file(&path, &config).unwrap();
            assert_eq!(read_config_file(&path).unwrap(), config);
        }
    }

    #[test]
    fn test_read_partial_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        fs::write(&path, "tag_prefix = \"v\"\nminor_keywords = [\"^feature\"]\n").unwrap();

        let config = read_config_file(&path).unwrap();
        assert_eq!(config.tag_prefix.as_deref(), Some("v"));
        assert_eq!(config.minor_keywords, vec!["^feature"]);
        assert!(config.major_keywords.is_empty());
    }

    #[test]
    fn test_file_format_by_suffix() {
        assert_eq!(FileFormat::of(Path::new("a.json")), FileFormat::Json);
        assert_eq!(FileFormat::of(Path::new("a.yaml")), FileFormat::Yaml);
        assert_eq!(FileFormat::of(Path::new("a.YML")), FileFormat::Yaml);
        assert_eq!(FileFormat::of(Path::new("a.toml")), FileFormat::Toml);
        assert_eq!(FileFormat::of(Path::new("config")), FileFormat::Toml);
    }

    #[test]
    fn test_read_invalid_toml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "tag_prefix = [").unwrap();
        assert!(matches!(
            read_config_file(&path),
            Err(BumpError::TomlDecode(_))
        ));
    }

    #[test]
    fn test_search_project_config() {
        let dir = TempDir::new().unwrap();
        assert!(search_project_config(dir.path()).unwrap().is_none());

        fs::write(dir.path().join(PROJECT_CONFIG_JSON), "{}").unwrap();
        assert_eq!(
            search_project_config(dir.path()).unwrap(),
            Some(dir.path().join(PROJECT_CONFIG_JSON))
        );

        fs::write(dir.path().join(PROJECT_CONFIG_YML), "").unwrap();
        let err = search_project_config(dir.path()).unwrap_err();
        assert!(err.to_string().contains(PROJECT_CONFIG_YML));
        assert!(err.to_string().contains(PROJECT_CONFIG_JSON));
    }

    #[test]
    fn test_load_config_explicit_path_wins() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(PROJECT_CONFIG_TOML), "tag_prefix = \"p\"\n").unwrap();
        let explicit = dir.path().join("custom.json");
        fs::write(&explicit, "{\"tag_prefix\": \"e\"}").unwrap();

        let config = load_config(Some(&explicit), dir.path()).unwrap();
        assert_eq!(config.tag_prefix.as_deref(), Some("e"));

        let config = load_config(None, dir.path()).unwrap();
        assert_eq!(config.tag_prefix.as_deref(), Some("p"));
    }

    #[test]
    fn test_load_config_missing_explicit_file() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(load_config(Some(&missing), dir.path()).is_err());
    }
}
