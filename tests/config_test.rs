// tests/config_test.rs
use semver_bump::analyzer::{Estimator, FallbackStrategy};
use semver_bump::config::{load_config, read_config_file, Config};
use semver_bump::domain::BumpLevel;
use semver_bump::BumpError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert!(config.prerelease.is_none());
    assert!(config.tag_prefix.is_none());
    assert!(config.major_keywords.is_empty());

    let settings = config.validate().unwrap();
    assert_eq!(settings.initial_version.to_string(), "1.0.0");
    assert_eq!(settings.fallback, FallbackStrategy::None);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
tag_prefix = "v"
initial_version = "0.0.1"
patch_keywords = ["^fix", "^perf"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let dir = tempfile::TempDir::new().unwrap();
    let config = load_config(Some(temp_file.path()), dir.path()).unwrap();
    assert_eq!(config.tag_prefix.as_deref(), Some("v"));
    assert_eq!(config.initial_version.as_deref(), Some("0.0.1"));
    assert_eq!(config.patch_keywords, vec!["^fix", "^perf"]);
}

#[test]
fn test_toml_fixture() {
    let config = read_config_file(Path::new("tests/fixtures/config_with_keywords.toml"))
        .expect("Failed to load test config");

    assert_eq!(config.prerelease.as_deref(), Some("rc"));
    assert_eq!(config.path_exclude, vec!["docs/**"]);

    let settings = config.validate().unwrap();
    let analyzer = settings.analyzer();
    assert!(settings.bump_prerelease());
    assert_eq!(settings.fallback, FallbackStrategy::Patch);
    assert_eq!(
        analyzer.bump_level_from(&["BREAKING: api".to_string()]),
        BumpLevel::Major
    );
    assert_eq!(
        analyzer.bump_level_from(&["feature: x".to_string()]),
        BumpLevel::Minor
    );
    // patch keywords fall back to the defaults
    assert_eq!(
        analyzer.bump_level_from(&["chore: deps".to_string()]),
        BumpLevel::Patch
    );
}

#[test]
fn test_json_fixture() {
    let config = read_config_file(Path::new("tests/fixtures/config_with_keywords.json"))
        .expect("Failed to load test config");

    assert_eq!(config.tag_prefix.as_deref(), Some("release-"));

    let settings = config.validate().unwrap();
    assert_eq!(settings.initial_version.to_string(), "0.1.0");
    assert_eq!(settings.keywords.patch.len(), 1);
    assert_eq!(settings.keywords.minor[0].as_str(), "^feat:");
}

#[test]
fn test_yaml_fixture() {
    let config = read_config_file(Path::new("tests/fixtures/config_with_keywords.yaml"))
        .expect("Failed to load test config");

    assert_eq!(config.prerelease.as_deref(), Some("beta"));
    assert_eq!(config.tag_prefix.as_deref(), Some("v"));
    assert_eq!(config.path_include, vec!["src/**"]);

    let settings = config.validate().unwrap();
    let analyzer = settings.analyzer();
    assert_eq!(settings.fallback, FallbackStrategy::Patch);
    assert_eq!(
        analyzer.bump_level_from(&["BREAKING: api".to_string()]),
        BumpLevel::Major
    );
    assert_eq!(analyzer.next_prerelease("beta.3").unwrap(), "beta.4");
}

#[test]
fn test_project_yml_file_is_found() {
    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(".semver-bump.yml"),
        "tag_prefix: release-\ninitial_version: 0.0.1\n",
    )
    .unwrap();

    let config = load_config(None, dir.path()).unwrap();
    assert_eq!(config.tag_prefix.as_deref(), Some("release-"));
    assert_eq!(config.initial_version.as_deref(), Some("0.0.1"));
}

#[test]
fn test_invalid_yaml_is_rejected() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("broken.yaml");
    std::fs::write(&path, "path_include: not-a-list\n").unwrap();

    let err = read_config_file(&path).unwrap_err();
    assert!(matches!(err, BumpError::Yaml(_)));
}

#[test]
fn test_wrong_value_type_is_rejected() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"path_include = \"not-a-list\"\n").unwrap();
    temp_file.flush().unwrap();

    let err = read_config_file(temp_file.path()).unwrap_err();
    assert!(matches!(err, BumpError::TomlDecode(_)));
}

#[test]
fn test_invalid_keyword_pattern_names_pattern() {
    let config = Config {
        minor_keywords: vec!["^feat(".to_string()],
        ..Config::default()
    };

    let err = config.validate().unwrap_err();
    assert!(matches!(err, BumpError::Config(_)));
    assert!(err.to_string().contains("^feat("));
}

#[test]
fn test_prerelease_keyword_must_be_one_identifier() {
    for keyword in ["rc.1", "r c", "rc+1"] {
        let config = Config {
            prerelease: Some(keyword.to_string()),
            ..Config::default()
        };
        assert!(
            matches!(config.validate(), Err(BumpError::Config(_))),
            "keyword {:?} should be rejected",
            keyword
        );
    }

    let config = Config {
        prerelease: Some("pre-release".to_string()),
        ..Config::default()
    };
    assert!(config.validate().unwrap().bump_prerelease());

    // an empty keyword means a release
    let config = Config {
        prerelease: Some(String::new()),
        ..Config::default()
    };
    assert!(!config.validate().unwrap().bump_prerelease());
}
