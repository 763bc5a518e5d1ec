use thiserror::Error;

/// Unified error type for semver-bump operations
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Parse(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Prerelease error: {0}")]
    Prerelease(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode TOML configuration: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Failed to encode TOML configuration: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Failed to process JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to process YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results in semver-bump
pub type Result<T> = std::result::Result<T, BumpError>;

impl BumpError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        BumpError::Config(msg.into())
    }

    /// Create a version parsing error with context
    pub fn parse(msg: impl Into<String>) -> Self {
        BumpError::Parse(msg.into())
    }

    /// Create a repository error with context
    pub fn repository(msg: impl Into<String>) -> Self {
        BumpError::Repository(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BumpError::Tag(msg.into())
    }

    /// Create a prerelease counter error with context
    pub fn prerelease(msg: impl Into<String>) -> Self {
        BumpError::Prerelease(msg.into())
    }

    /// Wrap a semver parse failure, keeping the offending text
    pub fn invalid_version(text: &str, err: semver::Error) -> Self {
        BumpError::Parse(format!("failed to parse version [{}]: {}", text, err))
    }
}
