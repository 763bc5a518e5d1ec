//! Analysis engine for determining bump levels from commits

pub mod version_analyzer;

pub use version_analyzer::{Estimator, FallbackStrategy, KeywordSets, VersionAnalyzer};
