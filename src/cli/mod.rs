//! Command line interface

pub mod orchestration;

use std::path::PathBuf;

use crate::config::Config;

#[derive(clap::Parser, Debug, Clone, Default)]
#[command(
    name = "semver-bump",
    version,
    about = "Compute the next semantic version from git tags and commit messages"
)]
pub struct Args {
    #[arg(default_value = ".", help = "Path inside the git repository")]
    pub repository: PathBuf,

    #[arg(short = 'C', long, help = "Configuration file (TOML, or JSON/YAML by suffix)")]
    pub config_file: Option<PathBuf>,

    #[arg(short, long, value_name = "KEYWORD", help = "Compute a prerelease with this keyword")]
    pub pre: Option<String>,

    #[arg(short, long, help = "Only tags with this prefix are version tags")]
    pub tag_prefix: Option<String>,

    #[arg(
        short = 'n',
        long,
        value_parser = ["none", "patch"],
        help = "Bump applied when no commit matches a keyword"
    )]
    pub no_match_bump: Option<String>,

    #[arg(short, long, help = "Write the version to this file instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(short, long, help = "Write the relevant commits to this file")]
    pub commits: Option<PathBuf>,

    #[arg(short = 'i', long, help = "Only consider commits touching these paths (glob)")]
    pub path_include: Vec<String>,

    #[arg(short = 'x', long, help = "Ignore commits touching only these paths (glob)")]
    pub path_exclude: Vec<String>,

    #[arg(short = '0', long, help = "Version used when there is no release tag yet")]
    pub initial_version: Option<String>,

    #[arg(short = '1', long = "major", value_name = "REGEX", help = "Major level keyword pattern")]
    pub major: Vec<String>,

    #[arg(short = '2', long = "minor", value_name = "REGEX", help = "Minor level keyword pattern")]
    pub minor: Vec<String>,

    #[arg(short = '3', long = "patch", value_name = "REGEX", help = "Patch level keyword pattern")]
    pub patch: Vec<String>,

    #[arg(long, value_name = "VERSION", help = "Use this as the latest prerelease")]
    pub fake_prerelease: Option<String>,

    #[arg(short = 'k', long, help = "Print the keyword patterns and exit")]
    pub print_keywords: bool,

    #[arg(short = 'W', long, value_name = "FILE", help = "Write the effective configuration and exit")]
    pub write_config: Option<PathBuf>,

    #[arg(long, default_value = "warn", help = "Log filter, e.g. debug or semver_bump=trace")]
    pub log_level: String,
}

impl Args {
    /// The configuration given on the command line
    pub fn to_config(&self) -> Config {
        Config {
            prerelease: self.pre.clone(),
            tag_prefix: self.tag_prefix.clone(),
            no_match_bump: self.no_match_bump.clone(),
            output: self.output.clone(),
            commits: self.commits.clone(),
            path_include: self.path_include.clone(),
            path_exclude: self.path_exclude.clone(),
            initial_version: self.initial_version.clone(),
            major_keywords: self.major.clone(),
            minor_keywords: self.minor.clone(),
            patch_keywords: self.patch.clone(),
            fake_prerelease: self.fake_prerelease.clone(),
        }
    }
}
