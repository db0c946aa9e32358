//! Command line argument parsing and validation.
//!
//! The tool is designed to "just work": run it inside a repository and it
//! proposes the next patch version, tags `main`, and pushes the tag.

use super::TimeoutConfig;
use crate::ReleaseConfig;
use clap::Parser;
use std::path::PathBuf;

/// Tag a release and push it to trigger CI
#[derive(Parser, Debug)]
#[command(
    name = "tag_release",
    version,
    about = "Create and push an annotated release tag",
    long_about = "Create and push an annotated release tag.

Checks that the working tree is clean, switches to the release branch,
pulls, tags HEAD as v<major>.<minor>.<patch>, pushes the tag, and prints
links to the CI and releases pages.

Usage:
  tag_release                 # propose the next patch version
  tag_release v2.0.0          # release an explicit version
  tag_release --dry-run       # show what would happen

Exit codes:
  0  success
  1  usage, environment, or internal failure
  2  invalid or already existing version
  3  dirty working tree (re-run with --force)
  4  git step failed (switch, pull, tag, push)"
)]
pub struct Args {
    /// Version to release (vMAJOR.MINOR.PATCH). Proposed from existing tags when omitted.
    #[arg(index = 1, id = "release_version", value_name = "VERSION")]
    pub version: Option<String>,

    /// Branch to release from
    #[arg(long, env = "TAG_RELEASE_BRANCH", default_value = "main")]
    pub branch: String,

    /// Remote to pull from and push the tag to
    #[arg(long, env = "TAG_RELEASE_REMOTE", default_value = "origin")]
    pub remote: String,

    /// Release even if the working tree has uncommitted changes
    #[arg(long)]
    pub force: bool,

    /// GitHub organization or user (detected from the remote URL when omitted)
    #[arg(long, requires = "repo")]
    pub owner: Option<String>,

    /// GitHub repository name (detected from the remote URL when omitted)
    #[arg(long, requires = "owner")]
    pub repo: Option<String>,

    /// Repository directory
    #[arg(short = 'C', long = "path", value_name = "DIR", default_value = ".")]
    pub path: PathBuf,

    /// Resolve the version and check the repository without changing anything
    #[arg(long, conflicts_with = "json")]
    pub dry_run: bool,

    /// Create the tag locally but do not push it
    #[arg(long)]
    pub no_push: bool,

    /// Print the release result as JSON
    #[arg(long)]
    pub json: bool,

    /// Time limit in seconds for each network step (pull, push)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Show debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        validate_ref_name("branch", &self.branch)?;
        validate_ref_name("remote", &self.remote)?;

        if let Some(timeout) = self.timeout {
            TimeoutConfig::with_network_secs(timeout).validate()?;
        }

        Ok(())
    }

    /// Build the release settings for this invocation
    pub fn release_config(&self, timeouts: &TimeoutConfig) -> ReleaseConfig {
        let timeouts = match self.timeout {
            Some(secs) => TimeoutConfig::with_network_secs(secs),
            None => timeouts.clone(),
        };

        ReleaseConfig {
            branch: self.branch.trim().to_string(),
            remote: self.remote.trim().to_string(),
            force: self.force,
            push: !self.no_push,
            dry_run: self.dry_run,
            network_timeout: timeouts.network_timeout(),
        }
    }
}

/// Reject names git would read as options or that are empty
fn validate_ref_name(kind: &str, name: &str) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("{} name must not be empty", kind));
    }
    if name.starts_with('-') {
        return Err(format!("{} name '{}' must not start with '-'", kind, name));
    }
    if name.chars().any(char::is_whitespace) {
        return Err(format!("{} name '{}' must not contain whitespace", kind, name));
    }
    Ok(())
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for colored terminal output
    output: super::OutputManager,
}

impl RuntimeConfig {
    /// Create runtime configuration
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self {
            output: super::OutputManager::new(verbose, quiet),
        }
    }

    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        // JSON output owns stdout
        Self::new(args.verbose, args.quiet || args.json)
    }
}

impl RuntimeConfig {
    /// Print message
    pub fn println(&self, message: &str) {
        let _ = self.output.println(message);
    }

    /// Print progress message
    pub fn progress_println(&self, message: &str) {
        let _ = self.output.progress(message);
    }

    /// Print verbose message (only with --verbose)
    pub fn verbose_println(&self, message: &str) {
        let _ = self.output.verbose(message);
    }

    /// Print success message
    pub fn success_println(&self, message: &str) {
        let _ = self.output.success(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::time::Duration;

    #[test]
    fn command_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn version_flag_and_positional_version_coexist() {
        let args = Args::try_parse_from(["tag_release", "v1.0.0"]).unwrap();
        assert_eq!(args.version.as_deref(), Some("v1.0.0"));

        let err = Args::try_parse_from(["tag_release", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn parses_defaults() {
        let args = Args::try_parse_from(["tag_release"]).unwrap();
        assert!(args.version.is_none());
        assert_eq!(args.branch, "main");
        assert_eq!(args.remote, "origin");
        assert!(!args.force);
        assert!(!args.dry_run);
        assert_eq!(args.path, PathBuf::from("."));
    }

    #[test]
    fn parses_version_and_flags() {
        let args = Args::try_parse_from([
            "tag_release",
            "v2.0.0",
            "--branch=release",
            "--force",
            "--owner=acme",
            "--repo=rocket",
            "--no-push",
        ])
        .unwrap();
        assert_eq!(args.version.as_deref(), Some("v2.0.0"));
        assert_eq!(args.branch, "release");
        assert!(args.force);
        assert_eq!(args.owner.as_deref(), Some("acme"));
        assert_eq!(args.repo.as_deref(), Some("rocket"));
        assert!(args.no_push);
    }

    #[test]
    fn owner_requires_repo() {
        assert!(Args::try_parse_from(["tag_release", "--owner", "acme"]).is_err());
        assert!(Args::try_parse_from(["tag_release", "--repo", "rocket"]).is_err());
    }

    #[test]
    fn dry_run_conflicts_with_json() {
        assert!(Args::try_parse_from(["tag_release", "--dry-run", "--json"]).is_err());
    }

    #[test]
    fn rejects_option_like_branch() {
        let args = Args::try_parse_from(["tag_release", "--branch=-x"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn rejects_out_of_range_timeout() {
        let args = Args::try_parse_from(["tag_release", "--timeout", "0"]).unwrap();
        assert!(args.validate().is_err());
        let args = Args::try_parse_from(["tag_release", "--timeout", "99999"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn release_config_reflects_flags() {
        let args =
            Args::try_parse_from(["tag_release", "--no-push", "--timeout", "30", "--dry-run"])
                .unwrap();
        let config = args.release_config(&TimeoutConfig::default());
        assert!(!config.push);
        assert!(config.dry_run);
        assert_eq!(config.network_timeout, Duration::from_secs(30));
        assert_eq!(config.git_config().remote, "origin");
        assert!(!config.git_config().push_tags);
    }
}
