//! # tag_release
//!
//! Cut a release by tagging: check the working tree, switch to the release
//! branch, pull, create an annotated `vX.Y.Z` tag, push it, and point at the
//! CI and releases pages the push triggers.
//!
//! ## Features
//!
//! - **Version proposal**: next patch after the highest `vX.Y.Z` tag, or `v0.1.0`
//! - **Guarded mutations**: nothing changes until the version is unique and
//!   the tree is clean (or `--force` is given)
//! - **Ordered steps**: switch, pull, tag, push; the first failure stops the run
//! - **Plain git**: shells out to the `git` binary so the user's credentials apply
//!
//! ## Usage
//!
//! ```bash
//! tag_release                  # propose and release the next patch version
//! tag_release v2.0.0           # release an explicit version
//! tag_release --dry-run        # show the plan without changing anything
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

// Core modules
pub mod cli;
pub mod error;
pub mod git;
pub mod github;
pub mod report;
pub mod version;

// Re-export main types for public API
pub use cli::Args;
pub use error::{CliError, GitError, ReleaseError, Result, VersionError};
pub use git::{
    Clearance, GitCli, GitConfig, GitManager, GitOperations, PushOutcome, ReleasePlan,
    ReleaseResult, ReleaseStep, RepositoryState,
};
pub use github::GitHubRepo;
pub use report::ReleaseReporter;
pub use version::{ReleaseVersion, VersionResolver, VersionSource};

use std::time::Duration;

/// Configuration for release operations
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    /// Branch the release is cut from
    pub branch: String,
    /// Remote to pull from and push to
    pub remote: String,
    /// Release even with uncommitted changes
    pub force: bool,
    /// Push the tag after creating it
    pub push: bool,
    /// Only report what would happen
    pub dry_run: bool,
    /// Time limit for each pull or push
    pub network_timeout: Duration,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            branch: "main".to_string(),
            remote: "origin".to_string(),
            force: false,
            push: true,
            dry_run: false,
            network_timeout: Duration::from_secs(cli::DEFAULT_NETWORK_SECS),
        }
    }
}

impl ReleaseConfig {
    /// Git settings for the release executor
    pub fn git_config(&self) -> GitConfig {
        GitConfig {
            remote: self.remote.clone(),
            push_tags: self.push,
        }
    }
}
