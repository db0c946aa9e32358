//! Git manager for coordinating release operations.
//!
//! This module provides high-level Git management for release workflows:
//! reading tags, inspecting the working tree, and running the tag-and-push
//! sequence.

mod config;
mod release;
mod results;
mod state;
#[cfg(test)]
pub(crate) mod testing;
mod validation;

pub use config::GitConfig;
pub use release::ReleaseExecutor;
pub use results::{PushOutcome, ReleasePlan, ReleaseResult};
pub use state::{Clearance, ReleaseStep, RepositoryState};
pub use validation::RepositoryStateChecker;

use crate::error::{CliError, Result};
use crate::git::{GitCli, GitOperations};
use crate::github::GitHubRepo;
use crate::version::ReleaseVersion;

/// High-level Git manager for release operations
#[derive(Debug)]
pub struct GitManager<G: GitOperations = GitCli> {
    /// Underlying Git repository
    repository: G,
    /// Configuration for Git operations
    config: GitConfig,
}

impl<G: GitOperations> GitManager<G> {
    /// Create a Git manager over a repository
    pub fn new(repository: G, config: GitConfig) -> Self {
        Self { repository, config }
    }

    /// Tags currently known to the repository
    pub async fn existing_tags(&self) -> Result<Vec<String>> {
        self.repository.list_tags().await
    }

    /// Snapshot branch and working-tree state
    pub async fn check_repository(&self, required_branch: &str) -> Result<RepositoryState> {
        RepositoryStateChecker::new(&self.repository)
            .check(required_branch)
            .await
    }

    /// Perform the release sequence
    pub async fn perform_release(
        &self,
        clearance: &Clearance,
        version: &ReleaseVersion,
        branch: &str,
        github: &GitHubRepo,
    ) -> Result<ReleaseResult> {
        ReleaseExecutor::new(&self.repository, &self.config, github)
            .execute(clearance, version, branch)
            .await
    }

    /// Derive owner/repo from the configured remote's URL
    pub async fn detect_github_repo(&self) -> Result<GitHubRepo> {
        let url = self
            .repository
            .remote_url(&self.config.remote)
            .await
            .map_err(|e| CliError::InvalidArguments {
                reason: format!(
                    "cannot read URL of remote '{}' ({}); pass --owner and --repo",
                    self.config.remote, e
                ),
            })?;
        GitHubRepo::from_remote_url(&url)
    }
}
