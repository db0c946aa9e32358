//! Core release operations implementation.

use crate::error::{GitError, ReleaseError, Result};
use crate::git::GitOperations;
use crate::github::GitHubRepo;
use crate::version::ReleaseVersion;
use log::{info, warn};

use super::config::GitConfig;
use super::results::{PushOutcome, ReleaseResult};
use super::state::{Clearance, ReleaseProgress, ReleaseStep};

/// Runs the tag-and-push sequence. The only component with side effects.
pub struct ReleaseExecutor<'a, G: GitOperations> {
    pub(super) repository: &'a G,
    pub(super) config: &'a GitConfig,
    pub(super) github: &'a GitHubRepo,
}

impl<'a, G: GitOperations> ReleaseExecutor<'a, G> {
    /// Create an executor over a repository
    pub fn new(repository: &'a G, config: &'a GitConfig, github: &'a GitHubRepo) -> Self {
        Self {
            repository,
            config,
            github,
        }
    }

    /// Perform the release.
    ///
    /// Steps run strictly in order and the first failure ends the run:
    /// 1. Switch to `branch`
    /// 2. Fast-forward pull from the remote
    /// 3. Create the annotated tag `version` with message "Release <version>"
    /// 4. Push the tag (unless pushing is disabled)
    ///
    /// Nothing is rolled back. A tag created in step 3 stays in place when
    /// step 4 fails; the error explains how to delete or re-push it.
    pub async fn execute(
        &self,
        clearance: &Clearance,
        version: &ReleaseVersion,
        branch: &str,
    ) -> Result<ReleaseResult> {
        let mut progress = ReleaseProgress::default();
        let remote = self.config.remote.as_str();
        let tag_name = version.tag();

        if clearance.forced() {
            warn!("releasing {} from a dirty working tree (forced)", version);
        }

        // Step 1: Switch to the release branch
        info!("switching to branch '{}'", branch);
        self.repository
            .checkout_branch(branch)
            .await
            .map_err(|e| GitError::BranchSwitchFailed {
                branch: branch.to_string(),
                reason: failure_reason(e),
            })?;
        progress.complete(ReleaseStep::SwitchBranch);

        // Step 2: Pull latest changes; conflicts are surfaced, never resolved
        info!("pulling '{}' from '{}'", branch, remote);
        self.repository
            .pull_fast_forward(remote, branch)
            .await
            .map_err(|e| GitError::PullFailed {
                remote: remote.to_string(),
                branch: branch.to_string(),
                reason: failure_reason(e),
            })?;
        progress.complete(ReleaseStep::Pull);

        // Step 3: Create annotated tag
        let message = self.config.generate_tag_message(tag_name);
        info!("creating tag '{}'", tag_name);
        let tag = self
            .repository
            .create_annotated_tag(tag_name, &message)
            .await
            .map_err(|e| GitError::TagCreationFailed {
                tag: tag_name.to_string(),
                reason: failure_reason(e),
            })?;
        progress.complete(ReleaseStep::CreateTag);

        // Step 4: Push tag. A rejected push is reported, never retried.
        let push = if self.config.push_tags {
            info!("pushing tag '{}' to '{}'", tag_name, remote);
            match self.repository.push_tag(remote, tag_name).await {
                Ok(push_info) => {
                    progress.complete(ReleaseStep::PushTag);
                    PushOutcome::Pushed {
                        remote: push_info.remote_name,
                        refspec: push_info.refspec,
                    }
                }
                Err(e) => {
                    warn!(
                        "push failed after steps {:?}; local tag '{}' left in place",
                        progress.completed(),
                        tag_name
                    );
                    return Err(GitError::PushFailed {
                        remote: remote.to_string(),
                        tag: tag_name.to_string(),
                        reason: failure_reason(e),
                    }
                    .into());
                }
            }
        } else {
            info!("push disabled; tag '{}' kept local", tag_name);
            PushOutcome::LocalOnly
        };

        Ok(ReleaseResult {
            version: version.clone(),
            branch: branch.to_string(),
            tag,
            push,
            actions_url: self.github.actions_url(),
            releases_url: self.github.releases_url(),
            completed_steps: progress.into_steps(),
        })
    }
}

/// Reduce a git failure to the text worth showing inside a step error
fn failure_reason(error: ReleaseError) -> String {
    match error {
        ReleaseError::Git(GitError::CommandFailed { reason, .. }) => reason,
        ReleaseError::Git(GitError::TimedOut { seconds, .. }) => {
            format!("timed out after {}s", seconds)
        }
        other => other.to_string(),
    }
}
