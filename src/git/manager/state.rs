//! Repository state snapshots and release step tracking.

use crate::error::GitError;
use serde::Serialize;
use std::fmt;

/// Snapshot of the working tree, recomputed on every check
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryState {
    /// Checked-out branch, `HEAD` when detached
    pub current_branch: String,
    /// Branch the release must be cut from
    pub required_branch: String,
    /// Modified, staged, and untracked paths
    pub dirty_paths: Vec<String>,
    /// Whether `dirty_paths` is empty
    pub is_clean: bool,
}

/// Proof that the repository state does not block a release.
///
/// Only [`RepositoryState::clear_for_release`] creates one, and the release
/// executor requires it, so no version reaches tag creation unless the tree
/// was clean or the dirty state was explicitly overridden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clearance {
    forced: bool,
}

impl Clearance {
    /// Whether a dirty working tree was overridden
    pub fn forced(&self) -> bool {
        self.forced
    }
}

impl RepositoryState {
    /// Whether HEAD is on the required branch
    pub fn on_required_branch(&self) -> bool {
        self.current_branch == self.required_branch
    }

    /// Decide whether the release may proceed.
    ///
    /// A clean tree always clears. A dirty tree clears only with `force`.
    pub fn clear_for_release(&self, force: bool) -> Result<Clearance, GitError> {
        if self.is_clean {
            return Ok(Clearance { forced: false });
        }
        if force {
            return Ok(Clearance { forced: true });
        }
        Err(GitError::DirtyTreeBlocked {
            paths: self.dirty_paths.clone(),
        })
    }
}

/// Ordered steps of a release run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseStep {
    /// Version validation or proposal
    ResolveVersion,
    /// Working tree and branch inspection
    CheckRepository,
    /// Step 1: switch to the release branch
    SwitchBranch,
    /// Step 2: pull from the remote
    Pull,
    /// Step 3: create the annotated tag
    CreateTag,
    /// Step 4: push the tag
    PushTag,
}

impl fmt::Display for ReleaseStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReleaseStep::ResolveVersion => "resolve version",
            ReleaseStep::CheckRepository => "check repository",
            ReleaseStep::SwitchBranch => "switch branch",
            ReleaseStep::Pull => "pull",
            ReleaseStep::CreateTag => "create tag",
            ReleaseStep::PushTag => "push tag",
        };
        f.write_str(name)
    }
}

/// Steps completed so far in a release run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(super) struct ReleaseProgress {
    completed: Vec<ReleaseStep>,
}

impl ReleaseProgress {
    pub(super) fn complete(&mut self, step: ReleaseStep) {
        self.completed.push(step);
    }

    pub(super) fn completed(&self) -> &[ReleaseStep] {
        &self.completed
    }

    pub(super) fn into_steps(self) -> Vec<ReleaseStep> {
        self.completed
    }
}
