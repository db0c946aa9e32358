//! Result types for release operations.

use crate::git::{RepositoryState, TagInfo};
use crate::version::{ReleaseVersion, VersionSource};
use serde::Serialize;

use super::state::ReleaseStep;

/// What happened to the tag after it was created
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PushOutcome {
    /// The tag was pushed to the remote
    Pushed {
        /// Remote that received the tag
        remote: String,
        /// Ref that was pushed, e.g. `refs/tags/v1.2.3`
        refspec: String,
    },
    /// Pushing was disabled; the tag exists only locally
    LocalOnly,
}

/// Result of a completed release, consumed once by the reporter
#[derive(Debug, Clone, Serialize)]
pub struct ReleaseResult {
    /// Released version
    pub version: ReleaseVersion,
    /// Branch the tag was cut from
    pub branch: String,
    /// Created tag
    pub tag: TagInfo,
    /// Push outcome
    pub push: PushOutcome,
    /// CI runs page
    pub actions_url: String,
    /// Releases page
    pub releases_url: String,
    /// Steps that ran, in order
    pub completed_steps: Vec<ReleaseStep>,
}

/// What a release would do, computed without touching the repository
#[derive(Debug, Clone)]
pub struct ReleasePlan {
    /// Version that would be released
    pub version: ReleaseVersion,
    /// How the version was chosen
    pub source: VersionSource,
    /// Repository snapshot the plan was made from
    pub state: RepositoryState,
    /// Remote that would be pulled from and pushed to
    pub remote: String,
    /// Whether the tag would be pushed
    pub push: bool,
}

impl ReleasePlan {
    /// Steps the executor would run, in order
    pub fn steps(&self) -> Vec<ReleaseStep> {
        let mut steps = vec![
            ReleaseStep::SwitchBranch,
            ReleaseStep::Pull,
            ReleaseStep::CreateTag,
        ];
        if self.push {
            steps.push(ReleaseStep::PushTag);
        }
        steps
    }
}
