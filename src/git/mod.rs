//! Git operations and management for release workflows.
//!
//! This module wraps the git command line client behind the
//! [`GitOperations`] trait and builds the release workflow on top of it.

mod git_adapter;
mod manager;
mod operations;

pub use git_adapter::GitCli;
pub use manager::{
    Clearance, GitConfig, GitManager, PushOutcome, ReleaseExecutor, ReleasePlan, ReleaseResult,
    ReleaseStep, RepositoryState, RepositoryStateChecker,
};
pub use operations::{GitOperations, PushInfo, TagInfo};
