//! Core Git operations trait and types for release management.
//!
//! This module defines the GitOperations trait that specifies every git
//! interaction a release needs. The production implementation in
//! `git_adapter` shells out to the `git` executable; tests substitute a
//! recording fake.

use crate::error::Result;
use serde::Serialize;
use std::future::Future;

/// Trait defining all required Git operations for release management
pub trait GitOperations {
    /// Name of the checked-out branch, `HEAD` when detached
    fn current_branch(&self) -> impl Future<Output = Result<String>>;

    /// Modified, staged, and untracked paths in the working tree
    fn status_paths(&self) -> impl Future<Output = Result<Vec<String>>>;

    /// All tag names known to the local repository
    fn list_tags(&self) -> impl Future<Output = Result<Vec<String>>>;

    /// Fetch URL of a remote
    fn remote_url(&self, remote: &str) -> impl Future<Output = Result<String>>;

    /// Check out a local branch, creating it from a unique remote branch if needed
    fn checkout_branch(&self, branch: &str) -> impl Future<Output = Result<()>>;

    /// Fast-forward the current branch from its remote counterpart
    fn pull_fast_forward(&self, remote: &str, branch: &str) -> impl Future<Output = Result<()>>;

    /// Create an annotated tag on HEAD
    fn create_annotated_tag(&self, name: &str, message: &str)
    -> impl Future<Output = Result<TagInfo>>;

    /// Push a single tag to a remote
    fn push_tag(&self, remote: &str, tag: &str) -> impl Future<Output = Result<PushInfo>>;
}

/// Information about a Git tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagInfo {
    /// Tag name
    pub name: String,
    /// Tag message
    pub message: String,
    /// Target commit hash
    pub target_commit: String,
    /// Tag timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Whether this is an annotated tag
    pub is_annotated: bool,
}

impl TagInfo {
    /// Abbreviated target commit hash
    pub fn short_commit(&self) -> &str {
        self.target_commit
            .get(..7)
            .unwrap_or(self.target_commit.as_str())
    }
}

/// Information about a push operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PushInfo {
    /// Remote name that was pushed to
    pub remote_name: String,
    /// Refspec that was pushed
    pub refspec: String,
}
