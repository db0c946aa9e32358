//! Error types for tag_release operations.
//!
//! Every failure is terminal for the current run. Errors carry the release
//! step they occurred in, a process exit code, and recovery suggestions.

use crate::git::ReleaseStep;
use thiserror::Error;

/// Result type alias for tag_release operations
pub type Result<T> = std::result::Result<T, ReleaseError>;

/// Main error type for all tag_release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    /// Version resolution errors
    #[error("Version error: {0}")]
    Version(#[from] VersionError),

    /// Git operation errors
    #[error("Git error: {0}")]
    Git(#[from] GitError),

    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Version resolution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    /// Input does not match `v<major>.<minor>.<patch>`
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersionFormat {
        /// The rejected input
        input: String,
        /// Reason for the rejection
        reason: String,
    },

    /// The resolved version is already a tag in the repository
    #[error("Version '{version}' already exists as a tag. Choose a different version.")]
    VersionAlreadyExists {
        /// The conflicting tag name
        version: String,
    },
}

/// Git operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GitError {
    /// The git executable could not be found on PATH
    #[error("git executable not found on PATH: {reason}")]
    GitNotFound {
        /// Lookup failure detail
        reason: String,
    },

    /// The target directory is not inside a git work tree
    #[error("Not a git repository: {path}")]
    NotRepository {
        /// Directory that was inspected
        path: String,
    },

    /// Working tree has changes and no override was given
    #[error(
        "Working tree has {} uncommitted path(s). Commit or stash them, or re-run with --force.",
        .paths.len()
    )]
    DirtyTreeBlocked {
        /// Modified or untracked paths
        paths: Vec<String>,
    },

    /// Step 1: switching to the release branch failed
    #[error("Failed to switch to branch '{branch}': {reason}")]
    BranchSwitchFailed {
        /// Branch that was requested
        branch: String,
        /// Reason for the failure
        reason: String,
    },

    /// Step 2: pulling from the remote tracking branch failed
    #[error("Failed to pull '{branch}' from '{remote}': {reason}")]
    PullFailed {
        /// Remote name
        remote: String,
        /// Branch name
        branch: String,
        /// Reason for the failure
        reason: String,
    },

    /// Step 3: creating the annotated tag failed
    #[error("Failed to create tag '{tag}': {reason}")]
    TagCreationFailed {
        /// Tag name
        tag: String,
        /// Reason for the failure
        reason: String,
    },

    /// Step 4: pushing the tag failed. The local tag is left in place.
    #[error(
        "Failed to push tag '{tag}' to '{remote}': {reason}. The local tag was kept; \
         delete it with `git tag -d {tag}` or retry with `git push {remote} {tag}`."
    )]
    PushFailed {
        /// Remote name
        remote: String,
        /// Tag name
        tag: String,
        /// Reason for the failure
        reason: String,
    },

    /// A read-only git query failed
    #[error("git {command} failed: {reason}")]
    CommandFailed {
        /// Arguments passed to git
        command: String,
        /// stderr or spawn failure
        reason: String,
    },

    /// A git command exceeded its wall-clock budget
    #[error("git {command} timed out after {seconds}s")]
    TimedOut {
        /// Arguments passed to git
        command: String,
        /// Budget that expired
        seconds: u64,
    },
}

/// CLI-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },
}

/// Exit code for usage, environment, and internal failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code for version resolution failures
pub const EXIT_INVALID_VERSION: i32 = 2;
/// Exit code for a dirty working tree without `--force`
pub const EXIT_DIRTY_TREE: i32 = 3;
/// Exit code for failed version-control steps
pub const EXIT_VCS_FAILURE: i32 = 4;

impl ReleaseError {
    /// Process exit code for this failure kind
    pub fn exit_code(&self) -> i32 {
        match self {
            ReleaseError::Version(_) => EXIT_INVALID_VERSION,
            ReleaseError::Git(GitError::DirtyTreeBlocked { .. }) => EXIT_DIRTY_TREE,
            ReleaseError::Git(GitError::GitNotFound { .. })
            | ReleaseError::Git(GitError::NotRepository { .. }) => EXIT_FAILURE,
            ReleaseError::Git(_) => EXIT_VCS_FAILURE,
            ReleaseError::Cli(_) | ReleaseError::Json(_) => EXIT_FAILURE,
        }
    }

    /// Release step at which this error occurred, if it maps to one
    pub fn step(&self) -> Option<ReleaseStep> {
        match self {
            ReleaseError::Version(_) => Some(ReleaseStep::ResolveVersion),
            ReleaseError::Git(err) => match err {
                GitError::DirtyTreeBlocked { .. } | GitError::NotRepository { .. } => {
                    Some(ReleaseStep::CheckRepository)
                }
                GitError::BranchSwitchFailed { .. } => Some(ReleaseStep::SwitchBranch),
                GitError::PullFailed { .. } => Some(ReleaseStep::Pull),
                GitError::TagCreationFailed { .. } => Some(ReleaseStep::CreateTag),
                GitError::PushFailed { .. } => Some(ReleaseStep::PushTag),
                GitError::GitNotFound { .. }
                | GitError::CommandFailed { .. }
                | GitError::TimedOut { .. } => None,
            },
            _ => None,
        }
    }

    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        match self {
            ReleaseError::Version(VersionError::InvalidVersionFormat { .. }) => vec![
                "Versions must look like v1.2.3 (leading 'v', three numeric parts)".to_string(),
                "Omit the version to have the next patch release proposed".to_string(),
            ],
            ReleaseError::Version(VersionError::VersionAlreadyExists { version }) => vec![
                "List existing tags: git tag --list 'v*'".to_string(),
                format!("Pick a version newer than {}", version),
            ],
            ReleaseError::Git(GitError::DirtyTreeBlocked { paths }) => {
                let mut suggestions = vec![
                    "Commit pending changes: git add . && git commit -m 'message'".to_string(),
                    "Stash changes temporarily: git stash".to_string(),
                    "Release anyway with --force".to_string(),
                ];
                if let Some(first) = paths.first() {
                    suggestions.push(format!("First offending path: {}", first));
                }
                suggestions
            }
            ReleaseError::Git(GitError::BranchSwitchFailed { branch, .. }) => vec![
                format!("Check the branch exists: git branch -a --list '*{}'", branch),
                "Pass the right branch with --branch".to_string(),
            ],
            ReleaseError::Git(GitError::PullFailed { .. }) => vec![
                "Check network access to the remote: git remote -v".to_string(),
                "Resolve diverged history manually, then re-run".to_string(),
            ],
            ReleaseError::Git(GitError::TagCreationFailed { tag, .. }) => vec![
                format!("Inspect the existing tag: git show {}", tag),
                "Re-run without a version to get a fresh proposal".to_string(),
            ],
            ReleaseError::Git(GitError::PushFailed { remote, tag, .. }) => vec![
                format!("Delete the local tag: git tag -d {}", tag),
                format!("Or push it again: git push {} {}", remote, tag),
                format!("Check whether the remote already has it: git ls-remote --tags {}", remote),
            ],
            ReleaseError::Git(GitError::GitNotFound { .. }) => {
                vec!["Install git and make sure it is on PATH".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_failure_kind() {
        let invalid: ReleaseError = VersionError::InvalidVersionFormat {
            input: "1.0".to_string(),
            reason: "missing patch".to_string(),
        }
        .into();
        assert_eq!(invalid.exit_code(), EXIT_INVALID_VERSION);

        let dirty: ReleaseError = GitError::DirtyTreeBlocked {
            paths: vec!["src/lib.rs".to_string()],
        }
        .into();
        assert_eq!(dirty.exit_code(), EXIT_DIRTY_TREE);

        let push: ReleaseError = GitError::PushFailed {
            remote: "origin".to_string(),
            tag: "v1.0.0".to_string(),
            reason: "rejected".to_string(),
        }
        .into();
        assert_eq!(push.exit_code(), EXIT_VCS_FAILURE);

        let cli: ReleaseError = CliError::InvalidArguments {
            reason: "bad".to_string(),
        }
        .into();
        assert_eq!(cli.exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn push_failure_names_step_and_manual_recovery() {
        let err: ReleaseError = GitError::PushFailed {
            remote: "origin".to_string(),
            tag: "v2.0.0".to_string(),
            reason: "remote rejected".to_string(),
        }
        .into();

        assert_eq!(err.step(), Some(ReleaseStep::PushTag));
        let message = err.to_string();
        assert!(message.contains("git tag -d v2.0.0"));
        assert!(message.contains("git push origin v2.0.0"));
    }

    #[test]
    fn dirty_tree_suggestions_mention_force() {
        let err: ReleaseError = GitError::DirtyTreeBlocked {
            paths: vec!["README.md".to_string()],
        }
        .into();
        let suggestions = err.recovery_suggestions();
        assert!(suggestions.iter().any(|s| s.contains("--force")));
        assert!(suggestions.iter().any(|s| s.contains("README.md")));
    }
}
