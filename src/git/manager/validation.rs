//! Read-only repository inspection before a release.

use crate::error::Result;
use crate::git::GitOperations;
use log::debug;

use super::state::RepositoryState;

/// Reports working-tree and branch facts without acting on them.
///
/// Deciding whether a dirty tree or a branch mismatch blocks the release is
/// left to the caller.
pub struct RepositoryStateChecker<'a, G: GitOperations> {
    pub(super) repository: &'a G,
}

impl<'a, G: GitOperations> RepositoryStateChecker<'a, G> {
    /// Create a checker over a repository
    pub fn new(repository: &'a G) -> Self {
        Self { repository }
    }

    /// Snapshot the current branch and dirty paths
    pub async fn check(&self, required_branch: &str) -> Result<RepositoryState> {
        let current_branch = self.repository.current_branch().await?;
        let dirty_paths = self.repository.status_paths().await?;
        let is_clean = dirty_paths.is_empty();

        debug!(
            "repository on '{}' (required '{}'), {} dirty path(s)",
            current_branch,
            required_branch,
            dirty_paths.len()
        );

        Ok(RepositoryState {
            current_branch,
            required_branch: required_branch.to_string(),
            dirty_paths,
            is_clean,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::manager::testing::FakeGit;

    #[tokio::test]
    async fn reports_clean_tree_on_required_branch() {
        let git = FakeGit::new();
        let state = RepositoryStateChecker::new(&git).check("main").await.unwrap();

        assert!(state.is_clean);
        assert!(state.on_required_branch());
        assert_eq!(git.calls(), vec!["current_branch", "status_paths"]);
    }

    #[tokio::test]
    async fn reports_dirty_tree_and_mismatch_without_failing() {
        let git = FakeGit::new()
            .on_branch("feature/login")
            .with_dirty(&["src/main.rs", "scratch.txt"]);
        let state = RepositoryStateChecker::new(&git).check("main").await.unwrap();

        assert!(!state.is_clean);
        assert_eq!(state.dirty_paths, vec!["src/main.rs", "scratch.txt"]);
        assert!(!state.on_required_branch());
        assert_eq!(state.current_branch, "feature/login");
    }

    #[tokio::test]
    async fn never_mutates_the_repository() {
        let git = FakeGit::new().with_dirty(&["x"]);
        RepositoryStateChecker::new(&git).check("main").await.unwrap();
        assert!(git.mutations().is_empty());
    }
}
