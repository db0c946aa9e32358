//! Recording in-memory GitOperations for unit tests.

use crate::error::{GitError, Result};
use crate::git::{GitOperations, PushInfo, TagInfo};
use std::cell::RefCell;

const MUTATIONS: [&str; 4] = [
    "checkout_branch",
    "pull_fast_forward",
    "create_annotated_tag",
    "push_tag",
];

/// Fake repository that records every call in order
#[derive(Debug)]
pub(crate) struct FakeGit {
    branch: RefCell<String>,
    dirty: Vec<String>,
    tags: RefCell<Vec<String>>,
    remote_url: String,
    failing: Option<(&'static str, GitError)>,
    invocations: RefCell<Vec<(String, Vec<String>)>>,
}

impl FakeGit {
    pub(crate) fn new() -> Self {
        Self {
            branch: RefCell::new("main".to_string()),
            dirty: Vec::new(),
            tags: RefCell::new(Vec::new()),
            remote_url: "git@github.com:acme/rocket.git".to_string(),
            failing: None,
            invocations: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn on_branch(self, branch: &str) -> Self {
        *self.branch.borrow_mut() = branch.to_string();
        self
    }

    pub(crate) fn with_dirty(mut self, paths: &[&str]) -> Self {
        self.dirty = paths.iter().map(|p| p.to_string()).collect();
        self
    }

    pub(crate) fn with_tags(self, tags: &[&str]) -> Self {
        *self.tags.borrow_mut() = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub(crate) fn with_remote_url(mut self, url: &str) -> Self {
        self.remote_url = url.to_string();
        self
    }

    /// Make the named operation fail with `reason`
    pub(crate) fn failing_on(mut self, operation: &'static str, reason: &str) -> Self {
        self.failing = Some((
            operation,
            GitError::CommandFailed {
                command: operation.to_string(),
                reason: reason.to_string(),
            },
        ));
        self
    }

    /// Make the named operation exceed its time limit
    pub(crate) fn timing_out_on(mut self, operation: &'static str, seconds: u64) -> Self {
        self.failing = Some((
            operation,
            GitError::TimedOut {
                command: operation.to_string(),
                seconds,
            },
        ));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub(crate) fn args_of(&self, operation: &str) -> Option<Vec<String>> {
        self.invocations
            .borrow()
            .iter()
            .find(|(name, _)| name == operation)
            .map(|(_, args)| args.clone())
    }

    pub(crate) fn mutations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|name| MUTATIONS.contains(&name.as_str()))
            .collect()
    }

    pub(crate) fn tags(&self) -> Vec<String> {
        self.tags.borrow().clone()
    }

    fn record(&self, operation: &'static str, args: &[&str]) -> Result<()> {
        self.invocations.borrow_mut().push((
            operation.to_string(),
            args.iter().map(|a| a.to_string()).collect(),
        ));
        match &self.failing {
            Some((failing, error)) if *failing == operation => Err(error.clone().into()),
            _ => Ok(()),
        }
    }
}

impl GitOperations for FakeGit {
    async fn current_branch(&self) -> Result<String> {
        self.record("current_branch", &[])?;
        Ok(self.branch.borrow().clone())
    }

    async fn status_paths(&self) -> Result<Vec<String>> {
        self.record("status_paths", &[])?;
        Ok(self.dirty.clone())
    }

    async fn list_tags(&self) -> Result<Vec<String>> {
        self.record("list_tags", &[])?;
        Ok(self.tags.borrow().clone())
    }

    async fn remote_url(&self, remote: &str) -> Result<String> {
        self.record("remote_url", &[remote])?;
        Ok(self.remote_url.clone())
    }

    async fn checkout_branch(&self, branch: &str) -> Result<()> {
        self.record("checkout_branch", &[branch])?;
        *self.branch.borrow_mut() = branch.to_string();
        Ok(())
    }

    async fn pull_fast_forward(&self, remote: &str, branch: &str) -> Result<()> {
        self.record("pull_fast_forward", &[remote, branch])
    }

    async fn create_annotated_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        self.record("create_annotated_tag", &[name, message])?;
        if self.tags.borrow().iter().any(|tag| tag == name) {
            return Err(GitError::CommandFailed {
                command: format!("tag -a {}", name),
                reason: format!("fatal: tag '{}' already exists", name),
            }
            .into());
        }
        self.tags.borrow_mut().push(name.to_string());
        Ok(TagInfo {
            name: name.to_string(),
            message: message.to_string(),
            target_commit: "0123456789abcdef0123456789abcdef01234567".to_string(),
            created_at: chrono::DateTime::from_timestamp(1_700_000_000, 0).unwrap_or_default(),
            is_annotated: true,
        })
    }

    async fn push_tag(&self, remote: &str, tag: &str) -> Result<PushInfo> {
        self.record("push_tag", &[remote, tag])?;
        Ok(PushInfo {
            remote_name: remote.to_string(),
            refspec: format!("refs/tags/{}", tag),
        })
    }
}
