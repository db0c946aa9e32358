//! GitOperations implementation that shells out to the `git` executable.
//!
//! Every invocation runs with the repository as working directory, stdin
//! closed, and terminal credential prompts disabled. Network commands (pull,
//! push) run under a wall-clock limit; on expiry the child is killed.

use crate::error::{GitError, Result};
use crate::git::{GitOperations, PushInfo, TagInfo};
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Git operations backed by the git command line client
#[derive(Debug, Clone)]
pub struct GitCli {
    git: PathBuf,
    work_dir: PathBuf,
    network_timeout: Duration,
}

impl GitCli {
    /// Locate git on PATH and open the work tree containing `path`
    pub async fn open<P: AsRef<Path>>(path: P, network_timeout: Duration) -> Result<Self> {
        let git = which::which("git").map_err(|e| GitError::GitNotFound {
            reason: e.to_string(),
        })?;

        let cli = Self {
            git,
            work_dir: path.as_ref().to_path_buf(),
            network_timeout,
        };

        let inside = cli
            .run(&["rev-parse", "--is-inside-work-tree"], None)
            .await
            .map_err(|_| GitError::NotRepository {
                path: cli.work_dir.display().to_string(),
            })?;
        if inside.trim() != "true" {
            return Err(GitError::NotRepository {
                path: cli.work_dir.display().to_string(),
            }
            .into());
        }

        Ok(cli)
    }

    /// Repository working directory
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Run git with `args`, returning stdout on success
    async fn run(&self, args: &[&str], limit: Option<Duration>) -> Result<String> {
        let command = args.join(" ");
        debug!("git {} (in {})", command, self.work_dir.display());

        let mut cmd = Command::new(&self.git);
        cmd.args(args)
            .current_dir(&self.work_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = match limit {
            Some(limit) => tokio::time::timeout(limit, cmd.output())
                .await
                .map_err(|_| GitError::TimedOut {
                    command: command.clone(),
                    seconds: limit.as_secs(),
                })?,
            None => cmd.output().await,
        }
        .map_err(|e| GitError::CommandFailed {
            command: command.clone(),
            reason: e.to_string(),
        })?;

        debug!("git {} exited with {}", command, output.status);

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let reason = if stderr.is_empty() {
                format!("exited with {}", output.status)
            } else {
                stderr
            };
            return Err(GitError::CommandFailed { command, reason }.into());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl GitOperations for GitCli {
    async fn current_branch(&self) -> Result<String> {
        let stdout = self.run(&["branch", "--show-current"], None).await?;
        let branch = stdout.trim();
        if branch.is_empty() {
            Ok("HEAD".to_string())
        } else {
            Ok(branch.to_string())
        }
    }

    async fn status_paths(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["status", "--porcelain", "-z"], None).await?;
        Ok(parse_porcelain(&stdout))
    }

    async fn list_tags(&self) -> Result<Vec<String>> {
        let stdout = self.run(&["tag", "--list"], None).await?;
        Ok(stdout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }

    async fn remote_url(&self, remote: &str) -> Result<String> {
        let stdout = self.run(&["remote", "get-url", remote], None).await?;
        Ok(stdout.trim().to_string())
    }

    async fn checkout_branch(&self, branch: &str) -> Result<()> {
        self.run(&["checkout", branch, "--"], None).await?;
        Ok(())
    }

    async fn pull_fast_forward(&self, remote: &str, branch: &str) -> Result<()> {
        self.run(
            &["pull", "--ff-only", remote, branch],
            Some(self.network_timeout),
        )
        .await?;
        Ok(())
    }

    async fn create_annotated_tag(&self, name: &str, message: &str) -> Result<TagInfo> {
        self.run(&["tag", "-a", name, "-m", message], None).await?;

        let peeled = format!("{}^{{commit}}", name);
        let target_commit = self
            .run(&["rev-parse", peeled.as_str()], None)
            .await?
            .trim()
            .to_string();

        Ok(TagInfo {
            name: name.to_string(),
            message: message.to_string(),
            target_commit,
            created_at: chrono::Utc::now(),
            is_annotated: true,
        })
    }

    async fn push_tag(&self, remote: &str, tag: &str) -> Result<PushInfo> {
        let refspec = format!("refs/tags/{}", tag);
        self.run(&["push", remote, refspec.as_str()], Some(self.network_timeout))
            .await?;
        Ok(PushInfo {
            remote_name: remote.to_string(),
            refspec,
        })
    }
}

/// Extract paths from `git status --porcelain -z` output.
///
/// Entries are NUL-terminated and paths are never quoted. A rename or copy
/// entry carries the new path and is followed by a separate entry holding
/// the original path.
fn parse_porcelain(stdout: &str) -> Vec<String> {
    let mut paths = Vec::new();
    let mut entries = stdout.split('\0').filter(|entry| !entry.is_empty());
    while let Some(entry) = entries.next() {
        let (Some(status), Some(path)) = (entry.get(..2), entry.get(3..)) else {
            continue;
        };
        if status.contains(['R', 'C']) {
            entries.next();
        }
        paths.push(path.to_string());
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn porcelain_paths_are_extracted() {
        let stdout = " M src/lib.rs\0?? notes.txt\0A  added.rs\0R  new.rs\0old.rs\0";
        assert_eq!(
            parse_porcelain(stdout),
            vec!["src/lib.rs", "notes.txt", "added.rs", "new.rs"]
        );
    }

    #[test]
    fn porcelain_paths_keep_spaces_arrows_and_unicode() {
        let stdout = "?? my notes.txt\0 M a -> b.txt\0?? résumé.md\0";
        assert_eq!(
            parse_porcelain(stdout),
            vec!["my notes.txt", "a -> b.txt", "résumé.md"]
        );
    }

    #[test]
    fn empty_porcelain_means_clean() {
        assert!(parse_porcelain("").is_empty());
        assert!(parse_porcelain("\0").is_empty());
    }

    #[tokio::test]
    async fn open_rejects_non_repository() {
        if which::which("git").is_err() {
            return;
        }
        let dir = tempfile::tempdir().unwrap();
        let err = GitCli::open(dir.path(), Duration::from_secs(5))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::ReleaseError::Git(GitError::NotRepository { .. })
        ));
    }
}
