//! Release command execution.
//!
//! Resolves the version, checks the repository, then either prints the
//! plan (`--dry-run`) or runs switch, pull, tag and push in order.

use crate::cli::{Args, RuntimeConfig, TimeoutConfig};
use crate::error::Result;
use crate::git::{GitCli, GitManager, ReleasePlan};
use crate::github::GitHubRepo;
use crate::report::ReleaseReporter;
use crate::version::{VersionResolver, VersionSource};

/// Execute release command
pub(super) async fn execute_release(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    let settings = args.release_config(&TimeoutConfig::from_env());

    // 1. Open the repository
    let git = GitCli::open(&args.path, settings.network_timeout).await?;
    config.verbose_println(&format!("Repository: {}", git.work_dir().display()));

    let manager = GitManager::new(git, settings.git_config());

    let github = match (&args.owner, &args.repo) {
        (Some(owner), Some(repo)) => GitHubRepo::new(owner, repo)?,
        _ => manager.detect_github_repo().await?,
    };
    config.verbose_println(&format!("GitHub repository: {}", github));

    // 2. Resolve the version
    config.progress_println("Resolving version...");
    let existing_tags = manager.existing_tags().await?;
    let resolution = VersionResolver::resolve_detailed(args.version.as_deref(), &existing_tags)?;
    match &resolution.source {
        VersionSource::Explicit => {
            config.verbose_println(&format!("Using requested version {}", resolution.version))
        }
        VersionSource::Proposed {
            previous: Some(previous),
        } => config.println(&format!(
            "Proposed version {} (next patch after {})",
            resolution.version, previous
        )),
        VersionSource::Proposed { previous: None } => config.println(&format!(
            "Proposed version {} (no release tags yet)",
            resolution.version
        )),
    }

    // 3. Check the repository
    config.progress_println("Checking repository...");
    let state = manager.check_repository(&settings.branch).await?;

    if !state.on_required_branch() {
        let _ = config
            .output()
            .branch_switch(&state.current_branch, &state.required_branch);
    }
    if !state.is_clean {
        let _ = config.output().dirty_tree(&state.dirty_paths, settings.force);
    }

    let clearance = state.clear_for_release(settings.force)?;

    if settings.dry_run {
        let plan = ReleasePlan {
            version: resolution.version,
            source: resolution.source,
            state,
            remote: settings.remote.clone(),
            push: settings.push,
        };
        config.println(ReleaseReporter::format_plan(&plan, &github).trim_end());
        return Ok(0);
    }

    // 4. Switch, pull, tag, push
    config.progress_println(&format!(
        "Releasing {} from '{}'...",
        resolution.version, settings.branch
    ));
    let result = manager
        .perform_release(&clearance, &resolution.version, &settings.branch, &github)
        .await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        config.success_println(&format!("Released {}", result.version));
        config.println(ReleaseReporter::format(&result, &github).trim_end());
    }

    Ok(0)
}
