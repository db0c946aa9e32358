//! Release summaries for the terminal.
//!
//! Rendering is pure: the same inputs always produce byte-identical text,
//! and no URL is checked over the network.

use crate::git::{PushOutcome, ReleasePlan, ReleaseResult, ReleaseStep};
use crate::github::GitHubRepo;
use crate::version::VersionSource;

/// Formats release results and dry-run plans
#[derive(Debug, Default, Clone, Copy)]
pub struct ReleaseReporter;

impl ReleaseReporter {
    /// Summary of a completed release
    pub fn format(result: &ReleaseResult, repo: &GitHubRepo) -> String {
        let mut out = format!("Release {} tagged for {}\n", result.version, repo);
        out.push_str(&format!("  Version:  {}\n", result.version));
        out.push_str(&format!("  Branch:   {}\n", result.branch));
        out.push_str(&format!(
            "  Tag:      {} ({}) \"{}\"\n",
            result.tag.name,
            result.tag.short_commit(),
            result.tag.message
        ));
        match &result.push {
            PushOutcome::Pushed { remote, refspec } => {
                out.push_str(&format!("  Push:     pushed {} to {}\n", refspec, remote));
            }
            PushOutcome::LocalOnly => {
                out.push_str("  Push:     skipped, tag exists locally only\n");
            }
        }
        out.push_str(&format!("  Actions:  {}\n", result.actions_url));
        out.push_str(&format!("  Releases: {}\n", result.releases_url));
        out
    }

    /// Description of what a release would do
    pub fn format_plan(plan: &ReleasePlan, repo: &GitHubRepo) -> String {
        let origin = match &plan.source {
            VersionSource::Explicit => "requested".to_string(),
            VersionSource::Proposed {
                previous: Some(previous),
            } => format!("next patch after {}", previous),
            VersionSource::Proposed { previous: None } => "first release".to_string(),
        };

        let mut out = format!(
            "Dry run: would release {} ({}) for {}\n",
            plan.version, origin, repo
        );

        let state = &plan.state;
        if state.on_required_branch() {
            out.push_str(&format!("  Branch:   {}\n", state.required_branch));
        } else {
            out.push_str(&format!(
                "  Branch:   {} (currently on {})\n",
                state.required_branch, state.current_branch
            ));
        }
        if state.is_clean {
            out.push_str("  Tree:     clean\n");
        } else {
            out.push_str(&format!(
                "  Tree:     {} uncommitted path(s), overridden with --force\n",
                state.dirty_paths.len()
            ));
        }

        out.push_str("  Steps:\n");
        for (index, step) in plan.steps().iter().enumerate() {
            out.push_str(&format!(
                "    {}. {}: {}\n",
                index + 1,
                step,
                Self::step_command(plan, *step)
            ));
        }
        out.push_str(&format!("  Actions:  {}\n", repo.actions_url()));
        out.push_str(&format!("  Releases: {}\n", repo.releases_url()));
        out
    }

    fn step_command(plan: &ReleasePlan, step: ReleaseStep) -> String {
        let branch = &plan.state.required_branch;
        let tag = plan.version.tag();
        match step {
            ReleaseStep::SwitchBranch => format!("git checkout {}", branch),
            ReleaseStep::Pull => format!("git pull --ff-only {} {}", plan.remote, branch),
            ReleaseStep::CreateTag => format!("git tag -a {} -m \"Release {}\"", tag, tag),
            ReleaseStep::PushTag => format!("git push {} refs/tags/{}", plan.remote, tag),
            ReleaseStep::ResolveVersion | ReleaseStep::CheckRepository => String::new(),
        }
    }
}
