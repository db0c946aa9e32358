//! GitHub repository identity for release links.
//!
//! The tool never calls the GitHub API; the tag push triggers CI on the
//! provider side and this module only builds the static page URLs.

mod repo;

pub use repo::GitHubRepo;
