//! Target version resolution from user input or existing tags.

use super::{INITIAL_VERSION, ReleaseVersion};
use crate::error::VersionError;
use log::debug;

/// Where a resolved version came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// Supplied by the user
    Explicit,
    /// Proposed as the next patch after the highest existing release tag
    Proposed {
        /// Highest existing release tag, `None` when the repository had none
        previous: Option<ReleaseVersion>,
    },
}

/// A resolved release version and how it was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Version to release
    pub version: ReleaseVersion,
    /// How the version was chosen
    pub source: VersionSource,
}

/// Determines the version to release
#[derive(Debug, Default, Clone, Copy)]
pub struct VersionResolver;

impl VersionResolver {
    /// Resolve the release version.
    ///
    /// With `user_input`, the input is validated. Without it, the highest
    /// existing `vX.Y.Z` tag is bumped by one patch, or `v0.1.0` is proposed
    /// when there is none. Either way the result must not already be a tag.
    pub fn resolve(
        user_input: Option<&str>,
        existing_tags: &[String],
    ) -> Result<ReleaseVersion, VersionError> {
        Self::resolve_detailed(user_input, existing_tags).map(|resolution| resolution.version)
    }

    /// Like [`VersionResolver::resolve`], also reporting where the version came from
    pub fn resolve_detailed(
        user_input: Option<&str>,
        existing_tags: &[String],
    ) -> Result<Resolution, VersionError> {
        let resolution = match user_input {
            Some(input) => Resolution {
                version: ReleaseVersion::parse(input.trim())?,
                source: VersionSource::Explicit,
            },
            None => {
                let previous = Self::highest(existing_tags);
                let version = match &previous {
                    Some(highest) => highest.next_patch()?,
                    None => ReleaseVersion::parse(INITIAL_VERSION)?,
                };
                Resolution {
                    version,
                    source: VersionSource::Proposed { previous },
                }
            }
        };

        if existing_tags.iter().any(|tag| tag == resolution.version.tag()) {
            return Err(VersionError::VersionAlreadyExists {
                version: resolution.version.tag().to_string(),
            });
        }

        debug!(
            "resolved release version {} ({:?})",
            resolution.version, resolution.source
        );
        Ok(resolution)
    }

    /// Highest release tag by numeric ordering; other tags are ignored
    pub fn highest(existing_tags: &[String]) -> Option<ReleaseVersion> {
        existing_tags
            .iter()
            .filter_map(|tag| ReleaseVersion::parse(tag).ok())
            .max()
    }
}
