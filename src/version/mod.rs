//! Release version parsing and resolution.
//!
//! Release versions are git tags of the strict form `v<major>.<minor>.<patch>`.
//! This module validates user-supplied versions and proposes the next patch
//! release from the tags already present in a repository.

mod resolver;

pub use resolver::{Resolution, VersionResolver, VersionSource};

use crate::error::VersionError;
use regex::Regex;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

/// Version proposed when a repository has no release tags yet
pub const INITIAL_VERSION: &str = "v0.1.0";

static RELEASE_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^v([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("release tag regex is valid")
});

/// A validated release version.
///
/// Holds the tag name exactly as written together with its numeric
/// components. Ordering is numeric by (major, minor, patch); the tag text
/// only breaks ties between spellings such as `v1.0.0` and `v01.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    tag: String,
    version: semver::Version,
}

impl ReleaseVersion {
    /// Parse and validate a release tag such as `v1.2.3`
    pub fn parse(input: &str) -> Result<Self, VersionError> {
        let caps = RELEASE_TAG_RE
            .captures(input)
            .ok_or_else(|| VersionError::InvalidVersionFormat {
                input: input.to_string(),
                reason: "expected v<major>.<minor>.<patch>, e.g. v1.2.3".to_string(),
            })?;

        let major = parse_component(input, &caps[1], "major")?;
        let minor = parse_component(input, &caps[2], "minor")?;
        let patch = parse_component(input, &caps[3], "patch")?;

        Ok(Self {
            tag: input.to_string(),
            version: semver::Version::new(major, minor, patch),
        })
    }

    /// Build a release version from numeric components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            tag: format!("v{}.{}.{}", major, minor, patch),
            version: semver::Version::new(major, minor, patch),
        }
    }

    /// The git tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The next patch release, e.g. `v1.2.3` -> `v1.2.4`
    pub fn next_patch(&self) -> Result<Self, VersionError> {
        let patch = self
            .version
            .patch
            .checked_add(1)
            .ok_or_else(|| VersionError::InvalidVersionFormat {
                input: self.tag.clone(),
                reason: "patch component cannot be incremented further".to_string(),
            })?;
        Ok(Self::new(self.version.major, self.version.minor, patch))
    }
}

fn parse_component(input: &str, digits: &str, name: &str) -> Result<u64, VersionError> {
    digits
        .parse::<u64>()
        .map_err(|_| VersionError::InvalidVersionFormat {
            input: input.to_string(),
            reason: format!("{} component '{}' is out of range", name, digits),
        })
}

impl Ord for ReleaseVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.version
            .cmp(&other.version)
            .then_with(|| self.tag.cmp(&other.tag))
    }
}

impl PartialOrd for ReleaseVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl Serialize for ReleaseVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_strict_release_tags() {
        for input in ["v0.0.0", "v1.2.3", "v10.20.30", "v01.2.3", "v0.1.0"] {
            let version = ReleaseVersion::parse(input).unwrap();
            assert_eq!(version.tag(), input);
        }
    }

    #[test]
    fn rejects_everything_else() {
        for input in [
            "", "1.2.3", "v1.2", "v1.2.3.4", "V1.2.3", "v1.2.3-rc.1", "v1.2.3+build", " v1.2.3",
            "v1..3", "va.b.c", "v١.٢.٣", "release-1.2.3",
        ] {
            match ReleaseVersion::parse(input) {
                Err(VersionError::InvalidVersionFormat { input: rejected, .. }) => {
                    assert_eq!(rejected, input)
                }
                other => panic!("expected InvalidVersionFormat for {input:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn overflowing_component_is_rejected() {
        let err = ReleaseVersion::parse("v99999999999999999999.0.0").unwrap_err();
        match err {
            VersionError::InvalidVersionFormat { reason, .. } => {
                assert!(reason.contains("major"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn ordering_is_numeric_not_lexicographic() {
        let small = ReleaseVersion::parse("v1.9.0").unwrap();
        let large = ReleaseVersion::parse("v1.10.0").unwrap();
        assert!(large > small);
        assert!("v1.10.0" < "v1.9.0");
    }

    #[test]
    fn next_patch_normalizes_tag() {
        let version = ReleaseVersion::parse("v01.02.03").unwrap();
        assert_eq!(version.next_patch().unwrap().tag(), "v1.2.4");
    }

    #[test]
    fn serializes_as_tag_string() {
        let version = ReleaseVersion::new(2, 0, 0);
        assert_eq!(serde_json::to_string(&version).unwrap(), "\"v2.0.0\"");
    }
}
