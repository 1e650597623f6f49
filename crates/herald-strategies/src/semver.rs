//! SemVer version strategy

use herald_core::error::{Result, VersionError};
use tracing::debug;

use crate::traits::VersionStrategy;
use crate::types::{BumpType, VersionComponents};

/// Semantic Versioning strategy
///
/// Follows the SemVer 2.0.0 specification: https://semver.org/
///
/// Bumping a pre-release promotes it to the release it precedes when that
/// release is already the bump's outcome, so `1.1.0-rc.1` bumped by `minor`
/// becomes `1.1.0` rather than `1.2.0`.
#[derive(Debug, Clone, Default)]
pub struct SemVerStrategy;

impl SemVerStrategy {
    /// Create a new SemVer strategy
    pub fn new() -> Self {
        Self
    }

    fn parse_semver(version: &str) -> Result<semver::Version> {
        let version = version.strip_prefix('v').unwrap_or(version);

        semver::Version::parse(version)
            .map_err(|e| VersionError::ParseFailed(version.to_string(), e.to_string()).into())
    }
}

impl VersionStrategy for SemVerStrategy {
    fn parse(&self, version: &str) -> Result<VersionComponents> {
        let v = Self::parse_semver(version)?;
        let non_empty = |s: String| (!s.is_empty()).then_some(s);

        Ok(VersionComponents {
            major: v.major,
            minor: v.minor,
            patch: v.patch,
            prerelease: non_empty(v.pre.to_string()),
            build: non_empty(v.build.to_string()),
        })
    }

    fn format(&self, components: &VersionComponents) -> String {
        components.to_version_string()
    }

    fn bump(&self, current: &VersionComponents, bump_type: BumpType) -> Result<VersionComponents> {
        let mut result = current.clone();
        let is_prerelease = result.prerelease.is_some();

        match bump_type {
            BumpType::Major => {
                if !is_prerelease || result.minor != 0 || result.patch != 0 {
                    result.major += 1;
                }
                result.minor = 0;
                result.patch = 0;
            }
            BumpType::Minor => {
                if !is_prerelease || result.patch != 0 {
                    result.minor += 1;
                }
                result.patch = 0;
            }
            BumpType::Patch => {
                if !is_prerelease {
                    result.patch += 1;
                }
            }
        }

        // Bumps always land on a plain release
        result.prerelease = None;
        result.build = None;

        debug!(from = %current, to = %result, bump = %bump_type, "bumped version");
        Ok(result)
    }
}
