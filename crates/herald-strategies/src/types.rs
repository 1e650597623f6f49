//! Version strategy types

use serde::{Deserialize, Serialize};

use herald_core::error::{Result, VersionError};

use crate::traits::VersionStrategy;

/// Version components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionComponents {
    /// Major version
    pub major: u64,
    /// Minor version
    pub minor: u64,
    /// Patch version
    pub patch: u64,
    /// Pre-release identifier
    pub prerelease: Option<String>,
    /// Build metadata
    pub build: Option<String>,
}

impl VersionComponents {
    /// Create new version components
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Convert to string representation
    pub fn to_version_string(&self) -> String {
        let mut v = format!("{}.{}.{}", self.major, self.minor, self.patch);

        if let Some(pre) = &self.prerelease {
            v.push('-');
            v.push_str(pre);
        }

        if let Some(build) = &self.build {
            v.push('+');
            v.push_str(build);
        }

        v
    }
}

impl std::fmt::Display for VersionComponents {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_version_string())
    }
}

/// Type of version bump
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BumpType {
    /// Major version bump (breaking changes)
    Major,
    /// Minor version bump (new features)
    Minor,
    /// Patch version bump (bug fixes)
    Patch,
}

impl BumpType {
    /// Returns the string representation of the bump type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
        }
    }
}

impl std::fmt::Display for BumpType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BumpType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "major" => Ok(Self::Major),
            "minor" => Ok(Self::Minor),
            "patch" => Ok(Self::Patch),
            _ => Err(format!("Unknown bump type: {}", s)),
        }
    }
}

/// What a release should be bumped to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BumpTarget {
    /// An explicit version, used verbatim
    Exact(String),
    /// A bump relative to the previous release
    Bump(BumpType),
}

impl BumpTarget {
    /// Interpret a user-supplied target.
    ///
    /// Valid versions win over bump words, so `patch` only ever means a bump.
    pub fn parse(input: &str, strategy: &dyn VersionStrategy) -> Result<Self> {
        if strategy.is_valid(input) {
            return Ok(Self::Exact(input.to_string()));
        }

        input
            .parse::<BumpType>()
            .map(Self::Bump)
            .map_err(|_| VersionError::InvalidBumpTarget(input.to_string()).into())
    }

    /// Compute the version this target produces after `previous`
    pub fn resolve(&self, previous: &str, strategy: &dyn VersionStrategy) -> Result<String> {
        match self {
            Self::Exact(version) => Ok(version.clone()),
            Self::Bump(bump_type) => strategy.increment(previous, *bump_type),
        }
    }
}

impl From<BumpType> for BumpTarget {
    fn from(bump_type: BumpType) -> Self {
        Self::Bump(bump_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SemVerStrategy;
    use herald_core::error::HeraldError;

    #[test]
    fn test_version_string() {
        let v = VersionComponents {
            prerelease: Some("rc.1".to_string()),
            build: Some("sha.5114f85".to_string()),
            ..VersionComponents::new(1, 2, 3)
        };
        assert_eq!(v.to_string(), "1.2.3-rc.1+sha.5114f85");
    }

    #[test]
    fn test_bump_type_from_str() {
        assert_eq!("minor".parse::<BumpType>().unwrap(), BumpType::Minor);
        assert!("Minor".parse::<BumpType>().is_err());
        assert!("prerelease".parse::<BumpType>().is_err());
    }

    #[test]
    fn test_target_exact_version() {
        let strategy = SemVerStrategy::new();
        let target = BumpTarget::parse("2.0.0-beta.1", &strategy).unwrap();
        assert_eq!(target, BumpTarget::Exact("2.0.0-beta.1".to_string()));
        assert_eq!(target.resolve("1.0.0", &strategy).unwrap(), "2.0.0-beta.1");
    }

    #[test]
    fn test_target_bump_word() {
        let strategy = SemVerStrategy::new();
        let target = BumpTarget::parse("major", &strategy).unwrap();
        assert_eq!(target, BumpTarget::Bump(BumpType::Major));
        assert_eq!(target.resolve("1.4.2", &strategy).unwrap(), "2.0.0");
    }

    #[test]
    fn test_target_invalid() {
        let strategy = SemVerStrategy::new();
        let result = BumpTarget::parse("huge", &strategy);
        assert!(matches!(
            result,
            Err(HeraldError::Version(VersionError::InvalidBumpTarget(t))) if t == "huge"
        ));
    }
}
