//! Version strategy traits

use herald_core::error::Result;

use crate::types::{BumpType, VersionComponents};

/// Trait for version strategies
pub trait VersionStrategy: Send + Sync {
    /// Parse a version string into components
    fn parse(&self, version: &str) -> Result<VersionComponents>;

    /// Format version components into a string
    fn format(&self, components: &VersionComponents) -> String;

    /// Bump the version according to the bump type
    fn bump(&self, current: &VersionComponents, bump_type: BumpType) -> Result<VersionComponents>;

    /// Check if a version string is valid for this strategy
    fn is_valid(&self, version: &str) -> bool {
        self.parse(version).is_ok()
    }

    /// Parse, bump and format in one step
    fn increment(&self, previous: &str, bump_type: BumpType) -> Result<String> {
        let current = self.parse(previous)?;
        let next = self.bump(&current, bump_type)?;
        Ok(self.format(&next))
    }
}
