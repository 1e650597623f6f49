//! The changelog document and the operations performed on it

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use herald_core::config::VersioningConfig;
use herald_core::error::{ChangelogError, Result, VersionError};
use herald_strategies::{BumpTarget, BumpType, SemVerStrategy, VersionStrategy};

use crate::formatter::MarkdownFormatter;
use crate::types::{ChangeKind, Content, Release};

/// A whole changelog: releases in document order, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Changelog {
    releases: Vec<Release>,
}

impl Changelog {
    /// Create a changelog from releases
    pub fn new(releases: Vec<Release>) -> Self {
        Self { releases }
    }

    /// Parse a Markdown document
    pub fn parse(text: &str) -> Result<Self> {
        crate::parser::parse(text)
    }

    /// Render canonical Markdown
    pub fn to_markdown(&self) -> String {
        MarkdownFormatter::new().render(self)
    }

    /// All releases
    pub fn releases(&self) -> &[Release] {
        &self.releases
    }

    /// Number of releases, the Unreleased section included
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Check if there are no releases at all
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }

    /// The pending Unreleased section, if the changelog starts with one
    pub fn unreleased(&self) -> Option<&Release> {
        self.releases.first().filter(|r| r.is_unreleased())
    }

    /// The most recent finalized release
    pub fn latest_release(&self) -> Option<&Release> {
        self.releases.iter().find(|r| r.released)
    }

    /// Read-only overview for `status`
    pub fn summary(&self) -> Summary {
        Summary {
            released_count: self.releases.iter().filter(|r| r.released).count(),
            latest: self.latest_release().map(|r| LatestRelease {
                version: r.version.clone(),
                date: r.date,
            }),
            unreleased: self.unreleased().map(|r| r.content.clone()),
        }
    }

    /// Put an empty Unreleased section at the head unless one is already there.
    ///
    /// Returns whether a section was inserted.
    pub fn ensure_unreleased(&mut self) -> bool {
        if self.unreleased().is_some() {
            return false;
        }
        debug!("inserting Unreleased section");
        self.releases.insert(0, Release::unreleased());
        true
    }

    /// Append items under `kind`'s category of the Unreleased section.
    ///
    /// Returns the number of items added.
    #[instrument(skip(self, items), fields(kind = %kind, item_count = items.len()))]
    pub fn record(&mut self, kind: ChangeKind, items: &[String]) -> usize {
        self.ensure_unreleased();
        let category = kind.category();
        let content = &mut self.releases[0].content;
        for item in items {
            content.push(&category, item);
        }
        info!(category = %category, added = items.len(), "recorded changes");
        items.len()
    }

    /// Finalize the Unreleased section into a dated release.
    ///
    /// `target` is an explicit version or a bump word; `None` applies the
    /// policy's default bump. Fails with [`ChangelogError::NoContent`] unless
    /// the changelog starts with an Unreleased section holding at least one
    /// category.
    #[instrument(skip(self, policy))]
    pub fn bump(
        &mut self,
        target: Option<&str>,
        policy: &BumpPolicy,
        today: NaiveDate,
    ) -> Result<BumpOutcome> {
        if !self.unreleased().is_some_and(|r| !r.content.is_empty()) {
            return Err(ChangelogError::NoContent.into());
        }

        let previous = self
            .releases
            .get(1)
            .map(|r| r.version.clone())
            .unwrap_or_else(|| policy.initial_version.clone());

        let target = match target {
            Some(target) => BumpTarget::parse(target, policy.strategy())?,
            None => policy.default_bump.into(),
        };
        let next = target.resolve(&previous, policy.strategy())?;

        let head = self
            .releases
            .first_mut()
            .ok_or(ChangelogError::NoContent)?;
        head.version = next.clone();
        head.released = true;
        head.date = Some(today);

        info!(previous = %previous, next = %next, "bumped release");
        Ok(BumpOutcome { previous, next })
    }
}

/// Turn editor output into change items.
///
/// Lines are trimmed; blank lines and `#` comments are dropped.
pub fn entries_from_message(text: &str) -> Result<Vec<String>> {
    let entries: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect();

    if entries.is_empty() {
        return Err(ChangelogError::EmptyUpdate.into());
    }
    Ok(entries)
}

/// How `bump` computes the next version
pub struct BumpPolicy {
    strategy: Box<dyn VersionStrategy>,
    initial_version: String,
    default_bump: BumpType,
}

impl BumpPolicy {
    /// SemVer, bumping from `0.0.0`, `patch` by default
    pub fn new() -> Self {
        Self {
            strategy: Box::new(SemVerStrategy::new()),
            initial_version: "0.0.0".to_string(),
            default_bump: BumpType::Patch,
        }
    }

    /// Build a policy from the versioning configuration
    pub fn from_config(config: &VersioningConfig) -> Result<Self> {
        let default_bump = config
            .default_bump
            .parse::<BumpType>()
            .map_err(|_| VersionError::InvalidBumpTarget(config.default_bump.clone()))?;

        Ok(Self::new()
            .with_initial_version(&config.initial_version)
            .with_default_bump(default_bump))
    }

    /// Version bumped from when nothing has been released
    pub fn with_initial_version(mut self, version: impl Into<String>) -> Self {
        self.initial_version = version.into();
        self
    }

    /// Bump applied without an explicit target
    pub fn with_default_bump(mut self, bump_type: BumpType) -> Self {
        self.default_bump = bump_type;
        self
    }

    /// The version strategy in use
    pub fn strategy(&self) -> &dyn VersionStrategy {
        self.strategy.as_ref()
    }
}

impl Default for BumpPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BumpOutcome {
    /// Version of the previous release, or the initial version
    pub previous: String,
    /// Version the Unreleased section became
    pub next: String,
}

/// Overview of a changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Number of finalized releases
    pub released_count: usize,
    /// The most recent finalized release
    pub latest: Option<LatestRelease>,
    /// Content of the Unreleased section, if there is one
    pub unreleased: Option<Content>,
}

/// Version and date of a finalized release
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LatestRelease {
    pub version: String,
    pub date: Option<NaiveDate>,
}
