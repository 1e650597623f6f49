//! Changelog types

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Version label of the pending, not yet released section
pub const UNRELEASED: &str = "Unreleased";

/// A labeled group of change items
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    /// New features
    Added,
    /// Changes in existing functionality
    Changed,
    /// Soon-to-be removed features
    Deprecated,
    /// Removed features
    Removed,
    /// Bug fixes
    Fixed,
    /// Vulnerability fixes
    Security,
    /// Any other label
    Custom(String),
}

impl Category {
    /// The well-known categories, in the order they are written
    pub const KNOWN: [Category; 6] = [
        Category::Added,
        Category::Changed,
        Category::Deprecated,
        Category::Removed,
        Category::Fixed,
        Category::Security,
    ];

    /// Heading label for this category
    pub fn label(&self) -> &str {
        match self {
            Self::Added => "Added",
            Self::Changed => "Changed",
            Self::Deprecated => "Deprecated",
            Self::Removed => "Removed",
            Self::Fixed => "Fixed",
            Self::Security => "Security",
            Self::Custom(label) => label,
        }
    }

    /// Category for a heading label. Matching is exact.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Added" => Self::Added,
            "Changed" => Self::Changed,
            "Deprecated" => Self::Deprecated,
            "Removed" => Self::Removed,
            "Fixed" => Self::Fixed,
            "Security" => Self::Security,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Whether this is one of the six well-known categories
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind of change recorded by `update`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Something was added
    Add,
    /// Something changed
    Change,
    /// Something was deprecated
    Deprecate,
    /// Something was removed
    Remove,
    /// Something was fixed
    Fix,
    /// A vulnerability was addressed
    Secure,
}

impl ChangeKind {
    /// Command-line token for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Change => "change",
            Self::Deprecate => "deprecate",
            Self::Remove => "remove",
            Self::Fix => "fix",
            Self::Secure => "secure",
        }
    }

    /// Category the change is filed under
    pub fn category(&self) -> Category {
        match self {
            Self::Add => Category::Added,
            Self::Change => Category::Changed,
            Self::Deprecate => Category::Deprecated,
            Self::Remove => Category::Removed,
            Self::Fix => Category::Fixed,
            Self::Secure => Category::Security,
        }
    }

    /// Past tense, as in "what you have ... in this new version"
    pub fn verb(&self) -> &'static str {
        match self {
            Self::Add => "added",
            Self::Change => "changed",
            Self::Deprecate => "deprecated",
            Self::Remove => "removed",
            Self::Fix => "fixed",
            Self::Secure => "secured",
        }
    }

    /// Plural noun for several changes of this kind
    pub fn plural(&self) -> &'static str {
        match self {
            Self::Add => "additions",
            Self::Change => "changes",
            Self::Deprecate => "deprecations",
            Self::Remove => "removals",
            Self::Fix => "fixes",
            Self::Secure => "secures",
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ChangeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "deprecate" => Ok(Self::Deprecate),
            "remove" => Ok(Self::Remove),
            "fix" => Ok(Self::Fix),
            "secure" => Ok(Self::Secure),
            _ => Err(format!(
                "Unknown change kind: {} (expected add, change, deprecate, remove, fix or secure)",
                s
            )),
        }
    }
}

/// Items of a release, grouped by category label.
///
/// Custom labels keep their insertion order. Known labels are always
/// reported in [`Category::KNOWN`] order by [`Content::ordered`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Content(IndexMap<String, Vec<String>>);

impl Content {
    /// Create empty content
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the items of a category, creating an empty list if needed
    pub fn ensure(&mut self, category: &Category) -> &mut Vec<String> {
        self.0.entry(category.label().to_string()).or_default()
    }

    /// Append an item to a category. Newlines inside the item are folded into spaces.
    pub fn push(&mut self, category: &Category, item: impl AsRef<str>) {
        let item = fold_item(item.as_ref());
        self.ensure(category).push(item);
    }

    /// Items of a category, if present
    pub fn get(&self, category: &Category) -> Option<&[String]> {
        self.0.get(category.label()).map(Vec::as_slice)
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no category is present at all
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of items across all categories
    pub fn item_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Categories in display order: known ones first, then custom ones as inserted
    pub fn ordered(&self) -> Vec<(Category, &[String])> {
        let known = Category::KNOWN
            .into_iter()
            .filter_map(|category| self.get(&category).map(|items| (category, items)));

        let custom = self
            .0
            .iter()
            .map(|(label, items)| (Category::from_label(label), items.as_slice()))
            .filter(|(category, _)| !category.is_known());

        known.chain(custom).collect()
    }
}

fn fold_item(item: &str) -> String {
    item.lines().collect::<Vec<_>>().join(" ").trim().to_string()
}

/// One version section of the changelog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Version string, or [`UNRELEASED`]
    pub version: String,
    /// Whether this is a finalized release
    pub released: bool,
    /// Release date, present iff released
    pub date: Option<NaiveDate>,
    /// URL from a matching link-reference definition
    pub link: Option<String>,
    /// Change items by category
    pub content: Content,
}

impl Release {
    /// Create the pending Unreleased section
    pub fn unreleased() -> Self {
        Self {
            version: UNRELEASED.to_string(),
            released: false,
            date: None,
            link: None,
            content: Content::new(),
        }
    }

    /// Create a finalized release
    pub fn new(version: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            version: version.into(),
            released: true,
            date: Some(date),
            link: None,
            content: Content::new(),
        }
    }

    /// Set the reference link
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Add an item
    pub fn with_item(mut self, category: Category, item: impl AsRef<str>) -> Self {
        self.content.push(&category, item);
        self
    }

    /// Whether this is the pending Unreleased section
    pub fn is_unreleased(&self) -> bool {
        !self.released
    }
}
