//! Herald Changelog - Keep a Changelog documents as data
//!
//! This crate parses a `CHANGELOG.md` into an ordered list of releases,
//! formats that list back into canonical Markdown, and implements the
//! bump and update operations on it.

pub mod changelog;
pub mod formatter;
pub mod parser;
pub mod types;

pub use changelog::{entries_from_message, BumpOutcome, BumpPolicy, Changelog, LatestRelease, Summary};
pub use formatter::{ChangelogFormatter, FormatterRegistry, JsonFormatter, MarkdownFormatter};
pub use parser::parse;
pub use types::{Category, ChangeKind, Content, Release, UNRELEASED};
