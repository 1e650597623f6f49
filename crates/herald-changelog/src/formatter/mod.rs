//! Changelog formatters

mod json;
mod markdown;
mod registry;

pub use json::JsonFormatter;
pub use markdown::{MarkdownFormatter, PREAMBLE};
pub use registry::FormatterRegistry;

use herald_core::error::Result;

use crate::changelog::Changelog;

/// Trait for changelog formatters
pub trait ChangelogFormatter: Send + Sync {
    /// Render a whole changelog
    fn format(&self, changelog: &Changelog) -> Result<String>;

    /// Get the file extension for this format
    fn extension(&self) -> &'static str;
}
