//! Markdown changelog formatter

use tracing::{debug, instrument};

use herald_core::error::Result;

use super::ChangelogFormatter;
use crate::changelog::Changelog;
use crate::types::Release;

/// Header written at the top of every changelog
pub const PREAMBLE: &str = "# Changelog\n\n\
All notable changes to this project will be documented in this file.\n\n\
The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/), \
and this project adheres to [Semantic Versioning](https://semver.org/spec/v2.0.0.html).\n\n";

/// Canonical Keep a Changelog Markdown
#[derive(Debug, Clone, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Create a new markdown formatter
    pub fn new() -> Self {
        Self
    }

    /// Render the document. Never fails.
    #[instrument(skip(self, changelog), fields(release_count = changelog.len()))]
    pub fn render(&self, changelog: &Changelog) -> String {
        let mut output = String::from(PREAMBLE);
        let mut links = String::new();

        for release in changelog.releases() {
            output.push_str(&self.release_block(release, &mut links));
        }
        output.push_str(&links);

        let mut output = output.trim().to_string();
        output.push('\n');

        debug!(output_len = output.len(), "markdown changelog formatted");
        output
    }

    fn release_block(&self, release: &Release, links: &mut String) -> String {
        let mut block = match &release.link {
            Some(link) => {
                links.push_str(&format!("[{}]: {}\n", release.version, link));
                format!("## [{}]", release.version)
            }
            None => format!("## {}", release.version),
        };

        if let Some(date) = release.date {
            block.push_str(&format!(" - {}", date.format("%Y-%m-%d")));
        }
        block.push('\n');

        for (category, items) in release.content.ordered() {
            block.push_str(&format!("\n### {}\n", category.label()));
            if !items.is_empty() {
                block.push('\n');
            }
            for item in items {
                block.push_str(&format!("- {}\n", item));
            }
        }

        block.push('\n');
        block
    }
}

impl ChangelogFormatter for MarkdownFormatter {
    fn format(&self, changelog: &Changelog) -> Result<String> {
        Ok(self.render(changelog))
    }

    fn extension(&self) -> &'static str {
        "md"
    }
}
