//! Formatter registry

use std::sync::Arc;

use super::{ChangelogFormatter, JsonFormatter, MarkdownFormatter};

/// Registry of available changelog formatters
pub struct FormatterRegistry {
    formatters: Vec<Arc<dyn ChangelogFormatter>>,
}

impl FormatterRegistry {
    /// Create a registry with the Markdown and JSON formatters
    pub fn new() -> Self {
        Self {
            formatters: vec![
                Arc::new(MarkdownFormatter::new()),
                Arc::new(JsonFormatter::new()),
            ],
        }
    }

    /// Get formatter by file extension
    pub fn get(&self, extension: &str) -> Option<Arc<dyn ChangelogFormatter>> {
        self.formatters
            .iter()
            .find(|f| f.extension() == extension)
            .cloned()
    }

    /// Get all supported file extensions
    pub fn extensions(&self) -> Vec<&'static str> {
        self.formatters.iter().map(|f| f.extension()).collect()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changelog::Changelog;
    use crate::types::Release;

    #[test]
    fn test_get_by_extension() {
        let registry = FormatterRegistry::new();
        assert!(registry.get("md").is_some());
        assert!(registry.get("json").is_some());
        assert!(registry.get("html").is_none());
    }

    #[test]
    fn test_extensions() {
        let registry = FormatterRegistry::new();
        assert_eq!(registry.extensions(), ["md", "json"]);
    }

    #[test]
    fn test_lookup_formats_changelog() {
        let registry = FormatterRegistry::new();
        let changelog = Changelog::new(vec![Release::unreleased()]);

        let json = registry.get("json").unwrap().format(&changelog).unwrap();
        assert!(json.contains("\"version\": \"Unreleased\""));

        let markdown = registry.get("md").unwrap().format(&changelog).unwrap();
        assert!(markdown.ends_with("## Unreleased\n"));
    }
}
