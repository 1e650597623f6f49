//! JSON dump of the parsed model

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{debug, instrument};

use herald_core::error::Result;

use super::ChangelogFormatter;
use crate::changelog::Changelog;

/// Pretty-printed JSON with 4-space indentation
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

impl ChangelogFormatter for JsonFormatter {
    #[instrument(skip(self, changelog), fields(release_count = changelog.len()))]
    fn format(&self, changelog: &Changelog) -> Result<String> {
        let mut buf = Vec::new();
        let mut ser =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
        changelog.serialize(&mut ser)?;

        let mut output = String::from_utf8_lossy(&buf).into_owned();
        output.push('\n');
        debug!(output_len = output.len(), "json changelog formatted");
        Ok(output)
    }

    fn extension(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Release};
    use chrono::NaiveDate;

    #[test]
    fn test_json_shape() {
        let changelog = Changelog::new(vec![
            Release::unreleased(),
            Release::new("1.0.0", NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
                .with_link("https://example.com/1.0.0")
                .with_item(Category::Added, "First"),
        ]);

        let output = JsonFormatter::new().format(&changelog).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value[0]["version"], "Unreleased");
        assert_eq!(value[0]["released"], false);
        assert!(value[0]["date"].is_null());
        assert!(value[0]["link"].is_null());
        assert_eq!(value[1]["date"], "2020-01-01");
        assert_eq!(value[1]["link"], "https://example.com/1.0.0");
        assert_eq!(value[1]["content"]["Added"][0], "First");
    }

    #[test]
    fn test_json_indentation() {
        let changelog = Changelog::new(vec![Release::unreleased()]);
        let output = JsonFormatter::new().format(&changelog).unwrap();
        assert!(output.starts_with("[\n    {\n        \"version\": \"Unreleased\""));
        assert!(output.ends_with("]\n"));
    }

    #[test]
    fn test_empty_changelog() {
        let output = JsonFormatter::new().format(&Changelog::default()).unwrap();
        assert_eq!(output, "[]\n");
    }
}
