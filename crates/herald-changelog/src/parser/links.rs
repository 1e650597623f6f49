//! Link-reference definitions

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// Regex for `[label]: url` lines
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?P<label>[^\]]+)\]: (?P<url>.+)$").expect("Invalid regex"));

/// Link-reference definitions by label
pub type Links = HashMap<String, String>;

/// A body line together with its 1-based line number in the document
pub type NumberedLine<'a> = (usize, &'a str);

/// Split the document into link definitions and the remaining body lines.
///
/// Later definitions of the same label replace earlier ones.
pub fn extract(text: &str) -> (Links, Vec<NumberedLine<'_>>) {
    let mut links = Links::new();
    let mut body = Vec::new();

    for (index, line) in text.lines().enumerate() {
        match LINK_REGEX.captures(line.trim_end()) {
            Some(caps) => {
                let label = caps["label"].trim().to_string();
                let url = caps["url"].trim().to_string();
                links.insert(label, url);
            }
            None => body.push((index + 1, line)),
        }
    }

    (links, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let text = "# Changelog\n\n## [1.0.0] - 2020-01-01\n\n[1.0.0]: https://example.com/1.0.0\n[Unreleased]:  https://example.com/compare \n";
        let (links, body) = extract(text);

        assert_eq!(links.len(), 2);
        assert_eq!(links["1.0.0"], "https://example.com/1.0.0");
        assert_eq!(links["Unreleased"], "https://example.com/compare");
        assert_eq!(body, vec![(1, "# Changelog"), (2, ""), (3, "## [1.0.0] - 2020-01-01"), (4, "")]);
    }

    #[test]
    fn test_inline_links_are_body() {
        let text = "The format is based on [Keep a Changelog](https://keepachangelog.com/en/1.0.0/)\n- See [docs]: for details\n";
        let (links, body) = extract(text);

        assert!(links.is_empty());
        assert_eq!(body.len(), 2);
    }
}
