//! Release heading grammar: `<version> - <date>`

use chrono::{DateTime, NaiveDate, Utc};
use herald_core::error::{ChangelogError, Result};

use super::links::Links;
use crate::types::{Release, UNRELEASED};

/// Parse the text after `## ` into an empty release
pub(super) fn parse_heading(line: usize, rest: &str, links: &Links) -> Result<Release> {
    let mut tokens = rest.split_whitespace();

    let raw_version = tokens
        .next()
        .ok_or_else(|| ChangelogError::malformed(line, "release heading has no version"))?;
    let version: String = raw_version.chars().filter(|c| !matches!(c, '[' | ']')).collect();
    if version.is_empty() {
        return Err(ChangelogError::malformed(line, "release heading has no version").into());
    }

    let released = version != UNRELEASED;

    let date = if released {
        // tokens: `-`, then the date
        let token = tokens.nth(1).ok_or_else(|| {
            ChangelogError::malformed(line, format!("release {} has no date", version))
        })?;
        let date = parse_date(token).ok_or_else(|| {
            ChangelogError::malformed(
                line,
                format!("release {} has an invalid date '{}'", version, token),
            )
        })?;
        Some(date)
    } else {
        None
    };

    let link = if raw_version != version {
        links.get(&version).cloned()
    } else {
        None
    };

    let mut release = Release::unreleased();
    release.version = version;
    release.released = released;
    release.date = date;
    release.link = link;
    Ok(release)
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its UTC date
fn parse_date(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok().or_else(|| {
        DateTime::parse_from_rfc3339(token)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    })
}
