//! Line-oriented state machine over the document body

use herald_core::error::{ChangelogError, Result};
use tracing::debug;

use super::heading::parse_heading;
use super::links::Links;
use crate::types::{Category, Release};

const RELEASE_PREFIX: &str = "## ";
const CATEGORY_PREFIX: &str = "### ";
const ITEM_PREFIX: &str = "- ";

/// Where the machine is within the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum State {
    /// Title and description before the first release
    Preamble,
    /// After a release heading, before its first category
    ReleaseHeading,
    /// After a category heading, before its first item
    Category,
    /// Inside a bullet item, which may continue over several lines
    Item,
}

pub(super) struct Machine<'a> {
    links: &'a Links,
    state: State,
    releases: Vec<Release>,
    category: Option<Category>,
    item: Option<String>,
}

impl<'a> Machine<'a> {
    pub(super) fn new(links: &'a Links) -> Self {
        Self {
            links,
            state: State::Preamble,
            releases: Vec::new(),
            category: None,
            item: None,
        }
    }

    #[cfg(test)]
    pub(super) fn state(&self) -> State {
        self.state
    }

    /// Advance over one body line
    pub(super) fn feed(&mut self, number: usize, line: &str) -> Result<()> {
        if let Some(rest) = line.strip_prefix(RELEASE_PREFIX) {
            self.close_category();
            let release = parse_heading(number, rest, self.links)?;
            if release.is_unreleased() && !self.releases.is_empty() {
                return Err(ChangelogError::malformed(
                    number,
                    "the Unreleased section must be the first release",
                )
                .into());
            }
            debug!(line = number, version = %release.version, "release heading");
            self.releases.push(release);
            self.state = State::ReleaseHeading;
            return Ok(());
        }

        match self.state {
            State::Preamble => {}
            State::ReleaseHeading | State::Category | State::Item => {
                if let Some(label) = line.strip_prefix(CATEGORY_PREFIX) {
                    self.open_category(Category::from_label(label.trim_end()));
                } else if let (State::Category | State::Item, Some(rest)) =
                    (self.state, line.strip_prefix(ITEM_PREFIX))
                {
                    self.close_item();
                    self.item = Some(rest.to_string());
                    self.state = State::Item;
                } else if let Some(item) = self.item.as_mut() {
                    item.push(' ');
                    item.push_str(line);
                }
                // Anything else is prose and is dropped
            }
        }

        Ok(())
    }

    /// Close whatever is open and return the releases
    pub(super) fn finish(mut self) -> Vec<Release> {
        self.close_category();
        self.releases
    }

    fn open_category(&mut self, category: Category) {
        self.close_category();
        if let Some(release) = self.releases.last_mut() {
            release.content.ensure(&category);
        }
        self.category = Some(category);
        self.state = State::Category;
    }

    fn close_category(&mut self) {
        self.close_item();
        self.category = None;
    }

    fn close_item(&mut self) {
        let Some(item) = self.item.take() else {
            return;
        };
        if let (Some(category), Some(release)) = (&self.category, self.releases.last_mut()) {
            release.content.push(category, item.trim());
        }
    }
}
