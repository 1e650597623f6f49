//! Changelog document parsing
//!
//! Parsing runs in two passes. [`links::extract`] pulls `[label]: url`
//! definitions out of the document, then a line state machine walks the
//! remaining body:
//!
//! | line prefix | effect                                        |
//! |-------------|-----------------------------------------------|
//! | `## `       | starts a release (from any state)             |
//! | `### `      | starts a category inside a release            |
//! | `- `        | starts an item inside a category              |
//! | other       | continues the open item, otherwise ignored    |

mod heading;
mod links;
mod machine;

use herald_core::error::Result;
use tracing::{debug, instrument};

use crate::changelog::Changelog;
use machine::Machine;

/// Parse a Keep a Changelog document
#[instrument(skip(text), fields(bytes = text.len()))]
pub fn parse(text: &str) -> Result<Changelog> {
    let (links, body) = links::extract(text);
    debug!(links = links.len(), lines = body.len(), "extracted link definitions");

    let mut machine = Machine::new(&links);
    for (number, line) in body {
        machine.feed(number, line)?;
    }

    let releases = machine.finish();
    debug!(release_count = releases.len(), "changelog parsed");
    Ok(Changelog::new(releases))
}
