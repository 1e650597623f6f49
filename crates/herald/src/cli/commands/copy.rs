//! Copy command

use clap::Args;
use tracing::info;

use herald_core::{ChangelogError, HeraldError};

use crate::cli::Cli;

/// Copy the changelog to the clipboard
#[derive(Debug, Args)]
pub struct CopyCommand {}

impl CopyCommand {
    /// Execute the copy command
    pub fn execute(&self, _cli: &Cli) -> anyhow::Result<()> {
        info!("executing copy command");
        Err(HeraldError::from(ChangelogError::NotImplemented("copy".to_string())).into())
    }
}
