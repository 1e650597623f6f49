//! Bump command

use chrono::Utc;
use clap::Args;
use console::style;
use tracing::info;

use herald_changelog::BumpPolicy;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Release the unreleased changes as a new version
#[derive(Debug, Args)]
pub struct BumpCommand {
    /// Explicit version, or one of patch, minor, major (default from config)
    pub target: Option<String>,
}

impl BumpCommand {
    /// Execute the bump command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(target = ?self.target, "executing bump command");
        let ctx = cli.context()?;
        let mut changelog = ctx.load()?;

        let policy = BumpPolicy::from_config(&ctx.config.versioning)?;
        let outcome = changelog.bump(self.target.as_deref(), &policy, Utc::now().date_naive())?;
        ctx.save(&changelog)?;

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Updated from {} -> {}",
                        outcome.previous,
                        style(&outcome.next).green().bold()
                    ));
                }
            }
        }

        Ok(())
    }
}
