//! Init command

use clap::Args;
use tracing::info;

use herald_changelog::{Changelog, Release};

use crate::cli::output::{self, path_style};
use crate::cli::{Cli, OutputFormat};

/// Create a new changelog with an empty Unreleased section
#[derive(Debug, Args)]
pub struct InitCommand {}

impl InitCommand {
    /// Execute the init command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing init command");
        let ctx = cli.context()?;

        let changelog = Changelog::new(vec![Release::unreleased()]);
        ctx.store.create(&changelog.to_markdown())?;

        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "path": ctx.store.path().to_string_lossy(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::success(&format!(
                        "Initialized empty {} in {}",
                        ctx.store.file_name(),
                        path_style().apply_to(ctx.project_dir.display())
                    ));
                }
            }
        }

        Ok(())
    }
}
