//! Destroy command

use clap::Args;
use console::Term;
use dialoguer::Confirm;
use tracing::info;

use herald_core::{ChangelogError, HeraldError};

use crate::cli::output::{self, path_style};
use crate::cli::Cli;

/// Delete the changelog
#[derive(Debug, Args)]
pub struct DestroyCommand {
    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl DestroyCommand {
    /// Execute the destroy command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(yes = self.yes, "executing destroy command");
        let ctx = cli.context()?;

        if !ctx.store.exists() {
            let err = ChangelogError::NotFound(ctx.store.path().to_path_buf());
            return Err(HeraldError::from(err).into());
        }

        if !self.yes && Term::stdout().is_term() {
            let confirmed = Confirm::new()
                .with_prompt(format!(
                    "Remove {}? This cannot be undone",
                    ctx.store.path().display()
                ))
                .default(false)
                .interact()?;

            if !confirmed {
                output::info("Aborted.");
                return Ok(());
            }
        }

        ctx.store.remove()?;

        if !cli.quiet {
            output::success(&format!(
                "Successfully removed {} in {}",
                ctx.store.file_name(),
                path_style().apply_to(ctx.project_dir.display())
            ));
        }

        Ok(())
    }
}
