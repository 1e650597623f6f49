//! Parse command

use clap::Args;
use tracing::info;

use herald_changelog::FormatterRegistry;

use crate::cli::Cli;

/// Print the parsed changelog
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// Output format, by extension (json, md)
    #[arg(long, default_value = "json")]
    pub to: String,
}

impl ParseCommand {
    /// Execute the parse command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!(to = %self.to, "executing parse command");
        let registry = FormatterRegistry::new();
        let formatter = registry.get(&self.to).ok_or_else(|| {
            anyhow::anyhow!(
                "Unknown output format '{}' (expected one of: {})",
                self.to,
                registry.extensions().join(", ")
            )
        })?;

        let ctx = cli.context()?;
        let changelog = ctx.load()?;
        print!("{}", formatter.format(&changelog)?);

        Ok(())
    }
}
