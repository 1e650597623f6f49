//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;

use herald_changelog::Changelog;
use herald_core::config::{load_config, load_config_or_default};
use herald_core::{ChangelogStore, Config};

use commands::{
    BumpCommand, CompletionsCommand, CopyCommand, DestroyCommand, InitCommand, ParseCommand,
    StatusCommand, UpdateCommand,
};

/// Herald - Keep a Changelog maintenance CLI
#[derive(Debug, Parser)]
#[command(name = "herald")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Project directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file, instead of searching for one
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Changelog file, relative to the project directory
    #[arg(long, global = true, env = "HERALD_FILE")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new changelog
    Init(InitCommand),

    /// Print the changelog as data
    Parse(ParseCommand),

    /// Show released versions and unreleased changes
    Status(StatusCommand),

    /// Release the unreleased changes as a new version
    Bump(BumpCommand),

    /// Record changes in the unreleased section
    Update(UpdateCommand),

    /// Delete the changelog
    Destroy(DestroyCommand),

    /// Copy the changelog to the clipboard
    Copy(CopyCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    /// Execute the CLI command
    pub fn execute(&self) -> anyhow::Result<()> {
        match &self.command {
            Commands::Init(cmd) => cmd.execute(self),
            Commands::Parse(cmd) => cmd.execute(self),
            Commands::Status(cmd) => cmd.execute(self),
            Commands::Bump(cmd) => cmd.execute(self),
            Commands::Update(cmd) => cmd.execute(self),
            Commands::Destroy(cmd) => cmd.execute(self),
            Commands::Copy(cmd) => cmd.execute(self),
            Commands::Completions(cmd) => cmd.execute(self),
        }
    }

    /// Resolve the project directory, its configuration and the document store
    pub fn context(&self) -> anyhow::Result<Context> {
        let project_dir = match &self.directory {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let (config, config_path) = match &self.config {
            Some(path) => (load_config(path)?, Some(path.clone())),
            None => load_config_or_default(&project_dir)?,
        };

        let store = match &self.file {
            Some(file) => ChangelogStore::new(project_dir.join(file)),
            None => ChangelogStore::from_config(&project_dir, &config),
        };

        debug!(
            project_dir = %project_dir.display(),
            config = ?config_path,
            changelog = %store.path().display(),
            "resolved context"
        );

        Ok(Context {
            project_dir,
            config,
            store,
        })
    }
}

/// Everything a command needs to find and persist the changelog
#[derive(Debug)]
pub struct Context {
    pub project_dir: PathBuf,
    pub config: Config,
    pub store: ChangelogStore,
}

impl Context {
    /// Read and parse the changelog
    pub fn load(&self) -> anyhow::Result<Changelog> {
        let text = self.store.read()?;
        Ok(Changelog::parse(&text)?)
    }

    /// Serialize the changelog and write it back
    pub fn save(&self, changelog: &Changelog) -> anyhow::Result<()> {
        self.store.write(&changelog.to_markdown())?;
        Ok(())
    }
}
