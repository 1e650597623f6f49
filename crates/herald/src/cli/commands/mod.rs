//! CLI commands

mod bump;
mod completions;
mod copy;
mod destroy;
mod init;
mod parse;
mod status;
mod update;

pub use bump::BumpCommand;
pub use completions::CompletionsCommand;
pub use copy::CopyCommand;
pub use destroy::DestroyCommand;
pub use init::InitCommand;
pub use parse::ParseCommand;
pub use status::StatusCommand;
pub use update::UpdateCommand;
