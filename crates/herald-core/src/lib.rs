//! Herald Core - Shared plumbing for the herald changelog tool
//!
//! This crate provides the error taxonomy, configuration loading, and the
//! storage and editor adapters the changelog workflow is built on.

pub mod config;
pub mod editor;
pub mod error;
pub mod storage;

pub use config::Config;
pub use editor::Editor;
pub use error::{ChangelogError, ConfigError, EditorError, HeraldError, Result, VersionError};
pub use storage::ChangelogStore;
