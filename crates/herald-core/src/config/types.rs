//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::defaults::{
    DEFAULT_BUMP, DEFAULT_CHANGELOG_FILE, DEFAULT_INITIAL_VERSION, DEFAULT_SCRATCH_FILE,
};

/// Main configuration for herald
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Changelog document configuration
    pub changelog: ChangelogConfig,

    /// External editor configuration
    pub editor: EditorConfig,

    /// Versioning configuration
    pub versioning: VersioningConfig,
}

/// Changelog document configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// Changelog file path, relative to the project directory
    pub file: PathBuf,
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CHANGELOG_FILE),
        }
    }
}

/// External editor configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Editor command line; `$VISUAL` / `$EDITOR` are used when unset
    pub command: Option<String>,

    /// Scratch file handed to the editor, relative to the project directory
    pub scratch_file: PathBuf,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: None,
            scratch_file: PathBuf::from(DEFAULT_SCRATCH_FILE),
        }
    }
}

/// Versioning configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VersioningConfig {
    /// Version bumped from when the changelog has no releases
    pub initial_version: String,

    /// Bump kind used when none is given (patch, minor, major)
    pub default_bump: String,
}

impl Default for VersioningConfig {
    fn default() -> Self {
        Self {
            initial_version: DEFAULT_INITIAL_VERSION.to_string(),
            default_bump: DEFAULT_BUMP.to_string(),
        }
    }
}
