//! Error types for herald

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using HeraldError
pub type Result<T> = std::result::Result<T, HeraldError>;

/// Main error type for herald operations
#[derive(Debug, Error)]
pub enum HeraldError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Changelog document errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// External editor errors
    #[error(transparent)]
    Editor(#[from] EditorError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Changelog document errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// No document where one is expected
    #[error("Could not find a changelog at {0}")]
    NotFound(PathBuf),

    /// `init` over an existing document
    #[error("There is already a changelog at {0}")]
    AlreadyExists(PathBuf),

    /// Failed to write the document
    #[error("Could not write to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to remove the document
    #[error("Could not remove {path}: {source}")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Bump attempted with nothing unreleased
    #[error("No unreleased changelog content available to perform version bump")]
    NoContent,

    /// Editor session produced nothing usable
    #[error("No message was supplied, so the update was aborted")]
    EmptyUpdate,

    /// The document doesn't follow the supported format
    #[error("Malformed changelog at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    /// Declared but unsupported operation
    #[error("Feature not yet implemented: {0}")]
    NotImplemented(String),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Failed to parse version
    #[error("Failed to parse version '{0}': {1}")]
    ParseFailed(String, String),

    /// Neither a version nor a bump kind
    #[error("\"{0}\" is not a valid version number or update type")]
    InvalidBumpTarget(String),
}

/// External editor errors
#[derive(Debug, Error)]
pub enum EditorError {
    /// Editor program is not on PATH
    #[error("Editor '{0}' could not be found")]
    NotFound(String),

    /// Editor process could not be started
    #[error("Could not start editor '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Editor exited unsuccessfully
    #[error("Editor '{command}' exited with status {}", exit_status(.code))]
    Failed { command: String, code: Option<i32> },

    /// Scratch file IO error
    #[error("IO error on editor scratch file: {0}")]
    Io(#[from] std::io::Error),
}

fn exit_status(code: &Option<i32>) -> String {
    code.map_or_else(|| "unknown".to_string(), |c| c.to_string())
}

impl ChangelogError {
    /// Create a malformed-document error for a 1-based line number
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            line,
            reason: reason.into(),
        }
    }
}
