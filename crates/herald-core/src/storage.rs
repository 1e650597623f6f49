//! Changelog document storage

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{ChangelogError, Result};

/// Reads and writes the changelog document at one fixed path
#[derive(Debug, Clone)]
pub struct ChangelogStore {
    path: PathBuf,
}

impl ChangelogStore {
    /// Create a store for an explicit document path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store for the configured document inside `project_dir`
    pub fn from_config(project_dir: &Path, config: &Config) -> Self {
        Self::new(project_dir.join(&config.changelog.file))
    }

    /// Path of the document
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the document file, for messages
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Check whether the document exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the whole document
    pub fn read(&self) -> Result<String> {
        debug!(path = %self.path.display(), "reading changelog");
        if !self.exists() {
            return Err(ChangelogError::NotFound(self.path.clone()).into());
        }

        std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ChangelogError::NotFound(self.path.clone()).into()
            } else {
                e.into()
            }
        })
    }

    /// Replace the document contents
    pub fn write(&self, content: &str) -> Result<()> {
        info!(path = %self.path.display(), bytes = content.len(), "writing changelog");
        std::fs::write(&self.path, content).map_err(|source| {
            ChangelogError::WriteFailed {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }

    /// Write a new document, refusing to overwrite an existing one
    pub fn create(&self, content: &str) -> Result<()> {
        if self.path.exists() {
            return Err(ChangelogError::AlreadyExists(self.path.clone()).into());
        }
        self.write(content)
    }

    /// Delete the document
    pub fn remove(&self) -> Result<()> {
        info!(path = %self.path.display(), "removing changelog");
        if !self.exists() {
            return Err(ChangelogError::NotFound(self.path.clone()).into());
        }

        std::fs::remove_file(&self.path).map_err(|source| {
            ChangelogError::RemoveFailed {
                path: self.path.clone(),
                source,
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeraldError;
    use tempfile::TempDir;

    #[test]
    fn test_read_missing_document() {
        let temp = TempDir::new().unwrap();
        let store = ChangelogStore::new(temp.path().join("CHANGELOG.md"));

        assert!(!store.exists());
        assert!(matches!(
            store.read(),
            Err(HeraldError::Changelog(ChangelogError::NotFound(_)))
        ));
    }

    #[test]
    fn test_write_then_read() {
        let temp = TempDir::new().unwrap();
        let store = ChangelogStore::from_config(temp.path(), &Config::default());

        store.write("# Changelog\n").unwrap();
        assert!(store.exists());
        assert_eq!(store.read().unwrap(), "# Changelog\n");
        assert_eq!(store.file_name(), "CHANGELOG.md");
    }

    #[test]
    fn test_create_refuses_existing() {
        let temp = TempDir::new().unwrap();
        let store = ChangelogStore::new(temp.path().join("CHANGELOG.md"));

        store.create("first\n").unwrap();
        let result = store.create("second\n");
        assert!(matches!(
            result,
            Err(HeraldError::Changelog(ChangelogError::AlreadyExists(_)))
        ));
        assert_eq!(store.read().unwrap(), "first\n");
    }

    #[test]
    fn test_write_into_missing_directory() {
        let temp = TempDir::new().unwrap();
        let store = ChangelogStore::new(temp.path().join("missing").join("CHANGELOG.md"));

        assert!(matches!(
            store.write("x"),
            Err(HeraldError::Changelog(ChangelogError::WriteFailed { .. }))
        ));
    }

    #[test]
    fn test_remove() {
        let temp = TempDir::new().unwrap();
        let store = ChangelogStore::new(temp.path().join("CHANGELOG.md"));

        assert!(matches!(
            store.remove(),
            Err(HeraldError::Changelog(ChangelogError::NotFound(_)))
        ));

        store.write("x").unwrap();
        store.remove().unwrap();
        assert!(!store.exists());
    }
}
