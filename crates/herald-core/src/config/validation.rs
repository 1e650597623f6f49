//! Configuration validation

use tracing::debug;

use crate::error::{ConfigError, Result};

use super::types::Config;

/// Bump kinds accepted for `versioning.default_bump`
const BUMP_KINDS: [&str; 3] = ["patch", "minor", "major"];

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    debug!("validating configuration");
    validate_paths(config)?;
    validate_editor(config)?;
    validate_versioning(config)?;
    debug!("configuration validation passed");
    Ok(())
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.into(),
    }
}

fn validate_paths(config: &Config) -> Result<()> {
    if config.changelog.file.as_os_str().is_empty() {
        return Err(invalid("changelog.file", "file cannot be empty").into());
    }

    if config.editor.scratch_file.as_os_str().is_empty() {
        return Err(invalid("editor.scratch_file", "scratch file cannot be empty").into());
    }

    if config.editor.scratch_file == config.changelog.file {
        return Err(invalid(
            "editor.scratch_file",
            "must differ from changelog.file",
        )
        .into());
    }

    Ok(())
}

fn validate_editor(config: &Config) -> Result<()> {
    if let Some(command) = &config.editor.command {
        if command.trim().is_empty() {
            return Err(invalid("editor.command", "command cannot be blank").into());
        }
    }

    Ok(())
}

fn validate_versioning(config: &Config) -> Result<()> {
    let initial = config.versioning.initial_version.as_str();
    if semver::Version::parse(initial.strip_prefix('v').unwrap_or(initial)).is_err() {
        return Err(invalid(
            "versioning.initial_version",
            format!("'{}' is not a semantic version", initial),
        )
        .into());
    }

    if !BUMP_KINDS.contains(&config.versioning.default_bump.as_str()) {
        return Err(invalid(
            "versioning.default_bump",
            format!("must be one of: {}", BUMP_KINDS.join(", ")),
        )
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_validate_default_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_changelog_file() {
        let mut config = Config::default();
        config.changelog.file = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_scratch_file_collides_with_changelog() {
        let mut config = Config::default();
        config.editor.scratch_file = PathBuf::from("CHANGELOG.md");
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_blank_editor_command() {
        let mut config = Config::default();
        config.editor.command = Some("   ".to_string());
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_initial_version_must_be_semver() {
        let mut config = Config::default();
        config.versioning.initial_version = "one".to_string();
        assert!(validate_config(&config).is_err());

        config.versioning.initial_version = "v1.0.0".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_default_bump_kind() {
        let mut config = Config::default();
        config.versioning.default_bump = "minor".to_string();
        assert!(validate_config(&config).is_ok());

        config.versioning.default_bump = "prerelease".to_string();
        assert!(validate_config(&config).is_err());
    }
}
