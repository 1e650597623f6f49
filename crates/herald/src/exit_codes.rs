//! Exit codes for the CLI

use herald_core::HeraldError;

/// Success
pub const SUCCESS: i32 = 0;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Changelog document error
pub const CHANGELOG_ERROR: i32 = 3;

/// Version error
pub const VERSION_ERROR: i32 = 4;

/// External editor error
pub const EDITOR_ERROR: i32 = 5;

/// Map a command failure to its exit code
pub fn for_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<HeraldError>() {
        Some(HeraldError::Config(_)) => CONFIG_ERROR,
        Some(HeraldError::Changelog(_)) => CHANGELOG_ERROR,
        Some(HeraldError::Version(_)) => VERSION_ERROR,
        Some(HeraldError::Editor(_)) => EDITOR_ERROR,
        Some(HeraldError::Io(_) | HeraldError::Json(_)) | None => ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_core::{ChangelogError, ConfigError, EditorError, VersionError};

    fn code_of(err: impl Into<HeraldError>) -> i32 {
        for_error(&anyhow::Error::from(err.into()))
    }

    #[test]
    fn test_domain_error_codes() {
        assert_eq!(
            code_of(ConfigError::InvalidValue {
                field: "changelog.file".to_string(),
                message: "must not be empty".to_string(),
            }),
            CONFIG_ERROR
        );
        assert_eq!(code_of(ChangelogError::NoContent), CHANGELOG_ERROR);
        assert_eq!(
            code_of(VersionError::InvalidBumpTarget("huge".to_string())),
            VERSION_ERROR
        );
        assert_eq!(code_of(EditorError::NotFound("vi".to_string())), EDITOR_ERROR);
    }

    #[test]
    fn test_general_error_codes() {
        assert_eq!(
            code_of(std::io::Error::new(std::io::ErrorKind::Other, "boom")),
            ERROR
        );
        assert_eq!(for_error(&anyhow::anyhow!("something else")), ERROR);
    }
}
