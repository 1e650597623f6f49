//! Default configuration values

/// Default configuration file name (TOML)
pub const DEFAULT_CONFIG_TOML: &str = "herald.toml";

/// Default configuration file name (YAML)
pub const DEFAULT_CONFIG_YAML: &str = "herald.yaml";

/// Default changelog document name
pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";

/// Default editor scratch file name
pub const DEFAULT_SCRATCH_FILE: &str = ".UPDATE_EDITMSG";

/// Version bumps start from here when nothing has been released yet
pub const DEFAULT_INITIAL_VERSION: &str = "0.0.0";

/// Bump applied when `bump` is called without a target
pub const DEFAULT_BUMP: &str = "patch";

/// Get list of config file names to search for, in priority order
pub fn config_file_names() -> Vec<&'static str> {
    vec![
        DEFAULT_CONFIG_TOML,
        DEFAULT_CONFIG_YAML,
        ".herald.toml",
        ".herald.yaml",
    ]
}
