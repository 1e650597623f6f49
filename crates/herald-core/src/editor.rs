//! External editor sessions
//!
//! Opens a scratch file in the user's editor, blocks until the editor exits
//! and hands back whatever was saved. The scratch file never outlives the
//! session.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info, warn};

use crate::config::EditorConfig;
use crate::error::{EditorError, Result};

/// Editor used when neither config nor environment names one
#[cfg(windows)]
pub const FALLBACK_EDITOR: &str = "notepad";

/// Editor used when neither config nor environment names one
#[cfg(not(windows))]
pub const FALLBACK_EDITOR: &str = "vi";

/// A configured external editor bound to a scratch file
#[derive(Debug, Clone)]
pub struct Editor {
    command: String,
    scratch_file: PathBuf,
}

impl Editor {
    /// Create an editor with an explicit command line and scratch path
    pub fn new(command: impl Into<String>, scratch_file: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            scratch_file: scratch_file.into(),
        }
    }

    /// Create an editor from configuration, consulting `$VISUAL` and `$EDITOR`
    pub fn from_config(project_dir: &Path, config: &EditorConfig) -> Self {
        let command = resolve_command(config.command.as_deref(), |key| std::env::var(key).ok());
        Self::new(command, project_dir.join(&config.scratch_file))
    }

    /// Open `initial` in the editor and return the saved text
    pub fn edit(&self, initial: &str) -> Result<String> {
        info!(command = %self.command, scratch = %self.scratch_file.display(), "opening editor");

        let program = self
            .command
            .split_whitespace()
            .next()
            .ok_or_else(|| EditorError::NotFound(self.command.clone()))?;
        which::which(program).map_err(|_| EditorError::NotFound(program.to_string()))?;

        std::fs::write(&self.scratch_file, initial).map_err(EditorError::Io)?;
        let _guard = ScratchGuard(&self.scratch_file);

        let status = self
            .shell_command()
            .status()
            .map_err(|source| EditorError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(EditorError::Failed {
                command: self.command.clone(),
                code: status.code(),
            }
            .into());
        }

        let contents = std::fs::read_to_string(&self.scratch_file).map_err(EditorError::Io)?;
        debug!(bytes = contents.len(), "editor session finished");
        Ok(contents)
    }

    #[cfg(not(windows))]
    fn shell_command(&self) -> Command {
        let mut cmd = Command::new("sh");
        cmd.arg("-c")
            .arg(format!("{} \"$@\"", self.command))
            .arg("herald")
            .arg(&self.scratch_file);
        cmd
    }

    #[cfg(windows)]
    fn shell_command(&self) -> Command {
        let mut cmd = Command::new("cmd");
        cmd.arg("/C")
            .arg(format!("{} \"{}\"", self.command, self.scratch_file.display()));
        cmd
    }
}

/// Pick the editor command: config, then `$VISUAL`, then `$EDITOR`, then the fallback
pub fn resolve_command<F>(configured: Option<&str>, env: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |c: &String| !c.trim().is_empty();
    configured
        .map(str::to_string)
        .filter(non_blank)
        .or_else(|| env("VISUAL").filter(non_blank))
        .or_else(|| env("EDITOR").filter(non_blank))
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Removes the scratch file when the session ends, however it ends
struct ScratchGuard<'a>(&'a Path);

impl Drop for ScratchGuard<'_> {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(self.0) {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %self.0.display(), error = %e, "could not remove editor scratch file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HeraldError;
    use tempfile::TempDir;

    fn env_with<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        }
    }

    #[test]
    fn test_resolve_prefers_config() {
        let env = env_with(&[("VISUAL", "code --wait"), ("EDITOR", "nano")]);
        assert_eq!(resolve_command(Some("hx"), &env), "hx");
    }

    #[test]
    fn test_resolve_visual_then_editor() {
        let env = env_with(&[("VISUAL", "code --wait"), ("EDITOR", "nano")]);
        assert_eq!(resolve_command(None, &env), "code --wait");

        let env = env_with(&[("EDITOR", "nano")]);
        assert_eq!(resolve_command(None, &env), "nano");

        let env = env_with(&[("VISUAL", " "), ("EDITOR", "nano")]);
        assert_eq!(resolve_command(None, &env), "nano");
    }

    #[test]
    fn test_resolve_fallback() {
        let env = env_with(&[]);
        assert_eq!(resolve_command(None, &env), FALLBACK_EDITOR);
    }

    #[test]
    fn test_missing_editor_program() {
        let temp = TempDir::new().unwrap();
        let scratch = temp.path().join(".UPDATE_EDITMSG");
        let editor = Editor::new("definitely-not-an-editor-3f9a", &scratch);

        let result = editor.edit("# hello");
        assert!(matches!(
            result,
            Err(HeraldError::Editor(EditorError::NotFound(_)))
        ));
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_returns_saved_text_and_cleans_up() {
        let temp = TempDir::new().unwrap();
        let source = temp.path().join("message.txt");
        std::fs::write(&source, "Added a thing\n").unwrap();
        let scratch = temp.path().join(".UPDATE_EDITMSG");

        // `cp <source> <scratch>` stands in for a user saving the file
        let editor = Editor::new(format!("cp {}", source.display()), &scratch);
        let contents = editor.edit("# prompt\n").unwrap();

        assert_eq!(contents, "Added a thing\n");
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_edit_unchanged_file() {
        let temp = TempDir::new().unwrap();
        let scratch = temp.path().join(".UPDATE_EDITMSG");

        let editor = Editor::new("true", &scratch);
        let contents = editor.edit("# untouched\n").unwrap();

        assert_eq!(contents, "# untouched\n");
        assert!(!scratch.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_editor_still_cleans_up() {
        let temp = TempDir::new().unwrap();
        let scratch = temp.path().join(".UPDATE_EDITMSG");

        let editor = Editor::new("false", &scratch);
        let result = editor.edit("# prompt\n");

        assert!(matches!(
            result,
            Err(HeraldError::Editor(EditorError::Failed { .. }))
        ));
        assert!(!scratch.exists());
    }
}
