//! Update command

use clap::{Args, ValueEnum};
use tracing::info;

use herald_changelog::{entries_from_message, ChangeKind};
use herald_core::Editor;

use crate::cli::output;
use crate::cli::{Cli, OutputFormat};

/// Record changes in the Unreleased section
#[derive(Debug, Args)]
pub struct UpdateCommand {
    /// Kind of change
    #[arg(value_enum)]
    pub kind: UpdateKind,

    /// Change item, skips the editor (repeatable)
    #[arg(short, long = "message")]
    pub messages: Vec<String>,
}

/// Kinds of change accepted on the command line
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UpdateKind {
    Add,
    Change,
    Deprecate,
    Remove,
    Fix,
    Secure,
}

impl From<UpdateKind> for ChangeKind {
    fn from(kind: UpdateKind) -> Self {
        match kind {
            UpdateKind::Add => ChangeKind::Add,
            UpdateKind::Change => ChangeKind::Change,
            UpdateKind::Deprecate => ChangeKind::Deprecate,
            UpdateKind::Remove => ChangeKind::Remove,
            UpdateKind::Fix => ChangeKind::Fix,
            UpdateKind::Secure => ChangeKind::Secure,
        }
    }
}

impl UpdateCommand {
    /// Execute the update command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        let kind = ChangeKind::from(self.kind);
        info!(kind = %kind, messages = self.messages.len(), "executing update command");
        let ctx = cli.context()?;
        let mut changelog = ctx.load()?;

        let created = changelog.ensure_unreleased();
        let items = if self.messages.is_empty() {
            let current = changelog.releases().get(1).map(|r| r.version.as_str());
            let prompt = edit_message(kind, current, created);
            let editor = Editor::from_config(&ctx.project_dir, &ctx.config.editor);
            entries_from_message(&editor.edit(&prompt)?)?
        } else {
            entries_from_message(&self.messages.join("\n"))?
        };

        let added = changelog.record(kind, &items);
        ctx.save(&changelog)?;

        let category = kind.category();
        match cli.format {
            OutputFormat::Json => {
                let output = serde_json::json!({
                    "category": category.label(),
                    "added": added,
                    "items": items,
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    let noun = if added == 1 { "item" } else { "items" };
                    output::success(&format!("Added {} {} to \"{}\"", added, noun, category));
                }
            }
        }

        Ok(())
    }
}

/// Commented prompt written into the editor scratch file
fn edit_message(kind: ChangeKind, current_version: Option<&str>, created: bool) -> String {
    let mut msg = format!(
        "\n# Please enter what you have {} in this new version. Lines\n\
         # starting with '#' will be ignored and an empty message aborts\n\
         # the update. Multiple lines will be treated as multiple {}.",
        kind.verb(),
        kind.plural()
    );

    match (current_version, created) {
        (Some(version), true) => msg.push_str(&format!(
            "\n# Currently on version {} - creating new \"Unreleased\" header.",
            version
        )),
        (Some(version), false) => msg.push_str(&format!("\n# Currently on version {}", version)),
        (None, true) => msg.push_str("\n# There was no content - creating new \"Unreleased\" header."),
        (None, false) => {}
    }

    msg.push_str("\n#");
    msg
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_message_wording() {
        let msg = edit_message(ChangeKind::Deprecate, None, false);
        assert_eq!(
            msg,
            "\n# Please enter what you have deprecated in this new version. Lines\n\
             # starting with '#' will be ignored and an empty message aborts\n\
             # the update. Multiple lines will be treated as multiple deprecations.\n#"
        );
    }

    #[test]
    fn test_edit_message_current_version() {
        let msg = edit_message(ChangeKind::Fix, Some("1.4.0"), false);
        assert!(msg.ends_with("\n# Currently on version 1.4.0\n#"));

        let msg = edit_message(ChangeKind::Fix, Some("1.4.0"), true);
        assert!(msg.ends_with(
            "\n# Currently on version 1.4.0 - creating new \"Unreleased\" header.\n#"
        ));
    }

    #[test]
    fn test_edit_message_new_header() {
        let msg = edit_message(ChangeKind::Add, None, true);
        assert!(msg.ends_with("\n# There was no content - creating new \"Unreleased\" header.\n#"));
    }

    #[test]
    fn test_prompt_is_all_comments() {
        let msg = edit_message(ChangeKind::Secure, Some("0.1.0"), true);
        assert!(entries_from_message(&msg).is_err());
    }

    #[test]
    fn test_kind_mapping() {
        assert_eq!(ChangeKind::from(UpdateKind::Secure), ChangeKind::Secure);
        assert_eq!(ChangeKind::from(UpdateKind::Change).as_str(), "change");
    }
}
