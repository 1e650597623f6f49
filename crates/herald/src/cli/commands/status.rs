//! Status command

use chrono::{NaiveDate, Utc};
use clap::Args;
use tracing::info;

use herald_changelog::Summary;

use crate::cli::output::{category_style, humanize_age};
use crate::cli::{Cli, OutputFormat};

/// Show released versions and unreleased changes
#[derive(Debug, Args)]
pub struct StatusCommand {}

impl StatusCommand {
    /// Execute the status command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<()> {
        info!("executing status command");
        let ctx = cli.context()?;
        let summary = ctx.load()?.summary();

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            }
            OutputFormat::Text => {
                println!("{}", render(&summary, Utc::now().date_naive()));
            }
        }

        Ok(())
    }
}

fn render(summary: &Summary, today: NaiveDate) -> String {
    let mut out = String::new();

    match &summary.latest {
        Some(latest) => {
            out.push_str(&released_line(summary.released_count));
            let age = latest
                .date
                .map(|date| humanize_age(date, today))
                .unwrap_or_else(|| "an unknown date".to_string());
            out.push_str(&format!(
                "\nThe most recent of these being v{} from {}",
                latest.version, age
            ));
        }
        None => out.push_str("The changelog has no releases to show"),
    }

    let Some(content) = &summary.unreleased else {
        return out;
    };

    if content.is_empty() {
        out.push_str("\nThere is no content in \"Unreleased\" to show");
        return out;
    }

    out.push_str("\n\nUnreleased content:\n");
    out.push_str("  (use \"herald bump [version | patch | minor | major]\" to release)\n");
    for (category, items) in content.ordered() {
        let mut block = format!("\n  {}:", category.label());
        for item in items {
            block.push_str(&format!("\n    - {}", item));
        }
        if !items.is_empty() {
            block.push('\n');
        }
        out.push_str(&category_style(&category).apply_to(block).to_string());
    }

    out.trim_end().to_string()
}

fn released_line(count: usize) -> String {
    if count == 1 {
        "There has been 1 version released".to_string()
    } else {
        format!("There have been {} versions released", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use herald_changelog::{Category, Changelog, Release};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn plain(text: String) -> String {
        console::strip_ansi_codes(&text).to_string()
    }

    #[test]
    fn test_status_with_unreleased_content() {
        let changelog = Changelog::new(vec![
            Release::unreleased()
                .with_item(Category::Fixed, "Crash")
                .with_item(Category::Added, "Dark mode"),
            Release::new("1.2.0", date(2024, 5, 30)),
        ]);

        let text = plain(render(&changelog.summary(), date(2024, 6, 1)));
        assert_eq!(
            text,
            "There has been 1 version released\n\
             The most recent of these being v1.2.0 from 2 days ago\n\n\
             Unreleased content:\n  \
             (use \"herald bump [version | patch | minor | major]\" to release)\n\n  \
             Added:\n    - Dark mode\n\n  \
             Fixed:\n    - Crash"
        );
    }

    #[test]
    fn test_status_empty_unreleased() {
        let changelog = Changelog::new(vec![Release::unreleased()]);
        let text = plain(render(&changelog.summary(), date(2024, 6, 1)));
        assert_eq!(
            text,
            "The changelog has no releases to show\nThere is no content in \"Unreleased\" to show"
        );
    }

    #[test]
    fn test_status_released_head() {
        let changelog = Changelog::new(vec![
            Release::new("2.0.0", date(2024, 6, 1)),
            Release::new("1.0.0", date(2023, 1, 1)),
        ]);
        let text = plain(render(&changelog.summary(), date(2024, 6, 1)));
        assert_eq!(
            text,
            "There have been 2 versions released\nThe most recent of these being v2.0.0 from today"
        );
    }

    #[test]
    fn test_status_empty_changelog() {
        let text = plain(render(&Changelog::default().summary(), date(2024, 6, 1)));
        assert_eq!(text, "The changelog has no releases to show");
    }
}
