//! Output formatting utilities

use chrono::NaiveDate;
use console::{style, Style};

use herald_changelog::Category;

/// Print a success message
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Print an error message
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print an info message
pub fn info(message: &str) {
    println!("{} {}", style("→").blue(), message);
}

/// Style for items of a category in `status`
pub fn category_style(category: &Category) -> Style {
    match category {
        Category::Added => Style::new().green(),
        Category::Changed => Style::new().yellow(),
        Category::Deprecated => Style::new().dim(),
        Category::Removed => Style::new().red(),
        Category::Fixed => Style::new().blue(),
        Category::Security => Style::new().magenta(),
        Category::Custom(_) => Style::new(),
    }
}

/// Style for paths
pub fn path_style() -> Style {
    Style::new().cyan()
}

/// Describe how far `date` is from `today`: "3 days ago", "in a month"
pub fn humanize_age(date: NaiveDate, today: NaiveDate) -> String {
    let days = (today - date).num_days();
    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        -1 => "tomorrow".to_string(),
        d if d > 0 => format!("{} ago", span(d)),
        d => format!("in {}", span(-d)),
    }
}

fn span(days: i64) -> String {
    match days {
        d if d < 26 => format!("{} days", d),
        d if d < 46 => "a month".to_string(),
        d if d < 320 => format!("{} months", ((d as f64 / 30.4).round() as i64).max(2)),
        d if d < 548 => "a year".to_string(),
        d => format!("{} years", ((d as f64 / 365.25).round() as i64).max(2)),
    }
}
