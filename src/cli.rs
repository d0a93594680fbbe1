use chrono::NaiveDate;
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for birthday-window
#[derive(Parser)]
#[command(name = "birthday-window")]
#[command(about = "List birthdays of the upcoming week, weekend ones congratulated on Monday")]
#[command(version)]
pub struct Cli {
    /// File with people: JSON array, JSON lines or record lines (stdin if not specified)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD format), today if not specified
    #[arg(long, value_parser = validate_date, conflicts_with = "sample")]
    pub date: Option<String>,

    /// Use one of the built-in sample reference dates (0-4)
    #[arg(long)]
    pub sample: Option<usize>,

    /// Timezone for today's date (IANA timezone, e.g., "Europe/Kyiv"), local if not specified
    #[arg(long)]
    pub tz: Option<String>,

    /// Output format: text, json, md, html
    #[arg(long, default_value = "text", value_parser = ["text", "json", "md", "html"])]
    pub format: String,

    /// Output file path (stdout if not specified)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print how every birthday in the window was placed (to stderr)
    #[arg(long, short)]
    pub verbose: bool,

    /// Print the loaded people and exit
    #[arg(long)]
    pub list_people: bool,
}

/// Validate date format (YYYY-MM-DD)
fn validate_date(s: &str) -> Result<String, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map(|_| s.to_string())
        .map_err(|e| format!("Invalid date '{s}': {e}. Use YYYY-MM-DD format"))
}
