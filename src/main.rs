mod birthdays;
mod calendar;
mod cli;
mod error;
mod input;
mod render;
mod types;

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

use crate::birthdays::birthdays_per_week;
use crate::calendar::resolve_today;
use crate::cli::Cli;
use crate::input::load_people;
use crate::render::{render_html, render_json, render_markdown, render_text};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let today = resolve_today(cli.date.as_deref(), cli.sample, cli.tz.as_deref())?;
    let people = load_people(cli.input.as_deref())?;

    if cli.list_people {
        let output = serde_json::to_string_pretty(&people)?;
        return write_output(cli.output.as_deref(), &output);
    }

    let days = birthdays_per_week(&people, today);

    let output = match cli.format.as_str() {
        "text" => render_text(&days),
        "json" => render_json(&days)?,
        "md" => render_markdown(&days, today),
        "html" => render_html(&days, today),
        _ => return Err("Invalid format. Use: text, json, md, html".into()),
    };

    write_output(cli.output.as_deref(), &output)
}

/// Diagnostics go to stderr; `RUST_LOG` overrides the level picked by `--verbose`
fn init_tracing(verbose: bool) {
    let default = if verbose { "birthday_window=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn write_output(path: Option<&std::path::Path>, output: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(out_path) = path {
        fs::write(out_path, output)?;
    } else {
        io::stdout().write_all(output.as_bytes())?;
    }
    Ok(())
}
