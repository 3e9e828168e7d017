mod cli;
mod input;
mod logging;

use std::process;

use anyhow::{Context, Result};
use availability_calendar::{
    parse_timezone, render_html_calendar, AvailabilitySet, CalendarConfig, CalendarDate,
    DateWindowBuilder, DEFAULT_WINDOW_DAYS,
};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{AnchorArgs, Cli, Command, OutputFormat, RenderArgs, WindowArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render(args) => render(args),
        Command::Window(args) => window(args),
    }
}

/// JSON output of `render --format json`.
#[derive(Serialize)]
struct RenderOutput<'a> {
    today: CalendarDate,
    container_id: &'a str,
    blocks: &'a [availability_calendar::VisualBlockSpec],
    rejected: &'a [String],
}

fn render(args: RenderArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => CalendarConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CalendarConfig::default(),
    };
    if let Some(days) = args.anchor.days {
        config.days = days;
    }
    if let Some(id) = &args.container_id {
        config.container_id = id.clone();
    }
    config.validate().context("invalid options")?;

    let mut raw = args.dates.clone();
    if let Some(path) = &args.dates_file {
        raw.extend(input::read_dates(path)?);
    }
    let report = AvailabilitySet::parse(&raw);
    if !report.rejected.is_empty() {
        info!(
            rejected = report.rejected.len(),
            accepted = report.set.len(),
            "ignored malformed available dates"
        );
    }

    let today = resolve_today(&args.anchor)?;
    let container = render_html_calendar(today, &report.set, &config)
        .context("failed to render calendar")?;

    match args.format {
        OutputFormat::Html => print!("{}", container.to_html()?),
        OutputFormat::Document => print!("{}", container.to_document(config.document_height)?),
        OutputFormat::Json => {
            let output = RenderOutput {
                today,
                container_id: container.id(),
                blocks: container.blocks(),
                rejected: &report.rejected,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Text => {
            for block in container.blocks() {
                println!("{} {}", block.label, block.state.as_str());
            }
        }
    }
    Ok(())
}

fn window(args: WindowArgs) -> Result<()> {
    let today = resolve_today(&args.anchor)?;
    let builder = DateWindowBuilder::new(args.anchor.days.unwrap_or(DEFAULT_WINDOW_DAYS));
    for date in &builder.build(today)? {
        println!("{date}");
    }
    Ok(())
}

/// The window's first day: `--today` if given, otherwise the current day in
/// `--timezone`.
fn resolve_today(anchor: &AnchorArgs) -> Result<CalendarDate> {
    let tz = parse_timezone(&anchor.timezone).context("invalid --timezone")?;
    match &anchor.today {
        Some(today) => CalendarDate::parse(today).context("invalid --today"),
        None => Ok(CalendarDate::in_timezone(&Utc::now(), tz)),
    }
}
