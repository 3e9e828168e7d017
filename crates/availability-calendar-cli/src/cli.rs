use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Availability calendar renderer.
#[derive(Parser)]
#[command(
    name = "availcal",
    version,
    about = "Render a short-range availability calendar from a list of bookable dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the calendar for the given available dates.
    Render(RenderArgs),
    /// Print the dates of the window, one per line.
    Window(WindowArgs),
}

/// Options that pick the window's first day and length.
#[derive(clap::Args)]
pub struct AnchorArgs {
    /// First day of the window (YYYY-MM-DD). Defaults to today in --timezone.
    #[arg(long)]
    pub today: Option<String>,

    /// IANA timezone used to decide what "today" is.
    #[arg(long, default_value = "UTC")]
    pub timezone: String,

    /// Window length in days; overrides the config file.
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,
}

#[derive(clap::Args)]
pub struct RenderArgs {
    #[command(flatten)]
    pub anchor: AnchorArgs,

    /// Available dates (YYYY-MM-DD). Malformed entries are ignored.
    pub dates: Vec<String>,

    /// Read more available dates from a file ("-" for stdin): a JSON array of
    /// strings, or dates separated by whitespace or commas.
    #[arg(long)]
    pub dates_file: Option<PathBuf>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html)]
    pub format: OutputFormat,

    /// Element id of the calendar container; overrides the config file.
    #[arg(long)]
    pub container_id: Option<String>,

    /// Path to a JSON configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct WindowArgs {
    #[command(flatten)]
    pub anchor: AnchorArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// HTML fragment: the container and its day blocks.
    Html,
    /// Standalone HTML page embedding the fragment.
    Document,
    /// Block list as JSON.
    Json,
    /// One "date state" line per day.
    Text,
}
