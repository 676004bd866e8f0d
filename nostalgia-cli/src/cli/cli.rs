use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::render::ColorMode;

use super::style::Style;

/// nostalgia: a dated journal kept in one binary file
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the data file location
    #[arg(long, short)]
    pub path: bool,
    /// Password for a locked journal (see `password` in config.toml).
    #[arg(long, env = "NOSTALGIA_PASSWORD", hide_env_values = true, global = true)]
    pub password: Option<String>,
    /// Use this data file instead of the configured one.
    #[arg(long, env = "NOSTALGIA_DATA_FILE", global = true)]
    pub data_file: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    pub color: ColorMode,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new entry dated today (e.g., `nostalgia save --weather Sunny Went to the sea.`)
    Save(SaveArgs),
    /// View every entry of a day (e.g., `nostalgia view 2024-03-01`, `nostalgia view yesterday`)
    View(ViewArgs),
    /// Prints how many records the journal holds.
    Count,
    /// Removes a torn record left at the end of the data file by an interrupted save.
    Repair,
}

#[derive(Args, Debug)]
pub struct SaveArgs {
    /// Today's weather (up to 31 bytes).
    #[arg(long, short, default_value = "")]
    pub weather: String,
    /// Entry text (up to 4095 bytes). Opens your $EDITOR when omitted.
    #[arg()]
    pub content: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ViewArgs {
    /// Day to show: `YYYY-MM-DD`, `today` or `yesterday`.
    pub date: String,
    /// Output style: "long", "short" or "raw".
    #[arg(long, short, value_enum, env = "NOSTALGIA_STYLE", default_value_t = Style::Long)]
    pub style: Style,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
