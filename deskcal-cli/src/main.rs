mod commands;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use deskcal_core::logging::init_logging;

use crate::session::Session;

#[derive(Parser)]
#[command(name = "deskcal")]
#[command(about = "Schedule events, birthdays and recurring reminders from the terminal")]
struct Cli {
    /// Events file to use instead of the configured one
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Alternate config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show a month grid with its events
    Month {
        /// Month to show (YYYY-MM), defaults to the current month
        month: Option<String>,

        /// Show the month after
        #[arg(long, conflicts_with = "prev")]
        next: bool,

        /// Show the month before
        #[arg(long)]
        prev: bool,
    },
    /// Schedule an event on a date
    Add {
        /// Date (YYYY-MM-DD)
        date: String,

        text: String,

        #[arg(short, long)]
        birthday: bool,

        #[arg(short, long)]
        recurring: bool,
    },
    /// Schedule a recurring event between two dates
    Repeat {
        text: String,

        /// First occurrence (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Last possible occurrence (YYYY-MM-DD)
        #[arg(short, long)]
        end: String,

        /// Days between occurrences
        #[arg(long, default_value_t = 7, allow_negative_numbers = true)]
        every: i64,
    },
    /// Delete every event on a date
    Delete {
        /// Date (YYYY-MM-DD)
        date: String,

        /// Only delete if the date's birthday flag matches
        #[arg(long)]
        birthday: Option<bool>,
    },
    /// List the events on a date
    Show {
        /// Date (YYYY-MM-DD)
        date: String,
    },
    /// List what is due today
    Today {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Save all events to another file
    Export { path: PathBuf },
    /// Replace all events with the contents of a file
    Import { path: PathBuf },
    /// Print the effective configuration
    Config {
        /// Only print the config file location
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    init_logging("warn");

    let cli = Cli::parse();
    let open = || Session::open(cli.config.as_deref(), cli.file.clone());

    match cli.command {
        Commands::Month { month, next, prev } => {
            commands::month::run(&open()?, month.as_deref(), next, prev)
        }
        Commands::Add {
            date,
            text,
            birthday,
            recurring,
        } => commands::add::run(&open()?, &date, &text, birthday, recurring),
        Commands::Repeat {
            text,
            start,
            end,
            every,
        } => commands::repeat::run(&open()?, &text, &start, &end, every),
        Commands::Delete { date, birthday } => commands::delete::run(&open()?, &date, birthday),
        Commands::Show { date } => commands::show::run(&open()?, &date),
        Commands::Today { date } => commands::today::run(&open()?, date.as_deref()),
        Commands::Export { path } => commands::export::run(&open()?, &path),
        Commands::Import { path } => commands::import::run(&open()?, &path),
        Commands::Config { path } => commands::config::run(cli.config.as_deref(), path),
    }
}
