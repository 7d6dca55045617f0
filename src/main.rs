//! symptom-grid: track pain, numbness and stiffness per body area and time
//! of day, persisted as a single local JSON document, with CSV export.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod config;
mod grid;

use grid::model::{BodyArea, Stiffness, TimeSlot};
use grid::store::{FileBackend, LogStore};

#[derive(Parser)]
#[command(name = "symptom-grid")]
#[command(about = "Personal symptom-tracking grid", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the symptom grid for a day
    Show {
        /// Day to show, yyyy-MM-dd (defaults to today)
        #[arg(short, long, value_parser = grid::date::parse_date)]
        date: Option<NaiveDate>,
    },

    /// Edit one cell of the grid
    Set {
        /// Body area: Hands, Elbows, Shoulders, Knees or Ankles
        area: BodyArea,

        /// Time slot: Morning, Midday, Evening or Night
        slot: TimeSlot,

        /// Pain level 0-10 (values above 10 are clamped)
        #[arg(short, long)]
        pain: Option<u8>,

        /// Mark the cell as numb
        #[arg(long, conflicts_with = "no_numbness")]
        numbness: bool,

        /// Clear the numbness mark
        #[arg(long)]
        no_numbness: bool,

        /// Stiffness: None, Mild, Moderate or Severe
        #[arg(short, long)]
        stiffness: Option<Stiffness>,

        /// Free-text notes
        #[arg(short, long)]
        notes: Option<String>,

        /// Day to edit, yyyy-MM-dd (defaults to today)
        #[arg(short, long, value_parser = grid::date::parse_date)]
        date: Option<NaiveDate>,
    },

    /// Reset a day back to all-default cells
    Reset {
        /// Day to reset, yyyy-MM-dd (defaults to today)
        #[arg(short, long, value_parser = grid::date::parse_date)]
        date: Option<NaiveDate>,

        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Export a day's grid as CSV
    Export {
        /// Day to export, yyyy-MM-dd (defaults to today)
        #[arg(short, long, value_parser = grid::date::parse_date)]
        date: Option<NaiveDate>,

        /// Directory for the CSV file (defaults to the current directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List all recorded days
    List,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = config::log_file()?;
    let mut store = LogStore::open(FileBackend::new(log_file));

    match cli.command {
        Commands::Show { date } => {
            let output = commands::show::execute(&mut store, resolve(date))?;
            println!("{}", output);
        }

        Commands::Set {
            area,
            slot,
            pain,
            numbness,
            no_numbness,
            stiffness,
            notes,
            date,
        } => {
            let update = commands::set::CellUpdate {
                pain,
                numbness: if numbness {
                    Some(true)
                } else if no_numbness {
                    Some(false)
                } else {
                    None
                },
                stiffness,
                notes,
            };
            commands::set::execute(&mut store, area, slot, resolve(date), &update)?;
        }

        Commands::Reset { date, yes } => {
            commands::reset::execute(&mut store, resolve(date), yes)?;
        }

        Commands::Export { date, output } => {
            let output_dir = match output {
                Some(dir) => dir,
                None => std::env::current_dir().context("Failed to get current directory")?,
            };
            commands::export::execute(&mut store, resolve(date), &output_dir)?;
        }

        Commands::List => {
            let output = commands::list::execute(&store)?;
            println!("{}", output);
        }
    }

    Ok(())
}

/// Fall back to today for commands invoked without an explicit date
fn resolve(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(grid::date::today)
}
