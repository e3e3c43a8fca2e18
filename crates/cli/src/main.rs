// crates/cli/src/main.rs
//! practicegrid binary.
//!
//! Reads the session and settings JSON documents from the data directory and
//! renders the practice-habit heatmap in the terminal.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use practicegrid_core::{
    default_data_dir, FileSettings, HeatmapService, JsonFileStore, month_labels,
};

mod render;

#[derive(Parser)]
#[command(
    name = "practicegrid",
    version,
    about = "Practice habit heatmap for chord drills and figure drawing"
)]
struct Cli {
    /// Data directory holding the session and settings JSON files.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the year heatmap grid (default).
    Year,
    /// Show the bucket for a single date.
    Day {
        /// Calendar date, YYYY-MM-DD.
        #[arg(long)]
        date: String,
    },
    /// Show today's bucket.
    Today,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let dir = cli
        .data_dir
        .or_else(default_data_dir)
        .context("could not determine a data directory (pass --data-dir)")?;
    tracing::debug!(dir = %dir.display(), "using data directory");

    let service = HeatmapService::new(JsonFileStore::new(&dir), FileSettings::new(&dir));

    match cli.command.unwrap_or(Command::Year) {
        Command::Year => {
            let dates = service.generate_heatmap_dates();
            let buckets = service.calculate_heatmap(None)?;
            let labels = month_labels(&dates);
            print!("{}", render::render_year(&dates, &buckets, &labels));
        }
        Command::Day { date } => {
            let bucket = service.heatmap_for_date(&date, None)?;
            println!("{}", render::format_bucket(&bucket));
        }
        Command::Today => {
            let bucket = service.today_heatmap(None)?;
            println!("{}", render::format_bucket(&bucket));
        }
    }

    Ok(())
}
