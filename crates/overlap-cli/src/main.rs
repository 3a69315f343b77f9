//! `overlap` CLI — compute shared-travel recommendations from a snapshot file.
//!
//! ## Usage
//!
//! ```sh
//! # Best window of March 2026 for the calendar view
//! overlap -i snapshot.json month --year 2026 --month 3
//!
//! # Matches for every destination, flagged for the viewer
//! overlap -i snapshot.json --viewer Alice destinations
//!
//! # Top windows across 2026 and 2027
//! overlap -i snapshot.json top --years 2026,2027 -k 6
//!
//! # Per-month activity
//! cat snapshot.json | overlap summary
//! ```
//!
//! The snapshot is a JSON object with an `availability` map
//! (`{"2026-03-10": ["Alice", "Bob"]}`) and a `destinations` list.

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use overlap_engine::date_index;
use overlap_engine::view::{CalendarGrid, DestinationView, RecommendationView};
use overlap_engine::{EngineConfig, Snapshot};

#[derive(Parser)]
#[command(
    name = "overlap",
    version,
    about = "Find calendar windows where enough people are free together"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Snapshot file (reads from stdin if omitted)
    #[arg(short, long, global = true)]
    input: Option<String>,

    /// JSON engine config overriding the built-in presets
    #[arg(long, global = true)]
    config: Option<String>,

    /// Participant viewing the results, used for "this is you" flags
    #[arg(long, global = true)]
    viewer: Option<String>,

    /// Log engine decisions to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Best window of one month, with the calendar grid
    Month {
        #[arg(long)]
        year: i32,
        /// Month number, 1-12
        #[arg(long)]
        month: u32,
    },
    /// Best window per preferred month of every destination
    Destinations {
        /// Year for destinations stored without one (defaults to this year)
        #[arg(long)]
        fallback_year: Option<i32>,
    },
    /// Highest-scoring windows across whole years
    Top {
        /// Comma-separated years (defaults to this year and next)
        #[arg(long, value_delimiter = ',')]
        years: Vec<i32>,
        /// Number of windows to return (overrides the config)
        #[arg(short)]
        k: Option<usize>,
    },
    /// Free days and busiest day per month
    Summary,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_deref())?;
    let this_year = chrono::Local::now().year();
    let viewer = cli.viewer.as_deref();

    match cli.command {
        Commands::Month { year, month } => {
            date_index::validate_year(year)?;
            let month_index = date_index::month_index_from_number(month)?;
            let snapshot = read_snapshot(cli.input.as_deref(), this_year)?;
            let best = overlap_engine::month_recommendation(
                &snapshot.availability,
                year,
                month_index,
                &config,
            );
            let grid = CalendarGrid::new(
                &snapshot.availability,
                year,
                month_index,
                best.as_ref(),
                viewer,
            );
            print_json(&grid)?;
        }
        Commands::Destinations { fallback_year } => {
            let snapshot = read_snapshot(cli.input.as_deref(), fallback_year.unwrap_or(this_year))?;
            let views: Vec<DestinationView> = snapshot
                .destinations_newest_first()
                .into_iter()
                .map(|destination| {
                    let matches = overlap_engine::destination_recommendations(
                        &snapshot.availability,
                        destination,
                        &config,
                    );
                    DestinationView::new(destination, &matches, viewer)
                })
                .collect();
            print_json(&views)?;
        }
        Commands::Top { years, k } => {
            if let Some(k) = k {
                config.global.selection = overlap_engine::Selection::TopK { k };
                config.validate()?;
            }
            let years = if years.is_empty() {
                vec![this_year, this_year + 1]
            } else {
                years
                    .into_iter()
                    .map(date_index::validate_year)
                    .collect::<Result<Vec<_>, _>>()?
            };
            let snapshot = read_snapshot(cli.input.as_deref(), this_year)?;
            let views: Vec<RecommendationView> =
                overlap_engine::global_top_windows(&snapshot.availability, &years, &config)
                    .iter()
                    .map(|window| RecommendationView::new(window, viewer))
                    .collect();
            print_json(&views)?;
        }
        Commands::Summary => {
            let snapshot = read_snapshot(cli.input.as_deref(), this_year)?;
            print_json(&overlap_engine::month_summary(&snapshot.availability))?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<&str>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {}", path))?;
            let config = EngineConfig::from_json_str(&json)
                .with_context(|| format!("Invalid config: {}", path))?;
            tracing::debug!(path, window_size = config.window_size, "loaded engine config");
            Ok(config)
        }
        None => Ok(EngineConfig::default()),
    }
}

fn read_snapshot(path: Option<&str>, fallback_year: i32) -> Result<Snapshot> {
    let json = read_input(path)?;
    Snapshot::from_json_str(&json, fallback_year).context("Failed to parse snapshot")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{}", pretty);
    Ok(())
}
