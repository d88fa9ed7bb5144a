//! `timesync` CLI — find the longest shared timeframe across UTC offsets.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive session (add / remove / run / ls / vis / reset / exit)
//! timesync
//!
//! # Batch mode: read timeframes from a JSON file, print the shared window
//! timesync solve -i frames.json
//!
//! # Batch mode with JSON output (stdin → stdout)
//! cat frames.json | timesync solve --json
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};
use sync_core::{Timeframe, UtcOffset};

mod repl;

/// Display format for date-times, matching the interactive input format.
pub(crate) const DATETIME_DISPLAY: &str = "%d-%m-%y %H:%M";

#[derive(Parser)]
#[command(
    name = "timesync",
    version,
    about = "Find the longest shared timeframe across UTC offsets"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the shared window from a JSON array of timeframe records
    Solve {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// One record in the `solve` input: local bounds stated in a fixed offset.
///
/// ```json
/// {"id": "alice", "utc_offset": "+02:00",
///  "start": "2026-03-16T12:00:00", "end": "2026-03-16T20:00:00"}
/// ```
#[derive(Deserialize)]
struct FrameRecord {
    id: String,
    utc_offset: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Solve { input, json }) => solve(input.as_deref(), json),
        None => repl::run(),
    }
}

fn solve(input: Option<&str>, json: bool) -> Result<()> {
    let raw = read_input(input)?;
    let records: Vec<FrameRecord> =
        serde_json::from_str(&raw).context("Failed to parse timeframe records")?;

    let mut frames = Vec::with_capacity(records.len());
    for record in &records {
        let offset: UtcOffset = record
            .utc_offset
            .parse()
            .with_context(|| format!("Timeframe \"{}\"", record.id))?;
        let frame = Timeframe::new(offset, record.start, record.end)
            .with_context(|| format!("Timeframe \"{}\"", record.id))?;
        frames.push(frame);
    }

    match sync_core::shared_window(&frames)? {
        Some(window) if json => println!("{}", serde_json::to_string_pretty(&window)?),
        Some(window) => println!(
            "Shared timeframe from {} to {} UTC+00:00 ({}h {:02}m).",
            window.start.format(DATETIME_DISPLAY),
            window.end.format(DATETIME_DISPLAY),
            window.duration_minutes / 60,
            window.duration_minutes % 60,
        ),
        None if json => println!("null"),
        None => println!("No shared timeframe exists among the timeframes provided."),
    }

    Ok(())
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
