//! Interactive session: an in-memory timeframe store driven by line
//! commands, in the spirit of a tiny shell. Every validation error prints a
//! message and re-prompts; nothing is fatal. EOF on stdin ends the session.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use sync_core::{parse_local, SyncError, Timeframe, TimeframeStore, UtcOffset, DEFAULT_BUCKETS};

use crate::DATETIME_DISPLAY;

const HELP: &str = "\
Find the longest shared timeframe among several timeframes across different
UTC offsets.

Commands:
    add <id> <utc-offset> <start-date> <start-time> [<end-date>] <end-time>
            - add a timeframe (dates DD-MM-YY, times HH:MM, offset ±HH:MM).
              The end date defaults to the start date; an end time at or
              before the start time rolls over to the next day.
    remove <id>
            - remove a timeframe.

    reset   - clear all timeframes.

    run     - find the shared timeframe.
    ls      - list all the timeframes.
    vis     - visualize the timeframes.

    help    - view this description.
    exit    - exit timesync.
";

pub fn run() -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut store = TimeframeStore::new();

    println!("timesync\n");
    println!("{HELP}");

    loop {
        print!(">> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some(&action) = args.first() else { continue };

        match action {
            "add" => cmd_add(&mut store, &args[1..], &mut lines)?,
            "remove" => cmd_remove(&mut store, &args[1..]),
            "reset" => {
                let prompt =
                    "Are you sure you want to reset this session? This will clear all stored timeframes.";
                if confirm(prompt, &mut lines)? {
                    store.reset();
                    println!("Removed all timeframes.");
                }
            }
            "run" | "find" | "sync" => cmd_run(&store),
            "ls" | "list" => cmd_ls(&store),
            "vis" => cmd_vis(&store),
            "help" => println!("{HELP}"),
            "exit" | "quit" => {
                if confirm("Are you sure you want to exit timesync?", &mut lines)? {
                    break;
                }
            }
            _ => println!("Invalid command."),
        }
    }

    Ok(())
}

/// Prompt `[N/y]` and read one line; anything but an explicit yes is a no.
fn confirm<I>(prompt: &str, lines: &mut I) -> Result<bool>
where
    I: Iterator<Item = io::Result<String>>,
{
    println!("{prompt} [N/y]");
    print!(">> ");
    io::stdout().flush()?;

    match lines.next() {
        Some(line) => {
            let line = line?;
            Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
        }
        None => Ok(false),
    }
}

fn cmd_add<I>(store: &mut TimeframeStore, args: &[&str], lines: &mut I) -> Result<()>
where
    I: Iterator<Item = io::Result<String>>,
{
    if !(5..=6).contains(&args.len()) {
        println!("add: Expected 5 or 6 arguments but found {}.", args.len());
        println!("     Required: id, utc-offset, start-date, start-time, [end-date,] end-time");
        return Ok(());
    }

    let id = args[0];
    let offset: UtcOffset = match args[1].parse() {
        Ok(offset) => offset,
        Err(err) => {
            println!("add: {err}");
            return Ok(());
        }
    };
    let start = match parse_local(args[2], args[3]) {
        Ok(start) => start,
        Err(err) => {
            println!("add: start-time: {err}");
            return Ok(());
        }
    };
    // The end date defaults to the start date.
    let (end_date, end_time) = if args.len() == 6 {
        (args[4], args[5])
    } else {
        (args[2], args[4])
    };
    let end = match parse_local(end_date, end_time) {
        Ok(end) => end,
        Err(err) => {
            println!("add: end-time: {err}");
            return Ok(());
        }
    };

    let frame = match Timeframe::new(offset, start, end) {
        Ok(frame) => frame,
        Err(err) => {
            println!("add: {err}");
            return Ok(());
        }
    };

    match store.add(id, frame.clone()) {
        Ok(()) => println!("Timeframe added."),
        Err(SyncError::DuplicateId(id)) => {
            println!("A timeframe with ID \"{id}\" already exists.");
            let prompt = format!("Do you wish to overwrite the existing timeframe \"{id}\"?");
            if confirm(&prompt, lines)? {
                store.replace(id, frame);
                println!("Timeframe overwritten.");
            } else {
                println!("Action aborted. Timeframe entry was not overwritten.");
            }
        }
        Err(err) => println!("add: {err}"),
    }

    Ok(())
}

fn cmd_remove(store: &mut TimeframeStore, args: &[&str]) {
    let Some(&id) = args.first() else {
        println!("remove: Expected 1 argument \"timeframe-id\" but found 0.");
        return;
    };
    match store.remove(id) {
        Ok(_) => println!("Timeframe \"{id}\" removed."),
        Err(err) => println!("remove: {err}"),
    }
}

fn cmd_run(store: &TimeframeStore) {
    match store.shared_window() {
        Ok(Some(window)) => println!(
            "Shared timeframe from {} to {} UTC+00:00 ({}h {:02}m).",
            window.start.format(DATETIME_DISPLAY),
            window.end.format(DATETIME_DISPLAY),
            window.duration_minutes / 60,
            window.duration_minutes % 60,
        ),
        Ok(None) => println!("No shared timeframe exists among the timeframes provided."),
        Err(err) => println!("run: {err}"),
    }
}

fn cmd_ls(store: &TimeframeStore) {
    if store.is_empty() {
        println!("No timeframes stored.");
        return;
    }

    let header = ["ID", "Offset", "Local start", "Local end", "UTC start", "UTC end"];
    let rows: Vec<[String; 6]> = store
        .entries()
        .iter()
        .map(|entry| {
            let (local_start, local_end) = entry.frame.local_bounds();
            let (utc_start, utc_end) = entry.frame.utc_bounds();
            [
                entry.id.clone(),
                entry.frame.offset().to_string(),
                local_start.format(DATETIME_DISPLAY).to_string(),
                local_end.format(DATETIME_DISPLAY).to_string(),
                utc_start.format(DATETIME_DISPLAY).to_string(),
                utc_end.format(DATETIME_DISPLAY).to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 6] = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    print_table_row(&header.map(String::from), &widths);
    for row in &rows {
        print_table_row(row, &widths);
    }
}

fn print_table_row(cells: &[String; 6], widths: &[usize; 6]) {
    let line = cells
        .iter()
        .zip(*widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    println!("{}", line.trim_end());
}

fn cmd_vis(store: &TimeframeStore) {
    let rows = store.coverage_rows(DEFAULT_BUCKETS);
    if rows.is_empty() {
        println!("No timeframes stored.");
        return;
    }

    let id_width = rows.iter().map(|row| row.id.len()).max().unwrap_or(0);
    for row in rows {
        let cells: String = row
            .cells
            .iter()
            .map(|&inside| if inside { '#' } else { '.' })
            .collect();
        println!("{:<id_width$}  {cells}", row.id);
    }
}
