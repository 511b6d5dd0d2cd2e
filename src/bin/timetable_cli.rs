//! CLI tool for timetable-layout - lays out a schedule and outputs JSON
//!
//! Usage:
//!   timetable_cli <schedule.json>              # Output JSON to stdout
//!   timetable_cli <schedule.json> -o out.json  # Output JSON to file
//!
//! Set `RUST_LOG=timetable_layout=debug` to trace layout passes.

#![allow(clippy::exit)]
#![allow(clippy::indexing_slicing)]

use std::env;
use std::fs;
use std::io::{self, Write};
use timetable_layout::{layout_schedule, Schedule};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: timetable_cli <schedule.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    let schedule = match Schedule::from_path(input_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error loading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let result = match layout_schedule(&schedule) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error laying out schedule: {}", e);
            std::process::exit(1);
        }
    };
    tracing::info!(items = result.items.len(), "laid out {}", input_path);

    let output = match serde_json::to_string_pretty(&result) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &output) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            let mut stdout = io::stdout();
            if let Err(e) = writeln!(stdout, "{output}") {
                eprintln!("Error writing output: {}", e);
                std::process::exit(1);
            }
        }
    }
}
