// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line entry point for the arrow simulation.
//!
//! ```text
//! arrow <MAP> [MAX_PATH_LENGTH]
//! ```
//!
//! Prints a single line with the number of targets found, or a single
//! diagnostic line when the run fails. Invoking without a map path prints
//! usage guidance and exits like a successful run; this mirrors the
//! original tool and is a documented limitation, not an oversight.

use arrow_search::{map, SearchController};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Simulate a quiver of arrows over a grid map.
#[derive(Debug, Parser)]
#[command(name = "arrow", version, about, long_about = None)]
struct Args {
    /// Path to the map file.
    map: Option<PathBuf>,

    /// Maximum path length for each arrow; omit to run unbounded.
    #[arg(value_parser = clap::value_parser!(i64).range(1..))]
    max_path_length: Option<i64>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let Some(path) = args.map else {
        println!("You must provide the name of the input file");
        return ExitCode::SUCCESS;
    };

    match run(&path, args.max_path_length) {
        Ok(targets_found) => {
            println!("Number of targets found: {targets_found}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::SUCCESS
        }
    }
}

fn run(path: &Path, max_path_length: Option<i64>) -> Result<u32, arrow_search::SearchError> {
    let mut graph = map::load(path)?;
    let mut controller = SearchController::new(&mut graph, max_path_length);
    controller.run()
}
