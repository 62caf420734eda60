// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

use arrow_search::{map, CellGraph, SearchController};

/// Parse an inline map string, panicking on malformed test data.
pub fn graph(text: &str) -> CellGraph {
    map::parse(text).unwrap()
}

/// Everything a scenario needs to assert about one finished run.
pub struct RunReport {
    pub targets_found: u32,
    pub arrows_remaining: u32,
    pub stack_len: usize,
    pub trace: Vec<String>,
}

/// Run a whole simulation over an inline map.
pub fn run_map(text: &str, max_path_length: Option<i64>) -> RunReport {
    let mut graph = graph(text);
    let mut controller = SearchController::new(&mut graph, max_path_length);
    let targets_found = controller.run().unwrap();
    RunReport {
        targets_found,
        arrows_remaining: controller.arrows_remaining(),
        stack_len: controller.stack_len(),
        trace: controller.trace().tokens().to_vec(),
    }
}
