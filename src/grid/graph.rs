// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The cell graph: the whole map as the search core sees it.
//!
//! The graph is read-only to the movement policy. Kinds and neighbour slots
//! never change after construction; the visit flags are the only mutable
//! state, and the two `mark_*` methods are the only mutators.

use crate::errors::SearchError;
use crate::grid::{Cell, CellId, CellKind, Direction, VisitState};

/// A grid map: cells, their fixed neighbour relation, and visit flags.
///
/// Constructed by the map parser (or test helpers going through it); the
/// parser guarantees exactly one `Start` cell.
#[derive(Debug, Clone)]
pub struct CellGraph {
    cells: Vec<Cell>,
    start: CellId,
    quiver_size: u32,
}

impl CellGraph {
    pub(crate) fn from_parts(cells: Vec<Cell>, start: CellId, quiver_size: u32) -> Self {
        debug_assert_eq!(cells[start.as_usize()].kind(), CellKind::Start);
        Self {
            cells,
            start,
            quiver_size,
        }
    }

    /// The launch cell.
    pub fn start(&self) -> CellId {
        self.start
    }

    /// Total number of arrows available for a run.
    pub fn quiver_size(&self) -> u32 {
        self.quiver_size
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.as_usize()]
    }

    pub fn kind(&self, id: CellId) -> CellKind {
        self.cell(id).kind()
    }

    /// The neighbour of `id` in the given slot, if any.
    pub fn neighbour(&self, id: CellId, direction: Direction) -> Option<CellId> {
        self.cell(id).neighbour(direction)
    }

    /// The neighbour of `id` by raw slot index.
    ///
    /// Anything outside 0..4 is rejected with `IndexOutOfRange`. Internal
    /// callers carry a typed [`Direction`] instead; this is the boundary
    /// for code that works with bare slot numbers.
    pub fn neighbour_at(&self, id: CellId, index: usize) -> Result<Option<CellId>, SearchError> {
        Ok(self.neighbour(id, Direction::from_index(index)?))
    }

    pub fn is_marked_in_stack(&self, id: CellId) -> bool {
        self.cell(id).is_marked_in_stack()
    }

    /// Flag a cell as sitting on the traversal stack.
    pub fn mark_in_stack(&mut self, id: CellId) {
        self.cells[id.as_usize()].set_visit_state(VisitState::InStack);
    }

    /// Flag a cell as open for revisiting.
    pub fn mark_out_stack(&mut self, id: CellId) {
        self.cells[id.as_usize()].set_visit_state(VisitState::Unvisited);
    }
}
