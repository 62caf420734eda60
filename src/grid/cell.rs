// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cell types: identifiers, classification, visit state.

use crate::grid::Direction;
use std::fmt;
use strum::EnumCount;

/// Unique identifier for a cell.
///
/// Cells are numbered in row-major order during map construction. The
/// `Display` impl prints the bare number; the stack trace tokens
/// (`push<id>` / `pop<id>`) are built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// Get the id as a usize (for table indexing).
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Classification of a cell. Never changes after map construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// The launch point. There is exactly one per map.
    Start,
    /// A cell the arrows try to reach.
    Target,
    /// A path enterable only laterally (East/West slots).
    HorizontalPath,
    /// A path enterable only vertically (North/South slots).
    VerticalPath,
    /// A path enterable from any slot.
    CrossPath,
    /// Never enterable; ends an arrow that coasts into it.
    BlackHole,
    /// Open ground the movement rules never select.
    Plain,
}

/// Whether a cell currently sits on the traversal stack.
///
/// Mutated only by the search controller through the graph's
/// `mark_in_stack` / `mark_out_stack`; the movement policy only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisitState {
    #[default]
    Unvisited,
    InStack,
}

/// One map cell: immutable kind and neighbour slots, mutable visit state.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    kind: CellKind,
    /// Fixed-order neighbour slots, indexed by `Direction`. A slot is
    /// `None` past the map border.
    neighbours: [Option<CellId>; Direction::COUNT],
    visit: VisitState,
}

impl Cell {
    /// Create a cell with all neighbour slots empty.
    pub(crate) fn new(id: CellId, kind: CellKind) -> Self {
        Self {
            id,
            kind,
            neighbours: [None; Direction::COUNT],
            visit: VisitState::Unvisited,
        }
    }

    /// Wire one neighbour slot. Construction-time only.
    pub(crate) fn set_neighbour(&mut self, direction: Direction, neighbour: CellId) {
        self.neighbours[direction.index()] = Some(neighbour);
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The neighbour in the given slot, if any.
    pub fn neighbour(&self, direction: Direction) -> Option<CellId> {
        self.neighbours[direction.index()]
    }

    pub fn visit_state(&self) -> VisitState {
        self.visit
    }

    pub fn is_marked_in_stack(&self) -> bool {
        self.visit == VisitState::InStack
    }

    pub(crate) fn set_visit_state(&mut self, visit: VisitState) {
        self.visit = visit;
    }
}
