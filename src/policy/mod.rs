// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The movement-decision state machine.
//!
//! `MovementPolicy` picks the next cell an arrow visits, given the current
//! cell and the arrow's accumulated direction/inertia state. It is the pure
//! decision half of the simulation: it never touches visit flags (the
//! controller owns those), and identical inputs always produce the same
//! outcome and the same state mutation.
//!
//! # Decision order
//!
//! 1. On the start cell the state resets to no direction, zero inertia.
//! 2. At inertia >= 3 the arrow coasts: it keeps flying straight and only
//!    stops (dead end) when the slot ahead is absent or a black hole.
//! 3. Below that, with a committed direction, the cell ahead is re-checked;
//!    if it is gone, occupied, or a black hole the state resets and the
//!    decision falls through to a from-scratch scan. Otherwise the
//!    path-type redirect rules run, and failing those the arrow continues
//!    straight with one more unit of inertia.
//! 4. The from-scratch scan walks the four slots in fixed order and commits
//!    to the first neighbour its preference table accepts.
//!
//! The redirect rules intentionally reproduce the observed behaviour of the
//! original simulation, quirks included; see DESIGN.md for the inventory.

use crate::errors::SearchError;
use crate::grid::{CellGraph, CellId, CellKind, Direction};
use strum::IntoEnumIterator;
use tracing::trace;

/// What the policy decided for one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Visit this cell next. The target cell is never the current cell; it
    /// may already be on the stack (the controller squeezes past it).
    Move(CellId),
    /// No forward move exists; the controller pops back one cell.
    Backtrack,
    /// The arrow is blocked for good; the controller abandons it.
    DeadEnd,
}

/// Direction and inertia of the arrow in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MovementPolicy {
    direction: Option<Direction>,
    inertia: u32,
}

impl MovementPolicy {
    /// Consecutive straight moves after which the arrow stops re-evaluating
    /// and coasts.
    pub const INERTIA_LIMIT: u32 = 3;

    /// A fresh policy with no committed direction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume from a mid-flight state. Mostly useful in tests that pin the
    /// machine to one branch of the decision table.
    pub fn with_state(direction: Option<Direction>, inertia: u32) -> Self {
        Self { direction, inertia }
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn inertia(&self) -> u32 {
        self.inertia
    }

    /// Forget the committed direction and accumulated inertia.
    fn reset(&mut self) {
        self.direction = None;
        self.inertia = 0;
    }

    /// Commit to a new direction with fresh inertia.
    fn commit(&mut self, direction: Direction) {
        self.direction = Some(direction);
        self.inertia = 0;
    }

    /// A neighbour the arrow may enter: not a black hole, not on the stack.
    fn eligible(graph: &CellGraph, id: CellId) -> bool {
        graph.kind(id) != CellKind::BlackHole && !graph.is_marked_in_stack(id)
    }

    /// Decide the next cell to visit from `current`.
    ///
    /// Mutates the direction/inertia state in place as a side effect of the
    /// decision. Never mutates the graph.
    pub fn next_cell(
        &mut self,
        graph: &CellGraph,
        current: CellId,
    ) -> Result<Outcome, SearchError> {
        if graph.kind(current) == CellKind::Start {
            self.reset();
        }

        if let Some(direction) = self.direction {
            if self.inertia >= Self::INERTIA_LIMIT {
                return Ok(self.coast(graph, current, direction));
            }
            match graph.neighbour(current, direction) {
                Some(ahead) if Self::eligible(graph, ahead) => {
                    if let Some(outcome) = self.redirect(graph, current, direction, ahead)? {
                        return Ok(outcome);
                    }
                    // Cross-path fall-through: neither lateral slot worked,
                    // re-decide from scratch below.
                }
                _ => self.reset(),
            }
        }

        if self.inertia == 0 {
            if let Some(outcome) = self.scan_from_scratch(graph, current) {
                return Ok(outcome);
            }
        }
        Ok(Outcome::Backtrack)
    }

    /// Inertia has peaked: fly straight until something solid ends the path.
    ///
    /// Only an absent slot or a black hole stops the arrow; an occupied cell
    /// ahead is still a move (the controller squeezes past it).
    fn coast(&self, graph: &CellGraph, current: CellId, direction: Direction) -> Outcome {
        match graph.neighbour(current, direction) {
            None => Outcome::DeadEnd,
            Some(ahead) if graph.kind(ahead) == CellKind::BlackHole => Outcome::DeadEnd,
            Some(ahead) => Outcome::Move(ahead),
        }
    }

    /// Path-type preference between the current cell and the cell ahead.
    ///
    /// Returns `None` when the cross-path rule applies but neither lateral
    /// slot is usable; the caller then falls through to the from-scratch
    /// scan (with the committed direction left in place).
    fn redirect(
        &mut self,
        graph: &CellGraph,
        current: CellId,
        direction: Direction,
        ahead: CellId,
    ) -> Result<Option<Outcome>, SearchError> {
        let current_kind = graph.kind(current);
        let ahead_kind = graph.kind(ahead);

        if current_kind == CellKind::HorizontalPath && ahead_kind == CellKind::VerticalPath {
            // Evaluated against the North slot only; the lateral cross-path
            // test decides between redirecting there and giving up.
            if let Some(north) = graph.neighbour(current, Direction::North) {
                if Self::eligible(graph, north) && graph.kind(north) != CellKind::VerticalPath {
                    return self.cross_gated_redirect(graph, current, north).map(Some);
                }
            }
            self.inertia += 1;
            return Ok(Some(Outcome::Move(ahead)));
        }

        if current_kind == CellKind::CrossPath
            && ahead_kind == CellKind::HorizontalPath
            && !direction.is_lateral()
        {
            for lateral in [Direction::East, Direction::West] {
                if let Some(side) = graph.neighbour(current, lateral) {
                    if Self::eligible(graph, side) && graph.kind(side) != CellKind::VerticalPath {
                        trace!(from = %current, to = %side, "lateral redirect");
                        self.commit(lateral);
                        return Ok(Some(Outcome::Move(side)));
                    }
                }
            }
            return Ok(None);
        }

        self.inertia += 1;
        Ok(Some(Outcome::Move(ahead)))
    }

    /// The horizontal-to-vertical redirect: allowed only when a lateral
    /// neighbour is a cross path, otherwise the arrow is done.
    ///
    /// Both lateral slots are dereferenced unconditionally, so a border cell
    /// here surfaces `NullReference` rather than a quiet dead end.
    fn cross_gated_redirect(
        &mut self,
        graph: &CellGraph,
        current: CellId,
        north: CellId,
    ) -> Result<Outcome, SearchError> {
        let east = graph
            .neighbour(current, Direction::East)
            .ok_or(SearchError::NullReference)?;
        if graph.kind(east) == CellKind::CrossPath {
            self.commit(Direction::North);
            return Ok(Outcome::Move(north));
        }
        let west = graph
            .neighbour(current, Direction::West)
            .ok_or(SearchError::NullReference)?;
        if graph.kind(west) == CellKind::CrossPath {
            self.commit(Direction::North);
            return Ok(Outcome::Move(north));
        }
        Ok(Outcome::DeadEnd)
    }

    /// No committed movement: scan the slots in fixed order and take the
    /// first neighbour the preference table accepts.
    ///
    /// Targets, starts, and cross paths are acceptable from any slot;
    /// vertical paths only from the vertical slots, horizontal paths only
    /// from the lateral ones. Plain cells are never chosen here.
    fn scan_from_scratch(&mut self, graph: &CellGraph, current: CellId) -> Option<Outcome> {
        for direction in Direction::iter() {
            let Some(candidate) = graph.neighbour(current, direction) else {
                continue;
            };
            if !Self::eligible(graph, candidate) {
                continue;
            }
            let acceptable = match graph.kind(candidate) {
                CellKind::Target | CellKind::Start | CellKind::CrossPath => true,
                CellKind::VerticalPath => !direction.is_lateral(),
                CellKind::HorizontalPath => direction.is_lateral(),
                CellKind::BlackHole | CellKind::Plain => false,
            };
            if acceptable {
                trace!(from = %current, to = %candidate, ?direction, "fresh commit");
                self.direction = Some(direction);
                return Some(Outcome::Move(candidate));
            }
        }
        None
    }
}
