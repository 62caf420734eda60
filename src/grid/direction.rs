// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Direction type for neighbour slots.
//!
//! Every cell has four neighbour slots in a fixed order. The movement rules
//! scan slots in this order, so the discriminant values are part of the
//! observable behaviour, not an implementation detail.

use crate::errors::SearchError;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// A movement axis, doubling as the index of a neighbour slot.
///
/// The slot order is North, East, South, West. `Direction::iter()` yields
/// the slots in exactly this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter)]
#[repr(u8)]
pub enum Direction {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Direction {
    /// Get the neighbour-slot index for this direction.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Convert a raw slot index into a direction.
    ///
    /// This is the defensive boundary for neighbour indexing: anything
    /// outside 0..4 is rejected with `IndexOutOfRange` rather than read.
    pub fn from_index(index: usize) -> Result<Self, SearchError> {
        match index {
            0 => Ok(Direction::North),
            1 => Ok(Direction::East),
            2 => Ok(Direction::South),
            3 => Ok(Direction::West),
            _ => Err(SearchError::IndexOutOfRange { index }),
        }
    }

    /// Whether this is one of the two lateral slots (East or West).
    ///
    /// Horizontal-path cells are only enterable laterally, and the redirect
    /// rules treat the lateral slots specially.
    pub fn is_lateral(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }
}
