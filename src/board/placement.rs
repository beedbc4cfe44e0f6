//! Queen placement primitives

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single queen position as a 0-indexed (row, column) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub row: usize,
    pub col: usize,
}

impl Placement {
    /// Create a new placement
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether two placements attack each other
    ///
    /// Two queens conflict if they share a row, share a column, or lie on
    /// the same diagonal (equal absolute row and column distance).
    pub fn conflicts_with(&self, other: &Placement) -> bool {
        self.row == other.row
            || self.col == other.col
            || self.row.abs_diff(other.row) == self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
