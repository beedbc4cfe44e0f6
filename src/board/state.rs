//! Board representation and conflict testing

use super::Placement;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An N x N board holding queens in placement order
///
/// The sequence doubles as the backtracking solver's scratch structure:
/// conflict queries always see exactly the currently placed prefix, and
/// `pop` restores the previous state. The enforced invariant is that no
/// two held placements conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    placements: Vec<Placement>,
}

impl Board {
    /// Create a new empty board
    pub fn new(size: usize) -> Self {
        Self {
            size,
            placements: Vec::with_capacity(size),
        }
    }

    /// Build a board from an explicit arrangement, rejecting out-of-bounds
    /// squares and mutually attacking queens
    pub fn from_placements(size: usize, placements: Vec<Placement>) -> Result<Self> {
        let mut board = Board::new(size);
        for (i, p) in placements.into_iter().enumerate() {
            if p.row >= size || p.col >= size {
                anyhow::bail!(
                    "Placement {} at {} is out of bounds for a {}x{} board",
                    i,
                    p,
                    size,
                    size
                );
            }
            if !board.try_push(p.row, p.col) {
                anyhow::bail!("Placement {} at {} conflicts with an earlier queen", i, p);
            }
        }
        Ok(board)
    }

    /// Board side length
    pub fn size(&self) -> usize {
        self.size
    }

    /// Queens currently on the board, in placement order
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Number of queens currently placed
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    /// True if no queens are placed
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    /// True once one queen per column is on the board
    pub fn is_full(&self) -> bool {
        self.placements.len() == self.size
    }

    /// The most recently placed queen, if any
    pub fn last(&self) -> Option<Placement> {
        self.placements.last().copied()
    }

    /// Test whether a queen could legally occupy the given square
    ///
    /// A square is legal iff no placed queen shares its row, its column, or
    /// its diagonal. O(k) scan over the k placed queens, in placement order.
    /// Pure query; bounds checking is the caller's responsibility.
    pub fn is_legal(&self, row: usize, col: usize) -> bool {
        let candidate = Placement::new(row, col);
        !self.placements.iter().any(|p| p.conflicts_with(&candidate))
    }

    /// Append a queen if the square is legal, returning whether it was placed
    pub fn try_push(&mut self, row: usize, col: usize) -> bool {
        if self.is_legal(row, col) {
            self.placements.push(Placement::new(row, col));
            true
        } else {
            false
        }
    }

    /// Remove and return the most recently placed queen
    pub fn pop(&mut self) -> Option<Placement> {
        self.placements.pop()
    }

    /// Remove every queen from the board
    pub fn clear(&mut self) {
        self.placements.clear();
    }

    /// Check whether a square is occupied
    pub fn occupied(&self, row: usize, col: usize) -> bool {
        self.placements
            .iter()
            .any(|p| p.row == row && p.col == col)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let symbol = if self.occupied(row, col) { "♛ " } else { "· " };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
