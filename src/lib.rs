//! N-Queens puzzle core
//!
//! This library provides the board state, conflict detection, interactive
//! session logic, and exhaustive backtracking search behind the N-Queens
//! game. Rendering, audio, and input handling are left to embedding hosts,
//! which drive the session through its place/undo/reset/solve operations
//! and read the board back each frame.

pub mod board;
pub mod config;
pub mod game;
pub mod solver;
pub mod utils;

pub use board::{Board, Placement};
pub use config::Settings;
pub use game::GameSession;

/// Find the first complete arrangement for a board of the given size
pub fn first_solution(board_size: usize) -> Option<Board> {
    let mut board = Board::new(board_size);
    if solver::solve(&mut board) {
        Some(board)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_solution() {
        let board = first_solution(8).unwrap();
        assert!(board.is_full());

        assert!(first_solution(2).is_none());
        assert!(first_solution(3).is_none());
    }
}
