//! Exhaustive backtracking search for complete queen arrangements

use crate::board::Board;
use rayon::prelude::*;

/// Fill the board with one queen per column using depth-first backtracking
///
/// Clears the board first, then for each column tries rows in increasing
/// order, tentatively placing a queen and recursing; a tentative placement
/// is removed before the next row is tried. Returns true the first time a
/// complete arrangement is found (board left fully populated), false if no
/// arrangement exists for this size (board left empty, e.g. N=2 and N=3).
///
/// The board itself is the search's scratch structure: legality queries see
/// exactly the currently tentative prefix.
pub fn solve(board: &mut Board) -> bool {
    board.clear();
    solve_column(board, 0)
}

fn solve_column(board: &mut Board, col: usize) -> bool {
    if col >= board.size() {
        return true;
    }

    for row in 0..board.size() {
        if board.try_push(row, col) {
            if solve_column(board, col + 1) {
                return true;
            }
            board.pop();
        }
    }

    false
}

/// Count every complete arrangement for the given board size
///
/// The first column's rows are fanned out across a parallel iterator, each
/// branch searching an independent scratch board; the per-branch search is
/// the same sequential backtracking as `solve`.
pub fn count_solutions(board_size: usize) -> u64 {
    if board_size == 0 {
        return 1;
    }

    (0..board_size)
        .into_par_iter()
        .map(|row| {
            let mut board = Board::new(board_size);
            board.try_push(row, 0);
            count_from(&mut board, 1)
        })
        .sum()
}

fn count_from(board: &mut Board, col: usize) -> u64 {
    if col >= board.size() {
        return 1;
    }

    let mut total = 0;
    for row in 0..board.size() {
        if board.try_push(row, col) {
            total += count_from(board, col + 1);
            board.pop();
        }
    }

    total
}
