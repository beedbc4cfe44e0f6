//! Solve a board, audit the result, and count arrangements for small sizes
//!
//! Run with: cargo run --example solve_and_count

use nqueens_game::solver::{audit_arrangement, count_solutions};
use nqueens_game::utils::BoardFormatter;

fn main() {
    let board = nqueens_game::first_solution(8).expect("the 8x8 board is solvable");
    println!("First 8x8 arrangement:");
    println!("{}", BoardFormatter::format_board_with_coords(&board));

    let report = audit_arrangement(board.size(), board.placements());
    println!("{}", report);

    for size in 1..=8 {
        println!("{}x{} boards have {} solution(s)", size, size, count_solutions(size));
    }
}
