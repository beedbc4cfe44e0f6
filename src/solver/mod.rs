//! Backtracking search and arrangement auditing

pub mod backtracking;
pub mod verify;

pub use backtracking::{count_solutions, solve};
pub use verify::{audit_arrangement, ArrangementReport, ConflictKind, ConflictPair};
