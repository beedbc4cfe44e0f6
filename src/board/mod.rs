//! Board primitives: placements, conflict rules, and arrangement I/O

pub mod placement;
pub mod state;
pub mod io;

pub use placement::Placement;
pub use state::Board;
pub use io::{load_arrangement_from_file, save_arrangement_to_file, create_example_arrangements};
