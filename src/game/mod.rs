//! Interactive game orchestration: session state, move transitions, and
//! high-score persistence

pub mod session;
pub mod transition;
pub mod score;

pub use session::{GameSession, PlaceError, TickEvent, UndoError};
pub use transition::{Transition, TransitionView};
pub use score::ScoreStore;
