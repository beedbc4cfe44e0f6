//! Interactive game session
//!
//! One owned value holds the board, the undo history, the attempt counter,
//! and the win/transition flags; hosts mutate it only through the
//! place/undo/reset/solve operations and drive `tick(now)` once per frame.
//! Single-threaded by construction, so no locking is involved.

use crate::board::{Board, Placement};
use crate::config::Settings;
use crate::game::score::ScoreStore;
use crate::game::transition::{Transition, TransitionView};
use crate::solver::backtracking;
use std::time::Duration;
use thiserror::Error;

/// Rejection reasons for a placement proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// The square is attacked by a placed queen; counted as an attempt
    #[error("Invalid move. Try again.")]
    Conflict,
    /// The puzzle is already solved
    #[error("The puzzle is already solved. Reset to play again.")]
    GameWon,
    /// A previous move has not finished its transition yet
    #[error("A move is still in flight.")]
    TransitionInFlight,
}

/// Rejection reasons for an undo request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UndoError {
    #[error("Nothing to undo.")]
    EmptyHistory,
    #[error("A move is still in flight.")]
    TransitionInFlight,
}

/// State change surfaced by a tick that committed a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The in-flight queen reached its square and was appended to the board
    Placed(Placement),
    /// The committed queen completed the puzzle
    Won { new_record: Option<u32> },
}

/// The interactive N-Queens game
#[derive(Debug)]
pub struct GameSession {
    board: Board,
    undo_stack: Vec<Placement>,
    attempts: u32,
    won: bool,
    solving: bool,
    solved_by_computer: bool,
    transition: Transition,
    transition_duration: Duration,
    warning_duration: Duration,
    warning_since: Option<Duration>,
    high_score: Option<u32>,
    persist_error: Option<anyhow::Error>,
    store: ScoreStore,
}

impl GameSession {
    /// Create a fresh session, reading any persisted record
    pub fn new(
        board_size: usize,
        transition_duration: Duration,
        warning_duration: Duration,
        store: ScoreStore,
    ) -> Self {
        let high_score = store.load();
        Self {
            board: Board::new(board_size),
            undo_stack: Vec::with_capacity(board_size),
            attempts: 0,
            won: false,
            solving: false,
            solved_by_computer: false,
            transition: Transition::Idle,
            transition_duration,
            warning_duration,
            warning_since: None,
            high_score,
            persist_error: None,
            store,
        }
    }

    /// Create a session from validated settings
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.game.board_size,
            Duration::from_millis(settings.animation.transition_ms),
            Duration::from_millis(settings.animation.warning_ms),
            ScoreStore::new(settings.persistence.high_score_file.clone()),
        )
    }

    /// Propose a queen for (row, col)
    ///
    /// Bounds are the caller's responsibility. On success a transition
    /// toward the square begins; the queen is appended to the board only
    /// when a later `tick` observes the transition complete. A conflicting
    /// square is rejected, counted against the score, and raises the
    /// transient warning.
    pub fn place(&mut self, row: usize, col: usize, now: Duration) -> Result<(), PlaceError> {
        if self.won {
            return Err(PlaceError::GameWon);
        }
        if self.transition.is_active() {
            return Err(PlaceError::TransitionInFlight);
        }
        if !self.board.is_legal(row, col) {
            self.attempts += 1;
            self.warning_since = Some(now);
            return Err(PlaceError::Conflict);
        }

        let to = Placement::new(row, col);
        let from = self.board.last().unwrap_or(to);
        self.transition = Transition::begin(from, to, now);
        Ok(())
    }

    /// Advance the transition clock; commits the in-flight queen once its
    /// progress reaches 1
    ///
    /// The square's legality is re-checked at commit time; a stale
    /// transition whose destination became illegal is discarded without
    /// mutating the board. Returns the committed change, if any. A failed
    /// save of a new record never suppresses the win: the in-memory record
    /// is committed first and the I/O error is held for the host to read
    /// via `take_persist_error`.
    pub fn tick(&mut self, now: Duration) -> Option<TickEvent> {
        let (to, done) = match self.transition {
            Transition::Idle => return None,
            Transition::Active { to, .. } => {
                let progress = self
                    .transition
                    .progress(now, self.transition_duration)
                    .unwrap_or(1.0);
                (to, progress >= 1.0)
            }
        };

        if !done {
            return None;
        }
        self.transition.cancel();

        // Confirmation-time double check of the proposal-time legality test
        if !self.board.try_push(to.row, to.col) {
            return None;
        }
        self.undo_stack.push(to);

        if !self.board.is_full() {
            return Some(TickEvent::Placed(to));
        }

        self.won = true;
        let new_record = if self.solved_by_computer {
            None
        } else {
            self.record_score()
        };
        Some(TickEvent::Won { new_record })
    }

    fn record_score(&mut self) -> Option<u32> {
        let beats_record = match self.high_score {
            None => true,
            Some(best) => self.attempts < best,
        };
        if !beats_record {
            return None;
        }

        self.high_score = Some(self.attempts);
        if let Err(e) = self.store.save(self.attempts) {
            self.persist_error = Some(e.context("Failed to persist new high score"));
        }
        Some(self.attempts)
    }

    /// Remove the most recently confirmed queen
    pub fn undo(&mut self) -> Result<(), UndoError> {
        if self.transition.is_active() {
            return Err(UndoError::TransitionInFlight);
        }
        if self.undo_stack.is_empty() {
            return Err(UndoError::EmptyHistory);
        }

        self.undo_stack.pop();
        self.board.pop();
        self.won = false;
        Ok(())
    }

    /// Clear the game back to an empty board, unconditionally
    ///
    /// Cancels any in-flight transition (a stale tick then observes Idle
    /// and commits nothing) and re-reads the persisted record, picking up
    /// external edits to the score file between games.
    pub fn reset(&mut self) {
        self.board.clear();
        self.undo_stack.clear();
        self.attempts = 0;
        self.won = false;
        self.solving = false;
        self.solved_by_computer = false;
        self.transition.cancel();
        self.warning_since = None;
        self.persist_error = None;
        self.high_score = self.store.load();
    }

    /// Reset, then fill the board by exhaustive backtracking
    ///
    /// Blocks the caller for the whole search; the solving flag is only
    /// observational. Returns false with the board left empty when no
    /// arrangement exists for this size. A computer-solved win never
    /// touches the high score.
    pub fn solve(&mut self) -> bool {
        self.reset();
        self.solving = true;
        let solved = backtracking::solve(&mut self.board);
        if solved {
            self.undo_stack = self.board.placements().to_vec();
            self.won = true;
            self.solved_by_computer = true;
        }
        self.solving = false;
        solved
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Confirmed queens in placement order
    pub fn placements(&self) -> &[Placement] {
        self.board.placements()
    }

    /// Rejected proposals so far this game
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn is_solving(&self) -> bool {
        self.solving
    }

    /// Current record; None when no game has been completed yet
    pub fn high_score(&self) -> Option<u32> {
        self.high_score
    }

    /// Take the error from the last failed record save, if any
    ///
    /// The save failure does not roll back the in-memory record or the win;
    /// hosts read it here and report it however they surface warnings.
    pub fn take_persist_error(&mut self) -> Option<anyhow::Error> {
        self.persist_error.take()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_active()
    }

    /// Renderer snapshot of the in-flight move, if any
    pub fn transition(&self, now: Duration) -> Option<TransitionView> {
        self.transition.view(now, self.transition_duration)
    }

    /// Whether the invalid-move warning is still within its display window
    pub fn warning_active(&self, now: Duration) -> bool {
        match self.warning_since {
            None => false,
            Some(since) => now.saturating_sub(since) < self.warning_duration,
        }
    }
}
