//! Timed move transition state machine
//!
//! The only "suspension" in the game is the visual glide of a queen from
//! its previous square to a newly accepted one. It is modeled as a state
//! machine driven by a single `tick(now)` call from the host event loop;
//! time is a `Duration` measured from an epoch the host chooses (typically
//! session start), which keeps the machine clock-free and testable.

use crate::board::Placement;
use std::time::Duration;

/// In-flight move animation state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Idle,
    Active {
        from: Placement,
        to: Placement,
        started: Duration,
    },
}

/// Renderer-facing snapshot of an active transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionView {
    pub from: Placement,
    pub to: Placement,
    pub progress: f32,
}

impl Transition {
    /// Start a transition from one square to another at the given time
    pub fn begin(from: Placement, to: Placement, now: Duration) -> Self {
        Transition::Active {
            from,
            to,
            started: now,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, Transition::Active { .. })
    }

    /// Normalized progress fraction, clamped to [0, 1]; None while idle
    ///
    /// A zero duration is treated as already complete.
    pub fn progress(&self, now: Duration, duration: Duration) -> Option<f32> {
        match self {
            Transition::Idle => None,
            Transition::Active { started, .. } => {
                if duration.is_zero() {
                    return Some(1.0);
                }
                let elapsed = now.saturating_sub(*started);
                let fraction = elapsed.as_secs_f32() / duration.as_secs_f32();
                Some(fraction.clamp(0.0, 1.0))
            }
        }
    }

    /// Snapshot for the renderer; None while idle
    pub fn view(&self, now: Duration, duration: Duration) -> Option<TransitionView> {
        match self {
            Transition::Idle => None,
            Transition::Active { from, to, .. } => Some(TransitionView {
                from: *from,
                to: *to,
                progress: self.progress(now, duration)?,
            }),
        }
    }

    /// Drop back to idle; a cancelled transition never commits anything
    pub fn cancel(&mut self) {
        *self = Transition::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(500);

    #[test]
    fn test_progress_clamping() {
        let transition = Transition::begin(
            Placement::new(0, 0),
            Placement::new(2, 1),
            Duration::from_millis(100),
        );

        assert_eq!(transition.progress(Duration::from_millis(100), DURATION), Some(0.0));
        assert_eq!(transition.progress(Duration::from_millis(350), DURATION), Some(0.5));
        assert_eq!(transition.progress(Duration::from_millis(600), DURATION), Some(1.0));

        // Past the end stays pinned at 1
        assert_eq!(transition.progress(Duration::from_secs(10), DURATION), Some(1.0));

        // Clock reading from before the start clamps to 0 instead of panicking
        assert_eq!(transition.progress(Duration::from_millis(50), DURATION), Some(0.0));
    }

    #[test]
    fn test_zero_duration_is_complete_immediately() {
        let transition = Transition::begin(
            Placement::new(0, 0),
            Placement::new(2, 1),
            Duration::from_millis(100),
        );

        assert_eq!(transition.progress(Duration::from_millis(100), Duration::ZERO), Some(1.0));
        assert_eq!(transition.progress(Duration::ZERO, Duration::ZERO), Some(1.0));
    }

    #[test]
    fn test_idle_has_no_progress() {
        let transition = Transition::Idle;
        assert!(!transition.is_active());
        assert_eq!(transition.progress(Duration::ZERO, DURATION), None);
        assert_eq!(transition.view(Duration::ZERO, DURATION), None);
    }

    #[test]
    fn test_view_snapshot() {
        let from = Placement::new(3, 3);
        let to = Placement::new(5, 4);
        let transition = Transition::begin(from, to, Duration::ZERO);

        let view = transition.view(Duration::from_millis(250), DURATION).unwrap();
        assert_eq!(view.from, from);
        assert_eq!(view.to, to);
        assert_eq!(view.progress, 0.5);
    }

    #[test]
    fn test_cancel() {
        let mut transition =
            Transition::begin(Placement::new(0, 0), Placement::new(1, 2), Duration::ZERO);
        assert!(transition.is_active());

        transition.cancel();
        assert_eq!(transition, Transition::Idle);
    }
}
