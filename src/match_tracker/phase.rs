//! Match phase state machine.
//!
//! The half split is an explicit three-state machine rather than a
//! boolean so every edge is named. One edge is deliberately one-way:
//! entering the second half snapshots and clears the home possession
//! counters, while toggling back to the first half changes the phase
//! only. Nothing is restored and the second-half snapshot is kept.

/// The phases the possession-stat tracking moves through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPhase {
    /// Before the throw-in; the clock has never run.
    #[default]
    PreMatch,
    FirstHalf,
    SecondHalf,
}

/// Events that can move the match between phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// The clock started for the first time.
    ThrowIn,
    /// The half key was pressed.
    HalfToggled,
    /// The scoreboard was reset.
    MatchReset,
}

impl MatchPhase {
    /// Compute the phase an event leads to, or `None` when the event
    /// does not move this phase.
    pub fn transition(self, event: PhaseEvent) -> Option<MatchPhase> {
        match (self, event) {
            (MatchPhase::PreMatch, PhaseEvent::ThrowIn) => Some(MatchPhase::FirstHalf),

            // The half toggle is forward from anywhere before the
            // second half, and backward (phase only) out of it.
            (MatchPhase::PreMatch | MatchPhase::FirstHalf, PhaseEvent::HalfToggled) => {
                Some(MatchPhase::SecondHalf)
            }
            (MatchPhase::SecondHalf, PhaseEvent::HalfToggled) => Some(MatchPhase::FirstHalf),

            (_, PhaseEvent::MatchReset) => Some(MatchPhase::PreMatch),

            // A later clock start is not another throw-in.
            (MatchPhase::FirstHalf | MatchPhase::SecondHalf, PhaseEvent::ThrowIn) => None,
        }
    }

    pub fn is_second_half(self) -> bool {
        matches!(self, MatchPhase::SecondHalf)
    }

    /// Header label for the scoreboard.
    pub fn label(self) -> &'static str {
        match self {
            MatchPhase::PreMatch => "PRE-MATCH",
            MatchPhase::FirstHalf => "1ST HALF",
            MatchPhase::SecondHalf => "2ND HALF",
        }
    }
}
