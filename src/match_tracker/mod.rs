pub mod clock;
pub mod halves;
pub mod phase;
pub mod state;
pub mod store;
pub mod team;

pub use clock::{ClockTick, MatchClock};
pub use halves::HalfStats;
pub use phase::{MatchPhase, PhaseEvent};
pub use state::{Action, MatchState};
pub use store::{SavedGame, SavedGameStore};
pub use team::{AdjustMode, ScoreKind, StatKind, TeamSide, TeamStats};
