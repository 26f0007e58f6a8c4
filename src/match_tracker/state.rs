//! The scoreboard state and its transition function.
//!
//! `MatchState` is an immutable value. Every user action and clock tick
//! is an [`Action`] folded through [`MatchState::apply`], which returns
//! the next state and leaves the old one untouched. The reducer owns
//! all domain rules: the counter adjustment rule, the half-boundary
//! snapshot, second-half mirroring, the name length cap, and reset.

use tracing::debug;

use super::halves::HalfStats;
use super::phase::{MatchPhase, PhaseEvent};
use super::store::SavedGame;
use super::team::{AdjustMode, ScoreKind, StatKind, TeamSide, TeamStats};
use crate::constants::validation::MAX_TEAM_NAME_LENGTH;

/// Everything a user action or clock tick can do to the scoreboard.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Adjust goals or points for one side by the current mode.
    AdjustScore { side: TeamSide, kind: ScoreKind },
    /// Adjust one possession counter for one side by the current mode.
    AdjustStat { side: TeamSide, kind: StatKind },
    /// Replace a team name. Rejected outright when over the length cap.
    SetTeamName { side: TeamSide, name: String },
    ClearTeamName { side: TeamSide },
    /// Flip between add and subtract mode.
    ToggleAdjustMode,
    /// Move between halves (snapshot-and-clear on the way in).
    ToggleHalf,
    /// Show or hide the half-split totals table.
    ToggleTotals,
    /// Start or stop the match clock.
    ToggleClock,
    /// One second elapsed. Ignored unless the clock is running.
    Tick,
    /// Replace teams, time, phase, and snapshots from a saved game.
    Restore(SavedGame),
    /// Zero everything except the team names.
    Reset,
}

/// The complete scoreboard at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchState {
    pub home: TeamStats,
    pub away: TeamStats,
    pub elapsed_seconds: u32,
    pub running: bool,
    pub adjust_mode: AdjustMode,
    pub show_totals: bool,
    pub phase: MatchPhase,
    pub first_half: HalfStats,
    pub second_half: HalfStats,
}

impl MatchState {
    pub fn new(home_name: impl Into<String>, away_name: impl Into<String>) -> Self {
        Self {
            home: TeamStats::new(home_name),
            away: TeamStats::new(away_name),
            elapsed_seconds: 0,
            running: false,
            adjust_mode: AdjustMode::default(),
            show_totals: false,
            phase: MatchPhase::default(),
            first_half: HalfStats::default(),
            second_half: HalfStats::default(),
        }
    }

    pub fn team(&self, side: TeamSide) -> &TeamStats {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    /// Home total minus away total. Positive or zero means the home
    /// side is shown as leading.
    pub fn lead_margin(&self) -> i64 {
        i64::from(self.home.total()) - i64::from(self.away.total())
    }

    /// Fold one action into the next state.
    pub fn apply(&self, action: Action) -> MatchState {
        match action {
            Action::AdjustScore { side, kind } => self.adjusted_score(side, kind),
            Action::AdjustStat { side, kind } => self.adjusted_stat(side, kind),
            Action::SetTeamName { side, name } => self.renamed(side, name),
            Action::ClearTeamName { side } => self.renamed(side, String::new()),
            Action::ToggleAdjustMode => Self {
                adjust_mode: self.adjust_mode.toggled(),
                ..self.clone()
            },
            Action::ToggleHalf => self.half_toggled(),
            Action::ToggleTotals => Self {
                show_totals: !self.show_totals,
                ..self.clone()
            },
            Action::ToggleClock => self.clock_toggled(),
            Action::Tick => self.ticked(),
            Action::Restore(saved) => self.restored(saved),
            Action::Reset => self.cleared(),
        }
    }

    fn adjusted_score(&self, side: TeamSide, kind: ScoreKind) -> MatchState {
        let mut next = self.clone();
        match side {
            TeamSide::Home => next.home = self.home.adjust_score(kind, self.adjust_mode),
            TeamSide::Away => next.away = self.away.adjust_score(kind, self.adjust_mode),
        }
        next
    }

    fn adjusted_stat(&self, side: TeamSide, kind: StatKind) -> MatchState {
        let mut next = self.clone();
        match side {
            TeamSide::Home => {
                next.home = self.home.adjust_stat(kind, self.adjust_mode);
                // During the second half, home possession counters are
                // mirrored into the running second-half snapshot. The
                // away side is never half-tracked.
                if self.phase.is_second_half() {
                    next.second_half = self.second_half.with_stat(kind, next.home.stat(kind));
                }
            }
            TeamSide::Away => next.away = self.away.adjust_stat(kind, self.adjust_mode),
        }
        next
    }

    fn renamed(&self, side: TeamSide, name: String) -> MatchState {
        if name.chars().count() > MAX_TEAM_NAME_LENGTH {
            debug!(
                "Rejected over-length team name edit ({} chars)",
                name.chars().count()
            );
            return self.clone();
        }
        let mut next = self.clone();
        match side {
            TeamSide::Home => next.home = self.home.with_name(name),
            TeamSide::Away => next.away = self.away.with_name(name),
        }
        next
    }

    fn half_toggled(&self) -> MatchState {
        let Some(phase) = self.phase.transition(PhaseEvent::HalfToggled) else {
            return self.clone();
        };
        let mut next = self.clone();
        next.phase = phase;
        if phase.is_second_half() {
            // Entering the second half freezes the first-half figures
            // and starts the home counters over.
            next.first_half = HalfStats::capture(&self.home);
            next.home = self.home.with_possession_cleared();
        }
        // Toggling back changes the phase only. Counters stay where
        // they are and the second-half snapshot is kept.
        next
    }

    fn clock_toggled(&self) -> MatchState {
        let mut next = self.clone();
        next.running = !self.running;
        if next.running
            && let Some(phase) = self.phase.transition(PhaseEvent::ThrowIn)
        {
            next.phase = phase;
        }
        next
    }

    fn ticked(&self) -> MatchState {
        // A tick can still be queued when the clock stops; drop it.
        if !self.running {
            return self.clone();
        }
        Self {
            elapsed_seconds: self.elapsed_seconds.saturating_add(1),
            ..self.clone()
        }
    }

    fn restored(&self, saved: SavedGame) -> MatchState {
        Self {
            home: saved.home,
            away: saved.away,
            elapsed_seconds: saved.elapsed_seconds,
            phase: saved.phase,
            first_half: saved.first_half,
            second_half: saved.second_half,
            // Clock running state and adjust mode belong to the live
            // session, not the snapshot.
            running: self.running,
            adjust_mode: self.adjust_mode,
            show_totals: self.show_totals,
        }
    }

    fn cleared(&self) -> MatchState {
        Self {
            home: self.home.cleared(),
            away: self.away.cleared(),
            elapsed_seconds: 0,
            running: false,
            adjust_mode: AdjustMode::default(),
            show_totals: false,
            phase: MatchPhase::default(),
            first_half: HalfStats::default(),
            second_half: HalfStats::default(),
        }
    }
}
