//! Immutable snapshots of the seven possession counters.
//!
//! Captured from the home side at the half boundary and, while the
//! second half is underway, kept in step with each home possession
//! mutation. Neither snapshot carries names, scores, or phase.

use super::team::{StatKind, TeamStats};

/// A frozen copy of the possession counters for one half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HalfStats {
    pub kickouts_won: u32,
    pub kickouts_lost: u32,
    pub turnovers_won: u32,
    pub possessions_lost: u32,
    pub attacks: u32,
    pub shots: u32,
    pub wides: u32,
}

impl HalfStats {
    /// Snapshot the possession counters of a team record.
    pub fn capture(team: &TeamStats) -> Self {
        Self {
            kickouts_won: team.kickouts_won,
            kickouts_lost: team.kickouts_lost,
            turnovers_won: team.turnovers_won,
            possessions_lost: team.possessions_lost,
            attacks: team.attacks,
            shots: team.shots,
            wides: team.wides,
        }
    }

    pub fn stat(&self, kind: StatKind) -> u32 {
        match kind {
            StatKind::KickoutsWon => self.kickouts_won,
            StatKind::KickoutsLost => self.kickouts_lost,
            StatKind::TurnoversWon => self.turnovers_won,
            StatKind::PossessionsLost => self.possessions_lost,
            StatKind::Attacks => self.attacks,
            StatKind::Shots => self.shots,
            StatKind::Wides => self.wides,
        }
    }

    /// Copy of this snapshot with one counter replaced.
    pub fn with_stat(&self, kind: StatKind, value: u32) -> Self {
        let mut next = *self;
        match kind {
            StatKind::KickoutsWon => next.kickouts_won = value,
            StatKind::KickoutsLost => next.kickouts_lost = value,
            StatKind::TurnoversWon => next.turnovers_won = value,
            StatKind::PossessionsLost => next.possessions_lost = value,
            StatKind::Attacks => next.attacks = value,
            StatKind::Shots => next.shots = value,
            StatKind::Wides => next.wides = value,
        }
        next
    }

    /// True when every counter is zero.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
