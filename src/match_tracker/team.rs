//! Team records and counter adjustment rules.
//!
//! A team record is an immutable value: every mutation helper returns a
//! new record, so transitions can be tested in isolation and the caller
//! decides when the new value replaces the old one.

use crate::constants::scoring;

/// Which side of the scoreboard a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub fn is_home(self) -> bool {
        matches!(self, TeamSide::Home)
    }
}

/// The two scoring counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreKind {
    Goals,
    Points,
}

/// The seven possession counters tracked per team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    KickoutsWon,
    KickoutsLost,
    TurnoversWon,
    PossessionsLost,
    Attacks,
    Shots,
    Wides,
}

impl StatKind {
    /// All possession counters in scoreboard display order.
    pub const ALL: [StatKind; 7] = [
        StatKind::KickoutsWon,
        StatKind::KickoutsLost,
        StatKind::TurnoversWon,
        StatKind::PossessionsLost,
        StatKind::Attacks,
        StatKind::Shots,
        StatKind::Wides,
    ];

    /// Display label for scoreboard rows.
    pub fn label(self) -> &'static str {
        match self {
            StatKind::KickoutsWon => "KICKOUTS WON",
            StatKind::KickoutsLost => "KICKOUTS LOST",
            StatKind::TurnoversWon => "TURNOVERS WON",
            StatKind::PossessionsLost => "POSSESSION LOST",
            StatKind::Attacks => "ATTACKS",
            StatKind::Shots => "SHOTS",
            StatKind::Wides => "WIDES",
        }
    }
}

/// Whether counter adjustments add or subtract.
///
/// Passed explicitly into every counter mutation so both directions can
/// be exercised without shared mutable mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdjustMode {
    #[default]
    Add,
    Subtract,
}

impl AdjustMode {
    pub fn toggled(self) -> Self {
        match self {
            AdjustMode::Add => AdjustMode::Subtract,
            AdjustMode::Subtract => AdjustMode::Add,
        }
    }

    pub fn is_subtract(self) -> bool {
        matches!(self, AdjustMode::Subtract)
    }

    /// The uniform counter rule: one up with no ceiling, or one down
    /// floored at zero.
    pub fn apply(self, value: u32) -> u32 {
        match self {
            AdjustMode::Add => value.saturating_add(1),
            AdjustMode::Subtract => value.saturating_sub(1),
        }
    }
}

/// One team's scoreboard record: name, score, and possession counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStats {
    pub name: String,
    pub goals: u32,
    pub points: u32,
    pub kickouts_won: u32,
    pub kickouts_lost: u32,
    pub turnovers_won: u32,
    pub possessions_lost: u32,
    pub attacks: u32,
    pub shots: u32,
    pub wides: u32,
}

impl TeamStats {
    /// Create a fresh record with every counter at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            goals: 0,
            points: 0,
            kickouts_won: 0,
            kickouts_lost: 0,
            turnovers_won: 0,
            possessions_lost: 0,
            attacks: 0,
            shots: 0,
            wides: 0,
        }
    }

    /// Score total: goals are worth three points each.
    pub fn total(&self) -> u32 {
        self.goals * scoring::GOAL_VALUE + self.points * scoring::POINT_VALUE
    }

    pub fn score(&self, kind: ScoreKind) -> u32 {
        match kind {
            ScoreKind::Goals => self.goals,
            ScoreKind::Points => self.points,
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

    /// Copy of this record with one score counter replaced.
    pub fn with_score(&self, kind: ScoreKind, value: u32) -> Self {
        let mut next = self.clone();
        match kind {
            ScoreKind::Goals => next.goals = value,
            ScoreKind::Points => next.points = value,
        }
        next
    }

    /// Copy of this record with one possession counter replaced.
    pub fn with_stat(&self, kind: StatKind, value: u32) -> Self {
        let mut next = self.clone();
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

    /// Copy with one score counter adjusted by the given mode.
    pub fn adjust_score(&self, kind: ScoreKind, mode: AdjustMode) -> Self {
        self.with_score(kind, mode.apply(self.score(kind)))
    }

    /// Copy with one possession counter adjusted by the given mode.
    pub fn adjust_stat(&self, kind: StatKind, mode: AdjustMode) -> Self {
        self.with_stat(kind, mode.apply(self.stat(kind)))
    }

    /// Copy with a new name. The caller is responsible for the length
    /// cap; this helper applies whatever it is handed.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.name = name.into();
        next
    }

    /// Copy with the seven possession counters zeroed, everything else
    /// untouched. Used when the match moves into the second half.
    pub fn with_possession_cleared(&self) -> Self {
        let mut next = self.clone();
        next.kickouts_won = 0;
        next.kickouts_lost = 0;
        next.turnovers_won = 0;
        next.possessions_lost = 0;
        next.attacks = 0;
        next.shots = 0;
        next.wides = 0;
        next
    }

    /// Copy with every counter zeroed and only the name preserved.
    pub fn cleared(&self) -> Self {
        Self::new(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_team() -> TeamStats {
        let mut team = TeamStats::new("Na Fianna");
        team.goals = 2;
        team.points = 5;
        team.kickouts_won = 4;
        team.kickouts_lost = 1;
        team.turnovers_won = 3;
        team.possessions_lost = 2;
        team.attacks = 11;
        team.shots = 9;
        team.wides = 2;
        team
    }

    #[test]
    fn test_adjust_mode_rule() {
        // One up with no ceiling
        assert_eq!(AdjustMode::Add.apply(0), 1);
        assert_eq!(AdjustMode::Add.apply(41), 42);

        // One down floored at zero
        assert_eq!(AdjustMode::Subtract.apply(5), 4);
        assert_eq!(AdjustMode::Subtract.apply(1), 0);
        assert_eq!(AdjustMode::Subtract.apply(0), 0);
    }

    #[test]
    fn test_adjust_mode_rule_holds_for_every_counter() {
        let team = create_test_team();

        for kind in StatKind::ALL {
            let before = team.stat(kind);
            assert_eq!(team.adjust_stat(kind, AdjustMode::Add).stat(kind), before + 1);
            assert_eq!(
                team.adjust_stat(kind, AdjustMode::Subtract).stat(kind),
                before.saturating_sub(1)
            );
        }

        for kind in [ScoreKind::Goals, ScoreKind::Points] {
            let before = team.score(kind);
            assert_eq!(
                team.adjust_score(kind, AdjustMode::Add).score(kind),
                before + 1
            );
            assert_eq!(
                team.adjust_score(kind, AdjustMode::Subtract).score(kind),
                before.saturating_sub(1)
            );
        }
    }

    #[test]
    fn test_subtract_clamps_at_zero() {
        let team = TeamStats::new("Round Towers");
        let adjusted = team.adjust_score(ScoreKind::Goals, AdjustMode::Subtract);
        assert_eq!(adjusted.goals, 0);

        let adjusted = adjusted.adjust_stat(StatKind::Wides, AdjustMode::Subtract);
        assert_eq!(adjusted.wides, 0);
    }

    #[test]
    fn test_adjust_mode_toggle() {
        assert_eq!(AdjustMode::Add.toggled(), AdjustMode::Subtract);
        assert_eq!(AdjustMode::Subtract.toggled(), AdjustMode::Add);
        assert_eq!(AdjustMode::default(), AdjustMode::Add);
    }

    #[test]
    fn test_total_weights_goals_by_three() {
        let team = TeamStats::new("Erin's Isle")
            .with_score(ScoreKind::Goals, 2)
            .with_score(ScoreKind::Points, 1);
        assert_eq!(team.total(), 7);

        let team = team.with_score(ScoreKind::Goals, 0).with_score(ScoreKind::Points, 0);
        assert_eq!(team.total(), 0);

        // Spot-check the formula over a small grid
        for goals in 0..5u32 {
            for points in 0..5u32 {
                let team = TeamStats::new("x")
                    .with_score(ScoreKind::Goals, goals)
                    .with_score(ScoreKind::Points, points);
                assert_eq!(team.total(), goals * 3 + points);
            }
        }
    }

    #[test]
    fn test_adjustments_do_not_mutate_original() {
        let team = create_test_team();
        let _ = team.adjust_stat(StatKind::Attacks, AdjustMode::Add);
        let _ = team.adjust_score(ScoreKind::Goals, AdjustMode::Subtract);
        assert_eq!(team, create_test_team());
    }

    #[test]
    fn test_with_possession_cleared_keeps_score_and_name() {
        let cleared = create_test_team().with_possession_cleared();
        assert_eq!(cleared.name, "Na Fianna");
        assert_eq!(cleared.goals, 2);
        assert_eq!(cleared.points, 5);
        for kind in StatKind::ALL {
            assert_eq!(cleared.stat(kind), 0);
        }
    }

    #[test]
    fn test_cleared_keeps_only_the_name() {
        let cleared = create_test_team().cleared();
        assert_eq!(cleared, TeamStats::new("Na Fianna"));
    }

    #[test]
    fn test_stat_labels_are_unique() {
        let mut labels: Vec<&str> = StatKind::ALL.iter().map(|k| k.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), StatKind::ALL.len());
    }
}
