//! In-memory saved games.
//!
//! Saves are deep copies of the scoreboard keyed by a timestamp-derived
//! id. The list lives for the process lifetime only; there is no disk
//! persistence for match data.

use chrono::Utc;
use tracing::debug;

use super::halves::HalfStats;
use super::phase::MatchPhase;
use super::state::MatchState;
use super::team::TeamStats;
use crate::teletext_ui::format_match_time;

/// A frozen copy of the scoreboard taken by the save action.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedGame {
    pub id: String,
    pub home: TeamStats,
    pub away: TeamStats,
    pub elapsed_seconds: u32,
    pub phase: MatchPhase,
    pub first_half: HalfStats,
    pub second_half: HalfStats,
}

impl SavedGame {
    /// Panel label: both names and the capture time.
    pub fn label(&self) -> String {
        format!(
            "{} vs {} - {}",
            self.home.name,
            self.away.name,
            format_match_time(self.elapsed_seconds)
        )
    }
}

/// Insertion-ordered list of saved games with session-unique ids.
#[derive(Debug, Default)]
pub struct SavedGameStore {
    games: Vec<SavedGame>,
}

impl SavedGameStore {
    pub fn new() -> Self {
        Self { games: Vec::new() }
    }

    /// Capture the current scoreboard, append it, and return its id.
    pub fn save(&mut self, state: &MatchState) -> String {
        let game = SavedGame {
            id: self.next_id(),
            home: state.home.clone(),
            away: state.away.clone(),
            elapsed_seconds: state.elapsed_seconds,
            phase: state.phase,
            first_half: state.first_half,
            second_half: state.second_half,
        };
        let id = game.id.clone();
        debug!("Saved game {id}: {}", game.label());
        self.games.push(game);
        id
    }

    pub fn get(&self, id: &str) -> Option<&SavedGame> {
        self.games.iter().find(|game| game.id == id)
    }

    /// Remove the entry with this id. Unknown ids are a no-op.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.games.len();
        self.games.retain(|game| game.id != id);
        let removed = self.games.len() != before;
        if removed {
            debug!("Deleted saved game {id}");
        }
        removed
    }

    /// Saved games in insertion order.
    pub fn games(&self) -> &[SavedGame] {
        &self.games
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    /// Millisecond timestamp, bumped past any id already taken so two
    /// saves inside the same millisecond stay distinct.
    fn next_id(&self) -> String {
        let mut millis = Utc::now().timestamp_millis();
        let mut id = millis.to_string();
        while self.games.iter().any(|game| game.id == id) {
            millis += 1;
            id = millis.to_string();
        }
        id
    }
}
