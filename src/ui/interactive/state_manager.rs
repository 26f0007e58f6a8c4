//! State management for the interactive scoreboard.
//!
//! Groups the pieces the event loop juggles: the match state itself, the
//! saved-game store, the clock task and its tick channel, and the modal UI
//! state (which input mode is active, panel cursor, render flag).

use crate::match_tracker::{Action, ClockTick, MatchClock, MatchState, SavedGameStore, TeamSide};
use tokio::sync::mpsc;

/// Which set of key bindings is live.
///
/// The screen is modal: while the saved-games panel is open or a name is
/// being edited, keys that would otherwise bump counters are captured by
/// that mode instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Scoreboard,
    SavedGamesPanel,
    NameEdit(TeamSide),
}

/// Rendering and interaction state for the screen itself.
#[derive(Debug)]
pub struct UiState {
    pub mode: InputMode,
    pub panel_selection: usize,
    pub needs_render: bool,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mode: InputMode::Scoreboard,
            panel_selection: 0,
            // First iteration always draws a frame.
            needs_render: true,
        }
    }

    /// Mark that a render is needed
    pub fn request_render(&mut self) {
        self.needs_render = true;
    }

    /// Clear render flag
    pub fn clear_render_flag(&mut self) {
        self.needs_render = false;
    }

    /// Check if render is needed
    pub fn needs_render(&self) -> bool {
        self.needs_render
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// Main interactive state coordinator.
///
/// Every mutation funnels through [`InteractiveState::apply`] so the clock
/// task always matches the running flag afterwards, no matter which action
/// flipped it.
#[derive(Debug)]
pub struct InteractiveState {
    pub match_state: MatchState,
    pub store: SavedGameStore,
    pub ui: UiState,
    clock: MatchClock,
    tick_tx: mpsc::UnboundedSender<ClockTick>,
    tick_rx: mpsc::UnboundedReceiver<ClockTick>,
}

impl InteractiveState {
    /// Create new interactive state around an initial match state.
    pub fn new(match_state: MatchState) -> Self {
        let (tick_tx, tick_rx) = mpsc::unbounded_channel();
        Self {
            match_state,
            store: SavedGameStore::new(),
            ui: UiState::new(),
            clock: MatchClock::new(),
            tick_tx,
            tick_rx,
        }
    }

    /// Apply an action to the match state and keep the clock task in step
    /// with the resulting running flag.
    pub fn apply(&mut self, action: Action) {
        self.match_state = self.match_state.apply(action);
        self.sync_clock();
        self.ui.request_render();
    }

    /// Fold any ticks the clock task has emitted since the last pass into
    /// the match state.
    pub fn drain_ticks(&mut self) {
        let mut ticked = false;
        while self.tick_rx.try_recv().is_ok() {
            self.match_state = self.match_state.apply(Action::Tick);
            ticked = true;
        }
        if ticked {
            self.ui.request_render();
        }
    }

    /// Stop the clock task outright. Used on quit so no tick fires between
    /// the last frame and terminal cleanup.
    pub fn stop_clock(&mut self) {
        self.clock.stop();
    }

    fn sync_clock(&mut self) {
        if self.match_state.running && !self.clock.is_running() {
            self.clock.start(self.tick_tx.clone());
        } else if !self.match_state.running && self.clock.is_running() {
            self.clock.stop();
        }
    }

    /// Snapshot the current match into the saved-games store.
    pub fn save_game(&mut self) {
        let id = self.store.save(&self.match_state);
        tracing::info!("Saved game {}", id);
        self.ui.request_render();
    }

    /// Open the saved-games panel with the cursor on the first entry.
    pub fn open_panel(&mut self) {
        self.ui.mode = InputMode::SavedGamesPanel;
        self.ui.panel_selection = 0;
        self.ui.request_render();
    }

    /// Close the panel and return to scoreboard keys.
    pub fn close_panel(&mut self) {
        self.ui.mode = InputMode::Scoreboard;
        self.ui.request_render();
    }

    /// Move the panel cursor up one entry.
    pub fn select_previous(&mut self) {
        if self.ui.panel_selection > 0 {
            self.ui.panel_selection -= 1;
            self.ui.request_render();
        }
    }

    /// Move the panel cursor down one entry.
    pub fn select_next(&mut self) {
        if self.ui.panel_selection + 1 < self.store.len() {
            self.ui.panel_selection += 1;
            self.ui.request_render();
        }
    }

    /// Restore the saved game under the panel cursor and close the panel.
    /// The running flag and adjust mode stay as they are, so a live clock
    /// keeps counting from the restored time.
    pub fn load_selected(&mut self) {
        let Some(game) = self.store.games().get(self.ui.panel_selection) else {
            return;
        };
        let snapshot = game.clone();
        tracing::info!("Loading saved game {}", snapshot.id);
        self.apply(Action::Restore(snapshot));
        self.close_panel();
    }

    /// Delete the saved game under the panel cursor.
    pub fn delete_selected(&mut self) {
        let Some(id) = self
            .store
            .games()
            .get(self.ui.panel_selection)
            .map(|game| game.id.clone())
        else {
            return;
        };
        self.store.delete(&id);
        tracing::info!("Deleted saved game {}", id);
        // Keep the cursor on a valid row after the list shrinks.
        if self.ui.panel_selection >= self.store.len() {
            self.ui.panel_selection = self.store.len().saturating_sub(1);
        }
        self.ui.request_render();
    }

    /// Enter name-edit mode for one side.
    pub fn begin_name_edit(&mut self, side: TeamSide) {
        self.ui.mode = InputMode::NameEdit(side);
        self.ui.request_render();
    }

    /// Leave name-edit mode, keeping whatever the name is now.
    pub fn end_name_edit(&mut self) {
        self.ui.mode = InputMode::Scoreboard;
        self.ui.request_render();
    }

    /// Append a typed character to the name being edited. A no-op at the
    /// length cap, which [`MatchState`] enforces.
    pub fn type_name_char(&mut self, c: char) {
        let InputMode::NameEdit(side) = self.ui.mode else {
            return;
        };
        let mut name = self.match_state.team(side).name.clone();
        name.push(c);
        self.apply(Action::SetTeamName { side, name });
    }

    /// Drop the last character of the name being edited.
    pub fn erase_name_char(&mut self) {
        let InputMode::NameEdit(side) = self.ui.mode else {
            return;
        };
        let mut name = self.match_state.team(side).name.clone();
        name.pop();
        self.apply(Action::SetTeamName { side, name });
    }

    /// Wipe the name being edited.
    pub fn clear_edited_name(&mut self) {
        let InputMode::NameEdit(side) = self.ui.mode else {
            return;
        };
        self.apply(Action::ClearTeamName { side });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::match_tracker::{MatchPhase, ScoreKind};
    use std::time::Duration;

    fn test_state() -> InteractiveState {
        InteractiveState::new(MatchState::new("Na Fianna", "Cuala"))
    }

    /// Let the spawned tick task run everything that is due.
    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_apply_requests_render() {
        let mut state = test_state();
        state.ui.clear_render_flag();

        state.apply(Action::AdjustScore {
            side: TeamSide::Home,
            kind: ScoreKind::Goals,
        });

        assert!(state.ui.needs_render());
        assert_eq!(state.match_state.home.goals, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_clock_starts_and_stops_task() {
        let mut state = test_state();
        assert!(!state.clock.is_running());

        state.apply(Action::ToggleClock);
        assert!(state.match_state.running);
        assert!(state.clock.is_running());
        assert_eq!(state.match_state.phase, MatchPhase::FirstHalf);

        state.apply(Action::ToggleClock);
        assert!(!state.match_state.running);
        assert!(!state.clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drain_ticks_advances_elapsed_time() {
        let mut state = test_state();
        state.apply(Action::ToggleClock);
        settle().await;

        tokio::time::advance(Duration::from_secs(3)).await;
        settle().await;

        state.drain_ticks();
        assert_eq!(state.match_state.elapsed_seconds, 3);
        assert!(state.ui.needs_render());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_stops_clock_task() {
        let mut state = test_state();
        state.apply(Action::ToggleClock);
        assert!(state.clock.is_running());

        state.apply(Action::Reset);
        assert!(!state.match_state.running);
        assert!(!state.clock.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_after_stop_are_dropped() {
        let mut state = test_state();
        state.apply(Action::ToggleClock);
        settle().await;

        tokio::time::advance(Duration::from_secs(2)).await;
        settle().await;

        // Stop before draining; the queued ticks must not move the clock.
        state.apply(Action::ToggleClock);
        state.drain_ticks();
        assert_eq!(state.match_state.elapsed_seconds, 0);
    }

    #[tokio::test]
    async fn test_save_game_adds_store_entry() {
        let mut state = test_state();
        state.apply(Action::AdjustScore {
            side: TeamSide::Home,
            kind: ScoreKind::Points,
        });

        state.save_game();
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.store.games()[0].home.points, 1);
    }

    #[tokio::test]
    async fn test_load_selected_restores_and_closes_panel() {
        let mut state = test_state();
        state.apply(Action::AdjustScore {
            side: TeamSide::Away,
            kind: ScoreKind::Goals,
        });
        state.save_game();

        state.apply(Action::Reset);
        assert_eq!(state.match_state.away.goals, 0);

        state.open_panel();
        state.load_selected();

        assert_eq!(state.match_state.away.goals, 1);
        assert_eq!(state.ui.mode, InputMode::Scoreboard);
    }

    #[tokio::test]
    async fn test_load_selected_with_empty_store_is_noop() {
        let mut state = test_state();
        state.open_panel();
        state.load_selected();
        assert_eq!(state.ui.mode, InputMode::SavedGamesPanel);
    }

    #[tokio::test]
    async fn test_delete_selected_clamps_cursor() {
        let mut state = test_state();
        state.save_game();
        state.save_game();
        state.open_panel();

        state.select_next();
        assert_eq!(state.ui.panel_selection, 1);

        state.delete_selected();
        assert_eq!(state.store.len(), 1);
        assert_eq!(state.ui.panel_selection, 0);

        state.delete_selected();
        assert!(state.store.is_empty());
        assert_eq!(state.ui.panel_selection, 0);
    }

    #[tokio::test]
    async fn test_panel_cursor_stays_in_bounds() {
        let mut state = test_state();
        state.save_game();
        state.save_game();
        state.open_panel();

        state.select_previous();
        assert_eq!(state.ui.panel_selection, 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.ui.panel_selection, 1);
    }

    #[tokio::test]
    async fn test_name_edit_typing_and_erasing() {
        let mut state = test_state();
        state.apply(Action::ClearTeamName {
            side: TeamSide::Home,
        });
        state.begin_name_edit(TeamSide::Home);

        for c in "Erin's Isle".chars() {
            state.type_name_char(c);
        }
        assert_eq!(state.match_state.home.name, "Erin's Isle");

        state.erase_name_char();
        assert_eq!(state.match_state.home.name, "Erin's Isl");

        state.clear_edited_name();
        assert_eq!(state.match_state.home.name, "");

        state.end_name_edit();
        assert_eq!(state.ui.mode, InputMode::Scoreboard);
    }

    #[tokio::test]
    async fn test_typing_outside_edit_mode_is_noop() {
        let mut state = test_state();
        state.type_name_char('x');
        assert_eq!(state.match_state.home.name, "Na Fianna");
    }

    #[tokio::test]
    async fn test_typing_past_name_cap_is_rejected() {
        let mut state = test_state();
        state.begin_name_edit(TeamSide::Away);

        for _ in 0..300 {
            state.type_name_char('a');
        }
        assert_eq!(
            state.match_state.away.name.chars().count(),
            crate::constants::MAX_TEAM_NAME_LENGTH
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_keeps_running_clock_alive() {
        let mut state = test_state();
        state.apply(Action::ToggleClock);
        state.save_game();
        settle().await;

        tokio::time::advance(Duration::from_secs(5)).await;
        settle().await;
        state.drain_ticks();
        assert_eq!(state.match_state.elapsed_seconds, 5);

        state.open_panel();
        state.load_selected();

        // Restore rewinds the time but leaves the clock task running.
        assert_eq!(state.match_state.elapsed_seconds, 0);
        assert!(state.match_state.running);
        assert!(state.clock.is_running());
    }
}
