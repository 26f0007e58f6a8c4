//! Main interactive loop for the scoreboard.
//!
//! Owns terminal setup and teardown, tick draining, buffered rendering,
//! and event dispatch. Everything stateful lives in
//! [`InteractiveState`]; this module just turns the crank.

use crate::constants::polling::EVENT_POLL_MS;
use crate::error::AppError;
use crate::match_tracker::MatchState;
use crate::teletext_ui::ScoreboardPage;
use chrono::{Local, Utc};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{Stdout, stdout};
use std::time::Duration;

use super::input_handler::handle_key_event;
use super::state_manager::{InputMode, InteractiveState};

/// Setup terminal for interactive mode
fn setup_terminal(debug_mode: bool) -> Result<Stdout, AppError> {
    let mut stdout = stdout();

    if !debug_mode {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen)?;
    }

    Ok(stdout)
}

/// Cleanup terminal after interactive mode
fn cleanup_terminal(debug_mode: bool, mut stdout: Stdout) -> Result<(), AppError> {
    if !debug_mode {
        disable_raw_mode()?;
        execute!(stdout, LeaveAlternateScreen)?;
    }
    Ok(())
}

/// Build a fresh page from the current state. The page is cheap to
/// construct, so every frame starts from scratch and picks up the
/// terminal size as it is now.
fn build_page(state: &InteractiveState) -> ScoreboardPage {
    let mut page = ScoreboardPage::new(state.match_state.clone());
    page.set_match_date(
        Utc::now()
            .with_timezone(&Local)
            .format("%Y-%m-%d")
            .to_string(),
    );

    match state.ui.mode {
        InputMode::Scoreboard => {}
        InputMode::SavedGamesPanel => {
            let labels = state
                .store
                .games()
                .iter()
                .map(|game| game.label())
                .collect();
            page.open_panel(labels, state.ui.panel_selection);
        }
        InputMode::NameEdit(side) => page.set_name_edit(side),
    }

    page
}

/// Runs the interactive scoreboard until the user quits.
pub async fn run_interactive_ui(
    home_team: &str,
    away_team: &str,
    debug_mode: bool,
) -> Result<(), AppError> {
    tracing::info!("Starting scoreboard: {} vs {}", home_team, away_team);

    let mut stdout = setup_terminal(debug_mode)?;
    let mut state = InteractiveState::new(MatchState::new(home_team, away_team));

    let result = run_event_loop(&mut stdout, &mut state).await;

    // Restore the terminal even when the loop bails out with an error.
    let cleanup = cleanup_terminal(debug_mode, stdout);
    result.and(cleanup)
}

async fn run_event_loop(
    stdout: &mut Stdout,
    state: &mut InteractiveState,
) -> Result<(), AppError> {
    loop {
        // Fold queued clock ticks into the state before drawing.
        state.drain_ticks();

        // Batched UI rendering - only render when something changed.
        if state.ui.needs_render() {
            let page = build_page(state);
            page.render_buffered(stdout)?;
            state.ui.clear_render_flag();
        }

        // The poll timeout doubles as the loop heartbeat: it caps how
        // stale the clock display can get while staying idle otherwise.
        if event::poll(Duration::from_millis(EVENT_POLL_MS))? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    if handle_key_event(state, &key_event) {
                        tracing::info!("Exiting interactive mode");
                        break;
                    }
                }
                Event::Resize(width, height) => {
                    tracing::debug!("Terminal resized to {}x{}", width, height);
                    state.ui.request_render();
                }
                _ => {}
            }
        }
    }

    // No tick may land between the last frame and terminal cleanup.
    state.stop_clock();
    Ok(())
}
