//! Keyboard dispatch for the interactive scoreboard.
//!
//! Decoding is split from execution: `decode_key` maps a key event to a
//! [`UiCommand`] using only the current input mode, so the whole key map
//! can be tested without a terminal, and `handle_key_event` runs the
//! command against the interactive state.

use super::state_manager::{InputMode, InteractiveState};
use crate::match_tracker::{Action, ScoreKind, StatKind, TeamSide};
use crate::teletext_ui::stat_key_hint;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A decoded key press.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum UiCommand {
    Quit,
    Apply(Action),
    SaveGame,
    OpenPanel,
    ClosePanel,
    SelectPrevious,
    SelectNext,
    LoadSelected,
    DeleteSelected,
    BeginNameEdit(TeamSide),
    EndNameEdit,
    TypeChar(char),
    EraseChar,
    ClearName,
}

/// Map a key event to a command under the given input mode.
pub(super) fn decode_key(mode: InputMode, key_event: &KeyEvent) -> Option<UiCommand> {
    match mode {
        InputMode::Scoreboard => decode_scoreboard_key(key_event),
        InputMode::SavedGamesPanel => decode_panel_key(key_event),
        InputMode::NameEdit(_) => decode_edit_key(key_event),
    }
}

fn has_command_modifier(key_event: &KeyEvent) -> bool {
    key_event
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

/// The possession counter bound to a hint character, if any.
fn stat_for_key(key: char) -> Option<StatKind> {
    StatKind::ALL
        .iter()
        .copied()
        .find(|kind| stat_key_hint(*kind) == key)
}

fn decode_scoreboard_key(key_event: &KeyEvent) -> Option<UiCommand> {
    // Keep Ctrl/Alt chords (Ctrl+C and friends) away from the counters.
    if has_command_modifier(key_event) {
        return None;
    }

    let command = match key_event.code {
        KeyCode::Char('q') => UiCommand::Quit,
        KeyCode::Char(' ') => UiCommand::Apply(Action::ToggleClock),
        KeyCode::Char('g') => UiCommand::Apply(Action::AdjustScore {
            side: TeamSide::Home,
            kind: ScoreKind::Goals,
        }),
        KeyCode::Char('G') => UiCommand::Apply(Action::AdjustScore {
            side: TeamSide::Away,
            kind: ScoreKind::Goals,
        }),
        KeyCode::Char('p') => UiCommand::Apply(Action::AdjustScore {
            side: TeamSide::Home,
            kind: ScoreKind::Points,
        }),
        KeyCode::Char('P') => UiCommand::Apply(Action::AdjustScore {
            side: TeamSide::Away,
            kind: ScoreKind::Points,
        }),
        KeyCode::Char('h') => UiCommand::Apply(Action::ToggleHalf),
        KeyCode::Char('-') => UiCommand::Apply(Action::ToggleAdjustMode),
        KeyCode::Char('o') => UiCommand::Apply(Action::ToggleTotals),
        KeyCode::Char('r') => UiCommand::Apply(Action::Reset),
        KeyCode::Char('v') => UiCommand::SaveGame,
        KeyCode::Char('m') => UiCommand::OpenPanel,
        KeyCode::Char('e') => UiCommand::BeginNameEdit(TeamSide::Home),
        KeyCode::Char('E') => UiCommand::BeginNameEdit(TeamSide::Away),
        KeyCode::Char(c) => UiCommand::Apply(Action::AdjustStat {
            side: TeamSide::Home,
            kind: stat_for_key(c)?,
        }),
        _ => return None,
    };
    Some(command)
}

fn decode_panel_key(key_event: &KeyEvent) -> Option<UiCommand> {
    if has_command_modifier(key_event) {
        return None;
    }

    let command = match key_event.code {
        KeyCode::Char('q') => UiCommand::Quit,
        KeyCode::Up => UiCommand::SelectPrevious,
        KeyCode::Down => UiCommand::SelectNext,
        KeyCode::Enter => UiCommand::LoadSelected,
        KeyCode::Char('d') => UiCommand::DeleteSelected,
        KeyCode::Char('m') | KeyCode::Esc => UiCommand::ClosePanel,
        _ => return None,
    };
    Some(command)
}

fn decode_edit_key(key_event: &KeyEvent) -> Option<UiCommand> {
    if key_event.modifiers.contains(KeyModifiers::CONTROL) {
        return match key_event.code {
            KeyCode::Char('u') => Some(UiCommand::ClearName),
            _ => None,
        };
    }

    let command = match key_event.code {
        KeyCode::Enter | KeyCode::Esc => UiCommand::EndNameEdit,
        KeyCode::Backspace => UiCommand::EraseChar,
        KeyCode::Char(c) => UiCommand::TypeChar(c),
        _ => return None,
    };
    Some(command)
}

/// Handle a keyboard event. Returns true when the user asked to quit.
pub(super) fn handle_key_event(state: &mut InteractiveState, key_event: &KeyEvent) -> bool {
    tracing::debug!(
        "Key event: {:?}, modifiers: {:?}",
        key_event.code,
        key_event.modifiers
    );

    let Some(command) = decode_key(state.ui.mode, key_event) else {
        return false;
    };

    match command {
        UiCommand::Quit => {
            tracing::info!("Quit requested");
            return true;
        }
        UiCommand::Apply(action) => state.apply(action),
        UiCommand::SaveGame => state.save_game(),
        UiCommand::OpenPanel => state.open_panel(),
        UiCommand::ClosePanel => state.close_panel(),
        UiCommand::SelectPrevious => state.select_previous(),
        UiCommand::SelectNext => state.select_next(),
        UiCommand::LoadSelected => state.load_selected(),
        UiCommand::DeleteSelected => state.delete_selected(),
        UiCommand::BeginNameEdit(side) => state.begin_name_edit(side),
        UiCommand::EndNameEdit => state.end_name_edit(),
        UiCommand::TypeChar(c) => state.type_name_char(c),
        UiCommand::EraseChar => state.erase_name_char(),
        UiCommand::ClearName => state.clear_edited_name(),
    }

    false
}
