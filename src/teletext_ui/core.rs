//! The scoreboard page: one teletext screen of match state.
//!
//! A page is a value built from the current [`MatchState`] plus the
//! interactive surface around it (saved-games panel, name editing).
//! Rendering is double buffered: the full screen is composed into a
//! single String of ANSI escapes and written with one `Print`, which
//! keeps redraws flicker-free.

use std::io::{Stdout, Write};

use crossterm::{execute, style::Print};

use super::colors::*;
use super::footer::{calculate_footer_position, render_footer};
use super::score_format::{
    format_lead_label, format_match_time, format_score_line, truncate_name,
};
use crate::constants::ui::{AWAY_COLUMN, CONTENT_MARGIN, HOME_COLUMN, MAX_VISIBLE_SAVED_GAMES};
use crate::error::AppError;
use crate::match_tracker::{MatchState, StatKind, TeamSide};

/// Teletext page number for the scoreboard.
pub const SCOREBOARD_PAGE: u16 = 178;

/// Column for second-half snapshot figures in the totals view.
pub(super) const SECOND_HALF_COLUMN: usize = 48;
/// Left edge of the saved-games panel overlay.
pub(super) const PANEL_COLUMN: usize = 52;
/// Characters reserved for the saved-games panel.
pub(super) const PANEL_WIDTH: usize = 26;
/// Widest team name shown in a column before truncation.
const NAME_WIDTH: usize = 13;

/// Key hint printed next to a possession counter row.
///
/// The input handler accepts exactly these characters, so the printed
/// hints can never drift from the live bindings.
pub fn stat_key_hint(kind: StatKind) -> char {
    match kind {
        StatKind::KickoutsWon => 'k',
        StatKind::KickoutsLost => 'K',
        StatKind::TurnoversWon => 't',
        StatKind::PossessionsLost => 'l',
        StatKind::Attacks => 'a',
        StatKind::Shots => 's',
        StatKind::Wides => 'w',
    }
}

/// One rendered teletext screen of the scoreboard.
#[derive(Debug)]
pub struct ScoreboardPage {
    page_number: u16,
    title: String,
    state: MatchState,
    match_date: Option<String>,
    saved_games: Vec<String>,
    panel_open: bool,
    panel_selection: usize,
    name_edit: Option<TeamSide>,
    screen_height: u16,
    show_footer: bool,
    ignore_height_limit: bool,
}

impl ScoreboardPage {
    /// Creates an interactive page sized to the current terminal.
    ///
    /// # Arguments
    /// * `state` - The scoreboard snapshot this page displays
    pub fn new(state: MatchState) -> Self {
        // Get terminal size, fallback to reasonable default if can't get size
        let (_, screen_height) = crossterm::terminal::size().unwrap_or((80, 24));

        ScoreboardPage {
            page_number: SCOREBOARD_PAGE,
            title: "GAA TALLY".to_string(),
            state,
            match_date: None,
            saved_games: Vec::new(),
            panel_open: false,
            panel_selection: 0,
            name_edit: None,
            screen_height,
            show_footer: true,
            ignore_height_limit: false,
        }
    }

    /// Creates a page for `--once` output: no footer, content-relative
    /// layout, fixed default dimensions.
    pub fn non_interactive(state: MatchState) -> Self {
        let mut page = Self::new(state);
        page.show_footer = false;
        page.ignore_height_limit = true;
        page.screen_height = 24;
        page
    }

    /// Sets the match date shown in the header, as `%Y-%m-%d`.
    pub fn set_match_date(&mut self, date: String) {
        self.match_date = Some(date);
    }

    /// Fixes the screen height, mainly for tests.
    pub fn set_screen_height(&mut self, height: u16) {
        self.screen_height = height;
    }

    /// Re-reads the terminal size after a resize event.
    pub fn handle_resize(&mut self) {
        if let Ok((_, height)) = crossterm::terminal::size() {
            self.screen_height = height;
        }
    }

    /// Opens the saved-games panel over the right side of the page.
    ///
    /// # Arguments
    /// * `labels` - Panel entries in store order
    /// * `selection` - Index of the highlighted entry
    pub fn open_panel(&mut self, labels: Vec<String>, selection: usize) {
        self.panel_open = true;
        self.saved_games = labels;
        self.panel_selection = selection;
    }

    /// Shows the name-edit prompt for one side.
    pub fn set_name_edit(&mut self, side: TeamSide) {
        self.name_edit = Some(side);
    }

    /// Renders the page using double buffering for reduced flickering.
    /// All escape sequences and content are built in a buffer first,
    /// then written in a single operation.
    pub fn render_buffered(&self, stdout: &mut Stdout) -> Result<(), AppError> {
        let width = if self.ignore_height_limit {
            80u16
        } else {
            // Hide cursor to prevent visual artifacts during rendering
            execute!(stdout, crossterm::cursor::Hide)?;
            let (width, _) = crossterm::terminal::size()?;
            width
        };

        let buffer = self.build_screen(width);
        execute!(stdout, Print(buffer))?;

        if !self.ignore_height_limit {
            execute!(stdout, crossterm::cursor::Show)?;
        }
        stdout.flush()?;
        Ok(())
    }

    /// Composes the whole screen as one ANSI string.
    pub(crate) fn build_screen(&self, width: u16) -> String {
        let width = width as usize;
        let mut buffer = String::with_capacity(self.estimate_buffer_size(width));

        // Only clear the screen in interactive mode
        if !self.ignore_height_limit {
            buffer.push_str("\x1b[H"); // Move to home position
            buffer.push_str("\x1b[0J"); // Clear from cursor down
        }

        self.render_header(&mut buffer, width);

        let mut current_line: usize = 4;
        self.render_teams_block(&mut buffer, &mut current_line);
        current_line += 1;
        self.render_possession_block(&mut buffer, &mut current_line);

        if self.state.adjust_mode.is_subtract() {
            current_line += 1;
            put(
                &mut buffer,
                current_line,
                CONTENT_MARGIN + 1,
                get_ansi_code(warning_fg(), 226),
                "SUBTRACT MODE - COUNTERS STEP DOWN",
            );
            current_line += 1;
        }

        if let Some(side) = self.name_edit {
            self.render_edit_prompt(&mut buffer, width, side);
        }

        if self.panel_open {
            self.render_saved_games_panel(&mut buffer);
        }

        if self.show_footer {
            let footer_y = calculate_footer_position(
                self.ignore_height_limit,
                current_line,
                self.screen_height,
            );
            render_footer(&mut buffer, footer_y, width, self.panel_open);
        }

        if self.ignore_height_limit {
            // Park the cursor below the content so the shell prompt
            // lands under the page, not inside it.
            buffer.push_str(&format!("\x1b[{};1H", current_line + 1));
        }

        buffer
    }

    fn render_header(&self, buffer: &mut String, width: usize) {
        let header_text = if let Some(ref date) = self.match_date {
            let formatted_date = match chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d") {
                Ok(date) => date.format("%d.%m.%Y").to_string(),
                Err(_) => date.clone(),
            };
            format!("GAELIC FOOTBALL {} {}", self.page_number, formatted_date)
        } else {
            format!("GAELIC FOOTBALL {}", self.page_number)
        };

        let title_bg_code = get_ansi_code(title_bg(), 46);
        let header_fg_code = get_ansi_code(header_fg(), 21);
        let header_bg_code = get_ansi_code(header_bg(), 21);
        let subheader_fg_code = get_ansi_code(subheader_fg(), 46);
        let header_width = width.saturating_sub(20);

        buffer.push_str(&format!(
            "\x1b[1;1H\x1b[48;5;{}m\x1b[38;5;{}m{:<20}\x1b[48;5;{}m\x1b[38;5;231m{:>width$}\x1b[0m",
            title_bg_code,
            header_fg_code,
            self.title,
            header_bg_code,
            header_text,
            width = header_width
        ));

        // Subheader: phase on the left, match clock on the right
        let clock_text = if self.state.running {
            format!("{} LIVE", format_match_time(self.state.elapsed_seconds))
        } else {
            format_match_time(self.state.elapsed_seconds)
        };
        buffer.push_str(&format!(
            "\x1b[2;1H\x1b[38;5;{}m{:<20}{:>width$}\x1b[0m",
            subheader_fg_code,
            self.state.phase.label(),
            clock_text,
            width = header_width
        ));
    }

    /// Team names, the score line per side, totals, and the lead line.
    fn render_teams_block(&self, buffer: &mut String, line: &mut usize) {
        let text_code = get_ansi_code(text_fg(), 231);
        let score_code = get_ansi_code(score_fg(), 46);
        let hint_code = get_ansi_code(key_hint_fg(), 51);

        let home_name = truncate_name(&self.state.home.name.to_uppercase(), NAME_WIDTH);
        let away_name = truncate_name(&self.state.away.name.to_uppercase(), NAME_WIDTH);
        put(buffer, *line, HOME_COLUMN, text_code, &home_name);
        put(buffer, *line, AWAY_COLUMN, text_code, &away_name);
        *line += 1;

        let home_score = format_score_line(self.state.home.goals, self.state.home.points);
        let away_score = format_score_line(self.state.away.goals, self.state.away.points);
        put(buffer, *line, CONTENT_MARGIN + 1, text_code, "SCORE");
        put(buffer, *line, HOME_COLUMN - 5, hint_code, "g/p");
        put(buffer, *line, HOME_COLUMN, text_code, &home_score);
        put(buffer, *line, AWAY_COLUMN - 5, hint_code, "G/P");
        put(buffer, *line, AWAY_COLUMN, text_code, &away_score);
        *line += 1;

        put(buffer, *line, CONTENT_MARGIN + 1, text_code, "TOTAL");
        put(
            buffer,
            *line,
            HOME_COLUMN,
            score_code,
            &format!("{:>3}", self.state.home.total()),
        );
        put(
            buffer,
            *line,
            AWAY_COLUMN,
            score_code,
            &format!("{:>3}", self.state.away.total()),
        );
        *line += 1;

        put(
            buffer,
            *line,
            CONTENT_MARGIN + 1,
            score_code,
            &format_lead_label(self.state.lead_margin()),
        );
        *line += 1;
    }

    /// The seven home-side possession counters, with the half-split
    /// columns added while the totals view is on.
    fn render_possession_block(&self, buffer: &mut String, line: &mut usize) {
        let text_code = get_ansi_code(text_fg(), 231);
        let subheader_code = get_ansi_code(subheader_fg(), 46);
        let hint_code = get_ansi_code(key_hint_fg(), 51);

        put(buffer, *line, CONTENT_MARGIN + 1, subheader_code, "POSSESSION");
        put(buffer, *line, HOME_COLUMN, subheader_code, "NOW");
        if self.state.show_totals {
            put(buffer, *line, AWAY_COLUMN, subheader_code, "1ST");
            put(buffer, *line, SECOND_HALF_COLUMN, subheader_code, "2ND");
        }
        *line += 1;

        for kind in StatKind::ALL {
            put(
                buffer,
                *line,
                CONTENT_MARGIN + 1,
                hint_code,
                &stat_key_hint(kind).to_string(),
            );
            put(buffer, *line, CONTENT_MARGIN + 3, text_code, kind.label());
            put(
                buffer,
                *line,
                HOME_COLUMN,
                text_code,
                &format!("{:>3}", self.state.home.stat(kind)),
            );
            if self.state.show_totals {
                put(
                    buffer,
                    *line,
                    AWAY_COLUMN,
                    text_code,
                    &format!("{:>3}", self.state.first_half.stat(kind)),
                );
                put(
                    buffer,
                    *line,
                    SECOND_HALF_COLUMN,
                    text_code,
                    &format!("{:>3}", self.state.second_half.stat(kind)),
                );
            }
            *line += 1;
        }
    }

    /// Name-edit prompt on the spare line under the subheader. Long
    /// names scroll so the cursor end stays visible.
    fn render_edit_prompt(&self, buffer: &mut String, width: usize, side: TeamSide) {
        let warning_code = get_ansi_code(warning_fg(), 226);
        let prefix = match side {
            TeamSide::Home => "EDIT HOME NAME: ",
            TeamSide::Away => "EDIT AWAY NAME: ",
        };

        let name = &self.state.team(side).name;
        let available = width.saturating_sub(CONTENT_MARGIN + prefix.len() + 2);
        let shown: String = if name.chars().count() > available {
            let tail: Vec<char> = name.chars().rev().take(available).collect();
            tail.into_iter().rev().collect()
        } else {
            name.clone()
        };

        put(
            buffer,
            3,
            CONTENT_MARGIN + 1,
            warning_code,
            &format!("{prefix}{shown}_"),
        );
    }

    /// Saved-games panel overlaid on the right side, scrolled so the
    /// selection stays visible.
    fn render_saved_games_panel(&self, buffer: &mut String) {
        let text_code = get_ansi_code(text_fg(), 231);
        let subheader_code = get_ansi_code(subheader_fg(), 46);
        let selection_code = get_ansi_code(selection_fg(), 201);

        let mut line = 4;
        put(buffer, line, PANEL_COLUMN, subheader_code, "SAVED GAMES");
        line += 1;

        if self.saved_games.is_empty() {
            put(buffer, line, PANEL_COLUMN, text_code, "(none saved)");
            return;
        }

        let start = self
            .panel_selection
            .saturating_sub(MAX_VISIBLE_SAVED_GAMES - 1);
        let end = (start + MAX_VISIBLE_SAVED_GAMES).min(self.saved_games.len());
        for (offset, label) in self.saved_games[start..end].iter().enumerate() {
            let is_selected = start + offset == self.panel_selection;
            let (marker, color) = if is_selected {
                ("> ", selection_code)
            } else {
                ("  ", text_code)
            };
            // Hard cut: the label ends in the capture time and a
            // word-boundary cut would drop it entirely.
            let shown: String = label.chars().take(PANEL_WIDTH - 2).collect();
            put(buffer, line, PANEL_COLUMN, color, &format!("{marker}{shown}"));
            line += 1;
        }
        if end < self.saved_games.len() {
            put(buffer, line, PANEL_COLUMN, text_code, "...");
        }
    }

    /// Rough upper bound on the rendered size, to avoid buffer growth
    /// mid-render.
    fn estimate_buffer_size(&self, width: usize) -> usize {
        let rows = 24usize.max(self.screen_height as usize);
        rows * (width + 32)
    }
}

/// Appends one positioned, colored text run to the buffer, using
/// 1-based ANSI cursor coordinates.
fn put(buffer: &mut String, line: usize, col: usize, color: u8, text: &str) {
    buffer.push_str(&format!("\x1b[{line};{col}H\x1b[38;5;{color}m{text}\x1b[0m"));
}
