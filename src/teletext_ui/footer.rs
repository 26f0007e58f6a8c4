//! Footer band: key-binding hints in the header colors.

use super::colors::{get_ansi_code, header_bg};

/// Hints shown while the scoreboard itself has focus.
const SCOREBOARD_CONTROLS: &str = "q=Quit SPC=Clock h=Half -=Minus o=Totals v=Save m=Games r=Reset";

/// Hints shown while the saved-games panel has focus.
const PANEL_CONTROLS: &str = "Up/Down=Select ENTER=Load d=Delete m=Close";

/// Appends the footer band to the render buffer.
pub fn render_footer(buffer: &mut String, footer_y: usize, width: usize, panel_open: bool) {
    let footer_text = if panel_open {
        PANEL_CONTROLS
    } else {
        SCOREBOARD_CONTROLS
    };

    let footer_width = width.saturating_sub(6);
    let header_bg_code = get_ansi_code(header_bg(), 21);

    // footer_y is 0-based; ANSI cursor rows are 1-based
    buffer.push_str(&format!(
        "\x1b[{};1H\x1b[48;5;{}m\x1b[38;5;21m{}\x1b[38;5;231m{:^width$}\x1b[38;5;21m{}\x1b[0m",
        footer_y + 1,
        header_bg_code,
        "   ",
        footer_text,
        "   ",
        width = footer_width
    ));
}

/// Footer row: pinned to the bottom in interactive mode, directly after
/// the content otherwise.
pub fn calculate_footer_position(
    ignore_height_limit: bool,
    current_line: usize,
    screen_height: u16,
) -> usize {
    if ignore_height_limit {
        current_line + 1
    } else {
        screen_height.saturating_sub(1) as usize
    }
}
