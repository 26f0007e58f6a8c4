//! Teletext color palette.
//!
//! Classic Aertel-era look: blue header band, green accents, white
//! body text, cyan key hints, yellow warnings.

use crossterm::style::Color;

pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn score_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn key_hint_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn selection_fg() -> Color {
    Color::AnsiValue(201)
} // Bright magenta
pub fn warning_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow

/// Extracts the ANSI 256-color code from a crossterm color, with a
/// fallback for non-ANSI variants.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
