use crate::teletext_ui::colors::{key_hint_fg, text_fg};
use crossterm::{
    execute,
    style::{Color, Print, ResetColor, SetForegroundColor},
};
use std::io::stdout;

const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prints a boxed set of lines in the teletext palette. Lines carrying a
/// color override are drawn in that color, the rest in teletext white.
fn print_status_box(lines: &[(String, Option<Color>)]) {
    let content_width = lines
        .iter()
        .map(|(line, _)| line.chars().count())
        .max()
        .unwrap_or(0);
    let border_width = content_width + 2;

    let top = format!("╔{:═<border_width$}╗", "");
    let sep = format!("╠{:═<border_width$}╣", "");
    let bottom = format!("╚{:═<border_width$}╝", "");

    execute!(
        stdout(),
        SetForegroundColor(text_fg()),
        Print(format!("{top}\n"))
    )
    .ok();
    for (i, (line, color)) in lines.iter().enumerate() {
        execute!(
            stdout(),
            SetForegroundColor(text_fg()),
            Print("║ "),
            SetForegroundColor(color.unwrap_or(text_fg())),
            Print(format!("{line:<content_width$}")),
            SetForegroundColor(text_fg()),
            Print(" ║\n"),
        )
        .ok();
        // Title separator
        if i == 0 && lines.len() > 1 {
            execute!(stdout(), Print(format!("{sep}\n"))).ok();
        }
    }
    execute!(stdout(), Print(format!("{bottom}\n")), ResetColor).ok();
}

/// Prints the logo and the compiled-in version in a status box.
pub fn print_version_banner() {
    print_logo();
    println!();
    print_status_box(&[
        ("GAA Tally".to_string(), None),
        (
            format!("Version: {CURRENT_VERSION}"),
            Some(key_hint_fg()),
        ),
        (
            "Teletext scoreboard for Gaelic football".to_string(),
            None,
        ),
    ]);
}

pub fn print_logo() {
    execute!(
        stdout(),
        SetForegroundColor(key_hint_fg()),
        Print(format!(
            "\n{}",
            r#"
░██████╗░░█████╗░░█████╗░  ░░███╗░░███████╗░█████╗░
██╔════╝░██╔══██╗██╔══██╗  ░████║░░╚════██║██╔══██╗
██║░░██╗░███████║███████║  ██╔██║░░░░░░██╔╝╚█████╔╝
██║░░╚██╗██╔══██║██╔══██║  ╚═╝██║░░░░░██╔╝░██╔══██╗
╚██████╔╝██║░░██║██║░░██║  ███████╗░░██╔╝░░╚█████╔╝
░╚═════╝░╚═╝░░╚═╝╚═╝░░╚═╝  ╚══════╝░░╚═╝░░░░╚════╝░
"#
        )),
        ResetColor
    )
    .ok();
}
