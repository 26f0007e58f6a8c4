//! Score and time formatting for the scoreboard page.

/// Formats elapsed match seconds as zero-padded `MM:SS`.
///
/// Minutes are not capped: extra time past 99 minutes simply widens the
/// field.
pub fn format_match_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

/// The per-team score line, goals and points side by side.
pub fn format_score_line(goals: u32, points: u32) -> String {
    format!("{goals} : {points}")
}

/// Lead line shown under the scores, from the home side's point of
/// view. A margin of zero still reads as leading, matching how the
/// scoreboard has always shown a level game.
pub fn format_lead_label(margin: i64) -> String {
    if margin >= 0 {
        format!("LEADING BY {margin}")
    } else {
        format!("TRAILING BY {}", margin.abs())
    }
}

/// Truncates a display name to fit a column, preferring to cut at a
/// word boundary when one falls inside the limit.
pub fn truncate_name(name: &str, max_length: usize) -> String {
    if name.chars().count() <= max_length {
        return name.to_string();
    }

    let mut best_pos = max_length;
    for (count, c) in name.chars().enumerate().take(max_length) {
        if c == ' ' || c == '-' {
            best_pos = count;
        }
    }

    name.chars().take(best_pos).collect()
}
