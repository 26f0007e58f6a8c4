// src/teletext_ui/mod.rs - Teletext-style scoreboard rendering

pub mod colors;
pub mod core;
pub mod footer;
pub mod score_format;

pub use core::{SCOREBOARD_PAGE, ScoreboardPage, stat_key_hint};
pub use score_format::{format_lead_label, format_match_time, format_score_line};
