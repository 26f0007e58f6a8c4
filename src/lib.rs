//! GAA Tally - a teletext-style scoreboard for Gaelic football
//!
//! This library tracks a single Gaelic football match: goals and points for
//! both teams, seven possession counters, a running match clock, half-by-half
//! breakdowns, and an in-memory store of saved games, all rendered as a
//! teletext page.
//!
//! # Examples
//!
//! ```rust,no_run
//! use gaa_tally::error::AppError;
//! use gaa_tally::match_tracker::{Action, MatchState, ScoreKind, TeamSide};
//! use gaa_tally::teletext_ui::ScoreboardPage;
//!
//! fn main() -> Result<(), AppError> {
//!     // Throw in, then a home goal
//!     let state = MatchState::new("Na Fianna", "Cuala")
//!         .apply(Action::ToggleClock)
//!         .apply(Action::AdjustScore {
//!             side: TeamSide::Home,
//!             kind: ScoreKind::Goals,
//!         });
//!
//!     // Render the page to stdout
//!     let page = ScoreboardPage::non_interactive(state);
//!     let mut stdout = std::io::stdout();
//!     page.render_buffered(&mut stdout)?;
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod match_tracker;
pub mod teletext_ui;
pub mod ui;
pub mod version;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::AppError;
pub use match_tracker::{Action, MatchPhase, MatchState, SavedGame, SavedGameStore};
pub use teletext_ui::ScoreboardPage;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
