//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Scoring rules
pub mod scoring {
    /// Point value of a goal (a goal is worth three points)
    pub const GOAL_VALUE: u32 = 3;

    /// Point value of a point (over the bar)
    pub const POINT_VALUE: u32 = 1;
}

/// Match clock configuration
pub mod clock {
    /// Interval between elapsed-time ticks (milliseconds)
    pub const TICK_INTERVAL_MS: u64 = 1000;
}

/// UI polling intervals in milliseconds
pub mod polling {
    /// Keyboard polling interval for the interactive loop
    pub const EVENT_POLL_MS: u64 = 50;
}

/// UI layout constants
pub mod ui {
    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Column where the away team's figures start
    pub const AWAY_COLUMN: usize = 38;

    /// Column where the home team's figures start
    pub const HOME_COLUMN: usize = 24;

    /// Maximum saved games shown in the panel at once
    pub const MAX_VISIBLE_SAVED_GAMES: usize = 8;
}

/// Environment variable names
pub mod env_vars {
    /// Environment variable for the default home team name
    pub const HOME_TEAM: &str = "GAA_TALLY_HOME_TEAM";

    /// Environment variable for the default away team name
    pub const AWAY_TEAM: &str = "GAA_TALLY_AWAY_TEAM";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "GAA_TALLY_LOG_FILE";
}

// Re-export commonly used validation constants at the module level for convenience
#[allow(unused_imports)]
pub use validation::MAX_TEAM_NAME_LENGTH;

/// Validation limits
pub mod validation {
    /// Maximum length for team names; longer edits are rejected outright
    pub const MAX_TEAM_NAME_LENGTH: usize = 250;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_constants_are_reasonable() {
        // A goal must always outweigh a point
        assert!(scoring::GOAL_VALUE > scoring::POINT_VALUE);
        assert_eq!(scoring::GOAL_VALUE, 3);
        assert_eq!(scoring::POINT_VALUE, 1);
    }

    #[test]
    fn test_clock_tick_is_one_second() {
        assert_eq!(clock::TICK_INTERVAL_MS, 1000);
    }

    #[test]
    fn test_polling_is_faster_than_clock_tick() {
        // The event loop must wake several times per clock tick so
        // key handling stays responsive while the match is running.
        assert!(polling::EVENT_POLL_MS < clock::TICK_INTERVAL_MS / 2);
    }

    #[test]
    fn test_ui_constants_are_reasonable() {
        let margin = ui::CONTENT_MARGIN;
        let home_col = ui::HOME_COLUMN;
        let away_col = ui::AWAY_COLUMN;

        assert!(margin > 0);
        assert!(home_col > margin);
        assert!(away_col > home_col);
        assert!(ui::MAX_VISIBLE_SAVED_GAMES > 0);
    }

    #[test]
    fn test_env_var_names_are_not_empty() {
        assert!(!env_vars::HOME_TEAM.is_empty());
        assert!(!env_vars::AWAY_TEAM.is_empty());
        assert!(!env_vars::LOG_FILE.is_empty());
    }

    #[test]
    fn test_team_name_cap() {
        assert_eq!(validation::MAX_TEAM_NAME_LENGTH, 250);
    }
}
