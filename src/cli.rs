use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Determines if the application should run in non-interactive mode
/// Non-interactive mode is used when any of these conditions are met:
/// - --once flag is set (render once and exit)
/// - config operations are requested
/// - --version flag is set
/// - --debug mode is enabled (debug logging goes to stdout)
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || has_config_operations(args) || args.version || args.debug
}

/// True when any flag asks to read or change the config file.
pub fn has_config_operations(args: &Args) -> bool {
    args.set_home_team.is_some()
        || args.set_away_team.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// Gaelic Football Match Scoreboard
///
/// A teletext-style scoreboard for keeping match stats live from the sideline.
/// Tracks goals and points for both teams, seven possession counters, a match
/// clock, and half-by-half breakdowns, with an in-memory list of saved games.
///
/// In interactive mode (default):
/// - Press Space to start or stop the match clock (also moves between halves)
/// - Press 'g'/'p' for a home goal/point, 'G'/'P' for the away side
/// - Press the highlighted key next to a counter to bump it
/// - Press '-' to switch into subtract mode for corrections
/// - Press 'h' to move to the next half, 'o' to show half totals
/// - Press 'v' to save the game, 'm' to browse saved games
/// - Press 'e'/'E' to edit a team name, 'r' to reset, 'q' to quit
#[derive(Parser, Debug)]
#[command(author = "Eoin Brennan", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Render the empty scoreboard once and exit immediately. Useful for
    /// checking the layout or piping the page somewhere.
    #[arg(short, long)]
    pub once: bool,

    /// Home team name for this run. Overrides the configured default.
    #[arg(long = "home", value_name = "NAME", help_heading = "Teams")]
    pub home: Option<String>,

    /// Away team name for this run. Overrides the configured default.
    #[arg(long = "away", value_name = "NAME", help_heading = "Teams")]
    pub away: Option<String>,

    /// Save a new default home team name to the config file.
    #[arg(
        long = "set-home-team",
        value_name = "NAME",
        help_heading = "Configuration"
    )]
    pub set_home_team: Option<String>,

    /// Save a new default away team name to the config file.
    #[arg(
        long = "set-away-team",
        value_name = "NAME",
        help_heading = "Configuration"
    )]
    pub set_away_team: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode which doesn't clear the terminal before drawing the UI.
    /// Debug logs are written to stdout as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
