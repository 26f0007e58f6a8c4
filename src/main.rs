// src/main.rs
use chrono::{Local, Utc};
use clap::Parser;
use crossterm::execute;
use gaa_tally::cli::Args;
use gaa_tally::config::Config;
use gaa_tally::error::AppError;
use gaa_tally::logging::setup_logging;
use gaa_tally::match_tracker::MatchState;
use gaa_tally::teletext_ui::ScoreboardPage;
use gaa_tally::{ui, version};
use std::io::stdout;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle version flag first
    if args.version {
        execute!(stdout(), crossterm::terminal::SetTitle("GAA TALLY 178"))?;
        version::print_version_banner();
        return Ok(());
    }

    // Handle configuration operations
    if args.list_config {
        execute!(stdout(), crossterm::terminal::SetTitle("GAA TALLY 178"))?;
        version::print_logo();
        Config::display().await?;
        return Ok(());
    }

    if args.set_home_team.is_some()
        || args.set_away_team.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
    {
        let mut config = Config::load().await.unwrap_or_default();

        if let Some(name) = args.set_home_team {
            config.home_team = name;
        }
        if let Some(name) = args.set_away_team {
            config.away_team = name;
        }
        if let Some(path) = args.new_log_file_path {
            config.log_file_path = Some(path);
        } else if args.clear_log_file_path {
            config.log_file_path = None;
            println!("Custom log file path cleared. Using default location.");
        }

        config.save().await?;
        println!("Config updated successfully!");
        return Ok(());
    }

    // Team names: command line beats config, config beats built-ins.
    let config = Config::load().await?;
    let home_team = args.home.unwrap_or(config.home_team);
    let away_team = args.away.unwrap_or(config.away_team);

    execute!(stdout(), crossterm::terminal::SetTitle("GAA TALLY 178"))?;

    if args.once {
        // Quick view mode - render a fresh scoreboard once and exit
        let mut page = ScoreboardPage::non_interactive(MatchState::new(&home_team, &away_team));
        page.set_match_date(
            Utc::now()
                .with_timezone(&Local)
                .format("%Y-%m-%d")
                .to_string(),
        );
        page.render_buffered(&mut stdout())?;
        println!(); // Add a newline at the end
        return Ok(());
    }

    ui::run_interactive_ui(&home_team, &away_team, args.debug).await
}
