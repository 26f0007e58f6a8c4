use crate::constants::validation::MAX_TEAM_NAME_LENGTH;
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `home_team` - Default home team name to validate
/// * `away_team` - Default away team name to validate
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - Team names cannot be blank
/// - Team names must stay within the scoreboard's length cap
/// - If log file path is provided, it cannot be empty
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(
    home_team: &str,
    away_team: &str,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    for (label, name) in [("Home", home_team), ("Away", away_team)] {
        if name.trim().is_empty() {
            return Err(AppError::config_error(format!(
                "{label} team name cannot be blank"
            )));
        }
        if name.chars().count() > MAX_TEAM_NAME_LENGTH {
            return Err(AppError::config_error(format!(
                "{label} team name exceeds {MAX_TEAM_NAME_LENGTH} characters"
            )));
        }
    }

    // Validate log file path if provided
    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            // Try to create the directory to validate the path
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_reasonable_names() {
        assert!(validate_config("Na Fianna", "St Brigid's", &None).is_ok());
    }

    #[test]
    fn test_rejects_blank_names() {
        assert!(validate_config("", "Away", &None).is_err());
        assert!(validate_config("Home", "   ", &None).is_err());
    }

    #[test]
    fn test_rejects_over_length_names() {
        let long = "x".repeat(MAX_TEAM_NAME_LENGTH + 1);
        assert!(validate_config(&long, "Away", &None).is_err());
        assert!(validate_config("Home", &long, &None).is_err());

        let exact = "y".repeat(MAX_TEAM_NAME_LENGTH);
        assert!(validate_config(&exact, "Away", &None).is_ok());
    }

    #[test]
    fn test_rejects_empty_log_path() {
        assert!(validate_config("Home", "Away", &Some(String::new())).is_err());
    }

    #[test]
    fn test_log_path_parent_is_created() {
        let temp_dir = tempfile::tempdir().unwrap();
        let log_path = temp_dir
            .path()
            .join("nested")
            .join("gaa_tally.log")
            .to_string_lossy()
            .to_string();

        assert!(validate_config("Home", "Away", &Some(log_path)).is_ok());
        assert!(temp_dir.path().join("nested").exists());
    }
}
