//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Maximum accepted timeout in seconds.
const MAX_TIMEOUT_SECONDS: u64 = 3600;

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_user_agent(&config.http.user_agent)?;
    validate_timeout("index_timeout_seconds", config.http.index_timeout_seconds)?;
    validate_timeout("probe_timeout_seconds", config.http.probe_timeout_seconds)?;
    validate_timeout(
        "download_timeout_seconds",
        config.http.download_timeout_seconds,
    )?;

    Ok(())
}

/// Validate the user agent string.
pub fn validate_user_agent(user_agent: &str) -> Result<()> {
    if user_agent.trim().is_empty() {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot be empty".to_string(),
        });
    }

    if user_agent.chars().any(|c| c.is_control()) {
        return Err(Error::ConfigValidation {
            field: "user_agent".to_string(),
            message: "User agent cannot contain control characters".to_string(),
        });
    }

    Ok(())
}

/// Validate a timeout value.
pub fn validate_timeout(field: &str, seconds: u64) -> Result<()> {
    if seconds == 0 || seconds > MAX_TIMEOUT_SECONDS {
        return Err(Error::ConfigValidation {
            field: field.to_string(),
            message: format!(
                "Timeout must be between 1 and {} seconds (got {})",
                MAX_TIMEOUT_SECONDS, seconds
            ),
        });
    }

    Ok(())
}
