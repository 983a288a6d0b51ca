//! Environment-driven logging configuration
//!
//! Logging verbosity and output format are the only runtime-configurable
//! aspects of the tokenizer. Everything else is compile-time constant.

use super::events::LogLevel;

/// Environment variable selecting the minimum log level
pub const LOG_LEVEL_ENV: &str = "GML_LOG";

/// Environment variable selecting JSON output (`GML_LOG_FORMAT=json`)
pub const LOG_FORMAT_ENV: &str = "GML_LOG_FORMAT";

/// Get the configured minimum log level (default: Info)
pub fn get_min_log_level() -> LogLevel {
    match std::env::var(LOG_LEVEL_ENV).as_deref() {
        Ok("error") => LogLevel::Error,
        Ok("warn") => LogLevel::Warning,
        Ok("info") => LogLevel::Info,
        Ok("debug") => LogLevel::Debug,
        _ => LogLevel::Info,
    }
}

/// Whether the structured (JSON) logger should be used
pub fn use_structured_logging() -> bool {
    matches!(std::env::var(LOG_FORMAT_ENV).as_deref(), Ok("json"))
}

/// Validate the logging configuration
pub fn validate_config() -> Result<(), String> {
    if let Ok(level) = std::env::var(LOG_LEVEL_ENV) {
        if !matches!(level.as_str(), "error" | "warn" | "info" | "debug") {
            return Err(format!(
                "{} must be one of error|warn|info|debug, got '{}'",
                LOG_LEVEL_ENV, level
            ));
        }
    }

    if let Ok(format) = std::env::var(LOG_FORMAT_ENV) {
        if !matches!(format.as_str(), "text" | "json") {
            return Err(format!(
                "{} must be text or json, got '{}'",
                LOG_FORMAT_ENV, format
            ));
        }
    }

    Ok(())
}

/// Summarize the effective configuration
pub fn get_config_summary() -> String {
    format!(
        "Logging configuration: min_level={}, structured={}",
        get_min_log_level().as_str(),
        use_structured_logging()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level_is_info() {
        // Only valid when the env var is unset, which is the usual test state
        if std::env::var(LOG_LEVEL_ENV).is_err() {
            assert_eq!(get_min_log_level(), LogLevel::Info);
        }
    }

    #[test]
    fn test_config_summary_mentions_level() {
        let summary = get_config_summary();
        assert!(summary.contains("min_level="));
    }
}
