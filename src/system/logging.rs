//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;

use crate::config::LoggingConfig;
use crate::errors::{AppboardError, Result};

/// Log file used by the TUI when none is configured
pub const DEFAULT_TUI_LOG_FILE: &str = "appboard.log";

/// Where log lines go when no file is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    /// The terminal is owned by the TUI, so logs must go to a file
    Tui,
    /// CLI output goes to stdout, logs go to stderr
    Cli,
}

/// Resolve the file the logs should be written to, if any
pub fn resolve_log_file(config: &LoggingConfig, target: LogTarget) -> Option<String> {
    match config.file.as_deref() {
        Some(file) if !file.is_empty() => Some(file.to_string()),
        _ if target == LogTarget::Tui => Some(DEFAULT_TUI_LOG_FILE.to_string()),
        _ => None,
    }
}

/// Initialize logging system based on configuration
///
/// # Returns
/// * `WorkerGuard` - Must be kept alive for the duration of the program
///   to ensure non-blocking log writes are flushed
pub fn init_logging(config: &LoggingConfig, target: LogTarget) -> Result<WorkerGuard> {
    let log_file = resolve_log_file(config, target);

    let writer: Box<dyn std::io::Write + Send + Sync> = match log_file.as_deref() {
        Some(path) => {
            if let Some(parent) = Path::new(path).parent()
                && !parent.as_os_str().is_empty()
                && !parent.exists()
            {
                std::fs::create_dir_all(parent)?;
            }
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?;
            Box::new(file)
        }
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(log_file.is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| AppboardError::logging(e.to_string()))?;

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tui_falls_back_to_default_file() {
        let config = LoggingConfig::default();
        assert_eq!(
            resolve_log_file(&config, LogTarget::Tui).as_deref(),
            Some(DEFAULT_TUI_LOG_FILE)
        );
        assert_eq!(resolve_log_file(&config, LogTarget::Cli), None);
    }

    #[test]
    fn test_configured_file_wins() {
        let config = LoggingConfig {
            file: Some("logs/board.log".to_string()),
            ..LoggingConfig::default()
        };
        assert_eq!(
            resolve_log_file(&config, LogTarget::Cli).as_deref(),
            Some("logs/board.log")
        );
    }

    #[test]
    fn test_empty_file_is_treated_as_unset() {
        let config = LoggingConfig {
            file: Some(String::new()),
            ..LoggingConfig::default()
        };
        assert_eq!(resolve_log_file(&config, LogTarget::Cli), None);
    }
}
