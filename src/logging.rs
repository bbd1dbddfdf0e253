//! Logging initialization for stepview.
//!
//! TUI mode: logs to `{state}/logs/stepview-{datetime}.log`
//! CLI mode: logs to stderr

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Result of logging initialization
pub struct LoggingHandle {
    /// Guard that must be kept alive for the duration of the program.
    /// When dropped, ensures all buffered logs are flushed.
    pub _guard: Option<WorkerGuard>,

    /// Path to the log file (only set in TUI mode with file logging enabled)
    pub log_file_path: Option<PathBuf>,
}

/// Level filter: `--debug` beats the configured level; `RUST_LOG` beats both.
fn filter_directive(config: &Config, debug_override: bool) -> String {
    let log_level = if debug_override {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    std::env::var("RUST_LOG").unwrap_or(log_level)
}

fn log_file_name(now: chrono::DateTime<chrono::Utc>) -> String {
    format!("stepview-{}.log", now.format("%Y%m%dT%H%M%SZ"))
}

/// Whether this run writes to a file instead of stderr
fn logs_to_file(config: &Config, is_tui_mode: bool) -> bool {
    is_tui_mode && config.logging.to_file
}

/// Initialize logging based on mode and configuration.
///
/// The terminal belongs to the wizard in TUI mode, so logs go to a file there.
pub fn init_logging(
    config: &Config,
    is_tui_mode: bool,
    debug_override: bool,
) -> Result<LoggingHandle> {
    let filter = tracing_subscriber::EnvFilter::new(filter_directive(config, debug_override));

    if logs_to_file(config, is_tui_mode) {
        let logs_dir = config.logs_path();
        std::fs::create_dir_all(&logs_dir)?;

        let log_filename = log_file_name(chrono::Utc::now());
        let log_file_path = logs_dir.join(&log_filename);

        let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false) // No ANSI codes in log files
                    .with_writer(non_blocking),
            )
            .init();

        Ok(LoggingHandle {
            _guard: Some(guard),
            log_file_path: Some(log_file_path),
        })
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();

        Ok(LoggingHandle {
            _guard: None,
            log_file_path: None,
        })
    }
}

/// Print the session log location if anything was written to it
pub fn report_log_file(log_file_path: Option<&Path>) {
    let Some(log_path) = log_file_path else {
        return;
    };
    if let Ok(metadata) = log_path.metadata() {
        if metadata.len() > 0 {
            eprintln!("Session log: {}", log_path.display());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        let mut config = Config::default();
        config.paths.state = temp_dir.path().to_string_lossy().to_string();
        config
    }

    #[test]
    fn test_logs_path_inside_state_dir() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);

        let logs_dir = config.logs_path();
        assert!(logs_dir.ends_with("logs"));
        assert!(logs_dir.starts_with(temp_dir.path()));
    }

    #[test]
    fn test_log_file_name_format() {
        let at = chrono::Utc.with_ymd_and_hms(2026, 3, 4, 5, 6, 7).unwrap();
        assert_eq!(log_file_name(at), "stepview-20260304T050607Z.log");
    }

    #[test]
    fn test_cli_mode_logs_to_stderr() {
        let temp_dir = TempDir::new().unwrap();
        let config = test_config(&temp_dir);
        assert!(!logs_to_file(&config, false));
        assert!(logs_to_file(&config, true));
    }

    #[test]
    fn test_tui_mode_with_file_disabled() {
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.to_file = false;
        assert!(!logs_to_file(&config, true));
    }

    #[test]
    fn test_debug_override_beats_config_level() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let mut config = test_config(&temp_dir);
        config.logging.level = "warn".to_string();
        assert_eq!(filter_directive(&config, false), "warn");
        assert_eq!(filter_directive(&config, true), "debug");
    }

    #[test]
    fn test_report_ignores_missing_or_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let empty = temp_dir.path().join("empty.log");
        std::fs::write(&empty, "").unwrap();

        // Neither call should panic
        report_log_file(None);
        report_log_file(Some(&empty));
        report_log_file(Some(&temp_dir.path().join("missing.log")));
    }
}
