//! Logging infrastructure for themed-themes.
//!
//! A small leveled logger: every accepted message is echoed to stderr and
//! appended to an optional log file. Warnings are counted for the summary at
//! the end of a run.

use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write as IoWrite;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

/// Log level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
}

impl LogLevel {
    /// Convert log level to string
    pub fn to_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            _ => Err(format!("Unknown log level: {}", s)),
        }
    }
}

/// Logger state
#[derive(Debug)]
struct Logger {
    /// Minimum log level to record
    min_level: LogLevel,
    /// Log file path
    file_path: Option<PathBuf>,
    /// Echo messages to stderr
    echo: bool,
    /// Warnings recorded so far
    warnings: usize,
}

impl Logger {
    fn new(file_path: Option<PathBuf>, min_level: LogLevel, echo: bool) -> Self {
        if let Some(path) = &file_path {
            if let Some(parent) = path.parent() {
                let _ = fs::create_dir_all(parent);
            }

            // Clear log file on startup
            if let Ok(mut file) = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
            {
                let _ = writeln!(
                    file,
                    "=== themed-themes run {} ===",
                    Local::now().to_rfc3339()
                );
            }
        }

        Self {
            min_level,
            file_path,
            echo,
            warnings: 0,
        }
    }

    /// Record a message if it passes the level filter
    fn add_entry(&mut self, level: LogLevel, message: &str) {
        if level < self.min_level {
            return;
        }

        if level == LogLevel::Warn {
            self.warnings += 1;
        }

        let timestamp = Local::now().format("%H:%M:%S");
        let line = format!("[{}] {}: {}", timestamp, level.to_str(), message);

        if self.echo {
            eprintln!("{}", line);
        }

        if let Some(path) = &self.file_path {
            if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(path) {
                let _ = writeln!(file, "{}", line);
            }
        }
    }
}

/// Global logger instance that persists for the process lifetime.
static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

/// Initialize the global logger
///
/// Must be called once at startup. Subsequent calls are ignored, and
/// messages logged before initialization are dropped.
///
/// # Arguments
///
/// * `file_path` - Optional log file, truncated on init
/// * `min_level` - Minimum log level to record (Debug, Info, Warn)
pub fn init(file_path: Option<PathBuf>, min_level: LogLevel) {
    LOGGER.get_or_init(|| Mutex::new(Logger::new(file_path, min_level, true)));
}

fn log(level: LogLevel, message: String) {
    if let Some(logger) = LOGGER.get() {
        if let Ok(mut logger) = logger.lock() {
            logger.add_entry(level, &message);
        }
    }
}

/// Log a debug message
pub fn debug(message: impl Into<String>) {
    log(LogLevel::Debug, message.into());
}

/// Log an informational message
pub fn info(message: impl Into<String>) {
    log(LogLevel::Info, message.into());
}

/// Log a warning message
pub fn warn(message: impl Into<String>) {
    log(LogLevel::Warn, message.into());
}

/// Number of warnings recorded so far.
pub fn warning_count() -> usize {
    LOGGER
        .get()
        .and_then(|logger| logger.lock().ok().map(|l| l.warnings))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_str() {
        assert_eq!("debug".parse::<LogLevel>(), Ok(LogLevel::Debug));
        assert_eq!("INFO".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
    }

    #[test]
    fn test_min_level_filters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themed.log");

        let mut logger = Logger::new(Some(path.clone()), LogLevel::Info, false);
        logger.add_entry(LogLevel::Debug, "hidden");
        logger.add_entry(LogLevel::Info, "shown");
        logger.add_entry(LogLevel::Warn, "careful");

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("hidden"));
        assert!(content.contains("INFO: shown"));
        assert_eq!(logger.warnings, 1);
    }

    #[test]
    fn test_filtered_warnings_are_not_counted() {
        let mut logger = Logger::new(None, LogLevel::Warn, false);
        logger.add_entry(LogLevel::Info, "quiet");
        assert_eq!(logger.warnings, 0);
        logger.add_entry(LogLevel::Warn, "stale file");
        logger.add_entry(LogLevel::Warn, "another");
        assert_eq!(logger.warnings, 2);
    }

    #[test]
    fn test_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("themed.log");

        let mut logger = Logger::new(Some(path.clone()), LogLevel::Debug, false);
        logger.add_entry(LogLevel::Warn, "old-theme.json is stale");

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("=== themed-themes run"));
        assert!(content.contains("WARN: old-theme.json is stale"));
    }
}
