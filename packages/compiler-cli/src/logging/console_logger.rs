// Console Logger
//
// Info goes to stdout, everything else to stderr so the document path
// stays clean when stdout is captured.

use super::logger::{LogLevel, Logger};

/// Console logger.
#[derive(Debug)]
pub struct ConsoleLogger {
    level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Line written for `msg` at `level`.
    pub fn format(level: LogLevel, msg: &str) -> String {
        format!("[{}] {}", level.label(), msg)
    }
}

impl Logger for ConsoleLogger {
    fn level(&self) -> LogLevel {
        self.level
    }

    fn log(&self, level: LogLevel, msg: &str) {
        if !self.is_enabled(level) {
            return;
        }
        let line = Self::format(level, msg);
        if level == LogLevel::Info {
            println!("{}", line);
        } else {
            eprintln!("{}", line);
        }
    }
}
