// Logger Interface
//
// Diagnostics emitted while converting a declaration file.

/// Log level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl LogLevel {
    /// Level selected by the `--verbose` flag.
    pub fn from_verbosity(verbose: bool) -> Self {
        if verbose {
            LogLevel::Debug
        } else {
            LogLevel::Warn
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warn => "WARN",
            LogLevel::Error => "ERROR",
        }
    }
}

/// Logger trait.
pub trait Logger {
    fn level(&self) -> LogLevel;
    fn log(&self, level: LogLevel, msg: &str);

    fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.level()
    }
    fn debug(&self, msg: &str) {
        self.log(LogLevel::Debug, msg);
    }
    fn info(&self, msg: &str) {
        self.log(LogLevel::Info, msg);
    }
    fn warn(&self, msg: &str) {
        self.log(LogLevel::Warn, msg);
    }
    fn error(&self, msg: &str) {
        self.log(LogLevel::Error, msg);
    }
}

/// Logger used with `--quiet`.
#[derive(Debug, Default)]
pub struct NullLogger;

impl NullLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for NullLogger {
    fn level(&self) -> LogLevel {
        LogLevel::Error
    }
    fn log(&self, _level: LogLevel, _msg: &str) {}
}
