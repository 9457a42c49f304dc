//! Logging
//!
//! Leveled console logging for the CLI driver.

mod console_logger;
mod logger;

#[cfg(test)]
mod test;

pub use console_logger::ConsoleLogger;
pub use logger::{LogLevel, Logger, NullLogger};

/// Logger for the given command-line flags. `quiet` wins over `verbose`.
pub fn create_logger(verbose: bool, quiet: bool) -> Box<dyn Logger> {
    if quiet {
        Box::new(NullLogger::new())
    } else {
        Box::new(ConsoleLogger::new(LogLevel::from_verbosity(verbose)))
    }
}
