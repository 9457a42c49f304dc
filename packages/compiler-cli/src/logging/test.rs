// Logging Tests
//
// Tests for the logging module.

use super::*;

mod log_level_tests {
    use super::*;

    #[test]
    fn should_have_correct_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
    }

    #[test]
    fn should_map_verbose_flag_to_debug() {
        assert_eq!(LogLevel::from_verbosity(true), LogLevel::Debug);
        assert_eq!(LogLevel::from_verbosity(false), LogLevel::Warn);
    }
}

mod console_logger_tests {
    use super::*;

    #[test]
    fn should_check_level_enabled() {
        let logger = ConsoleLogger::new(LogLevel::Warn);

        assert!(!logger.is_enabled(LogLevel::Debug));
        assert!(!logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Warn));
        assert!(logger.is_enabled(LogLevel::Error));
    }

    #[test]
    fn should_prefix_lines_with_level() {
        assert_eq!(
            ConsoleLogger::format(LogLevel::Info, "wrote 2 enums"),
            "[INFO] wrote 2 enums"
        );
    }
}

mod create_logger_tests {
    use super::*;

    #[test]
    fn should_use_null_logger_when_quiet() {
        let logger = create_logger(true, true);
        assert_eq!(logger.level(), LogLevel::Error);
        // Must not print or panic
        logger.error("suppressed");
    }

    #[test]
    fn should_log_debug_when_verbose() {
        let logger = create_logger(true, false);
        assert!(logger.is_enabled(LogLevel::Debug));
    }
}
