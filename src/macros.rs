//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use plainlog::prelude::*;
//! use plainlog::info;
//!
//! let logger = Logger::new();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use plainlog::prelude::*;
/// # let logger = Logger::new();
/// use plainlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use plainlog::prelude::*;
/// # let logger = Logger::new();
/// use plainlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal message and exit the process with status 1.
///
/// ```no_run
/// # use plainlog::prelude::*;
/// # let logger = Logger::new();
/// use plainlog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

/// Log at the logger's panic level, then panic with the message.
#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)+) => {
        $logger.panic(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Format, LogEntry, LogLevel, Logger};
    use crate::sinks::MemorySink;

    fn memory_logger() -> (Logger, MemorySink) {
        let buffer = MemorySink::new();
        let logger = Logger::builder().sink(buffer.clone()).build();
        (logger, buffer)
    }

    fn last_entry(buffer: &MemorySink) -> LogEntry {
        let lines = buffer.lines();
        LogEntry::parse(Format::Line, lines.last().expect("an entry")).unwrap()
    }

    #[test]
    fn test_log_macro() {
        let (logger, buffer) = memory_logger();
        log!(logger, LogLevel::Warn, "Formatted: {}", 42);

        let entry = last_entry(&buffer);
        assert_eq!(entry.level, LogLevel::Warn);
        assert_eq!(entry.message, "Formatted: 42");
    }

    #[test]
    fn test_level_macros() {
        let (logger, buffer) = memory_logger();
        debug!(logger, "Count: {}", 5);
        assert_eq!(last_entry(&buffer).level, LogLevel::Debug);
        info!(logger, "Items: {}", 100);
        assert_eq!(last_entry(&buffer).level, LogLevel::Info);
        warn!(logger, "Retry {} of {}", 1, 3);
        assert_eq!(last_entry(&buffer).message, "Retry 1 of 3");
        error!(logger, "Code: {}", 500);
        assert_eq!(last_entry(&buffer).level, LogLevel::Error);
    }

    #[test]
    fn test_log_panic_macro() {
        let (logger, buffer) = memory_logger();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            log_panic!(logger, "bad state: {}", 7)
        }));

        assert!(result.is_err());
        assert_eq!(last_entry(&buffer).message, "bad state: 7");
    }
}
