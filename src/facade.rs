//! Bridge from the `log` crate.
//!
//! Installing a [`Logger`] as the global `log` logger sends `log::info!` and
//! friends through it. `TRACE` records are written as `DEBUG`.
//!
//! ```no_run
//! use plainlog::{facade, Format, Logger};
//!
//! let logger = facade::init(Logger::new()).unwrap();
//! log::info!("routed through plainlog");
//! logger.set_format(Format::Json);
//! ```

use crate::core::{LogLevel, Logger, LoggerError, Result};
use log::{LevelFilter, Metadata, Record};

impl From<log::Level> for LogLevel {
    fn from(level: log::Level) -> Self {
        match level {
            log::Level::Error => LogLevel::Error,
            log::Level::Warn => LogLevel::Warn,
            log::Level::Info => LogLevel::Info,
            log::Level::Debug | log::Level::Trace => LogLevel::Debug,
        }
    }
}

impl log::Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        Logger::log(self, record.level().into(), record.args().to_string());
    }

    fn flush(&self) {
        let _ = Logger::flush(self);
    }
}

/// Install `logger` as the process-wide `log` logger.
///
/// The logger lives for the rest of the process; the returned reference can
/// still change its format and output. Fails if a global logger is already set.
pub fn init(logger: Logger) -> Result<&'static Logger> {
    let logger: &'static Logger = Box::leak(Box::new(logger));
    log::set_logger(logger).map_err(|e| LoggerError::config("facade", e.to_string()))?;
    log::set_max_level(LevelFilter::Trace);
    Ok(logger)
}
