//! Core logger types and traits

pub mod clock;
pub mod config;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod sink;
pub mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{LoggerConfig, OutputTarget};
pub use error::{LoggerError, Result};
pub use format::Format;
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerBuilder, LoggerOption, FATAL_EXIT_CODE};
pub use metrics::LoggerMetrics;
pub use sink::{Output, Sink};
