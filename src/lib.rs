//! # plainlog
//!
//! A small leveled logger. Each call stamps an entry with the current time,
//! renders it as a line or as JSON, and appends it to an output sink.
//!
//! ```text
//! 2023-06-01T10:00:00.123456789Z INFO: Hello, World!
//! {"time":"2023-06-01T10:00:00.123456789Z","level":"INFO","message":"Hello, World!"}
//! ```
//!
//! ## Features
//!
//! - **Two formats**: human-readable lines or one JSON object per line, both parseable back
//! - **Swappable output**: stderr by default; stdout, files, memory or any `io::Write`
//! - **Thread Safe**: format and output change at runtime, entries never interleave
//! - **`log` bridge**: route the `log` crate's macros into a [`Logger`] (feature `facade`)

pub mod core;
#[cfg(feature = "facade")]
pub mod facade;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Clock, FixedClock, Format, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
        LoggerError, LoggerMetrics, LoggerOption, Output, OutputTarget, Result, Sink,
        SystemClock,
    };
    pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
}

pub use crate::core::{
    Clock, FixedClock, Format, LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, LoggerOption, Output, OutputTarget, Result, Sink, SystemClock,
    FATAL_EXIT_CODE,
};
pub use crate::sinks::{FileSink, MemorySink, StderrSink, StdoutSink, WriterSink};
