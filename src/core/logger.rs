//! Main logger implementation

use super::{
    clock::{Clock, SystemClock},
    error::{LoggerError, Result},
    format::Format,
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    sink::{Output, Sink},
};
use parking_lot::RwLock;
use std::backtrace::Backtrace;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// Exit status used by [`Logger::fatal`]
pub const FATAL_EXIT_CODE: i32 = 1;

/// A single configuration change, applied at construction or later through
/// [`Logger::configure`].
#[derive(Clone)]
pub enum LoggerOption {
    Format(Format),
    Output(Output),
    /// Level used by [`Logger::panic`] and [`Logger::escalate`]
    PanicLevel(LogLevel),
    Clock(Arc<dyn Clock>),
}

struct LoggerState {
    format: Format,
    output: Output,
    panic_level: LogLevel,
    clock: Arc<dyn Clock>,
}

impl LoggerState {
    fn apply(&mut self, option: LoggerOption) {
        match option {
            LoggerOption::Format(format) => self.format = format,
            LoggerOption::Output(output) => self.output = output,
            LoggerOption::PanicLevel(level) => self.panic_level = level,
            LoggerOption::Clock(clock) => self.clock = clock,
        }
    }
}

impl Default for LoggerState {
    fn default() -> Self {
        Self {
            format: Format::Line,
            output: Output::stderr(),
            panic_level: LogLevel::Error,
            clock: Arc::new(SystemClock),
        }
    }
}

/// Writes timestamped, leveled entries to a swappable [`Output`].
///
/// Format and output can be changed at any time from any thread. Each write
/// renders and appends its entry while holding the logger's lock, so entries
/// from concurrent callers never interleave and each one uses the format and
/// output that were current when it started.
///
/// Sink failures are not reported to the caller. They are counted in
/// [`Logger::metrics`] and announced on stderr the first time and every
/// 1000th time after that.
///
/// # Example
///
/// ```
/// use plainlog::{Format, LogLevel, Logger};
/// use plainlog::sinks::MemorySink;
///
/// let buffer = MemorySink::new();
/// let logger = Logger::builder()
///     .format(Format::Json)
///     .sink(buffer.clone())
///     .build();
///
/// logger.info("hello");
///
/// let line = buffer.contents();
/// assert!(line.contains(r#""level":"INFO","message":"hello"}"#));
/// ```
pub struct Logger {
    state: RwLock<LoggerState>,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Line format on stderr
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(Vec::new())
    }

    /// Apply options in order on top of the defaults; later options win
    #[must_use]
    pub fn with_options(options: impl IntoIterator<Item = LoggerOption>) -> Self {
        let mut state = LoggerState::default();
        for option in options {
            state.apply(option);
        }

        Self {
            state: RwLock::new(state),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Apply options to a live logger as one change
    pub fn configure(&self, options: impl IntoIterator<Item = LoggerOption>) {
        let mut state = self.state.write();
        for option in options {
            state.apply(option);
        }
    }

    pub fn set_format(&self, format: Format) {
        self.state.write().format = format;
    }

    pub fn set_output(&self, output: Output) {
        self.state.write().output = output;
    }

    pub fn set_panic_level(&self, level: LogLevel) {
        self.state.write().panic_level = level;
    }

    pub fn format(&self) -> Format {
        self.state.read().format
    }

    pub fn output(&self) -> Output {
        self.state.read().output.clone()
    }

    pub fn panic_level(&self) -> LogLevel {
        self.state.read().panic_level
    }

    /// Stamp, render and append one entry
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let message = message.into();

        let state = self.state.write();
        let entry = LogEntry::at(state.clock.now(), level, message);
        let mut buf = Vec::with_capacity(64 + entry.message.len());
        let result = entry
            .render_into(state.format, &mut buf)
            .and_then(|()| state.output.append(&buf));
        drop(state);

        match result {
            Ok(()) => {
                self.metrics.record_written();
            }
            Err(e) => self.record_failure(&e),
        }
    }

    fn record_failure(&self, err: &LoggerError) {
        let failed = self.metrics.record_failed() + 1;

        if failed == 1 || failed % 1000 == 0 {
            // The sink may be stderr itself, so never panic here
            let _ = writeln!(
                std::io::stderr(),
                "[LOGGER ERROR] Failed to write log entry ({} failed so far): {}",
                failed,
                err
            );
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Write a fatal entry, flush, then exit the process with status 1.
    ///
    /// Never returns. Destructors of live values do not run.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.log(LogLevel::Fatal, message);
        let _ = self.flush();
        std::process::exit(FATAL_EXIT_CODE)
    }

    /// Write the message at the panic level, then unwind with it.
    ///
    /// The panic payload is the message as a `String`; recover it with
    /// `std::panic::catch_unwind`. An uncaught panic ends the thread (and the
    /// process, on the main thread). For a recoverable alternative see
    /// [`Logger::escalate`].
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        self.log(self.panic_level(), message.clone());
        std::panic::panic_any(message)
    }

    /// Write the message at the panic level and hand it back as an error.
    ///
    /// ```
    /// use plainlog::{Logger, LoggerError};
    ///
    /// fn load(logger: &Logger) -> Result<(), LoggerError> {
    ///     Err(logger.escalate("config missing"))
    /// }
    ///
    /// let logger = Logger::new();
    /// assert!(matches!(load(&logger), Err(LoggerError::Escalated { .. })));
    /// ```
    #[must_use = "the returned error should be propagated or handled"]
    pub fn escalate(&self, message: impl Into<String>) -> LoggerError {
        let message = message.into();
        let level = self.panic_level();
        self.log(level, message.clone());
        LoggerError::Escalated { level, message }
    }

    /// Write the current call stack as a debug entry
    pub fn stack(&self) {
        let trace = Backtrace::force_capture();
        self.log(LogLevel::Debug, trace.to_string());
    }

    /// Flush the current output, reporting any error
    pub fn flush(&self) -> Result<()> {
        let output = self.output();
        output.flush()
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Logger")
            .field("format", &state.format)
            .field("output", &state.output)
            .field("panic_level", &state.panic_level)
            .finish()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use plainlog::prelude::*;
///
/// let logger = Logger::builder()
///     .format(Format::Json)
///     .output(Output::stdout())
///     .panic_level(LogLevel::Panic)
///     .build();
///
/// assert_eq!(logger.format(), Format::Json);
/// ```
#[derive(Default)]
pub struct LoggerBuilder {
    options: Vec<LoggerOption>,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value"]
    pub fn format(self, format: Format) -> Self {
        self.option(LoggerOption::Format(format))
    }

    #[must_use = "builder methods return a new value"]
    pub fn output(self, output: Output) -> Self {
        self.option(LoggerOption::Output(output))
    }

    /// Shorthand for `output(Output::new(sink))`
    #[must_use = "builder methods return a new value"]
    pub fn sink<S: Sink + 'static>(self, sink: S) -> Self {
        self.output(Output::new(sink))
    }

    #[must_use = "builder methods return a new value"]
    pub fn panic_level(self, level: LogLevel) -> Self {
        self.option(LoggerOption::PanicLevel(level))
    }

    #[must_use = "builder methods return a new value"]
    pub fn clock<C: Clock + 'static>(self, clock: C) -> Self {
        self.option(LoggerOption::Clock(Arc::new(clock)))
    }

    #[must_use = "builder methods return a new value"]
    pub fn option(mut self, option: LoggerOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> Logger {
        Logger::with_options(self.options)
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}
