//! Output destinations for rendered log entries

use super::error::Result;
use crate::sinks::{StderrSink, StdoutSink, WriterSink};
use parking_lot::Mutex;
use std::fmt;
use std::io::Write;
use std::sync::Arc;

/// A byte-accepting destination.
///
/// `append` receives one complete rendered entry per call.
pub trait Sink: Send {
    fn append(&mut self, bytes: &[u8]) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

/// Shared handle to a [`Sink`].
///
/// Cloning the handle shares the sink; the sink itself lives until the last
/// handle is dropped, so callers keep their own clone to control its lifetime.
#[derive(Clone)]
pub struct Output {
    sink: Arc<Mutex<Box<dyn Sink>>>,
    is_stderr: bool,
}

impl Output {
    pub fn new<S: Sink + 'static>(sink: S) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(sink))),
            is_stderr: false,
        }
    }

    /// The process standard error stream
    pub fn stderr() -> Self {
        Self {
            is_stderr: true,
            ..Self::new(StderrSink)
        }
    }

    /// The process standard output stream
    pub fn stdout() -> Self {
        Self::new(StdoutSink)
    }

    /// Wrap any `io::Write`
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self::new(WriterSink::new(writer))
    }

    pub fn append(&self, bytes: &[u8]) -> Result<()> {
        self.sink.lock().append(bytes)
    }

    pub fn flush(&self) -> Result<()> {
        self.sink.lock().flush()
    }

    pub fn name(&self) -> String {
        self.sink.lock().name().to_string()
    }

    /// True only for handles built by [`Output::stderr`] and their clones
    pub fn is_stderr(&self) -> bool {
        self.is_stderr
    }

    /// Whether both handles point at the same sink
    pub fn same_sink(&self, other: &Output) -> bool {
        Arc::ptr_eq(&self.sink, &other.sink)
    }
}

impl Default for Output {
    fn default() -> Self {
        Self::stderr()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").field("sink", &self.name()).finish()
    }
}
