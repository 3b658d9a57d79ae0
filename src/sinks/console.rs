//! Standard stream sinks

use crate::core::{Result, Sink};
use std::io::Write;

/// Writes to the process standard error (the default sink)
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl StderrSink {
    pub const NAME: &'static str = "stderr";
}

impl Sink for StderrSink {
    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        // Locking keeps one entry in one write against other stderr users
        std::io::stderr().lock().write_all(bytes)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}

/// Writes to the process standard output
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl StdoutSink {
    pub const NAME: &'static str = "stdout";
}

impl Sink for StdoutSink {
    fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        std::io::stdout().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        Self::NAME
    }
}
