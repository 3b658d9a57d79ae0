//! Log entry structure

use super::error::{LoggerError, Result};
use super::format::Format;
use super::log_level::LogLevel;
use super::timestamp;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Write;
use std::str::FromStr;

/// One log record.
///
/// Entries are created per write and never mutated afterwards. They render to
/// and parse from both [`Format`]s:
///
/// ```
/// use plainlog::{Format, LogEntry, LogLevel};
///
/// let entry = LogEntry::new(LogLevel::Info, "Hello, World!");
/// let line = entry.render(Format::Line).unwrap();
/// assert!(line.ends_with(" INFO: Hello, World!\n"));
///
/// let parsed = LogEntry::parse(Format::Line, &line).unwrap();
/// assert_eq!(parsed, entry);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(with = "timestamp::rfc3339_nano")]
    pub time: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// Create an entry stamped with the current time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self::at(Utc::now(), level, message)
    }

    /// Create an entry with an explicit timestamp
    pub fn at(time: DateTime<Utc>, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            time,
            level,
            message: message.into(),
        }
    }

    /// Append the newline-terminated rendering of this entry to `buf`.
    ///
    /// Line format writes the message verbatim; embedded newlines are not
    /// escaped.
    pub fn render_into(&self, format: Format, buf: &mut Vec<u8>) -> Result<()> {
        match format {
            Format::Line => writeln!(buf, "{}", self)?,
            Format::Json => {
                serde_json::to_writer(&mut *buf, self)?;
                buf.push(b'\n');
            }
        }
        Ok(())
    }

    pub fn render(&self, format: Format) -> Result<String> {
        let mut buf = Vec::with_capacity(64 + self.message.len());
        self.render_into(format, &mut buf)?;
        // Both formats only ever write UTF-8 text
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// Parse an entry previously produced by [`LogEntry::render`].
    ///
    /// For [`Format::Line`] the input splits on its first two spaces, so the
    /// message keeps any spaces of its own. Exactly one trailing `\n` is
    /// dropped; a `\r` before it stays part of the message.
    pub fn parse(format: Format, raw: &str) -> Result<Self> {
        match format {
            Format::Line => Self::parse_line(raw),
            Format::Json => Self::parse_json(raw),
        }
    }

    fn parse_line(raw: &str) -> Result<Self> {
        let raw = raw.strip_suffix('\n').unwrap_or(raw);

        let fields: Vec<&str> = raw.splitn(3, ' ').collect();
        if fields.len() != 3 {
            return Err(LoggerError::malformed(fields.len()));
        }

        let time = timestamp::parse_rfc3339_nano(fields[0])?;
        let token = fields[1].strip_suffix(':').unwrap_or(fields[1]);
        let level = token.parse()?;

        Ok(Self {
            time,
            level,
            message: fields[2].to_string(),
        })
    }

    fn parse_json(raw: &str) -> Result<Self> {
        let entry: Option<LogEntry> = serde_json::from_str(raw)?;
        entry.ok_or_else(|| LoggerError::nil("JSON log entry is null"))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}: {}",
            timestamp::format_rfc3339_nano(&self.time),
            self.level,
            self.message
        )
    }
}

impl FromStr for LogEntry {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(Format::Line, s)
    }
}
