//! Declarative logger configuration
//!
//! A [`LoggerConfig`] can be deserialized (e.g. from a JSON settings file) or
//! read from environment variables, then turned into a [`Logger`].
//!
//! | Variable | Values | Default |
//! |---|---|---|
//! | `PLAINLOG_FORMAT` | `line`, `json` | `line` |
//! | `PLAINLOG_OUTPUT` | `stderr`, `stdout`, or a file path | `stderr` |
//! | `PLAINLOG_PANIC_LEVEL` | any level token | `ERROR` |

use super::error::{LoggerError, Result};
use super::format::Format;
use super::log_level::LogLevel;
use super::logger::{Logger, LoggerOption};
use super::sink::Output;
use crate::sinks::FileSink;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_FORMAT: &str = "PLAINLOG_FORMAT";
pub const ENV_OUTPUT: &str = "PLAINLOG_OUTPUT";
pub const ENV_PANIC_LEVEL: &str = "PLAINLOG_PANIC_LEVEL";

/// Where a configured logger writes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Stderr,
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Open the target. Files are created or appended to.
    pub fn open(&self) -> Result<Output> {
        match self {
            OutputTarget::Stderr => Ok(Output::stderr()),
            OutputTarget::Stdout => Ok(Output::stdout()),
            OutputTarget::File(path) => Ok(Output::new(FileSink::new(path)?)),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::Stderr => f.write_str("stderr"),
            OutputTarget::Stdout => f.write_str("stdout"),
            OutputTarget::File(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for OutputTarget {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "" => Err(LoggerError::config("output", "empty output target")),
            "stderr" => Ok(OutputTarget::Stderr),
            "stdout" => Ok(OutputTarget::Stdout),
            path => Ok(OutputTarget::File(PathBuf::from(path))),
        }
    }
}

impl Serialize for OutputTarget {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for OutputTarget {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub format: Format,
    pub output: OutputTarget,
    /// Level written by [`Logger::panic`] and [`Logger::escalate`]
    pub panic_level: LogLevel,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: Format::Line,
            output: OutputTarget::Stderr,
            panic_level: LogLevel::Error,
        }
    }
}

impl LoggerConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read the `PLAINLOG_*` environment variables; unset ones keep defaults
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`LoggerConfig::from_env`] with a custom variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(format) = lookup(ENV_FORMAT) {
            config.format = format.parse()?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            config.output = output.parse()?;
        }
        if let Some(level) = lookup(ENV_PANIC_LEVEL) {
            config.panic_level = level.parse()?;
        }

        Ok(config)
    }

    /// Open the output and express the config as construction options
    pub fn options(&self) -> Result<Vec<LoggerOption>> {
        Ok(vec![
            LoggerOption::Format(self.format),
            LoggerOption::Output(self.output.open()?),
            LoggerOption::PanicLevel(self.panic_level),
        ])
    }

    pub fn build(&self) -> Result<Logger> {
        Ok(Logger::with_options(self.options()?))
    }
}
