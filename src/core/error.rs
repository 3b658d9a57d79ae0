//! Error types for the logger system

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A format name did not match any known format
    #[error("Invalid format: '{0}'")]
    InvalidFormat(String),

    /// A level token did not match any known level
    #[error("Invalid log level: '{0}'")]
    InvalidLevel(String),

    /// A line entry did not split into timestamp, level and message
    #[error("Malformed log entry: expected 3 fields, found {fields}")]
    MalformedLogEntry { fields: usize },

    /// A required value was absent
    #[error("Nil reference: {0}")]
    NilReference(String),

    /// Timestamp field could not be parsed as RFC 3339
    #[error("Failed to parse timestamp '{input}': {source}")]
    TimestampParse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Message already written to the log, handed back for the caller to act on
    #[error("{level}: {message}")]
    Escalated { level: LogLevel, message: String },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn timestamp_parse(input: impl Into<String>, source: chrono::ParseError) -> Self {
        LoggerError::TimestampParse {
            input: input.into(),
            source,
        }
    }

    pub fn malformed(fields: usize) -> Self {
        LoggerError::MalformedLogEntry { fields }
    }

    pub fn nil(what: impl Into<String>) -> Self {
        LoggerError::NilReference(what.into())
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }
}
