//! Rendering formats for log entries
//!
//! - Line: `2023-06-01T10:00:00.123456789Z INFO: Hello, World!`
//! - Json: `{"time":"2023-06-01T10:00:00.123456789Z","level":"INFO","message":"Hello, World!"}`

use super::error::LoggerError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// How a log entry is turned into bytes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Format {
    /// Human-readable line (default)
    #[default]
    Line,

    /// One JSON object per line
    Json,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Line => "line",
            Format::Json => "json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Format {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(Format::Line),
            "json" => Ok(Format::Json),
            _ => Err(LoggerError::InvalidFormat(s.to_string())),
        }
    }
}

impl Serialize for Format {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Format {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_default() {
        assert_eq!(Format::default(), Format::Line);
    }

    #[test]
    fn test_format_from_str() {
        assert_eq!("JSON".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("line".parse::<Format>().unwrap(), Format::Line);

        let err = "xml".parse::<Format>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFormat(ref name) if name == "xml"));
    }

    #[test]
    fn test_format_accepts_only_its_names() {
        let err = "text".parse::<Format>().unwrap_err();
        assert!(matches!(err, LoggerError::InvalidFormat(_)));
    }
}
