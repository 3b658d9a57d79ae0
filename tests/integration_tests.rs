//! Integration tests for the logger
//!
//! These tests verify:
//! - Default construction
//! - Line and JSON output through real sinks
//! - Runtime reconfiguration
//! - Parse errors surfaced by kind
//! - Panic recovery and escalation

use plainlog::prelude::*;
use std::fs;
use std::io::Write;
use std::sync::Arc;
use tempfile::TempDir;

#[test]
fn test_default_logger() {
    let logger = Logger::new();
    assert_eq!(logger.format(), Format::Line);
    assert!(logger.output().is_stderr());
    assert_eq!(logger.output().name(), "stderr");
}

#[test]
fn test_json_to_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("test.log");

    let logger = Logger::builder()
        .format(Format::Json)
        .sink(FileSink::new(&log_file).expect("Failed to open log file"))
        .build();

    logger.info("This is an informational message.");
    logger.warn("This is a warning message.");
    logger.error("This is an error message.");

    let content = fs::read_to_string(&log_file).expect("Failed to read log file");
    let entries: Vec<LogEntry> = content
        .lines()
        .map(|line| LogEntry::parse(Format::Json, line).expect("valid JSON entry"))
        .collect();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].level, LogLevel::Info);
    assert_eq!(entries[1].level, LogLevel::Warn);
    assert_eq!(entries[2].message, "This is an error message.");

    // Each line is a plain JSON object with exactly the three keys
    for line in content.lines() {
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        let object = parsed.as_object().unwrap();
        assert_eq!(object.len(), 3);
        assert!(object["time"].is_string());
    }
}

#[test]
fn test_json_scenario_exact_shape() {
    let buffer = MemorySink::new();
    let logger = Logger::new();
    logger.set_format(Format::Json);
    logger.set_output(Output::new(buffer.clone()));
    logger.info("hello");

    let lines = buffer.lines();
    assert_eq!(lines.len(), 1);

    let line = &lines[0];
    assert!(line.starts_with("{\"time\":\""));
    assert!(line.ends_with("\",\"level\":\"INFO\",\"message\":\"hello\"}"));
    assert!(buffer.contents().ends_with('\n'));

    let time = &line["{\"time\":\"".len()..line.find("\",\"level\"").unwrap()];
    assert!(time.ends_with('Z'));
    plainlog::core::timestamp::parse_rfc3339_nano(time).expect("RFC 3339 timestamp");
}

#[test]
fn test_output_swap_is_immediate() {
    let first = MemorySink::new();
    let second = MemorySink::new();

    let logger = Logger::with_options([LoggerOption::Output(Output::new(first.clone()))]);
    logger.info("one");
    logger.set_output(Output::new(second.clone()));
    logger.info("two");

    assert_eq!(first.lines().len(), 1);
    assert!(first.contents().contains("INFO: one"));
    assert_eq!(second.lines().len(), 1);
    assert!(second.contents().contains("INFO: two"));
}

#[test]
fn test_output_handle_is_shared() {
    let output = Output::new(MemorySink::new());
    let logger = Logger::builder().output(output.clone()).build();
    assert!(logger.output().same_sink(&output));
}

#[test]
fn test_writer_output() {
    struct Shared(Arc<parking_lot::Mutex<Vec<u8>>>);

    impl Write for Shared {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().write(buf)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    let bytes = Arc::new(parking_lot::Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .output(Output::from_writer(Shared(Arc::clone(&bytes))))
        .build();

    logger.debug("through a writer");
    logger.flush().unwrap();

    let text = String::from_utf8(bytes.lock().clone()).unwrap();
    assert!(text.ends_with(" DEBUG: through a writer\n"));
}

#[test]
fn test_parse_errors_by_kind() {
    assert!(matches!(
        LogEntry::parse(Format::Line, "onlytwo fields"),
        Err(LoggerError::MalformedLogEntry { .. })
    ));
    assert!(matches!(
        LogEntry::parse(Format::Line, "not-a-time INFO: hi"),
        Err(LoggerError::TimestampParse { .. })
    ));
    assert!(matches!(
        LogEntry::parse(Format::Line, "2023-06-01T10:00:00Z bogus: hi"),
        Err(LoggerError::InvalidLevel(_))
    ));
    assert!(matches!(
        LogEntry::parse(Format::Json, "{not json}"),
        Err(LoggerError::JsonError(_))
    ));
    assert!(matches!(
        "xml".parse::<Format>(),
        Err(LoggerError::InvalidFormat(_))
    ));
}

#[test]
fn test_panic_is_recoverable() {
    let buffer = MemorySink::new();
    let logger = Logger::builder().sink(buffer.clone()).build();

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.info("before");
        logger.panic("This is a panic message (an error with panic).");
    }));

    let payload = result.expect_err("panic should unwind");
    let message = payload.downcast_ref::<String>().expect("String payload");

    logger.info(format!("Recovered from panic: {}", message));
    logger.stack();

    let entries: Vec<LogEntry> = buffer
        .contents()
        .split_inclusive('\n')
        .filter_map(|line| LogEntry::parse(Format::Line, line).ok())
        .collect();

    assert_eq!(entries[0].message, "before");
    assert_eq!(entries[1].level, LogLevel::Error);
    assert_eq!(
        entries[2].message,
        "Recovered from panic: This is a panic message (an error with panic)."
    );
    // The stack trace spans several lines, so only its first line parses here
    assert_eq!(entries[3].level, LogLevel::Debug);
}

#[test]
fn test_escalate_propagates() {
    fn step(logger: &Logger) -> Result<()> {
        Err(logger.escalate("step failed"))
    }

    fn run(logger: &Logger) -> Result<u32> {
        step(logger)?;
        Ok(1)
    }

    let buffer = MemorySink::new();
    let logger = Logger::builder()
        .sink(buffer.clone())
        .panic_level(LogLevel::Panic)
        .build();

    let err = run(&logger).unwrap_err();
    assert_eq!(err.to_string(), "PANIC: step failed");
    assert!(buffer.contents().ends_with(" PANIC: step failed\n"));
}

#[test]
fn test_configure_from_env_lookup() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("env.log");
    let path = log_file.to_str().unwrap().to_string();

    let config = LoggerConfig::from_lookup(|key| match key {
        "PLAINLOG_FORMAT" => Some("json".to_string()),
        "PLAINLOG_OUTPUT" => Some(path.clone()),
        _ => None,
    })
    .unwrap();

    let logger = config.build().unwrap();
    logger.error("from env");

    let content = fs::read_to_string(&log_file).unwrap();
    let entry = LogEntry::parse(Format::Json, &content).unwrap();
    assert_eq!(entry.level, LogLevel::Error);
    assert_eq!(entry.message, "from env");
}
