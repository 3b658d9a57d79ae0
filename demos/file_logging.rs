//! File logging example
//!
//! Writes line entries to a file, then reads them back and parses them.
//!
//! Run with: cargo run --example file_logging

use plainlog::prelude::*;

fn main() -> Result<()> {
    println!("=== plainlog - File Logging Example ===\n");

    let path = std::env::temp_dir().join("plainlog_example.log");
    let _ = std::fs::remove_file(&path);

    let logger = Logger::builder().sink(FileSink::new(&path)?).build();

    logger.info("Application started");
    logger.warn("Cache is 90% full");
    logger.error("Failed to reach upstream");

    println!("Entries in {}:", path.display());
    for line in std::fs::read_to_string(&path)?.lines() {
        let entry = LogEntry::parse(Format::Line, line)?;
        println!("  [{}] {} @ {}", entry.level, entry.message, entry.time);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
