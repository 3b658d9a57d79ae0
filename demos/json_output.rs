//! JSON output example
//!
//! Configures a logger from `PLAINLOG_*` environment variables and switches
//! it to JSON at runtime.
//!
//! Run with: PLAINLOG_OUTPUT=stdout cargo run --example json_output

use plainlog::prelude::*;

fn main() -> Result<()> {
    println!("=== plainlog - JSON Output Example ===\n");

    let config = LoggerConfig::from_env()?;
    println!("Configuration: {:?}\n", config);

    let logger = config.build()?;
    logger.info("Configured from the environment");

    logger.set_format(Format::Json);
    logger.info("Now written as JSON");
    logger.warn("Quotes \"and\" newlines\nare escaped");

    println!("\nWritten: {}", logger.metrics().entries_written());
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
