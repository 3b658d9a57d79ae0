//! Basic logger usage example
//!
//! Demonstrates the default stderr logger and the different log levels.
//!
//! Run with: cargo run --example basic_usage

use plainlog::prelude::*;

fn main() -> Result<()> {
    println!("=== plainlog - Basic Usage Example ===\n");

    // Line format on stderr
    let logger = Logger::new();

    println!("1. Logging at different levels:");
    logger.debug("This is a debug message");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Writing the current stack:");
    logger.stack();

    println!("\n3. Recovering from a logged panic:");
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        logger.panic("This is a panic message (an error with panic).");
    }));
    if let Err(payload) = result {
        if let Some(message) = payload.downcast_ref::<String>() {
            logger.info(format!("Recovered from panic: {}", message));
        }
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
