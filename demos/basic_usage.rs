//! Basic logger usage example
//!
//! Demonstrates the extra levels, the success banner, and how the same
//! entries render on the console and in a file.
//!
//! Run with: cargo run --example basic_usage

use pretty_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Pretty Logger - Basic Usage Example ===\n");

    let log_path = std::env::temp_dir().join("pretty_logger_demo.log");

    // Console output is colored when stdout is a terminal, the file stays plain
    let logger = Logger::builder("demo")
        .min_level(LogLevel::VERBOSE)
        .appender(ConsoleAppender::new())
        .appender(FileAppender::new(&log_path)?)
        .register()?;

    println!("1. Logging at every level:");
    logger.debug("This is a debug message (hidden)");
    logger.verbose("This is a verbose message");
    logger.info("This is an info message");
    logger.raw("This is a raw message");
    logger.success("This is a success message");
    logger.warning("This is a warning message");
    logger.error("This is an error message");
    logger.critical("This is a critical message");

    println!("\n2. A success banner:");
    get_logger("demo").success_banner("Build complete");

    println!("\n3. Embedded escape codes are stripped in the file:");
    logger.info("\x1b[1mbold\x1b[0m in the terminal, plain on disk");

    logger.flush()?;
    println!("\nFile output written to {}", log_path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
