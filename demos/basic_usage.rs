//! Basic logger usage example
//!
//! Demonstrates backend selection, details, level changes and the spinner.
//!
//! Run with: cargo run --example basic_usage
//! Pick another backend with: KS_LOGGER_NAME=icon cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    // Select from KS_LOGGER_NAME / KS_LOGGER_LEVEL, pretty by default
    init_default_logger();
    let log = logger();
    println!("Active backend: {} (available: {:?})\n", log.name(), list_logger_names());

    println!("1. Logging at different levels:");
    log.set_level("debug")?;
    log.debug("This is a debug message", &[]);
    log.info("This is an info message", &[]);
    log.success("This is a success message", &[]);
    log.warning("This is a warning message", &[]);
    log.error("This is an error message", &[]);

    println!("\n2. Attaching details:");
    let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
    log.error(
        "Failed to open config",
        &[Detail::string("path", "/etc/app.toml"), Detail::error(&err)],
    );
    log.info("Request handled", &[Detail::int("status", 200), Detail::time()]);

    println!("\n3. Raising the threshold:");
    log.set_level("warning")?;
    log.info("Info message (hidden)", &[]);
    log.warning("Warning message (visible)", &[]);

    println!("\n4. Spinner (animates only on a terminal):");
    log.set_level("info")?;
    log.start_spinner("Downloading", &[Detail::string("file", "data.bin")]);
    for chunk in 1..=3 {
        thread::sleep(Duration::from_millis(400));
        log.info("Chunk received", &[Detail::int("chunk", chunk)]);
    }
    log.stop_success("Download complete", &[Detail::int("chunks", 3)]);

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
