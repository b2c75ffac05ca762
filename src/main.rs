//! Kodegen Bundler Electron - Electron application tree assembler.
//!
//! This binary merges a web build output with a project's desktop harness into
//! the directory layout an Electron packager consumes.

use kodegen_bundler_electron::cli;
use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            for suggestion in e.recovery_suggestions() {
                eprintln!("  hint: {}", suggestion);
            }
            1
        }
    };

    process::exit(exit_code);
}
