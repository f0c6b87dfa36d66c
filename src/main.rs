//! # Plateau Rovers
//!
//! Command-line entry point. Reads a rover script, drives every rover across the
//! plateau, and prints where each one ends up.
//!
//! ```bash
//! plateau-rovers input.txt
//! plateau-rovers input.txt --verbose
//! RUST_LOG=debug plateau-rovers input.txt
//! ```

use std::process::ExitCode;

use plateau_rovers::runtime::{run, setup_tracing};
use tracing::error;

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    match run(std::env::args().skip(1)).await {
        Ok(outcome) => {
            for line in outcome.lines() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(kind = e.name(), "Run failed");
            eprintln!("{}: {}", e.name(), e);
            e.exit_code()
        }
    }
}
