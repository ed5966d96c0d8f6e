//! Rust Settlement Engine CLI
//!
//! Command-line interface for settling shared group expenses from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- expenses.csv
//! cargo run -- --strategy sync expenses.csv
//! cargo run -- --strategy async expenses.csv
//! cargo run -- --show-balances expenses.csv
//! ```
//!
//! The program reads expense rows from the input CSV file, reconciles them
//! into per-participant net balances using the selected ingestion strategy,
//! and prints the settlement plan to stdout.
//!
//! # Ingestion Strategies
//!
//! - **sync**: Synchronous CSV reading with single-threaded processing (default)
//! - **async**: Asynchronous streaming ingestion via csv-async and tokio
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, malformed row, etc.)

use rust_settlement_engine::cli;
use rust_settlement_engine::strategy;
use std::process;

fn main() {
    // Parse command-line arguments using clap
    let args = cli::parse_args();

    // Create the appropriate processing strategy based on CLI arguments
    let strategy = strategy::create_strategy(args.strategy, args.show_balances);

    // Settle the expenses using the selected strategy
    // Output goes to stdout
    let mut output = std::io::stdout();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
