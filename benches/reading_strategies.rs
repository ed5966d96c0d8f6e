//! Benchmark suite for comparing ingestion strategies
//!
//! This benchmark compares the performance of synchronous and asynchronous
//! ingestion strategies using the divan benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench
//! ```
//!
//! # Benchmark Fixtures
//!
//! Two representative CSV files are used:
//! - `benchmark_small.csv` - Small dataset (100 expense rows)
//! - `benchmark_medium.csv` - Medium dataset (2,000 expense rows)
//!
//! Each fixture mixes single- and multi-beneficiary rows across a pool of
//! recurring participants.

use rust_settlement_engine::cli::StrategyType;
use rust_settlement_engine::strategy::create_strategy;
use std::path::Path;

fn main() {
    divan::main();
}

/// Benchmark synchronous ingestion with small dataset (100 rows)
#[divan::bench]
fn sync_strategy_small() {
    let strategy = create_strategy(StrategyType::Sync, false);
    let path = Path::new("benches/fixtures/benchmark_small.csv");
    let mut output = Vec::new();

    strategy
        .process(path, &mut output)
        .expect("Processing failed");
}

/// Benchmark asynchronous ingestion with small dataset (100 rows)
#[divan::bench]
fn async_strategy_small() {
    let strategy = create_strategy(StrategyType::Async, false);
    let path = Path::new("benches/fixtures/benchmark_small.csv");
    let mut output = Vec::new();

    strategy
        .process(path, &mut output)
        .expect("Processing failed");
}

/// Benchmark synchronous ingestion with medium dataset (2,000 rows)
#[divan::bench]
fn sync_strategy_medium() {
    let strategy = create_strategy(StrategyType::Sync, false);
    let path = Path::new("benches/fixtures/benchmark_medium.csv");
    let mut output = Vec::new();

    strategy
        .process(path, &mut output)
        .expect("Processing failed");
}

/// Benchmark asynchronous ingestion with medium dataset (2,000 rows)
#[divan::bench]
fn async_strategy_medium() {
    let strategy = create_strategy(StrategyType::Async, false);
    let path = Path::new("benches/fixtures/benchmark_medium.csv");
    let mut output = Vec::new();

    strategy
        .process(path, &mut output)
        .expect("Processing failed");
}
