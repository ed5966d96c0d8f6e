use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Settle shared group expenses into a minimal set of transfers
#[derive(Parser, Debug)]
#[command(name = "settlement-engine")]
#[command(about = "Settle shared group expenses into a minimal set of transfers", long_about = None)]
pub struct CliArgs {
    /// Input CSV file path containing expense rows
    #[arg(value_name = "INPUT", help = "Path to the input CSV file")]
    pub input_file: PathBuf,

    /// Ingestion strategy to use for reading expense rows
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "sync",
        help = "Ingestion strategy: 'sync' for synchronous or 'async' for asynchronous"
    )]
    pub strategy: StrategyType,

    /// Print net per-participant balances before the settlement plan
    #[arg(
        long = "show-balances",
        help = "Also print net debtor/creditor balances before the plan"
    )]
    pub show_balances: bool,
}

/// Available ingestion strategies for CSV processing
#[derive(Clone, Debug, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}
