//! Processing strategy module for expense settlement
//!
//! This module defines the Strategy pattern for complete settlement pipelines,
//! encompassing CSV ingestion, ledger reconciliation, settlement, and report
//! output. This allows different ingestion implementations (synchronous,
//! asynchronous streaming) to be selected at runtime.
//!
//! Whatever the ingestion style, every strategy reconciles all rows before
//! invoking settlement: the greedy algorithm is only correct against the
//! fully accumulated balance mapping.

use crate::cli::StrategyType;
use std::io::Write;
use std::path::Path;

pub mod r#async;
pub mod sync;

pub use self::r#async::AsyncProcessingStrategy;
pub use sync::SyncProcessingStrategy;

use crate::types::SettlementError;

/// Processing strategy trait for complete settlement pipelines
///
/// This trait defines the interface for different settlement pipeline
/// implementations. Each strategy must read expense rows from a CSV file,
/// reconcile them into a ledger, run settlement once ingestion is complete,
/// and write the settlement report to output.
pub trait ProcessingStrategy: Send + Sync {
    /// Process expenses from input file and write the report to output
    ///
    /// # Arguments
    ///
    /// * `input_path` - Path to the input CSV file containing expense rows
    /// * `output` - Mutable reference to a writer for the settlement report
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The input file cannot be opened (file not found, permission denied)
    /// - A fatal I/O error occurs during reading or writing
    /// - Any row is malformed (missing fields, no beneficiaries, non-integer
    ///   amount) — processing aborts rather than settling partial data
    fn process(&self, input_path: &Path, output: &mut dyn Write)
        -> Result<(), SettlementError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// This factory function implements the Strategy pattern by selecting and
/// instantiating the appropriate pipeline implementation at runtime.
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `show_balances` - Whether the report should include net balances before
///   the settlement plan
///
/// # Returns
///
/// A boxed trait object implementing the ProcessingStrategy trait
pub fn create_strategy(
    strategy_type: StrategyType,
    show_balances: bool,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy::new(show_balances)),
        StrategyType::Async => Box::new(AsyncProcessingStrategy::new(show_balances)),
    }
}
