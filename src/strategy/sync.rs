//! Synchronous processing strategy
//!
//! This module provides a synchronous, single-threaded implementation of the
//! ProcessingStrategy trait. It orchestrates settlement by coordinating
//! between the SyncReader (for CSV input) and the Ledger (for business logic).
//!
//! # Design
//!
//! The SyncProcessingStrategy focuses on orchestration, delegating:
//! - CSV parsing to `SyncReader` (iterator interface)
//! - Balance accumulation and settlement to `Ledger`
//! - Report rendering to the `csv_format` module
//!
//! # Memory Efficiency
//!
//! This strategy maintains constant ingestion memory:
//! - Processes CSV rows one at a time (streaming via iterator)
//! - Does not load the entire file into memory
//! - Memory usage is O(participants + settlements), not O(rows)

use crate::core::Ledger;
use crate::io::csv_format::{write_balances_report, write_settlement_report};
use crate::io::sync_reader::SyncReader;
use crate::strategy::ProcessingStrategy;
use crate::types::SettlementError;
use std::io::Write;
use std::path::Path;

/// Synchronous processing strategy
///
/// Implements the ProcessingStrategy trait using single-threaded, synchronous
/// processing. Orchestrates the flow between CSV reading, ledger
/// reconciliation, settlement, and report output.
///
/// # Examples
///
/// ```no_run
/// use rust_settlement_engine::strategy::{ProcessingStrategy, SyncProcessingStrategy};
/// use std::path::Path;
/// use std::io;
///
/// let strategy = SyncProcessingStrategy::new(false);
/// let mut output = io::stdout();
///
/// strategy.process(Path::new("expenses.csv"), &mut output)
///     .expect("Processing failed");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy {
    /// Whether to print net balances before the settlement plan
    show_balances: bool,
}

impl SyncProcessingStrategy {
    /// Create a new SyncProcessingStrategy
    pub fn new(show_balances: bool) -> Self {
        Self { show_balances }
    }
}

impl ProcessingStrategy for SyncProcessingStrategy {
    /// Process expenses from input file and write the report to output
    ///
    /// This method orchestrates the complete synchronous pipeline:
    /// 1. Creates a SyncReader to stream expense rows from the CSV file
    /// 2. Splits each row into per-beneficiary transfers and reconciles them
    /// 3. After all rows are ingested, runs the settlement algorithm
    /// 4. Optionally writes the pre-settlement balances, then the plan
    ///
    /// A malformed row aborts processing before settlement; the ledger is
    /// never settled against partial data.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), SettlementError> {
        let mut ledger = Ledger::new();

        let reader = SyncReader::new(input_path)?;

        // Reconcile every per-beneficiary transfer of every row, in input
        // order, before any settlement happens
        for result in reader {
            let expense = result?;
            for transfer in expense.transfers() {
                ledger.reconcile(&transfer);
            }
        }

        if self.show_balances {
            write_balances_report(&ledger.creditors(), &ledger.debtors(), output)?;
        }

        ledger.settle();

        write_settlement_report(ledger.settlement_transfers().unwrap_or(&[]), output)?;

        Ok(())
    }
}
