//! Asynchronous streaming strategy
//!
//! This module provides an asynchronous implementation of the
//! ProcessingStrategy trait. Rows are streamed from the file with csv-async
//! inside a tokio runtime; reconciliation itself stays sequential, because
//! the ledger's balance accumulation is single-threaded by design.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── tokio Runtime (block_on drives ingestion to completion)
//!     ├── AsyncReader (batched CSV streaming)
//!     └── Ledger (sequential reconcile, then settle)
//! ```
//!
//! The end-of-stream is observed before `settle()` runs, preserving the
//! "settle only after full ingestion" ordering guarantee.

use crate::core::Ledger;
use crate::io::async_reader::AsyncReader;
use crate::io::csv_format::{write_balances_report, write_settlement_report};
use crate::strategy::ProcessingStrategy;
use crate::types::SettlementError;
use std::io::Write;
use std::path::Path;

/// Rows ingested per read while streaming
const READ_BATCH_SIZE: usize = 1024;

/// Asynchronous streaming strategy
///
/// Implements the ProcessingStrategy trait using csv-async streaming over a
/// tokio file. Batches bound ingestion memory; each batch is reconciled in
/// input order before the next is read.
#[derive(Debug, Clone, Copy)]
pub struct AsyncProcessingStrategy {
    /// Whether to print net balances before the settlement plan
    show_balances: bool,
}

impl AsyncProcessingStrategy {
    /// Create a new AsyncProcessingStrategy
    pub fn new(show_balances: bool) -> Self {
        Self { show_balances }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    /// Process expenses from input file and write the report to output
    ///
    /// This method implements the asynchronous pipeline:
    /// 1. Creates a tokio runtime and opens the file asynchronously
    /// 2. Streams rows in batches through AsyncReader
    /// 3. Reconciles each batch sequentially into the ledger
    /// 4. After the stream ends, runs settlement and writes the report
    ///
    /// Fatal errors (file not found, runtime errors, malformed rows) are
    /// returned immediately; settlement never runs against partial data.
    fn process(
        &self,
        input_path: &Path,
        output: &mut dyn Write,
    ) -> Result<(), SettlementError> {
        // Create tokio runtime for async ingestion
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .build()
            .map_err(|e| SettlementError::IoError {
                message: format!("Failed to create tokio runtime: {}", e),
            })?;

        let mut ledger = Ledger::new();

        // Drive ingestion to completion before settling
        runtime.block_on(async {
            let file = tokio::fs::File::open(input_path).await.map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    SettlementError::file_not_found(&input_path.display().to_string())
                } else {
                    SettlementError::IoError {
                        message: format!(
                            "Failed to open file '{}': {}",
                            input_path.display(),
                            e
                        ),
                    }
                }
            })?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);

            let mut reader = AsyncReader::new(compat_file);

            loop {
                let batch = reader.read_batch(READ_BATCH_SIZE).await?;

                // An empty batch signals end of input
                if batch.is_empty() {
                    break;
                }

                for expense in &batch {
                    for transfer in expense.transfers() {
                        ledger.reconcile(&transfer);
                    }
                }
            }

            Ok::<(), SettlementError>(())
        })?;

        if self.show_balances {
            write_balances_report(&ledger.creditors(), &ledger.debtors(), output)?;
        }

        ledger.settle();

        write_settlement_report(ledger.settlement_transfers().unwrap_or(&[]), output)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary CSV file for testing
    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_async_strategy_settles_group_expenses() {
        let file = create_temp_csv("A,300,B,C\nB,90,A\n");

        let strategy = AsyncProcessingStrategy::new(false);
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "\nIt will take (2) transactions to settle all credits/debts:\n\
             1) C owes 150 A\n\
             2) B owes 60 A\n"
        );
    }

    #[test]
    fn test_async_strategy_matches_sync_strategy() {
        use crate::strategy::sync::SyncProcessingStrategy;

        let content = "A,500,B,C,D\nB,200,A,D\nD,75,C\nC,33,A\n";
        let file = create_temp_csv(content);

        let mut sync_output = Vec::new();
        SyncProcessingStrategy::new(true)
            .process(file.path(), &mut sync_output)
            .unwrap();

        let mut async_output = Vec::new();
        AsyncProcessingStrategy::new(true)
            .process(file.path(), &mut async_output)
            .unwrap();

        assert_eq!(sync_output, async_output);
    }

    #[test]
    fn test_async_strategy_handles_missing_file() {
        let strategy = AsyncProcessingStrategy::new(false);
        let mut output = Vec::new();

        let result = strategy.process(Path::new("nonexistent.csv"), &mut output);
        assert!(matches!(
            result.unwrap_err(),
            SettlementError::FileNotFound { .. }
        ));
    }

    #[test]
    fn test_async_strategy_aborts_on_malformed_row() {
        let file = create_temp_csv("A,300,B\nB,90\n");

        let strategy = AsyncProcessingStrategy::new(false);
        let mut output = Vec::new();

        let result = strategy.process(file.path(), &mut output);
        assert_eq!(result.unwrap_err(), SettlementError::empty_split("B"));
        assert!(output.is_empty());
    }

    #[test]
    fn test_async_strategy_many_rows_across_batches() {
        let mut content = String::new();
        for i in 0..50 {
            content.push_str(&format!("p{},100,p{}\n", i % 5, (i + 1) % 5));
        }
        let file = create_temp_csv(&content);

        let strategy = AsyncProcessingStrategy::new(false);
        let mut output = Vec::new();

        strategy.process(file.path(), &mut output).unwrap();

        let output_str = String::from_utf8(output).unwrap();
        assert!(output_str.contains("transactions to settle all credits/debts:"));
    }
}
