//! Asynchronous CSV reader with stream interface
//!
//! Provides a streaming interface over expense rows from a CSV source.
//! Supports batch reading so the caller can bound memory while ingesting.
//!
//! # Design
//!
//! The AsyncReader uses:
//! - csv-async for streaming CSV parsing
//! - futures for the AsyncRead abstraction
//! - Batch reading for efficient processing
//!
//! Like the synchronous reader, the input is headerless with a variable
//! number of trailing beneficiary fields.

use crate::io::csv_format::convert_raw_record;
use crate::types::{Expense, SettlementError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;

/// Asynchronous CSV reader
///
/// Provides batch reading interface over expense rows.
/// Maintains streaming behavior with constant memory usage.
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncReader<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader from an async reader
    ///
    /// # Arguments
    ///
    /// * `reader` - Async reader providing CSV data
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_reader(reader);

        Self { csv_reader }
    }

    /// Read a batch of expense rows
    ///
    /// This method reads up to `batch_size` rows from the CSV source and
    /// converts them to Expenses. An empty batch signals end of input.
    /// Row-level errors carry the record's physical line number from the
    /// parser position, so skipped blank lines do not shift it.
    ///
    /// # Arguments
    ///
    /// * `batch_size` - Maximum number of rows to read
    ///
    /// # Errors
    ///
    /// Returns the first parse or conversion error encountered; ingestion
    /// does not continue past a malformed row.
    pub async fn read_batch(&mut self, batch_size: usize) -> Result<Vec<Expense>, SettlementError> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut record = csv_async::StringRecord::new();

        while batch.len() < batch_size {
            if !self.csv_reader.read_record(&mut record).await? {
                break;
            }

            let fields: Vec<String> = record.iter().map(str::to_string).collect();
            let expense = convert_raw_record(fields).map_err(|e| match record.position() {
                Some(pos) => e.with_line(pos.line()),
                None => e,
            })?;
            batch.push(expense);
        }

        Ok(batch)
    }
}
