//! Synchronous CSV reader with iterator interface
//!
//! Provides a streaming iterator over expense rows from a CSV file.
//! Delegates row conversion concerns to the csv_format module.
//!
//! # Design
//!
//! The SyncReader uses csv::Reader to read records sequentially, delegating
//! conversion to the csv_format module. It maintains streaming behavior by
//! processing records one at a time without loading the entire file into
//! memory.
//!
//! The expenses format has no header row, and rows carry a variable number
//! of trailing beneficiary fields, so the reader is configured headerless
//! and flexible.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()`
//! - Individual record errors are yielded as Err variants in the iterator,
//!   carrying the offending line number

use crate::io::csv_format::convert_raw_record;
use crate::types::{Expense, SettlementError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::path::Path;

/// Synchronous CSV reader
///
/// Provides an iterator interface over expense rows.
/// Maintains streaming behavior with constant memory usage.
///
/// # Examples
///
/// ```no_run
/// use rust_settlement_engine::io::sync_reader::SyncReader;
/// use std::path::Path;
///
/// let reader = SyncReader::new(Path::new("expenses.csv")).unwrap();
/// for result in reader {
///     match result {
///         Ok(expense) => println!("{} paid {}", expense.payer, expense.total),
///         Err(e) => eprintln!("Error: {}", e),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
}

impl SyncReader {
    /// Create a new SyncReader from a file path
    ///
    /// Opens the CSV file and prepares it for streaming iteration.
    /// The CSV reader is configured to:
    /// - Treat the first row as data (there is no header)
    /// - Trim whitespace from all fields
    /// - Allow flexible field counts (variable number of beneficiaries)
    /// - Use an 8KB buffer for efficient I/O
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the expenses CSV file
    ///
    /// # Errors
    ///
    /// Returns `SettlementError::FileNotFound` or `IoError` if the file
    /// could not be opened.
    pub fn new(path: &Path) -> Result<Self, SettlementError> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                SettlementError::file_not_found(&path.display().to_string())
            } else {
                SettlementError::IoError {
                    message: format!("Failed to open file '{}': {}", path.display(), e),
                }
            }
        })?;

        let reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true)
            .buffer_capacity(8 * 1024)
            .from_reader(file);

        Ok(Self { reader })
    }
}

impl Iterator for SyncReader {
    type Item = Result<Expense, SettlementError>;

    /// Get the next expense row from the CSV file
    ///
    /// This method:
    /// 1. Reads the next CSV record
    /// 2. Converts the fields to an Expense using csv_format::convert_raw_record
    /// 3. Tags row-level errors with the record's physical line number, taken
    ///    from the parser position so blank lines and quoted multi-line
    ///    fields do not shift it
    ///
    /// # Returns
    ///
    /// * `Some(Ok(Expense))` - Successfully parsed row
    /// * `Some(Err(SettlementError))` - Parse or conversion error
    /// * `None` - End of file reached
    fn next(&mut self) -> Option<Self::Item> {
        let mut record = csv::StringRecord::new();

        match self.reader.read_record(&mut record) {
            Ok(false) => None,
            Ok(true) => {
                let fields: Vec<String> = record.iter().map(str::to_string).collect();
                Some(convert_raw_record(fields).map_err(|e| match record.position() {
                    Some(pos) => e.with_line(pos.line()),
                    None => e,
                }))
            }
            Err(e) => Some(Err(SettlementError::from(e))),
        }
    }
}
