//! Error types for the settlement engine
//!
//! This module defines all error types that can occur while reading expense
//! rows and producing the settlement plan. Errors are designed to be
//! descriptive and user-friendly for CLI output.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, unreadable records
//! - **Row Errors**: Rows that parse as CSV but are not valid expenses
//!   (missing fields, zero beneficiaries, non-integer totals)
//!
//! Once rows are well-formed, reconciliation and settlement are pure integer
//! computations and produce no errors of their own.

use thiserror::Error;

/// Main error type for the settlement engine
///
/// This enum represents all possible errors that can occur while turning an
/// expenses file into a settlement plan. Each variant includes relevant
/// context to help diagnose and resolve the issue.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettlementError {
    /// File not found at the specified path
    ///
    /// This is a fatal error that prevents processing from starting.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading input or writing the report
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Row has too few fields to be an expense
    ///
    /// Every row needs at least a payer and a total amount.
    #[error("Row{} has too few fields: expected payer, amount, beneficiaries...", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    MissingFields {
        /// Line number where the row occurred (if available)
        line: Option<u64>,
    },

    /// Row names no beneficiaries to split the total among
    ///
    /// Splitting among zero beneficiaries would divide by zero, so the row
    /// is rejected rather than silently producing garbage.
    #[error("Expense paid by '{payer}' has no beneficiaries to split among")]
    EmptySplit {
        /// Payer named in the rejected row
        payer: String,
    },

    /// Total amount is not a valid integer
    #[error("Invalid amount '{amount}' for expense paid by '{payer}'")]
    InvalidAmount {
        /// The invalid amount string
        amount: String,
        /// Payer named in the rejected row
        payer: String,
    },
}

// Conversion from io::Error to SettlementError
impl From<std::io::Error> for SettlementError {
    fn from(error: std::io::Error) -> Self {
        SettlementError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SettlementError
impl From<csv::Error> for SettlementError {
    fn from(error: csv::Error) -> Self {
        // Extract line number if available
        let line = error.position().map(|pos| pos.line());

        SettlementError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Conversion from csv_async::Error to SettlementError
impl From<csv_async::Error> for SettlementError {
    fn from(error: csv_async::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        SettlementError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl SettlementError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        SettlementError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError with an optional line number
    pub fn parse_error(line: Option<u64>, message: &str) -> Self {
        SettlementError::ParseError {
            line,
            message: message.to_string(),
        }
    }

    /// Create a MissingFields error
    pub fn missing_fields(line: Option<u64>) -> Self {
        SettlementError::MissingFields { line }
    }

    /// Create an EmptySplit error
    pub fn empty_split(payer: &str) -> Self {
        SettlementError::EmptySplit {
            payer: payer.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str, payer: &str) -> Self {
        SettlementError::InvalidAmount {
            amount: amount.to_string(),
            payer: payer.to_string(),
        }
    }

    /// Attach a line number to row-level errors that lack one
    ///
    /// Readers call this so that errors produced by pure conversion code
    /// still point at the offending input line.
    pub fn with_line(self, line: u64) -> Self {
        match self {
            SettlementError::ParseError {
                line: None,
                message,
            } => SettlementError::ParseError {
                line: Some(line),
                message,
            },
            SettlementError::MissingFields { line: None } => {
                SettlementError::MissingFields { line: Some(line) }
            }
            other => other,
        }
    }
}
