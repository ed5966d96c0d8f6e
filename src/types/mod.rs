//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `expense`: Input expense rows and per-beneficiary splitting
//! - `transfer`: Directed debt records and their rendering
//! - `error`: Error types for the settlement engine

pub mod error;
pub mod expense;
pub mod transfer;

pub use error::SettlementError;
pub use expense::Expense;
pub use transfer::{Amount, Transfer};
