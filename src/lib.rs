//! Rust Settlement Engine Library
//! # Overview
//!
//! This library reconciles shared group expenses read from a CSV file and
//! produces a greedy, small sequence of settlement transfers that zeroes out
//! every participant's net balance.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Expense, Transfer, SettlementError)
//! - [`cli`] - CLI argument parsing
//! - [`core`] - Business logic components:
//!   - [`core::ledger`] - Transfer reconciliation and greedy settlement
//!   - [`core::balance_store`] - Participant balance state and computed views
//! - [`io`] - I/O handling with pluggable ingestion strategies
//! - [`strategy`] - Sync and async pipeline orchestration
//!
//! # Data Flow
//!
//! Each input row `payer,total,beneficiary1,...` is split into one transfer
//! per beneficiary, each worth the floored equal share of the total. Every
//! transfer credits the beneficiary and debits the payer, keeping the sum of
//! all balances at exactly 0. Once every row is reconciled, settlement
//! repeatedly matches the largest creditor against the largest debtor until
//! every balance is 0, recording one transfer per match.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use crate::core::{BalanceStore, Ledger};
pub use crate::io::{write_balances_report, write_settlement_report};
pub use crate::types::{Amount, Expense, SettlementError, Transfer};
