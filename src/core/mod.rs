//! Core business logic module
//!
//! This module contains the core settlement components:
//! - `balance_store` - Participant balance state and computed views
//! - `ledger` - Transfer reconciliation and the greedy settlement algorithm

pub mod balance_store;
pub mod ledger;

pub use balance_store::BalanceStore;
pub use ledger::Ledger;
