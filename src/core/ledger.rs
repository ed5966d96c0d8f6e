//! Settlement ledger
//!
//! This module provides the Ledger that accumulates reconciled transfers into
//! net balances and runs the greedy settlement algorithm over them.
//!
//! The ledger enforces the core bookkeeping rules:
//! - Every transfer adjusts exactly two balances by paired +amount/-amount,
//!   so the sum of all balances stays 0
//! - Settlement repeatedly matches the largest creditor against the largest
//!   debtor until neither side has anything outstanding

use crate::core::balance_store::BalanceStore;
use crate::types::{Amount, Transfer};
use std::collections::BTreeMap;

/// Balance accumulation and greedy debt settlement
///
/// The Ledger exclusively owns its balance store and its settlement sequence;
/// callers feed it transfers via [`reconcile`](Ledger::reconcile) and, once
/// all input is ingested, drain the balances via [`settle`](Ledger::settle).
///
/// Calling `settle` before every transfer has been reconciled is a caller
/// error: the algorithm only sees the balances accumulated so far.
#[derive(Debug, Default)]
pub struct Ledger {
    balances: BalanceStore,
    settlements: Vec<Transfer>,
}

impl Ledger {
    /// Create a new Ledger with no participants and no settlements
    pub fn new() -> Self {
        Ledger {
            balances: BalanceStore::new(),
            settlements: Vec::new(),
        }
    }

    /// Apply a single transfer to the balance mapping
    ///
    /// Credits the creditor with `+amount` and debits the debtor with
    /// `-amount`, creating either participant at 0 first if unknown. Order
    /// of reconciliation does not affect final balances.
    pub fn reconcile(&mut self, transfer: &Transfer) {
        self.balances.adjust(&transfer.creditor, transfer.amount);
        self.balances.adjust(&transfer.debtor, -transfer.amount);
    }

    /// Drain all nonzero balances into a sequence of settlement transfers
    ///
    /// Greedy largest-first matching: while both a strictly positive and a
    /// strictly negative balance exist, move
    /// `min(max_creditor, |max_debtor|)` between the two and record the
    /// payment. Each iteration strictly decreases the sum of absolute
    /// balances, so the loop terminates in at most `participants - 1` steps.
    ///
    /// This is a small-in-practice heuristic, not the provably minimal
    /// transaction count.
    ///
    /// Re-running `settle` with no new reconciliations is a no-op: all
    /// balances are already 0, so nothing further is appended.
    pub fn settle(&mut self) {
        loop {
            let (creditor, credit) = match self.balances.max_creditor() {
                Some((name, amount)) => (name.to_string(), amount),
                None => break,
            };
            let (debtor, debt) = match self.balances.max_debtor() {
                Some((name, amount)) => (name.to_string(), amount),
                None => break,
            };

            // debt is strictly negative here, so -debt is its absolute value
            let amount = credit.min(-debt);

            self.balances.adjust(&creditor, -amount);
            self.balances.adjust(&debtor, amount);
            self.settlements.push(Transfer::new(debtor, creditor, amount));
        }
    }

    /// The settlement transfers produced by [`settle`](Ledger::settle)
    ///
    /// Returns `None` when no transactions were produced, mirroring the
    /// absent/empty sentinel consumers expect.
    pub fn settlement_transfers(&self) -> Option<&[Transfer]> {
        if self.settlements.is_empty() {
            None
        } else {
            Some(&self.settlements)
        }
    }

    /// Fresh map of current net debtors (name -> negative balance)
    pub fn debtors(&self) -> BTreeMap<String, Amount> {
        self.balances.debtors()
    }

    /// Fresh map of current net creditors (name -> positive balance)
    pub fn creditors(&self) -> BTreeMap<String, Amount> {
        self.balances.creditors()
    }

    /// Read-only access to the underlying balance store
    pub fn balances(&self) -> &BalanceStore {
        &self.balances
    }
}
