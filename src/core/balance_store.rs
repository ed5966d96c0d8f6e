//! Balance store module
//!
//! This module provides the `BalanceStore` struct which owns the mapping of
//! participant names to signed net balances and provides the computed views
//! the settlement algorithm selects from.
//!
//! The BalanceStore is responsible for:
//! - Creating participant entries on first adjustment
//! - Applying signed balance adjustments
//! - Computing fresh debtor/creditor views on demand
//! - Selecting the max creditor and max debtor deterministically

use crate::types::Amount;
use std::collections::BTreeMap;

/// Owns all participant net balances
///
/// The store maintains an in-memory ordered map of participant names to
/// signed balances. Positive means the participant is owed money, negative
/// means the participant owes money, zero means settled.
///
/// A `BTreeMap` keeps iteration order lexicographic by name, so max-creditor
/// and max-debtor selection is deterministic regardless of insertion order.
#[derive(Debug, Clone, Default)]
pub struct BalanceStore {
    /// Map of participant names to signed net balances
    balances: BTreeMap<String, Amount>,
}

impl BalanceStore {
    /// Create a new BalanceStore with no participants
    pub fn new() -> Self {
        BalanceStore {
            balances: BTreeMap::new(),
        }
    }

    /// Apply a signed adjustment to a participant's balance
    ///
    /// If the participant is not yet present, it is implicitly created with
    /// an initial balance of 0 before the adjustment.
    ///
    /// # Arguments
    ///
    /// * `name` - The participant to adjust
    /// * `delta` - Signed amount to add to the participant's balance
    pub fn adjust(&mut self, name: &str, delta: Amount) {
        *self.balances.entry(name.to_string()).or_insert(0) += delta;
    }

    /// Current balance of a participant, 0 if unknown
    pub fn balance(&self, name: &str) -> Amount {
        self.balances.get(name).copied().unwrap_or(0)
    }

    /// Number of participants ever adjusted (including settled ones)
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// True if no participant has ever been adjusted
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }

    /// Sum of all balances
    ///
    /// Always exactly 0 when every adjustment was applied as a paired
    /// +amount/-amount, which is how the ledger reconciles transfers.
    pub fn total(&self) -> Amount {
        self.balances.values().sum()
    }

    /// Iterate over all (name, balance) pairs in lexicographic name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Amount)> {
        self.balances
            .iter()
            .map(|(name, &balance)| (name.as_str(), balance))
    }

    /// Fresh map of all net debtors (name -> negative balance)
    ///
    /// Computed from scratch on every call; mutating the returned map does
    /// not touch the store.
    pub fn debtors(&self) -> BTreeMap<String, Amount> {
        self.balances
            .iter()
            .filter(|(_, &balance)| balance < 0)
            .map(|(name, &balance)| (name.clone(), balance))
            .collect()
    }

    /// Fresh map of all net creditors (name -> positive balance)
    pub fn creditors(&self) -> BTreeMap<String, Amount> {
        self.balances
            .iter()
            .filter(|(_, &balance)| balance > 0)
            .map(|(name, &balance)| (name.clone(), balance))
            .collect()
    }

    /// Participant with the largest strictly positive balance
    ///
    /// Returns `None` when no participant is owed anything. Ties resolve to
    /// the first participant in iteration order; the strict `>` comparison
    /// keeps that selection stable.
    pub fn max_creditor(&self) -> Option<(&str, Amount)> {
        let mut max: Option<(&str, Amount)> = None;

        for (name, balance) in self.iter() {
            if balance > max.map_or(0, |(_, amount)| amount) {
                max = Some((name, balance));
            }
        }

        max
    }

    /// Participant with the most negative balance
    ///
    /// Returns `None` when no participant owes anything. Same tie-break rule
    /// as `max_creditor`, with a strict `<` comparison.
    pub fn max_debtor(&self) -> Option<(&str, Amount)> {
        let mut max: Option<(&str, Amount)> = None;

        for (name, balance) in self.iter() {
            if balance < max.map_or(0, |(_, amount)| amount) {
                max = Some((name, balance));
            }
        }

        max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_creates_empty_store() {
        let store = BalanceStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_adjust_creates_participant_at_zero() {
        let mut store = BalanceStore::new();

        store.adjust("alice", 100);

        assert_eq!(store.balance("alice"), 100);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_adjust_accumulates() {
        let mut store = BalanceStore::new();

        store.adjust("alice", 100);
        store.adjust("alice", -30);
        store.adjust("alice", 5);

        assert_eq!(store.balance("alice"), 75);
    }

    #[test]
    fn test_balance_of_unknown_participant_is_zero() {
        let store = BalanceStore::new();
        assert_eq!(store.balance("ghost"), 0);
    }

    #[test]
    fn test_paired_adjustments_keep_total_zero() {
        let mut store = BalanceStore::new();

        store.adjust("alice", 100);
        store.adjust("bob", -100);
        assert_eq!(store.total(), 0);

        store.adjust("carol", 40);
        store.adjust("alice", -40);
        assert_eq!(store.total(), 0);
    }

    #[test]
    fn test_debtors_and_creditors_partition_nonzero_balances() {
        let mut store = BalanceStore::new();
        store.adjust("alice", 210);
        store.adjust("bob", -60);
        store.adjust("carol", -150);
        store.adjust("dave", 0);

        let creditors = store.creditors();
        assert_eq!(creditors.len(), 1);
        assert_eq!(creditors["alice"], 210);

        let debtors = store.debtors();
        assert_eq!(debtors.len(), 2);
        assert_eq!(debtors["bob"], -60);
        assert_eq!(debtors["carol"], -150);
    }

    #[test]
    fn test_views_are_fresh_containers() {
        let mut store = BalanceStore::new();
        store.adjust("alice", 100);
        store.adjust("bob", -100);

        let mut creditors = store.creditors();
        creditors.insert("mallory".to_string(), 999);

        // The store is untouched by mutations of the returned view
        assert_eq!(store.balance("mallory"), 0);
        assert_eq!(store.creditors().len(), 1);
    }

    #[test]
    fn test_max_creditor_picks_largest_positive() {
        let mut store = BalanceStore::new();
        store.adjust("alice", 210);
        store.adjust("bob", 50);
        store.adjust("carol", -260);

        assert_eq!(store.max_creditor(), Some(("alice", 210)));
    }

    #[test]
    fn test_max_debtor_picks_most_negative() {
        let mut store = BalanceStore::new();
        store.adjust("alice", 210);
        store.adjust("bob", -60);
        store.adjust("carol", -150);

        assert_eq!(store.max_debtor(), Some(("carol", -150)));
    }

    #[test]
    fn test_max_selection_ignores_zero_balances() {
        let mut store = BalanceStore::new();
        store.adjust("alice", 0);
        store.adjust("bob", 0);

        assert_eq!(store.max_creditor(), None);
        assert_eq!(store.max_debtor(), None);
    }

    #[test]
    fn test_max_selection_on_empty_store() {
        let store = BalanceStore::new();
        assert_eq!(store.max_creditor(), None);
        assert_eq!(store.max_debtor(), None);
    }

    #[test]
    fn test_ties_resolve_to_first_in_iteration_order() {
        let mut store = BalanceStore::new();
        // Insert out of order; BTreeMap iterates lexicographically
        store.adjust("zoe", 33);
        store.adjust("bob", 33);
        store.adjust("ann", -66);

        assert_eq!(store.max_creditor(), Some(("bob", 33)));
    }

    #[test]
    fn test_empty_name_is_a_valid_key() {
        let mut store = BalanceStore::new();
        store.adjust("", 10);
        store.adjust("alice", -10);

        assert_eq!(store.balance(""), 10);
        assert_eq!(store.max_creditor(), Some(("", 10)));
    }
}
