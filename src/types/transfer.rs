//! Transfer-related types for the settlement engine
//!
//! This module defines the Transfer record, the directed debt relation that
//! flows through the whole system: expenses are split into transfers, the
//! ledger reconciles transfers into balances, and settlement emits transfers
//! describing who pays whom.

use std::fmt;

/// Signed net amount in whole currency units
///
/// All arithmetic in the engine is integral; fractional shares are
/// floored away during expense splitting.
pub type Amount = i64;

/// A directed, amount-bearing debt relation between two participants
///
/// Semantically "debtor owes creditor amount". Transfers are created in two
/// places: transiently when an expense row is split per beneficiary, and
/// durably when the settlement algorithm records a payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transfer {
    /// Participant who owes the money
    pub debtor: String,

    /// Participant who is owed the money
    pub creditor: String,

    /// Amount owed, always non-negative
    pub amount: Amount,
}

impl Transfer {
    /// Create a new transfer record
    pub fn new(debtor: impl Into<String>, creditor: impl Into<String>, amount: Amount) -> Self {
        Transfer {
            debtor: debtor.into(),
            creditor: creditor.into(),
            amount,
        }
    }
}

impl fmt::Display for Transfer {
    /// Render the transfer as `"<creditor> owes <amount> <debtor>"`
    ///
    /// The field order is creditor-then-debtor even though the data direction
    /// is debtor-to-creditor. Downstream consumers parse this exact layout,
    /// so it is preserved as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} owes {} {}", self.creditor, self.amount, self.debtor)
    }
}
