//! Expense row types for the settlement engine
//!
//! An expense is one input row: a single payer covered a total amount on
//! behalf of one or more beneficiaries. Splitting an expense produces one
//! transfer per beneficiary, each for an equal floored share of the total.

use super::error::SettlementError;
use super::transfer::{Amount, Transfer};

/// A normalized expense row: payer, total amount, and beneficiaries
///
/// The per-beneficiary share is computed once at construction and reused for
/// every beneficiary; the division remainder is dropped, not allocated to
/// anyone. That shrinks the settled total versus the recorded total and is
/// deliberate input compatibility, not a rounding bug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    /// Participant who paid the total up front
    pub payer: String,

    /// Recorded total paid, in whole units
    pub total: Amount,

    /// Participants the total is split among (never empty)
    beneficiaries: Vec<String>,

    /// Floored equal share: total div beneficiaries.len()
    share: Amount,
}

impl Expense {
    /// Create an expense row, computing the per-beneficiary share
    ///
    /// The share uses euclidean (floor) division so that negative totals
    /// round down, matching the recorded-row semantics.
    ///
    /// # Errors
    ///
    /// Returns `SettlementError::EmptySplit` if `beneficiaries` is empty;
    /// splitting among nobody would divide by zero.
    pub fn new(
        payer: impl Into<String>,
        total: Amount,
        beneficiaries: Vec<String>,
    ) -> Result<Self, SettlementError> {
        let payer = payer.into();

        if beneficiaries.is_empty() {
            return Err(SettlementError::empty_split(&payer));
        }

        let share = total.div_euclid(beneficiaries.len() as Amount);

        Ok(Expense {
            payer,
            total,
            beneficiaries,
            share,
        })
    }

    /// The floored equal share each beneficiary owes the payer
    pub fn share(&self) -> Amount {
        self.share
    }

    /// The beneficiaries this expense is split among
    pub fn beneficiaries(&self) -> &[String] {
        &self.beneficiaries
    }

    /// Split the expense into one transfer per beneficiary
    ///
    /// Each transfer has the payer as debtor, one beneficiary as creditor,
    /// and the precomputed share as amount. Produces exactly
    /// `beneficiaries.len()` transfers, in beneficiary order.
    ///
    /// Note the debtor/creditor orientation follows the recorded-row
    /// convention: the payer is the row's "debtor" whose balance goes down
    /// by the settled total, and each beneficiary is credited a share.
    pub fn transfers(&self) -> Vec<Transfer> {
        self.beneficiaries
            .iter()
            .map(|beneficiary| Transfer::new(self.payer.clone(), beneficiary.clone(), self.share))
            .collect()
    }
}
