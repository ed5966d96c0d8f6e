//! CSV format handling for expense rows and report output
//!
//! This module centralizes all format concerns, providing:
//! - Conversion from raw CSV fields to domain expenses
//! - Settlement report rendering
//! - Net balance report rendering
//!
//! All functions are pure (no file I/O) for easy testing.
//!
//! # Input format
//!
//! The expenses file has no header row and a variable number of trailing
//! fields: `payer,total,beneficiary1[,beneficiary2,...]`.

use crate::types::{Amount, Expense, SettlementError, Transfer};
use std::collections::BTreeMap;
use std::io::Write;

/// Convert one row of raw CSV fields into an Expense
///
/// This function:
/// - Requires at least a payer and a total amount field
/// - Parses the total as a signed integer
/// - Treats every remaining field as a beneficiary (empty strings included;
///   they are valid participant names)
///
/// # Arguments
///
/// * `fields` - The tokenized fields of one input row
///
/// # Errors
///
/// - `MissingFields` if the row has fewer than two fields (the line number
///   is filled in by the caller, which knows it)
/// - `InvalidAmount` if the total does not parse as an integer
/// - `EmptySplit` if no beneficiary fields remain
pub fn convert_raw_record(fields: Vec<String>) -> Result<Expense, SettlementError> {
    let mut fields = fields.into_iter();

    let payer = fields
        .next()
        .ok_or_else(|| SettlementError::missing_fields(None))?;
    let amount_field = fields
        .next()
        .ok_or_else(|| SettlementError::missing_fields(None))?;

    let total: Amount = amount_field
        .trim()
        .parse()
        .map_err(|_| SettlementError::invalid_amount(&amount_field, &payer))?;

    let beneficiaries: Vec<String> = fields.collect();

    Expense::new(payer, total, beneficiaries)
}

/// Write the settlement plan to the output
///
/// The layout matches what downstream consumers already parse: a blank line,
/// a summary header, then one numbered line per transfer rendered via the
/// Transfer Display impl.
///
/// ```text
///
/// It will take (2) transactions to settle all credits/debts:
/// 1) C owes 150 A
/// 2) B owes 60 A
/// ```
///
/// # Arguments
///
/// * `transfers` - The settlement sequence (may be empty)
/// * `output` - Mutable reference to a writer for the report
///
/// # Errors
///
/// Returns `SettlementError::IoError` if a write fails.
pub fn write_settlement_report(
    transfers: &[Transfer],
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    writeln!(output)?;
    writeln!(
        output,
        "It will take ({}) transactions to settle all credits/debts:",
        transfers.len()
    )?;

    for (counter, transfer) in transfers.iter().enumerate() {
        writeln!(output, "{}) {}", counter + 1, transfer)?;
    }

    output.flush()?;

    Ok(())
}

/// Write the pre-settlement net balances to the output
///
/// Lists creditors (owed money) and debtors (owing money) with their signed
/// balances, one per line, in map order. Settled participants are omitted.
///
/// # Arguments
///
/// * `creditors` - Map of net creditors (name -> positive balance)
/// * `debtors` - Map of net debtors (name -> negative balance)
/// * `output` - Mutable reference to a writer for the report
pub fn write_balances_report(
    creditors: &BTreeMap<String, Amount>,
    debtors: &BTreeMap<String, Amount>,
    output: &mut dyn Write,
) -> Result<(), SettlementError> {
    writeln!(output, "Creditors (owed money):")?;
    for (name, balance) in creditors {
        writeln!(output, "  {}: {}", name, balance)?;
    }

    writeln!(output, "Debtors (owing money):")?;
    for (name, balance) in debtors {
        writeln!(output, "  {}: {}", name, balance)?;
    }

    output.flush()?;

    Ok(())
}
