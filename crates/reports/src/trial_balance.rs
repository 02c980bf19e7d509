//! Adjusted trial balance.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use tillbook_core::Amount;
use tillbook_ledger::LedgerStore;

use crate::classify::TrialBalanceLayout;
use crate::ReportPeriod;

/// Debit/credit totals are considered equal within this tolerance.
pub const VERIFICATION_TOLERANCE: Decimal = dec!(0.01);

/// One account row: the net balance placed in exactly one column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account: String,
    pub debit: Amount,
    pub credit: Amount,
}

/// Outcome of the debits-equal-credits check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
    pub balanced: bool,
    /// |total debit − total credit|; zero when balanced to the cent.
    pub difference: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalance {
    pub period: ReportPeriod,
    pub rows: Vec<TrialBalanceRow>,
    pub total_debit: Amount,
    pub total_credit: Amount,
    pub verification: Verification,
}

/// Build the trial balance over the ledger to date.
///
/// Iterates the layout's fixed account order. Net balance is debit − credit,
/// except contra-assets which invert; a positive net lands in the debit
/// column, the absolute value of a negative net in the credit column.
pub fn trial_balance(
    ledger: &LedgerStore,
    layout: &TrialBalanceLayout,
    period: ReportPeriod,
) -> TrialBalance {
    let mut rows = Vec::with_capacity(layout.accounts.len());
    let mut total_debit = Decimal::ZERO;
    let mut total_credit = Decimal::ZERO;

    for name in &layout.accounts {
        let totals = ledger.totals_by_name(name);
        let net = if layout.is_contra_asset(name) {
            totals.net_credit()
        } else {
            totals.net_debit()
        };
        let (debit, credit) = if net > Decimal::ZERO {
            (net, Decimal::ZERO)
        } else {
            (Decimal::ZERO, -net)
        };
        total_debit += debit;
        total_credit += credit;
        rows.push(TrialBalanceRow {
            account: name.clone(),
            debit,
            credit,
        });
    }

    let difference = (total_debit - total_credit).abs();
    TrialBalance {
        period,
        rows,
        total_debit,
        total_credit,
        verification: Verification {
            balanced: difference < VERIFICATION_TOLERANCE,
            difference,
        },
    }
}
