//! Income statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::Amount;
use tillbook_ledger::{AccountType, LedgerStore};

use crate::ReportPeriod;

/// Expense accounts whose name contains this marker are reported as income
/// tax rather than operating expenses.
pub const INCOME_TAX_MARKER: &str = "Income Tax";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeStatement {
    pub period: ReportPeriod,
    /// Σ(credit − debit) over Income accounts.
    pub total_revenue: Amount,
    /// Σ(debit − credit) over Expense accounts, income tax excluded.
    pub total_expenses: Amount,
    /// Σ(debit − credit) over Expense accounts named for income tax.
    pub income_tax: Amount,
    pub income_before_tax: Amount,
    pub net_income: Amount,
}

/// Build the income statement over the ledger to date.
pub fn income_statement(ledger: &LedgerStore, period: ReportPeriod) -> IncomeStatement {
    let mut total_revenue = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut income_tax = Decimal::ZERO;

    for activity in ledger.activity() {
        match activity.account.kind {
            AccountType::Income => total_revenue += activity.totals.net_credit(),
            AccountType::Expense => {
                if activity.account.name.contains(INCOME_TAX_MARKER) {
                    income_tax += activity.totals.net_debit();
                } else {
                    total_expenses += activity.totals.net_debit();
                }
            }
            _ => {}
        }
    }

    let income_before_tax = total_revenue - total_expenses;
    IncomeStatement {
        period,
        total_revenue,
        total_expenses,
        income_tax,
        income_before_tax,
        net_income: income_before_tax - income_tax,
    }
}
