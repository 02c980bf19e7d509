//! `tillbook-reports` — the four financial statements.
//!
//! Stateless pure functions over a [`tillbook_ledger::LedgerStore`] snapshot
//! plus a requested date window. Statement math lives in the per-statement
//! modules; the fixed-width text layouts live in [`render`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod balance_sheet;
pub mod cash_flow;
pub mod classify;
pub mod income_statement;
pub mod render;
pub mod trial_balance;

pub use balance_sheet::{BalanceSheet, BalanceSheetRow, balance_sheet};
pub use cash_flow::{CashFlowStatement, cash_flow_statement};
pub use classify::{BalanceSheetClassification, TrialBalanceLayout};
pub use income_statement::{IncomeStatement, income_statement};
pub use trial_balance::{TrialBalance, TrialBalanceRow, Verification, trial_balance};

/// Compatibility flag: every statement accepts a date window, but the
/// underlying aggregates are whole-ledger-to-date and ignore it. The window
/// appears in headers only. This reproduces the system being replaced; it is
/// deliberate, not an oversight.
pub const AGGREGATES_IGNORE_REPORT_PERIOD: bool = true;

/// The (from, to) window a statement was requested for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportPeriod {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}
