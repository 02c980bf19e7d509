//! Balance sheet.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::Amount;
use tillbook_ledger::{AccountActivity, AccountType, LedgerStore};

use crate::classify::BalanceSheetClassification;
use crate::ReportPeriod;

/// One account row within a balance-sheet section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetRow {
    pub account: String,
    pub balance: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheet {
    pub period: ReportPeriod,
    pub current_assets: Vec<BalanceSheetRow>,
    pub fixed_assets: Vec<BalanceSheetRow>,
    pub current_liabilities: Vec<BalanceSheetRow>,
    pub long_term_liabilities: Vec<BalanceSheetRow>,
    pub equity: Vec<BalanceSheetRow>,
    pub total_current_assets: Amount,
    pub total_fixed_assets: Amount,
    pub total_assets: Amount,
    pub total_current_liabilities: Amount,
    pub total_long_term_liabilities: Amount,
    pub total_liabilities: Amount,
    pub total_equity: Amount,
    /// Shown next to `total_assets`; equality is NOT enforced (unlike the
    /// trial balance's verification).
    pub total_liabilities_and_equity: Amount,
}

fn section_total(rows: &[BalanceSheetRow]) -> Amount {
    rows.iter().map(|r| r.balance).sum()
}

/// Build the balance sheet over the ledger to date.
///
/// Rollups are name-based per the classification table. Only accounts with
/// at least one journal line appear as rows; asset rows carry debit − credit
/// balances, liability and equity rows the inversion.
pub fn balance_sheet(
    ledger: &LedgerStore,
    classification: &BalanceSheetClassification,
    period: ReportPeriod,
) -> BalanceSheet {
    let active: Vec<AccountActivity> = ledger
        .activity()
        .into_iter()
        .filter(|a| !(a.totals.debit.is_zero() && a.totals.credit.is_zero()))
        .collect();

    let mut current_assets: Vec<(usize, BalanceSheetRow)> = Vec::new();
    let mut fixed_assets: Vec<BalanceSheetRow> = Vec::new();
    let mut current_liabilities: Vec<BalanceSheetRow> = Vec::new();
    let mut long_term_liabilities: Vec<BalanceSheetRow> = Vec::new();
    let mut equity: Vec<BalanceSheetRow> = Vec::new();

    for activity in &active {
        let name = activity.account.name.clone();
        match activity.account.kind {
            AccountType::Asset => {
                let row = BalanceSheetRow {
                    account: name.clone(),
                    balance: activity.totals.net_debit(),
                };
                if let Some(rank) = classification.current_asset_rank(&name) {
                    current_assets.push((rank, row));
                } else {
                    fixed_assets.push(row);
                }
            }
            AccountType::Liability => {
                let row = BalanceSheetRow {
                    account: name.clone(),
                    balance: activity.totals.net_credit(),
                };
                if classification.is_current_liability(&name) {
                    current_liabilities.push(row);
                } else {
                    long_term_liabilities.push(row);
                }
            }
            AccountType::Equity => equity.push(BalanceSheetRow {
                account: name,
                balance: activity.totals.net_credit(),
            }),
            AccountType::Income | AccountType::Expense => {}
        }
    }

    current_assets.sort_by_key(|(rank, _)| *rank);
    let current_assets: Vec<BalanceSheetRow> =
        current_assets.into_iter().map(|(_, row)| row).collect();
    fixed_assets.sort_by(|a, b| a.account.cmp(&b.account));
    current_liabilities.sort_by(|a, b| a.account.cmp(&b.account));
    long_term_liabilities.sort_by(|a, b| a.account.cmp(&b.account));
    equity.sort_by(|a, b| a.account.cmp(&b.account));

    let total_current_assets = section_total(&current_assets);
    let total_fixed_assets = section_total(&fixed_assets);
    let total_current_liabilities = section_total(&current_liabilities);
    let total_long_term_liabilities = section_total(&long_term_liabilities);
    let total_equity = section_total(&equity);
    let total_liabilities = total_current_liabilities + total_long_term_liabilities;

    BalanceSheet {
        period,
        current_assets,
        fixed_assets,
        current_liabilities,
        long_term_liabilities,
        equity,
        total_current_assets,
        total_fixed_assets,
        total_assets: total_current_assets + total_fixed_assets,
        total_current_liabilities,
        total_long_term_liabilities,
        total_liabilities,
        total_equity,
        total_liabilities_and_equity: total_liabilities + total_equity,
    }
}
