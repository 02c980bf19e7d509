//! Balance and aggregation queries over the ledger.
//!
//! The raw balance of an account is Σdebit − Σcredit over its lines. Reports
//! show the raw value for debit-normal accounts and its inversion
//! (Σcredit − Σdebit) for credit-normal accounts; getting this wrong flips
//! the sign of every downstream statement.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::{AccountId, Amount, LedgerError, LedgerResult};

use crate::account::Account;
use crate::store::LedgerStore;

/// Gross debit and credit sums for one account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccountTotals {
    pub debit: Amount,
    pub credit: Amount,
}

impl AccountTotals {
    /// Raw (debit-normal) balance.
    pub fn net_debit(&self) -> Amount {
        self.debit - self.credit
    }

    /// Inverted (credit-normal) balance.
    pub fn net_credit(&self) -> Amount {
        self.credit - self.debit
    }
}

/// One row of the general-ledger view: an account with its activity to date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountActivity {
    pub account: Account,
    pub totals: AccountTotals,
    /// Raw Σdebit − Σcredit balance, regardless of normal side.
    pub balance: Amount,
}

impl LedgerStore {
    /// Gross debit/credit sums over an account's lines.
    pub fn account_totals(&self, account_id: AccountId) -> LedgerResult<AccountTotals> {
        let state = self.read();
        if !state.accounts.iter().any(|a| a.id == account_id) {
            return Err(LedgerError::not_found());
        }
        let mut totals = AccountTotals::default();
        for line in state.lines.iter().filter(|l| l.account_id == account_id) {
            totals.debit += line.debit;
            totals.credit += line.credit;
        }
        Ok(totals)
    }

    /// Raw balance: Σdebit − Σcredit over the account's lines.
    pub fn account_balance(&self, account_id: AccountId) -> LedgerResult<Amount> {
        Ok(self.account_totals(account_id)?.net_debit())
    }

    /// Balance on the account's normal side: raw for debit-normal accounts
    /// (Asset, Expense), inverted for credit-normal ones.
    pub fn signed_balance(&self, account_id: AccountId) -> LedgerResult<Amount> {
        let account = self.account(account_id).ok_or_else(LedgerError::not_found)?;
        let totals = self.account_totals(account_id)?;
        if account.kind.is_debit_normal() {
            Ok(totals.net_debit())
        } else {
            Ok(totals.net_credit())
        }
    }

    /// Gross sums for the account with this exact name; zero when no such
    /// account exists or it has no lines.
    pub fn totals_by_name(&self, name: &str) -> AccountTotals {
        let state = self.read();
        let Some(account) = state.accounts.iter().find(|a| a.name == name) else {
            return AccountTotals::default();
        };
        let mut totals = AccountTotals::default();
        for line in state.lines.iter().filter(|l| l.account_id == account.id) {
            totals.debit += line.debit;
            totals.credit += line.credit;
        }
        totals
    }

    /// Whether an account has at least one journal line.
    pub fn account_has_lines(&self, account_id: AccountId) -> bool {
        self.read().lines.iter().any(|l| l.account_id == account_id)
    }

    /// The general-ledger view: every account with its activity to date.
    pub fn activity(&self) -> Vec<AccountActivity> {
        let state = self.read();
        state
            .accounts
            .iter()
            .map(|account| {
                let mut totals = AccountTotals::default();
                for line in state.lines.iter().filter(|l| l.account_id == account.id) {
                    totals.debit += line.debit;
                    totals.credit += line.credit;
                }
                AccountActivity {
                    account: account.clone(),
                    totals,
                    balance: totals.net_debit(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::AccountType;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, n).unwrap()
    }

    fn store_with_sales() -> (LedgerStore, AccountId, AccountId) {
        let store = LedgerStore::new();
        let cash = store.create_account("Cash", AccountType::Asset).unwrap();
        let sales = store.create_account("Sales Revenue", AccountType::Income).unwrap();
        for amount in [dec!(100), dec!(40.50)] {
            store
                .post_entry(
                    day(1),
                    "sale",
                    &[(cash, amount, dec!(0)), (sales, dec!(0), amount)],
                )
                .unwrap();
        }
        (store, cash, sales)
    }

    #[test]
    fn balance_matches_recomputation_from_raw_lines() {
        let (store, cash, _) = store_with_sales();
        let from_lines: Decimal = store
            .lines_for_account(cash)
            .iter()
            .map(|l| l.debit - l.credit)
            .sum();
        assert_eq!(store.account_balance(cash).unwrap(), from_lines);
        assert_eq!(from_lines, dec!(140.50));
    }

    #[test]
    fn signed_balance_inverts_for_credit_normal_accounts() {
        let (store, cash, sales) = store_with_sales();
        assert_eq!(store.account_balance(sales).unwrap(), dec!(-140.50));
        assert_eq!(store.signed_balance(sales).unwrap(), dec!(140.50));
        assert_eq!(store.signed_balance(cash).unwrap(), dec!(140.50));
    }

    #[test]
    fn unknown_account_balance_is_not_found() {
        let store = LedgerStore::new();
        assert_eq!(
            store.account_balance(AccountId::new()).unwrap_err(),
            LedgerError::NotFound
        );
    }

    #[test]
    fn totals_by_name_defaults_to_zero() {
        let (store, _, _) = store_with_sales();
        assert_eq!(store.totals_by_name("Nonexistent"), AccountTotals::default());
        let cash = store.totals_by_name("Cash");
        assert_eq!(cash.debit, dec!(140.50));
        assert_eq!(cash.credit, dec!(0));
    }

    #[test]
    fn activity_lists_every_account_including_idle_ones() {
        let (store, _, _) = store_with_sales();
        store.create_account("Equipment", AccountType::Asset).unwrap();
        let view = store.activity();
        assert_eq!(view.len(), 3);
        let equipment = view.iter().find(|r| r.account.name == "Equipment").unwrap();
        assert_eq!(equipment.balance, dec!(0));
    }
}
