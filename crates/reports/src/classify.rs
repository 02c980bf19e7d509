//! Externally supplied classification tables.
//!
//! The balance-sheet rollups and the trial-balance account order are
//! name-based, not type-based. They are plain data so callers can test or
//! replace them; the defaults reproduce the legacy lists verbatim.

use serde::{Deserialize, Serialize};

use tillbook_ledger::well_known;

/// Name-based rollups for the balance sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSheetClassification {
    /// Asset accounts shown as current assets, in this exact order.
    /// Every other Asset account is a fixed asset.
    pub current_assets: Vec<String>,
    /// Liability accounts shown as current liabilities.
    /// Every other Liability account is long-term.
    pub current_liabilities: Vec<String>,
}

impl Default for BalanceSheetClassification {
    fn default() -> Self {
        Self {
            current_assets: vec![
                well_known::CASH.to_string(),
                well_known::BANK.to_string(),
                well_known::ACCOUNTS_RECEIVABLE.to_string(),
                well_known::INVENTORY.to_string(),
            ],
            current_liabilities: vec![well_known::ACCOUNTS_PAYABLE.to_string()],
        }
    }
}

impl BalanceSheetClassification {
    /// Position of a current-asset name, used to order the section.
    pub fn current_asset_rank(&self, name: &str) -> Option<usize> {
        self.current_assets.iter().position(|n| n == name)
    }

    pub fn is_current_liability(&self, name: &str) -> bool {
        self.current_liabilities.iter().any(|n| n == name)
    }
}

/// The fixed, ordered account table the trial balance iterates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialBalanceLayout {
    /// Well-known account names in presentation order. Accounts missing
    /// from the ledger contribute zero rows.
    pub accounts: Vec<String>,
    /// Contra-asset names whose net balance uses the credit-normal sign
    /// despite the account being an Asset.
    pub contra_assets: Vec<String>,
}

impl Default for TrialBalanceLayout {
    fn default() -> Self {
        Self {
            accounts: [
                "Cash",
                "Accounts Receivable",
                "Supplies",
                "Prepaid Insurance",
                "Equipment",
                "Accumulated Depreciation—Equipment",
                "Notes Payable",
                "Accounts Payable",
                "Unearned Service Revenue",
                "Salaries and Wages Payable",
                "Interest Payable",
                "Common Stock",
                "Retained Earnings",
                "Dividends",
                "Service Revenue",
                "Salaries and Wages Expense",
                "Supplies Expense",
                "Rent Expense",
                "Insurance Expense",
                "Interest Expense",
                "Depreciation Expense",
            ]
            .into_iter()
            .map(str::to_string)
            .collect(),
            contra_assets: vec![well_known::ACCUMULATED_DEPRECIATION_EQUIPMENT.to_string()],
        }
    }
}

impl TrialBalanceLayout {
    pub fn is_contra_asset(&self, name: &str) -> bool {
        self.contra_assets.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_trial_balance_layout_has_twenty_one_accounts_in_order() {
        let layout = TrialBalanceLayout::default();
        assert_eq!(layout.accounts.len(), 21);
        assert_eq!(layout.accounts[0], "Cash");
        assert_eq!(layout.accounts[5], "Accumulated Depreciation—Equipment");
        assert_eq!(layout.accounts[20], "Depreciation Expense");
        assert!(layout.is_contra_asset("Accumulated Depreciation—Equipment"));
        assert!(!layout.is_contra_asset("Equipment"));
    }

    #[test]
    fn default_balance_sheet_rollups_match_the_legacy_lists() {
        let classification = BalanceSheetClassification::default();
        assert_eq!(
            classification.current_assets,
            ["Cash", "Bank", "Accounts Receivable", "Inventory"]
        );
        assert_eq!(classification.current_liabilities, ["Accounts Payable"]);
        assert_eq!(classification.current_asset_rank("Bank"), Some(1));
        assert_eq!(classification.current_asset_rank("Equipment"), None);
        assert!(classification.is_current_liability("Accounts Payable"));
    }
}
