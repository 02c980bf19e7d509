//! Chart-of-accounts account types.

use serde::{Deserialize, Serialize};

use tillbook_core::AccountId;

/// High-level account classification (determines normal balance side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Asset,
    Liability,
    Equity,
    Income,
    Expense,
}

impl AccountType {
    /// Whether an increasing balance is conventionally a debit.
    ///
    /// Asset and Expense accounts are debit-normal; Liability, Equity and
    /// Income accounts are credit-normal. Every report relies on this split.
    pub fn is_debit_normal(self) -> bool {
        matches!(self, AccountType::Asset | AccountType::Expense)
    }
}

/// Account identity + classification.
///
/// Names are unique (case-sensitive) within a chart of accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub kind: AccountType,
}

/// Account names the posting recipes and reports address directly.
pub mod well_known {
    pub const CASH: &str = "Cash";
    pub const BANK: &str = "Bank";
    pub const ACCOUNTS_RECEIVABLE: &str = "Accounts Receivable";
    pub const INVENTORY: &str = "Inventory";
    pub const EQUIPMENT: &str = "Equipment";
    pub const ACCOUNTS_PAYABLE: &str = "Accounts Payable";
    pub const SALES_REVENUE: &str = "Sales Revenue";
    pub const COST_OF_GOODS_SOLD: &str = "Cost of Goods Sold";
    pub const OPERATING_EXPENSES: &str = "Operating Expenses";
    pub const PAYROLL_EXPENSE: &str = "Payroll Expense";
    pub const CAPITAL: &str = "Capital";
    pub const RETAINED_EARNINGS: &str = "Retained Earnings";
    pub const INVENTORY_ADJUSTMENT: &str = "Inventory Adjustment";
    pub const SALARIES_AND_WAGES_PAYABLE: &str = "Salaries and Wages Payable";
    pub const ACCUMULATED_DEPRECIATION_EQUIPMENT: &str = "Accumulated Depreciation—Equipment";
}

/// The chart of accounts seeded at bootstrap.
pub const DEFAULT_ACCOUNTS: [(&str, AccountType); 13] = [
    (well_known::CASH, AccountType::Asset),
    (well_known::BANK, AccountType::Asset),
    (well_known::ACCOUNTS_RECEIVABLE, AccountType::Asset),
    (well_known::INVENTORY, AccountType::Asset),
    (well_known::EQUIPMENT, AccountType::Asset),
    (well_known::ACCOUNTS_PAYABLE, AccountType::Liability),
    (well_known::SALES_REVENUE, AccountType::Income),
    (well_known::COST_OF_GOODS_SOLD, AccountType::Expense),
    (well_known::OPERATING_EXPENSES, AccountType::Expense),
    (well_known::PAYROLL_EXPENSE, AccountType::Expense),
    (well_known::CAPITAL, AccountType::Equity),
    (well_known::RETAINED_EARNINGS, AccountType::Equity),
    (well_known::INVENTORY_ADJUSTMENT, AccountType::Equity),
];
