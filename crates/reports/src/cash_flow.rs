//! Cash flow statement (indirect method).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::Amount;
use tillbook_ledger::{AccountType, LedgerStore, well_known};

use crate::ReportPeriod;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowStatement {
    pub period: ReportPeriod,
    /// Income-account balances minus Expense-account balances (income tax
    /// is not split out here, unlike the income statement).
    pub net_income: Amount,
    /// Gross debits of any account named for depreciation or amortization.
    pub depreciation: Amount,
    /// Working-capital deltas: raw debit − credit change of the named account.
    pub change_accounts_receivable: Amount,
    pub change_inventory: Amount,
    pub change_accounts_payable: Amount,
    pub change_wages_payable: Amount,
    pub net_operating: Amount,
    /// Investing legs derive symmetrically from |ΔEquipment|, so they net to
    /// zero by construction (legacy behavior, reproduced as-is).
    pub purchase_of_equipment: Amount,
    pub sale_of_equipment: Amount,
    pub net_investing: Amount,
    /// Financing is a fixed zero placeholder.
    pub proceeds_from_credit_line: Amount,
    pub loan_principal_repayment: Amount,
    pub owner_distribution: Amount,
    pub net_financing: Amount,
    pub net_increase_in_cash: Amount,
    pub cash_begin: Amount,
    pub cash_end: Amount,
}

/// Build the cash flow statement over the ledger to date.
pub fn cash_flow_statement(ledger: &LedgerStore, period: ReportPeriod) -> CashFlowStatement {
    let mut total_income = Decimal::ZERO;
    let mut total_expenses = Decimal::ZERO;
    let mut depreciation = Decimal::ZERO;

    for activity in ledger.activity() {
        match activity.account.kind {
            AccountType::Income => total_income += activity.totals.net_credit(),
            AccountType::Expense => total_expenses += activity.totals.net_debit(),
            _ => {}
        }
        let name = &activity.account.name;
        if name.contains("Depreciation") || name.contains("Amortization") {
            depreciation += activity.totals.debit;
        }
    }
    let net_income = total_income - total_expenses;

    let change = |name: &str| ledger.totals_by_name(name).net_debit();
    let change_accounts_receivable = change(well_known::ACCOUNTS_RECEIVABLE);
    let change_inventory = change(well_known::INVENTORY);
    let change_accounts_payable = change(well_known::ACCOUNTS_PAYABLE);
    let change_wages_payable = change(well_known::SALARIES_AND_WAGES_PAYABLE);

    // Every delta is the raw debit − credit change, payables included: growth
    // in a payable is a credit, enters negative, and reduces the figure
    // (legacy behavior, reproduced as-is).
    let net_operating = net_income + depreciation
        - change_accounts_receivable
        - change_inventory
        + change_accounts_payable
        + change_wages_payable;

    let equipment_change = change(well_known::EQUIPMENT).abs();
    let purchase_of_equipment = -equipment_change;
    let sale_of_equipment = equipment_change;
    let net_investing = purchase_of_equipment + sale_of_equipment;

    let proceeds_from_credit_line = Decimal::ZERO;
    let loan_principal_repayment = Decimal::ZERO;
    let owner_distribution = Decimal::ZERO;
    let net_financing = proceeds_from_credit_line + loan_principal_repayment + owner_distribution;

    let cash_end = change(well_known::CASH);
    let cash_begin = cash_end - (net_operating + net_investing + net_financing);

    CashFlowStatement {
        period,
        net_income,
        depreciation,
        change_accounts_receivable,
        change_inventory,
        change_accounts_payable,
        change_wages_payable,
        net_operating,
        purchase_of_equipment,
        sale_of_equipment,
        net_investing,
        proceeds_from_credit_line,
        loan_principal_repayment,
        owner_distribution,
        net_financing,
        net_increase_in_cash: cash_end - cash_begin,
        cash_begin,
        cash_end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn period() -> ReportPeriod {
        let day = |n| NaiveDate::from_ymd_opt(2024, 6, n).unwrap();
        ReportPeriod::new(day(1), day(30))
    }

    fn day(n: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, n).unwrap()
    }

    #[test]
    fn operating_section_adjusts_net_income_by_working_capital() {
        let ledger = LedgerStore::with_default_accounts();
        let cash = ledger.lookup_account("Cash").unwrap().id;
        let ar = ledger.lookup_account("Accounts Receivable").unwrap().id;
        let ap = ledger.lookup_account("Accounts Payable").unwrap().id;
        let sales = ledger.lookup_account("Sales Revenue").unwrap().id;
        let expenses = ledger.lookup_account("Operating Expenses").unwrap().id;

        // Cash sale 500, credit sale 200, expense on account 150.
        ledger
            .post_entry(
                day(1),
                "cash sale",
                &[(cash, dec!(500), dec!(0)), (sales, dec!(0), dec!(500))],
            )
            .unwrap();
        ledger
            .post_entry(
                day(2),
                "credit sale",
                &[(ar, dec!(200), dec!(0)), (sales, dec!(0), dec!(200))],
            )
            .unwrap();
        ledger
            .post_entry(
                day(3),
                "expense on account",
                &[(expenses, dec!(150), dec!(0)), (ap, dec!(0), dec!(150))],
            )
            .unwrap();

        let report = cash_flow_statement(&ledger, period());
        assert_eq!(report.net_income, dec!(550));
        assert_eq!(report.change_accounts_receivable, dec!(200));
        // Raw debit − credit: the AP credit of 150 enters as −150.
        assert_eq!(report.change_accounts_payable, dec!(-150));
        // 550 − 200 (AR growth) + (−150) = 200.
        assert_eq!(report.net_operating, dec!(200));
        assert_eq!(report.cash_end, dec!(500));
        assert_eq!(report.cash_begin, dec!(300));
        assert_eq!(report.net_increase_in_cash, dec!(200));
    }

    #[test]
    fn depreciation_is_added_back() {
        let ledger = LedgerStore::with_default_accounts();
        let cash = ledger.lookup_account("Cash").unwrap().id;
        let sales = ledger.lookup_account("Sales Revenue").unwrap().id;
        let depreciation = ledger
            .create_account("Depreciation Expense", AccountType::Expense)
            .unwrap();
        let accumulated = ledger
            .create_account("Accumulated Depreciation—Equipment", AccountType::Asset)
            .unwrap();

        ledger
            .post_entry(
                day(4),
                "sale",
                &[(cash, dec!(300), dec!(0)), (sales, dec!(0), dec!(300))],
            )
            .unwrap();
        ledger
            .post_entry(
                day(5),
                "monthly depreciation",
                &[
                    (depreciation, dec!(40), dec!(0)),
                    (accumulated, dec!(0), dec!(40)),
                ],
            )
            .unwrap();

        let report = cash_flow_statement(&ledger, period());
        assert_eq!(report.net_income, dec!(260));
        assert_eq!(report.depreciation, dec!(40));
        assert_eq!(report.net_operating, dec!(300));
    }

    #[test]
    fn investing_legs_mirror_each_other_and_net_to_zero() {
        let ledger = LedgerStore::with_default_accounts();
        let cash = ledger.lookup_account("Cash").unwrap().id;
        let equipment = ledger.lookup_account("Equipment").unwrap().id;
        ledger
            .post_entry(
                day(6),
                "buy oven",
                &[(equipment, dec!(750), dec!(0)), (cash, dec!(0), dec!(750))],
            )
            .unwrap();

        let report = cash_flow_statement(&ledger, period());
        assert_eq!(report.purchase_of_equipment, dec!(-750));
        assert_eq!(report.sale_of_equipment, dec!(750));
        assert_eq!(report.net_investing, dec!(0));
    }

    #[test]
    fn financing_section_is_a_zero_placeholder() {
        let report = cash_flow_statement(&LedgerStore::new(), period());
        assert_eq!(report.proceeds_from_credit_line, dec!(0));
        assert_eq!(report.loan_principal_repayment, dec!(0));
        assert_eq!(report.owner_distribution, dec!(0));
        assert_eq!(report.net_financing, dec!(0));
    }
}
