//! Fixed-width text rendering for the four statements.
//!
//! The layouts reproduce the back-office screens the statements were lifted
//! from: 80-column banners for the income statement and balance sheet,
//! dotted leaders for the cash flow statement, and a 36/18/18 column table
//! for the trial balance.

use rust_decimal::Decimal;

use crate::balance_sheet::{BalanceSheet, BalanceSheetRow};
use crate::cash_flow::CashFlowStatement;
use crate::income_statement::IncomeStatement;
use crate::trial_balance::TrialBalance;

const WIDE: usize = 80;

fn rule(ch: char, width: usize) -> String {
    ch.to_string().repeat(width)
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Two-decimal rendering, e.g. `140.50`.
fn fixed2(value: Decimal) -> String {
    format!("{:.2}", value.round_dp(2))
}

/// Zero-decimal rendering with thousands separators, e.g. `12,450`.
fn grouped0(value: Decimal) -> String {
    let rounded = value.round_dp(0);
    if rounded.is_zero() {
        return "0".to_string();
    }
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded.is_sign_negative() {
        format!("-{grouped}")
    } else {
        grouped
    }
}

/// A label, a dotted leader of `dots` dots, and a right-aligned figure.
fn leader_line(label: &str, dots: usize, value: Decimal) -> String {
    format!("{label}{}{:>10}", ".".repeat(dots), grouped0(value))
}

impl IncomeStatement {
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(rule('=', WIDE));
        lines.push(center("INCOME STATEMENT", WIDE));
        lines.push(rule('=', WIDE));
        lines.push(center(
            &format!("For the period: {} to {}", self.period.from, self.period.to),
            WIDE,
        ));
        lines.push(rule('=', WIDE) + "\n");
        lines.push("REVENUE".to_string());
        lines.push(rule('-', WIDE));
        lines.push(format!("{:<40}{:>30}", "Description", "Amount"));
        lines.push(format!(
            "{:<40}{:>30}\n",
            "Total Revenue",
            fixed2(self.total_revenue)
        ));
        lines.push("EXPENSES".to_string());
        lines.push(rule('-', WIDE));
        lines.push(format!("{:<40}{:>30}", "Description", "Amount"));
        lines.push(format!(
            "{:<40}{:>30}\n",
            "Total Expenses",
            fixed2(self.total_expenses)
        ));
        lines.push("NET INCOME".to_string());
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "{:<40}{:>30}\n",
            "Net Income",
            fixed2(self.net_income)
        ));
        lines.push(rule('=', WIDE));
        lines.push(center("End of Income Statement", WIDE));
        lines.push(rule('=', WIDE));
        lines.join("\n")
    }
}

fn section_rows(lines: &mut Vec<String>, rows: &[BalanceSheetRow]) {
    for row in rows {
        lines.push(format!("  {:<28} {:>12}", row.account, fixed2(row.balance)));
    }
}

impl BalanceSheet {
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(rule('=', WIDE));
        lines.push(center("BALANCE SHEET", WIDE));
        lines.push(rule('=', WIDE));
        lines.push(center(&format!("As of: {}", self.period.to), WIDE));
        lines.push(rule('=', WIDE) + "\n");

        lines.push("ASSETS".to_string());
        lines.push(rule('-', WIDE));
        lines.push("Current Assets:".to_string());
        section_rows(&mut lines, &self.current_assets);
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "Total Current Assets: {:>12}\n",
            fixed2(self.total_current_assets)
        ));
        lines.push("Fixed Assets:".to_string());
        section_rows(&mut lines, &self.fixed_assets);
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "Total Fixed Assets: {:>12}",
            fixed2(self.total_fixed_assets)
        ));
        lines.push(rule('-', WIDE));
        lines.push(format!("Total Assets: {:>12}\n", fixed2(self.total_assets)));

        lines.push("LIABILITIES".to_string());
        lines.push(rule('-', WIDE));
        lines.push("Current Liabilities:".to_string());
        section_rows(&mut lines, &self.current_liabilities);
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "Total Current Liabilities: {:>12}\n",
            fixed2(self.total_current_liabilities)
        ));
        lines.push("Long-term Liabilities:".to_string());
        section_rows(&mut lines, &self.long_term_liabilities);
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "Total Long-term Liabilities: {:>12}",
            fixed2(self.total_long_term_liabilities)
        ));
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "Total Liabilities: {:>12}\n",
            fixed2(self.total_liabilities)
        ));

        lines.push("EQUITY".to_string());
        lines.push(rule('-', WIDE));
        for row in &self.equity {
            lines.push(format!("{:<30} {:>12}", row.account, fixed2(row.balance)));
        }
        lines.push(rule('-', WIDE));
        lines.push(format!("Total Equity: {:>12}\n", fixed2(self.total_equity)));

        lines.push("TOTAL LIABILITIES AND EQUITY".to_string());
        lines.push(rule('-', WIDE));
        lines.push(format!(
            "Total: {:>12}",
            fixed2(self.total_liabilities_and_equity)
        ));

        lines.push("\n".to_string() + &rule('=', WIDE));
        lines.push(center("End of Balance Sheet", WIDE));
        lines.push(rule('=', WIDE));
        lines.join("\n")
    }
}

impl CashFlowStatement {
    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push("CASH FLOWS FROM OPERATING ACTIVITIES".to_string());
        lines.push(leader_line("Net Income", 40, self.net_income));
        lines.push("Adjustments:".to_string());
        lines.push(leader_line(
            "+ Depreciation & Amortization",
            25,
            self.depreciation,
        ));
        lines.push("Changes in Working Capital:".to_string());

        let ar = self.change_accounts_receivable;
        if ar > Decimal::ZERO {
            lines.push(leader_line("- Increase in Accounts Receivable", 15, ar));
        } else if ar < Decimal::ZERO {
            lines.push(leader_line("+ Decrease in Accounts Receivable", 15, -ar));
        }
        let inventory = self.change_inventory;
        if inventory > Decimal::ZERO {
            lines.push(leader_line("- Increase in Inventory", 23, inventory));
        } else if inventory < Decimal::ZERO {
            lines.push(leader_line("+ Decrease in Inventory", 23, -inventory));
        }
        let ap = self.change_accounts_payable;
        if ap > Decimal::ZERO {
            lines.push(leader_line("+ Increase in Accounts Payable", 17, ap));
        } else if ap < Decimal::ZERO {
            lines.push(leader_line("- Decrease in Accounts Payable", 17, -ap));
        }
        let wages = self.change_wages_payable;
        if wages > Decimal::ZERO {
            lines.push(leader_line("+ Increase in Accrued Wages Payable", 7, wages));
        } else if wages < Decimal::ZERO {
            lines.push(leader_line("- Decrease in Accrued Wages Payable", 7, -wages));
        }
        lines.push(
            leader_line(
                "Net Cash Provided by Operating Activities",
                2,
                self.net_operating,
            ) + "\n",
        );

        lines.push("CASH FLOWS FROM INVESTING ACTIVITIES".to_string());
        lines.push(leader_line(
            "- Purchase of New Equipment",
            22,
            self.purchase_of_equipment,
        ));
        lines.push(leader_line(
            "+ Proceeds from Sale of Equipment",
            13,
            self.sale_of_equipment,
        ));
        lines.push(
            leader_line(
                "Net Cash Provided by Investing Activities",
                5,
                self.net_investing,
            ) + "\n",
        );

        lines.push("CASH FLOWS FROM FINANCING ACTIVITIES".to_string());
        lines.push(leader_line(
            "+ Proceeds from Line of Credit Drawdown",
            4,
            self.proceeds_from_credit_line,
        ));
        lines.push(leader_line(
            "- Repayment of Equipment Loan Principal",
            2,
            self.loan_principal_repayment,
        ));
        lines.push(leader_line("- Owner Distribution", 28, self.owner_distribution));
        lines.push(
            leader_line(
                "Net Cash Provided by Financing Activities",
                5,
                self.net_financing,
            ) + "\n",
        );

        lines.push(leader_line("NET INCREASE IN CASH", 32, self.net_increase_in_cash));
        lines.push(leader_line("CASH AT BEGINNING OF PERIOD", 23, self.cash_begin));
        lines.push(leader_line("CASH AT END OF PERIOD", 28, self.cash_end));
        lines.join("\n")
    }
}

impl TrialBalance {
    pub fn render(&self) -> String {
        // Account | Debit | Credit with " | " separators.
        let width = 36 + 18 + 18 + 2 * 3;
        let mut lines = Vec::new();
        lines.push(rule('=', width));
        lines.push(center("ADJUSTED TRIAL BALANCE", width));
        lines.push(rule('=', width));
        lines.push(format!("{:<36} | {:>18} | {:>18}", "Account", "Debit", "Credit"));
        lines.push(rule('-', width));
        for row in &self.rows {
            lines.push(format!(
                "{:<36} | {:>18} | {:>18}",
                row.account,
                fixed2(row.debit),
                fixed2(row.credit)
            ));
        }
        lines.push(rule('-', width));
        lines.push(format!(
            "{:<36} | {:>18} | {:>18}",
            "TOTALS",
            fixed2(self.total_debit),
            fixed2(self.total_credit)
        ));
        if self.verification.balanced {
            lines.push("\nVERIFICATION: Debits equal Credits ✓".to_string());
        } else {
            lines.push("\nVERIFICATION: Debits do not equal Credits! ✗".to_string());
            lines.push(format!("Difference: {}", fixed2(self.verification.difference)));
        }
        lines.push(rule('=', width));
        lines.push(center("End of Adjusted Trial Balance", width));
        lines.push(rule('=', width));
        lines.join("\n")
    }
}
