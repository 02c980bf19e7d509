//! A full month of restaurant activity, posted through the recipes and read
//! back through every statement.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use tillbook_ledger::LedgerStore;
use tillbook_posting::{PaymentMethod, PostingEngine, SubledgerStore};
use tillbook_reports::{
    BalanceSheetClassification, ReportPeriod, TrialBalanceLayout, balance_sheet,
    cash_flow_statement, income_statement, trial_balance,
};

fn day(n: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 9, n).unwrap()
}

fn period() -> ReportPeriod {
    ReportPeriod::new(day(1), day(30))
}

/// Stock up, sell, and leave some balances open on both subledgers.
fn run_month() -> PostingEngine {
    tillbook_observability::init();
    let engine = PostingEngine::new(
        Arc::new(LedgerStore::with_default_accounts()),
        Arc::new(SubledgerStore::new()),
    );

    engine
        .record_inventory_intake(day(1), "Basmati Rice", dec!(120))
        .unwrap();
    engine
        .record_purchase_payment(day(2), "P-201", dec!(300), PaymentMethod::BankTransfer)
        .unwrap();
    engine
        .record_sale_payment(day(5), "1042", dec!(100), dec!(40), PaymentMethod::Cash)
        .unwrap();
    engine
        .record_sale_payment(day(6), "1043", dec!(260), dec!(90), PaymentMethod::Card)
        .unwrap();
    engine
        .register_receivable(day(10), "Acme Catering", dec!(250), day(30))
        .unwrap();
    engine
        .register_payable(day(12), "Fresh Farms", dec!(80), day(28))
        .unwrap();
    engine
        .record_inventory_adjustment(day(20), "Basmati Rice", dec!(120), dec!(110))
        .unwrap();
    engine
}

/// The default layout is the fixed textbook list; the POS chart needs its
/// own ordering to surface every account it actually posts to.
fn pos_layout() -> TrialBalanceLayout {
    TrialBalanceLayout {
        accounts: [
            "Cash",
            "Bank",
            "Accounts Receivable",
            "Inventory",
            "Accounts Payable",
            "Sales Revenue",
            "Cost of Goods Sold",
            "Operating Expenses",
            "Inventory Adjustment",
        ]
        .into_iter()
        .map(str::to_string)
        .collect(),
        contra_assets: Vec::new(),
    }
}

#[test]
fn trial_balance_stays_balanced_after_a_full_month() {
    let engine = run_month();
    let report = trial_balance(engine.ledger(), &pos_layout(), period());

    assert!(report.verification.balanced);
    assert_eq!(report.verification.difference, dec!(0));
    assert_eq!(report.total_debit, report.total_credit);

    let row = |name: &str| report.rows.iter().find(|r| r.account == name).unwrap();
    // Cash: +100 sale. Bank: +260 card sale − 300 purchase.
    assert_eq!(row("Cash").debit, dec!(100));
    assert_eq!(row("Bank").credit, dec!(40));
    // Inventory: 120 intake + 300 purchase − 130 COGS − 10 write-down.
    assert_eq!(row("Inventory").debit, dec!(280));
    assert_eq!(row("Sales Revenue").credit, dec!(610));
    assert_eq!(row("Cost of Goods Sold").debit, dec!(130));
    assert_eq!(row("Accounts Receivable").debit, dec!(250));
    assert_eq!(row("Accounts Payable").credit, dec!(80));
}

#[test]
fn default_layout_only_surfaces_its_fixed_account_list() {
    let engine = run_month();
    let report = trial_balance(engine.ledger(), &TrialBalanceLayout::default(), period());

    // Accounts outside the textbook list are simply absent, so a POS month
    // does not verify under the default layout.
    assert_eq!(report.rows.len(), 21);
    assert!(report.rows.iter().all(|r| r.account != "Bank"));
    assert_eq!(report.total_debit, dec!(350));
    assert_eq!(report.total_credit, dec!(80));
    assert!(!report.verification.balanced);
    assert_eq!(report.verification.difference, dec!(270));
}

#[test]
fn income_statement_reflects_sales_and_expenses() {
    let engine = run_month();
    let report = income_statement(engine.ledger(), period());

    // 100 + 260 cash/card sales + 250 on account.
    assert_eq!(report.total_revenue, dec!(610));
    // 130 COGS + 80 supplier expense.
    assert_eq!(report.total_expenses, dec!(210));
    assert_eq!(report.income_tax, dec!(0));
    assert_eq!(report.net_income, dec!(400));
}

#[test]
fn balance_sheet_shows_only_touched_accounts_in_order() {
    let engine = run_month();
    let report = balance_sheet(
        engine.ledger(),
        &BalanceSheetClassification::default(),
        period(),
    );

    let current: Vec<&str> = report
        .current_assets
        .iter()
        .map(|r| r.account.as_str())
        .collect();
    assert_eq!(current, ["Cash", "Bank", "Accounts Receivable", "Inventory"]);
    // Equipment was never touched this month.
    assert!(report.fixed_assets.is_empty());

    assert_eq!(report.total_current_assets, dec!(590));
    assert_eq!(report.total_assets, dec!(590));
    assert_eq!(report.total_current_liabilities, dec!(80));
    // Inventory Adjustment equity: +120 intake − 10 write-down.
    assert_eq!(report.total_equity, dec!(110));
    assert_eq!(report.total_liabilities_and_equity, dec!(190));
}

#[test]
fn cash_flow_ties_out_to_the_cash_account() {
    let engine = run_month();
    let report = cash_flow_statement(engine.ledger(), period());

    assert_eq!(report.net_income, dec!(400));
    assert_eq!(report.change_accounts_receivable, dec!(250));
    assert_eq!(report.change_inventory, dec!(280));
    // Raw debit − credit: the 80 payable credit enters negative.
    assert_eq!(report.change_accounts_payable, dec!(-80));
    // 400 − 250 − 280 + (−80).
    assert_eq!(report.net_operating, dec!(-210));
    assert_eq!(report.net_investing, dec!(0));
    assert_eq!(report.net_financing, dec!(0));
    // Cash account alone: +100 sale. Begin balances back out the rest.
    assert_eq!(report.cash_end, dec!(100));
    assert_eq!(report.cash_begin, dec!(310));
    assert_eq!(report.net_increase_in_cash, dec!(-210));
}

#[test]
fn subledger_records_survive_the_postings() {
    let engine = run_month();
    let receivables = engine.subledger().receivables();
    assert_eq!(receivables.len(), 1);
    assert_eq!(receivables[0].customer, "Acme Catering");
    assert!(!receivables[0].paid);

    let payables = engine.subledger().payables();
    assert_eq!(payables.len(), 1);
    assert_eq!(payables[0].supplier, "Fresh Farms");
    assert!(!payables[0].paid);
}

#[test]
fn every_statement_renders_without_losing_its_headline() {
    let engine = run_month();
    let classification = BalanceSheetClassification::default();

    let tb = trial_balance(engine.ledger(), &pos_layout(), period()).render();
    assert!(tb.contains("ADJUSTED TRIAL BALANCE"));
    assert!(tb.contains("VERIFICATION: Debits equal Credits ✓"));

    let is = income_statement(engine.ledger(), period()).render();
    assert!(is.contains("INCOME STATEMENT"));
    assert!(is.contains("For the period: 2024-09-01 to 2024-09-30"));

    let bs = balance_sheet(engine.ledger(), &classification, period()).render();
    assert!(bs.contains("BALANCE SHEET"));
    assert!(bs.contains("As of: 2024-09-30"));

    let cf = cash_flow_statement(engine.ledger(), period()).render();
    assert!(cf.contains("CASH FLOWS FROM OPERATING ACTIVITIES"));
    assert!(cf.contains("NET INCREASE IN CASH"));
}

#[test]
fn statements_serialize_for_api_consumers() {
    let engine = run_month();
    let report = income_statement(engine.ledger(), period());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["total_revenue"], "610");
    assert_eq!(json["net_income"], "400");
}
