//! Posting engine: fixed recipes turning business events into balanced
//! journal entries.
//!
//! Each recipe builds exactly one entry and commits it through
//! [`LedgerStore::post_entry`], so Σdebit == Σcredit holds by construction
//! and a failing recipe writes nothing. Accounts a recipe needs are created
//! on demand with the recipe's default type.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::{Amount, EntryId, LedgerError, LedgerResult, PayableId, ReceivableId};
use tillbook_ledger::{AccountType, LedgerStore, well_known};

use crate::subledger::SubledgerStore;

/// How a sale or purchase was settled; selects the Cash or Bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Card,
    BankTransfer,
}

impl PaymentMethod {
    /// Name of the asset account the money moves through.
    pub fn settlement_account(self) -> &'static str {
        match self {
            PaymentMethod::Cash => well_known::CASH,
            PaymentMethod::Card | PaymentMethod::BankTransfer => well_known::BANK,
        }
    }
}

/// Translates operational events into balanced ledger postings.
pub struct PostingEngine {
    ledger: Arc<LedgerStore>,
    subledger: Arc<SubledgerStore>,
}

impl PostingEngine {
    pub fn new(ledger: Arc<LedgerStore>, subledger: Arc<SubledgerStore>) -> Self {
        Self { ledger, subledger }
    }

    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    pub fn subledger(&self) -> &SubledgerStore {
        &self.subledger
    }

    /// Receivable registered: Dr Accounts Receivable / Cr Sales Revenue,
    /// plus an unpaid receivable record.
    pub fn register_receivable(
        &self,
        date: NaiveDate,
        customer: &str,
        amount: Amount,
        due_date: NaiveDate,
    ) -> LedgerResult<(EntryId, ReceivableId)> {
        let customer = customer.trim();
        if customer.is_empty() {
            return Err(LedgerError::input("customer is required"));
        }

        let ar = self
            .ledger
            .get_or_create_account(well_known::ACCOUNTS_RECEIVABLE, AccountType::Asset);
        let sales = self
            .ledger
            .get_or_create_account(well_known::SALES_REVENUE, AccountType::Income);

        let entry_id = self.ledger.post_entry(
            date,
            &format!("Receivable from {customer}"),
            &[
                (ar, amount, Decimal::ZERO),
                (sales, Decimal::ZERO, amount),
            ],
        )?;
        let receivable_id = self.subledger.add_receivable(customer, amount, due_date);
        tracing::info!("Registered receivable from {} for {}", customer, amount);
        Ok((entry_id, receivable_id))
    }

    /// Payable registered: Dr Operating Expenses / Cr Accounts Payable,
    /// plus an unpaid payable record.
    pub fn register_payable(
        &self,
        date: NaiveDate,
        supplier: &str,
        amount: Amount,
        due_date: NaiveDate,
    ) -> LedgerResult<(EntryId, PayableId)> {
        let supplier = supplier.trim();
        if supplier.is_empty() {
            return Err(LedgerError::input("supplier is required"));
        }

        let expenses = self
            .ledger
            .get_or_create_account(well_known::OPERATING_EXPENSES, AccountType::Expense);
        let ap = self
            .ledger
            .get_or_create_account(well_known::ACCOUNTS_PAYABLE, AccountType::Liability);

        let entry_id = self.ledger.post_entry(
            date,
            &format!("Payable to {supplier}"),
            &[
                (expenses, amount, Decimal::ZERO),
                (ap, Decimal::ZERO, amount),
            ],
        )?;
        let payable_id = self.subledger.add_payable(supplier, amount, due_date);
        tracing::info!("Registered payable to {} for {}", supplier, amount);
        Ok((entry_id, payable_id))
    }

    /// Sale payment: Dr Cash/Bank total, Cr Sales Revenue total,
    /// Dr Cost of Goods Sold cost, Cr Inventory cost.
    pub fn record_sale_payment(
        &self,
        date: NaiveDate,
        order_number: &str,
        total: Amount,
        cost: Amount,
        method: PaymentMethod,
    ) -> LedgerResult<EntryId> {
        let settlement = self
            .ledger
            .get_or_create_account(method.settlement_account(), AccountType::Asset);
        let sales = self
            .ledger
            .get_or_create_account(well_known::SALES_REVENUE, AccountType::Income);
        let cogs = self
            .ledger
            .get_or_create_account(well_known::COST_OF_GOODS_SOLD, AccountType::Expense);
        let inventory = self
            .ledger
            .get_or_create_account(well_known::INVENTORY, AccountType::Asset);

        self.ledger.post_entry(
            date,
            &format!("Sale for Order #{order_number}"),
            &[
                (settlement, total, Decimal::ZERO),
                (sales, Decimal::ZERO, total),
                (cogs, cost, Decimal::ZERO),
                (inventory, Decimal::ZERO, cost),
            ],
        )
    }

    /// Purchase receipt: Dr Inventory / Cr Cash/Bank.
    pub fn record_purchase_payment(
        &self,
        date: NaiveDate,
        purchase_number: &str,
        value: Amount,
        method: PaymentMethod,
    ) -> LedgerResult<EntryId> {
        let inventory = self
            .ledger
            .get_or_create_account(well_known::INVENTORY, AccountType::Asset);
        let settlement = self
            .ledger
            .get_or_create_account(method.settlement_account(), AccountType::Asset);

        self.ledger.post_entry(
            date,
            &format!("Purchase #{purchase_number}"),
            &[
                (inventory, value, Decimal::ZERO),
                (settlement, Decimal::ZERO, value),
            ],
        )
    }

    /// Inventory revaluation of an existing item. Increases debit Inventory
    /// and credit Inventory Adjustment; decreases are reversed. No entry is
    /// posted when the value is unchanged.
    pub fn record_inventory_adjustment(
        &self,
        date: NaiveDate,
        item_name: &str,
        old_value: Amount,
        new_value: Amount,
    ) -> LedgerResult<Option<EntryId>> {
        let diff = new_value - old_value;
        if diff.is_zero() {
            return Ok(None);
        }

        let inventory = self
            .ledger
            .get_or_create_account(well_known::INVENTORY, AccountType::Asset);
        let adjustment = self
            .ledger
            .get_or_create_account(well_known::INVENTORY_ADJUSTMENT, AccountType::Equity);

        let description = format!("Inventory adjustment for {item_name}");
        let lines = if diff > Decimal::ZERO {
            [
                (inventory, diff, Decimal::ZERO),
                (adjustment, Decimal::ZERO, diff),
            ]
        } else {
            [
                (inventory, Decimal::ZERO, -diff),
                (adjustment, -diff, Decimal::ZERO),
            ]
        };
        self.ledger.post_entry(date, &description, &lines).map(Some)
    }

    /// First-time stocking of an inventory item at `value`.
    pub fn record_inventory_intake(
        &self,
        date: NaiveDate,
        item_name: &str,
        value: Amount,
    ) -> LedgerResult<Option<EntryId>> {
        if value.is_zero() {
            return Ok(None);
        }

        let inventory = self
            .ledger
            .get_or_create_account(well_known::INVENTORY, AccountType::Asset);
        let adjustment = self
            .ledger
            .get_or_create_account(well_known::INVENTORY_ADJUSTMENT, AccountType::Equity);

        self.ledger
            .post_entry(
                date,
                &format!("Inventory added: {item_name}"),
                &[
                    (inventory, value, Decimal::ZERO),
                    (adjustment, Decimal::ZERO, value),
                ],
            )
            .map(Some)
    }
}
