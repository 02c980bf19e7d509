//! Receivable/payable records.
//!
//! These rows live beside the ledger, not in it: registering one also posts
//! a journal entry, but the paid flag is bookkeeping state of its own and
//! toggling it never touches the journal.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use tillbook_core::{Amount, LedgerError, LedgerResult, PayableId, ReceivableId};

/// Money owed to us by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receivable {
    pub id: ReceivableId,
    pub customer: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
    pub paid: bool,
}

/// Money we owe a supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payable {
    pub id: PayableId,
    pub supplier: String,
    pub amount: Amount,
    pub due_date: NaiveDate,
    pub paid: bool,
}

#[derive(Debug, Default)]
struct SubledgerState {
    receivables: Vec<Receivable>,
    payables: Vec<Payable>,
}

/// In-memory store for receivable and payable records.
#[derive(Debug, Default)]
pub struct SubledgerStore {
    state: RwLock<SubledgerState>,
}

impl SubledgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, SubledgerState> {
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, SubledgerState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    pub(crate) fn add_receivable(
        &self,
        customer: &str,
        amount: Amount,
        due_date: NaiveDate,
    ) -> ReceivableId {
        let id = ReceivableId::new();
        self.write().receivables.push(Receivable {
            id,
            customer: customer.to_string(),
            amount,
            due_date,
            paid: false,
        });
        id
    }

    pub(crate) fn add_payable(
        &self,
        supplier: &str,
        amount: Amount,
        due_date: NaiveDate,
    ) -> PayableId {
        let id = PayableId::new();
        self.write().payables.push(Payable {
            id,
            supplier: supplier.to_string(),
            amount,
            due_date,
            paid: false,
        });
        id
    }

    /// Receivables in insertion order.
    pub fn receivables(&self) -> Vec<Receivable> {
        self.read().receivables.clone()
    }

    /// Payables in insertion order.
    pub fn payables(&self) -> Vec<Payable> {
        self.read().payables.clone()
    }

    pub fn receivable(&self, id: ReceivableId) -> Option<Receivable> {
        self.read().receivables.iter().find(|r| r.id == id).cloned()
    }

    pub fn payable(&self, id: PayableId) -> Option<Payable> {
        self.read().payables.iter().find(|p| p.id == id).cloned()
    }

    fn set_receivable_paid(&self, id: ReceivableId, paid: bool) -> LedgerResult<()> {
        let mut state = self.write();
        let record = state
            .receivables
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(LedgerError::not_found)?;
        record.paid = paid;
        Ok(())
    }

    fn set_payable_paid(&self, id: PayableId, paid: bool) -> LedgerResult<()> {
        let mut state = self.write();
        let record = state
            .payables
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(LedgerError::not_found)?;
        record.paid = paid;
        Ok(())
    }

    pub fn mark_receivable_paid(&self, id: ReceivableId) -> LedgerResult<()> {
        self.set_receivable_paid(id, true)
    }

    pub fn mark_receivable_unpaid(&self, id: ReceivableId) -> LedgerResult<()> {
        self.set_receivable_paid(id, false)
    }

    pub fn mark_payable_paid(&self, id: PayableId) -> LedgerResult<()> {
        self.set_payable_paid(id, true)
    }

    pub fn mark_payable_unpaid(&self, id: PayableId) -> LedgerResult<()> {
        self.set_payable_paid(id, false)
    }

    pub fn delete_receivable(&self, id: ReceivableId) -> LedgerResult<()> {
        let mut state = self.write();
        let index = state
            .receivables
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(LedgerError::not_found)?;
        state.receivables.remove(index);
        Ok(())
    }

    pub fn delete_payable(&self, id: PayableId) -> LedgerResult<()> {
        let mut state = self.write();
        let index = state
            .payables
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(LedgerError::not_found)?;
        state.payables.remove(index);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn new_records_start_unpaid() {
        let store = SubledgerStore::new();
        let id = store.add_receivable("Acme", dec!(250), due());
        let record = store.receivable(id).unwrap();
        assert!(!record.paid);
        assert_eq!(record.amount, dec!(250));
    }

    #[test]
    fn paid_flag_toggles_both_ways() {
        let store = SubledgerStore::new();
        let id = store.add_payable("Fresh Farms", dec!(80), due());
        store.mark_payable_paid(id).unwrap();
        assert!(store.payable(id).unwrap().paid);
        store.mark_payable_unpaid(id).unwrap();
        assert!(!store.payable(id).unwrap().paid);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let store = SubledgerStore::new();
        assert_eq!(
            store.mark_receivable_paid(ReceivableId::new()).unwrap_err(),
            LedgerError::NotFound
        );
        assert_eq!(
            store.delete_payable(PayableId::new()).unwrap_err(),
            LedgerError::NotFound
        );
    }

    #[test]
    fn delete_removes_only_the_targeted_record() {
        let store = SubledgerStore::new();
        let first = store.add_receivable("Acme", dec!(10), due());
        let second = store.add_receivable("Globex", dec!(20), due());
        store.delete_receivable(first).unwrap();
        let remaining = store.receivables();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, second);
    }
}
