//! The ledger store: chart of accounts + append-only journal.
//!
//! One store owns accounts, entries and lines behind a single `RwLock`, so a
//! posting commits as one atomic unit and readers always see whole entries.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::{AccountId, Amount, EntryId, LedgerError, LedgerResult, LineId};

use crate::account::{Account, AccountType, DEFAULT_ACCOUNTS};

/// A dated, described group of journal lines recording one business event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub description: String,
}

/// One side of a journal entry.
///
/// Exactly one of `debit`/`credit` is nonzero on validated paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalLine {
    pub id: LineId,
    pub entry_id: EntryId,
    pub account_id: AccountId,
    pub debit: Amount,
    pub credit: Amount,
}

#[derive(Debug, Default)]
pub(crate) struct LedgerState {
    pub(crate) accounts: Vec<Account>,
    pub(crate) entries: Vec<JournalEntry>,
    pub(crate) lines: Vec<JournalLine>,
}

/// Source of truth for financial state.
#[derive(Debug, Default)]
pub struct LedgerStore {
    state: RwLock<LedgerState>,
}

/// Line-level validation shared by the manual and batch posting paths.
fn validate_line_sides(debit: Amount, credit: Amount) -> LedgerResult<()> {
    if debit < Decimal::ZERO || credit < Decimal::ZERO {
        return Err(LedgerError::input("debit and credit must be non-negative"));
    }
    if !debit.is_zero() && !credit.is_zero() {
        return Err(LedgerError::input(
            "enter either a debit or a credit amount, not both",
        ));
    }
    if debit.is_zero() && credit.is_zero() {
        return Err(LedgerError::input("enter either a debit or a credit amount"));
    }
    Ok(())
}

impl LedgerStore {
    /// Empty store: no accounts, no journal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the default chart of accounts.
    pub fn with_default_accounts() -> Self {
        let store = Self::new();
        {
            let mut state = store.write();
            for (name, kind) in DEFAULT_ACCOUNTS {
                state.accounts.push(Account {
                    id: AccountId::new(),
                    name: name.to_string(),
                    kind,
                });
            }
        }
        store
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, LedgerState> {
        // Writers never panic while holding the lock; poisoning is unreachable.
        self.state.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, LedgerState> {
        self.state.write().unwrap_or_else(|e| e.into_inner())
    }

    // ---- Chart of accounts -------------------------------------------------

    /// Create an account with a unique (case-sensitive) name.
    pub fn create_account(&self, name: &str, kind: AccountType) -> LedgerResult<AccountId> {
        let name = name.trim();
        if name.is_empty() {
            return Err(LedgerError::input("account name is required"));
        }
        let mut state = self.write();
        if state.accounts.iter().any(|a| a.name == name) {
            return Err(LedgerError::duplicate_account(name));
        }
        let id = AccountId::new();
        state.accounts.push(Account {
            id,
            name: name.to_string(),
            kind,
        });
        tracing::debug!("Created account {} ({:?})", name, kind);
        Ok(id)
    }

    /// Idempotent lookup-or-create, used by posting recipes that assume
    /// certain accounts exist. An existing account keeps its original type.
    pub fn get_or_create_account(&self, name: &str, default_kind: AccountType) -> AccountId {
        let mut state = self.write();
        if let Some(account) = state.accounts.iter().find(|a| a.name == name) {
            return account.id;
        }
        let id = AccountId::new();
        state.accounts.push(Account {
            id,
            name: name.to_string(),
            kind: default_kind,
        });
        tracing::debug!("Auto-created account {} ({:?})", name, default_kind);
        id
    }

    /// Delete an account, refusing while any journal line references it.
    pub fn delete_account(&self, id: AccountId) -> LedgerResult<()> {
        let mut state = self.write();
        let index = state
            .accounts
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(LedgerError::not_found)?;
        if state.lines.iter().any(|l| l.account_id == id) {
            return Err(LedgerError::referential_integrity(format!(
                "account {} is referenced by journal lines",
                state.accounts[index].name
            )));
        }
        let removed = state.accounts.remove(index);
        tracing::info!("Deleted account {}", removed.name);
        Ok(())
    }

    /// Exact, case-sensitive lookup by name.
    pub fn lookup_account(&self, name: &str) -> Option<Account> {
        self.read().accounts.iter().find(|a| a.name == name).cloned()
    }

    pub fn account(&self, id: AccountId) -> Option<Account> {
        self.read().accounts.iter().find(|a| a.id == id).cloned()
    }

    /// All accounts in creation order.
    pub fn accounts(&self) -> Vec<Account> {
        self.read().accounts.clone()
    }

    // ---- Journal -----------------------------------------------------------

    /// Append an entry header. Lines are attached separately on this path,
    /// and no entry-level balance check runs here (manual-entry semantics).
    pub fn append_entry(&self, date: NaiveDate, description: &str) -> EntryId {
        let id = EntryId::new();
        self.write().entries.push(JournalEntry {
            id,
            date,
            description: description.to_string(),
        });
        id
    }

    /// Append one line to an existing entry.
    pub fn append_line(
        &self,
        entry_id: EntryId,
        account_id: AccountId,
        debit: Amount,
        credit: Amount,
    ) -> LedgerResult<LineId> {
        validate_line_sides(debit, credit)?;
        let mut state = self.write();
        if !state.entries.iter().any(|e| e.id == entry_id) {
            return Err(LedgerError::not_found());
        }
        if !state.accounts.iter().any(|a| a.id == account_id) {
            return Err(LedgerError::not_found());
        }
        let id = LineId::new();
        state.lines.push(JournalLine {
            id,
            entry_id,
            account_id,
            debit,
            credit,
        });
        Ok(id)
    }

    /// Commit a whole balanced entry atomically.
    ///
    /// Every line is validated and the debit/credit identity checked before
    /// anything is written; on failure the store is untouched.
    pub fn post_entry(
        &self,
        date: NaiveDate,
        description: &str,
        lines: &[(AccountId, Amount, Amount)],
    ) -> LedgerResult<EntryId> {
        if lines.is_empty() {
            return Err(LedgerError::input("entry must have at least one line"));
        }

        let mut state = self.write();

        let mut debits = Decimal::ZERO;
        let mut credits = Decimal::ZERO;
        for (account_id, debit, credit) in lines {
            validate_line_sides(*debit, *credit)?;
            if !state.accounts.iter().any(|a| a.id == *account_id) {
                return Err(LedgerError::not_found());
            }
            debits += *debit;
            credits += *credit;
        }
        if debits != credits {
            return Err(LedgerError::unbalanced(debits, credits));
        }

        let entry_id = EntryId::new();
        state.entries.push(JournalEntry {
            id: entry_id,
            date,
            description: description.to_string(),
        });
        for (account_id, debit, credit) in lines {
            state.lines.push(JournalLine {
                id: LineId::new(),
                entry_id,
                account_id: *account_id,
                debit: *debit,
                credit: *credit,
            });
        }
        tracing::info!(
            "Posted journal entry {} ({}, {} lines)",
            entry_id,
            description,
            lines.len()
        );
        Ok(entry_id)
    }

    /// Delete an entry and every line it owns.
    pub fn delete_entry(&self, entry_id: EntryId) -> LedgerResult<()> {
        let mut state = self.write();
        let index = state
            .entries
            .iter()
            .position(|e| e.id == entry_id)
            .ok_or_else(LedgerError::not_found)?;
        state.entries.remove(index);
        state.lines.retain(|l| l.entry_id != entry_id);
        tracing::info!("Deleted journal entry {}", entry_id);
        Ok(())
    }

    pub fn delete_line(&self, line_id: LineId) -> LedgerResult<()> {
        let mut state = self.write();
        let index = state
            .lines
            .iter()
            .position(|l| l.id == line_id)
            .ok_or_else(LedgerError::not_found)?;
        state.lines.remove(index);
        Ok(())
    }

    // ---- Queries (insertion order) -----------------------------------------

    pub fn entry(&self, entry_id: EntryId) -> Option<JournalEntry> {
        self.read().entries.iter().find(|e| e.id == entry_id).cloned()
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.read().entries.clone()
    }

    /// Entries dated within `[from, to]` inclusive.
    pub fn entries_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<JournalEntry> {
        self.read()
            .entries
            .iter()
            .filter(|e| e.date >= from && e.date <= to)
            .cloned()
            .collect()
    }

    pub fn lines_for_entry(&self, entry_id: EntryId) -> Vec<JournalLine> {
        self.read()
            .lines
            .iter()
            .filter(|l| l.entry_id == entry_id)
            .cloned()
            .collect()
    }

    pub fn lines_for_account(&self, account_id: AccountId) -> Vec<JournalLine> {
        self.read()
            .lines
            .iter()
            .filter(|l| l.account_id == account_id)
            .cloned()
            .collect()
    }

    /// Lines whose owning entry is dated within `[from, to]` inclusive.
    pub fn lines_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<JournalLine> {
        let state = self.read();
        state
            .lines
            .iter()
            .filter(|l| {
                state
                    .entries
                    .iter()
                    .any(|e| e.id == l.entry_id && e.date >= from && e.date <= to)
            })
            .cloned()
            .collect()
    }

    pub fn entry_count(&self) -> usize {
        self.read().entries.len()
    }

    pub fn line_count(&self) -> usize {
        self.read().lines.len()
    }
}
