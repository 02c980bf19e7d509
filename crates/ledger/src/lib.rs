//! `tillbook-ledger` — chart of accounts, journal store, balance queries.
//!
//! Pure domain logic over in-memory state: no IO, no HTTP, no persistence
//! concerns. The [`LedgerStore`] is the single source of truth; posting
//! recipes and reports build on it.

pub mod account;
pub mod balance;
pub mod store;

pub use account::{Account, AccountType, DEFAULT_ACCOUNTS, well_known};
pub use balance::{AccountActivity, AccountTotals};
pub use store::{JournalEntry, JournalLine, LedgerStore};
