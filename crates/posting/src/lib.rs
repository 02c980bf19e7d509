//! `tillbook-posting` — posting recipes and the receivable/payable subledger.
//!
//! The bridge between operational events (sales, purchases, inventory edits)
//! and the double-entry ledger.

pub mod engine;
pub mod subledger;

pub use engine::{PaymentMethod, PostingEngine};
pub use subledger::{Payable, Receivable, SubledgerStore};
