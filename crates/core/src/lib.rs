//! `tillbook-core` — ledger foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no storage, no IO).

pub mod error;
pub mod id;
pub mod money;

pub use error::{LedgerError, LedgerResult};
pub use id::{AccountId, EntryId, LineId, PayableId, ReceivableId};
pub use money::{Amount, parse_amount};
