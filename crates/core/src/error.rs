//! Ledger error model.

use rust_decimal::Decimal;
use thiserror::Error;

/// Result type used across the ledger core.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Deterministic business failures only (validation, invariants, integrity).
/// Presentation and persistence concerns belong to the callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// A field was missing, non-numeric, or otherwise malformed.
    #[error("invalid input: {0}")]
    Input(String),

    /// An explicit post violated the debit/credit identity.
    #[error("unbalanced entry: debits {debits} != credits {credits}")]
    Unbalanced { debits: Decimal, credits: Decimal },

    /// A delete would orphan journal lines.
    #[error("referential integrity: {0}")]
    ReferentialIntegrity(String),

    /// A requested record was not found.
    #[error("not found")]
    NotFound,

    /// An account with the same name already exists.
    #[error("duplicate account: {0}")]
    DuplicateAccount(String),
}

impl LedgerError {
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    pub fn unbalanced(debits: Decimal, credits: Decimal) -> Self {
        Self::Unbalanced { debits, credits }
    }

    pub fn referential_integrity(msg: impl Into<String>) -> Self {
        Self::ReferentialIntegrity(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    pub fn duplicate_account(name: impl Into<String>) -> Self {
        Self::DuplicateAccount(name.into())
    }
}
