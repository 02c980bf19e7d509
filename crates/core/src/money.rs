//! Monetary amounts.
//!
//! All money flows through `rust_decimal::Decimal` — never floats. Amounts
//! carry no currency tag; the surrounding application is single-currency.

use core::str::FromStr;
use rust_decimal::Decimal;

use crate::error::{LedgerError, LedgerResult};

/// A monetary amount with exact decimal precision.
pub type Amount = Decimal;

/// Parse a user-supplied amount field.
///
/// This is the boundary where form input becomes a typed amount: empty or
/// non-numeric text fails with [`LedgerError::Input`] naming the field.
pub fn parse_amount(field: &str, raw: &str) -> LedgerResult<Amount> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(LedgerError::input(format!("{field} is required")));
    }
    Decimal::from_str(raw).map_err(|_| LedgerError::input(format!("{field} must be a number")))
}
