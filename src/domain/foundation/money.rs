//! Money value object for store prices.
//!
//! Prices arrive from the storefront as text or JSON numbers. They are parsed
//! once, at snapshot ingest, and handlers only ever see validated amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{Percentage, ValidationError};

/// A non-negative amount in the store currency.
///
/// Display keeps the scale the amount was supplied with, so `"19.90"`
/// renders as `19.90` and `"20"` as `20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal, rejecting negatives.
    pub fn try_new(field: &str, amount: Decimal) -> Result<Self, ValidationError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(ValidationError::invalid_format(field, "amount cannot be negative"));
        }
        Ok(Self(amount))
    }

    /// Parses a textual amount such as `"24.95"`.
    ///
    /// `field` names the snapshot field for the error message.
    pub fn parse(field: &str, raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field(field));
        }
        let amount = Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .map_err(|_| ValidationError::invalid_number(field, raw))?;
        Self::try_new(field, amount)
    }

    /// Creates an amount from whole currency units.
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units))
    }

    /// Percentage saved when this compare-at price is reduced to `price`.
    ///
    /// Returns `None` unless `self` is strictly greater than `price`.
    pub fn discount_to(&self, price: Money) -> Option<Percentage> {
        if self.0 <= price.0 || self.0.is_zero() {
            return None;
        }
        let fraction = (self.0 - price.0) / self.0;
        Some(Percentage::from_decimal(fraction * Decimal::ONE_HUNDRED))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
