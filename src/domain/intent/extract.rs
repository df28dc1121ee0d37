//! Slot extraction from user messages.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::domain::foundation::Money;

static ORDER_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{4,}").expect("order number pattern is valid"));

static PRICE_CEILING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:under|less than|below|cheaper than|up to)\s*\$?\s*(\d+)")
        .expect("price ceiling pattern is valid")
});

/// First run of four or more digits, e.g. `4521` in "track order #4521".
pub fn order_number(message: &str) -> Option<&str> {
    ORDER_NUMBER.find(message).map(|m| m.as_str())
}

/// Price ceiling from phrases like "under $100" or "less than 50".
///
/// `None` means unlimited. Numbers too large for a decimal are ignored.
pub fn price_ceiling(message: &str) -> Option<Money> {
    let digits = PRICE_CEILING.captures(message)?.get(1)?.as_str();
    let amount = Decimal::from_str(digits).ok()?;
    Money::try_new("price_ceiling", amount).ok()
}
