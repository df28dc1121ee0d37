//! Store policy values quoted in templated replies.

use serde::Serialize;
use std::fmt;

use crate::domain::foundation::Money;

/// Inclusive range of business days, e.g. "3-5".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryWindow {
    pub min_days: u8,
    pub max_days: u8,
}

impl DeliveryWindow {
    pub const fn new(min_days: u8, max_days: u8) -> Self {
        Self { min_days, max_days }
    }
}

impl fmt::Display for DeliveryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min_days == self.max_days {
            let plural = if self.min_days == 1 { "" } else { "s" };
            write!(f, "{} business day{}", self.min_days, plural)
        } else {
            write!(f, "{}-{} business days", self.min_days, self.max_days)
        }
    }
}

/// Everything store-specific the handlers need beyond the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StorePolicy {
    pub store_name: String,
    /// Tracking page; the order number is appended as a query string.
    pub tracking_base_url: String,
    pub account_url: String,
    pub free_shipping_threshold: Money,
    pub standard_shipping: DeliveryWindow,
    pub express_shipping: DeliveryWindow,
    pub return_window_days: u16,
    /// Render products with an image as image cards.
    pub product_images: bool,
}

impl Default for StorePolicy {
    fn default() -> Self {
        Self {
            store_name: "Lifestyle Travel Trading".to_string(),
            tracking_base_url: "https://lifestyletraveltrading.com.au/apps/parcelpanel".to_string(),
            account_url: "https://lifestyletraveltrading.com.au/account".to_string(),
            free_shipping_threshold: Money::from_units(50),
            standard_shipping: DeliveryWindow::new(3, 5),
            express_shipping: DeliveryWindow::new(1, 2),
            return_window_days: 30,
            product_images: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_window_display() {
        assert_eq!(DeliveryWindow::new(3, 5).to_string(), "3-5 business days");
        assert_eq!(DeliveryWindow::new(2, 2).to_string(), "2 business days");
        assert_eq!(DeliveryWindow::new(1, 1).to_string(), "1 business day");
    }

    #[test]
    fn default_threshold_is_fifty() {
        assert_eq!(StorePolicy::default().free_shipping_threshold, Money::from_units(50));
    }
}
