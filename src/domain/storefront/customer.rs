//! Logged-in customer and cart summaries.

use serde::Serialize;

use crate::domain::foundation::Money;

/// The logged-in customer, when the storefront knows one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub email: Option<String>,
    pub orders_count: u32,
}

impl Customer {
    /// A customer is known once the storefront has given us an id.
    pub fn is_known(&self) -> bool {
        self.id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// First name if present and non-blank.
    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().map(str::trim).filter(|e| !e.is_empty())
    }
}

/// Cart totals at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cart {
    pub item_count: u32,
    pub total_price: Money,
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            item_count: 0,
            total_price: Money::ZERO,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.item_count == 0
    }
}
