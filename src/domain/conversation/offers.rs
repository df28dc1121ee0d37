//! Promoted collections the concierge can offer to open.
//!
//! Each offer pairs a yes/no question with the reply given when the user
//! accepts. The same table backs the handle-to-discount lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::Percentage;
use crate::domain::responses::markup;

/// The yes/no question a pending confirmation refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfirmationType {
    NewArrivals,
    StaffPicks,
    BackInStock,
    OnSale,
    FinalSale,
}

impl ConfirmationType {
    /// Collection handle the offer points at.
    pub fn handle(&self) -> &'static str {
        offer_for(*self).handle
    }
}

impl fmt::Display for ConfirmationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.handle())
    }
}

/// A promoted collection with its fixed discount and phrasing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectionOffer {
    pub kind: ConfirmationType,
    pub handle: &'static str,
    pub title: &'static str,
    pub discount: Percentage,
    /// Question that opens the confirmation flow.
    pub question: &'static str,
    /// First words of the acceptance reply.
    pub lead: &'static str,
    /// Text after the link, before the discount.
    pub pitch: &'static str,
    /// Text after the discount.
    pub closing: &'static str,
}

impl CollectionOffer {
    pub fn path(&self) -> String {
        format!("/collections/{}", self.handle)
    }

    /// Reply sent when the user accepts the offer.
    pub fn acceptance_reply(&self) -> String {
        format!(
            "{} {}. {} {} discount.{}",
            self.lead,
            markup::link(&self.path(), &format!("Click here to see our {} collection", self.title)),
            self.pitch,
            self.discount,
            self.closing
        )
    }
}

/// Offers in discount-lookup order.
pub const OFFERS: &[CollectionOffer] = &[
    CollectionOffer {
        kind: ConfirmationType::NewArrivals,
        handle: "new-arrivals",
        title: "New Arrivals",
        discount: Percentage::new(10),
        question: "Yes, our new products are in our New Arrivals collection and they also have 10% off. Shall I take you there?",
        lead: "Great!",
        pitch: "You'll find our latest products with a",
        closing: " Is there anything specific you're looking for?",
    },
    CollectionOffer {
        kind: ConfirmationType::StaffPicks,
        handle: "staff-picks",
        title: "Staff Picks",
        discount: Percentage::new(20),
        question: "Our team's favorite items are in our Staff Picks collection and they have 20% off. Shall I take you there?",
        lead: "Perfect!",
        pitch: "These are our team's favorite items with a",
        closing: " Enjoy browsing!",
    },
    CollectionOffer {
        kind: ConfirmationType::BackInStock,
        handle: "back-in-stock",
        title: "Back in Stock",
        discount: Percentage::new(15),
        question: "Good news! Popular items that sold out are back in our Back in Stock collection with 15% off. Shall I take you there?",
        lead: "Excellent!",
        pitch: "These popular items are now available again with a",
        closing: "",
    },
    CollectionOffer {
        kind: ConfirmationType::OnSale,
        handle: "on-sale",
        title: "On Sale",
        discount: Percentage::new(25),
        question: "Our On Sale collection has items with 25% off. Shall I take you there?",
        lead: "Great choice!",
        pitch: "You'll find items with a",
        closing: " Happy shopping!",
    },
    CollectionOffer {
        kind: ConfirmationType::FinalSale,
        handle: "final-sale",
        title: "Final Sale",
        discount: Percentage::new(35),
        question: "Our Final Sale collection has discontinued items with 35% off. Shall I take you there?",
        lead: "Perfect!",
        pitch: "These items are being discontinued and have a",
        closing: " Don't miss out!",
    },
];

pub fn offer_for(kind: ConfirmationType) -> &'static CollectionOffer {
    OFFERS
        .iter()
        .find(|offer| offer.kind == kind)
        .unwrap_or(&OFFERS[0])
}

/// Discount for a collection handle.
///
/// Exact handle match first, then the first table handle contained in the
/// given handle, so locale or seasonal slugs like `summer-on-sale-extra`
/// still resolve. Unknown handles get zero.
pub fn collection_discount(handle: &str) -> Percentage {
    let handle = handle.to_lowercase();
    if let Some(offer) = OFFERS.iter().find(|offer| offer.handle == handle) {
        return offer.discount;
    }
    OFFERS
        .iter()
        .find(|offer| handle.contains(offer.handle))
        .map(|offer| offer.discount)
        .unwrap_or(Percentage::ZERO)
}
