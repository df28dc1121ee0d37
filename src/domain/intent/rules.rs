//! The ordered rule cascade.
//!
//! Rules are evaluated top to bottom and the first matching predicate wins.
//! Reordering this table changes behavior.

use serde::Serialize;
use std::fmt;

use crate::domain::conversation::{ConfirmationType, ConversationContext};
use crate::domain::lexicon::{self, tables, NormalizedMessage};

use super::{extract, Intent};

/// Stable identifier of a cascade rule, used in logs and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    Greeting,
    Wellbeing,
    Thanks,
    Goodbye,
    PendingAccepted,
    PendingDeclined,
    SeeMoreContinuation,
    ProductPageQuestion,
    CollectionPageQuestion,
    NewArrivals,
    StaffPicks,
    BackInStock,
    ProductSearch,
    SaleItems,
    OrderTracking,
    Shipping,
    BareGreeting,
    ProductListing,
    Cart,
    CollectionListing,
    Returns,
    ThanksFallback,
}

impl RuleId {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::Greeting => "greeting",
            RuleId::Wellbeing => "wellbeing",
            RuleId::Thanks => "thanks",
            RuleId::Goodbye => "goodbye",
            RuleId::PendingAccepted => "pending_accepted",
            RuleId::PendingDeclined => "pending_declined",
            RuleId::SeeMoreContinuation => "see_more_continuation",
            RuleId::ProductPageQuestion => "product_page_question",
            RuleId::CollectionPageQuestion => "collection_page_question",
            RuleId::NewArrivals => "new_arrivals",
            RuleId::StaffPicks => "staff_picks",
            RuleId::BackInStock => "back_in_stock",
            RuleId::ProductSearch => "product_search",
            RuleId::SaleItems => "sale_items",
            RuleId::OrderTracking => "order_tracking",
            RuleId::Shipping => "shipping",
            RuleId::BareGreeting => "bare_greeting",
            RuleId::ProductListing => "product_listing",
            RuleId::Cart => "cart",
            RuleId::CollectionListing => "collection_listing",
            RuleId::Returns => "returns",
            RuleId::ThanksFallback => "thanks_fallback",
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Predicate = fn(&NormalizedMessage, &ConversationContext) -> bool;

/// One step of the cascade.
#[derive(Clone, Copy)]
pub struct Rule {
    pub id: RuleId,
    pub predicate: Predicate,
    pub intent: Intent,
}

impl Rule {
    pub fn matches(&self, message: &NormalizedMessage, context: &ConversationContext) -> bool {
        (self.predicate)(message, context)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("intent", &self.intent)
            .finish()
    }
}

/// Prompt appended to search replies; a bare "yes" after it pages results.
pub const SEE_MORE_PROMPT: &str =
    "Would you like to see more options or need help with anything specific?";

const SEE_MORE_MARKER: &str = "more options";

pub static RULES: &[Rule] = &[
    // Social pleasantries never reach commerce rules
    Rule {
        id: RuleId::Greeting,
        predicate: |m, _| m.contains_any(tables::GREETING),
        intent: Intent::Greeting,
    },
    Rule {
        id: RuleId::Wellbeing,
        predicate: |m, _| m.contains_any(tables::WELLBEING),
        intent: Intent::Wellbeing,
    },
    Rule {
        id: RuleId::Thanks,
        predicate: |m, _| m.contains_any(tables::THANKS),
        intent: Intent::Thanks,
    },
    Rule {
        id: RuleId::Goodbye,
        predicate: |m, _| m.contains_any(tables::GOODBYE),
        intent: Intent::Goodbye,
    },
    Rule {
        id: RuleId::PendingAccepted,
        predicate: |m, c| c.is_awaiting_confirmation() && lexicon::is_affirmative(m),
        intent: Intent::Confirmation,
    },
    Rule {
        id: RuleId::PendingDeclined,
        predicate: |m, c| c.is_awaiting_confirmation() && lexicon::is_negative(m),
        intent: Intent::Rejection,
    },
    Rule {
        id: RuleId::SeeMoreContinuation,
        predicate: |m, c| {
            m.is_exactly("yes")
                && c.last_question()
                    .map_or(false, |q| q.to_lowercase().contains(SEE_MORE_MARKER))
        },
        intent: Intent::ShowMore,
    },
    Rule {
        id: RuleId::ProductPageQuestion,
        predicate: |m, c| {
            c.current_product().is_some() && m.contains_any(tables::PRODUCT_QUESTION)
        },
        intent: Intent::ProductQuestion,
    },
    Rule {
        id: RuleId::CollectionPageQuestion,
        predicate: |m, c| {
            c.current_collection().is_some() && m.contains_any(tables::COLLECTION_QUESTION)
        },
        intent: Intent::CollectionQuestion,
    },
    Rule {
        id: RuleId::NewArrivals,
        predicate: |m, _| {
            m.contains_any(&["new arrival", "new product"])
                || (m.contains("new") && m.contains_any(&["item", "collection"]))
        },
        intent: Intent::CollectionOffer(ConfirmationType::NewArrivals),
    },
    Rule {
        id: RuleId::StaffPicks,
        predicate: |m, _| m.contains_any(&["staff pick", "staff favorite", "team's favorite"]),
        intent: Intent::CollectionOffer(ConfirmationType::StaffPicks),
    },
    Rule {
        id: RuleId::BackInStock,
        predicate: |m, _| m.contains_any(&["back in stock", "restock"]),
        intent: Intent::CollectionOffer(ConfirmationType::BackInStock),
    },
    Rule {
        id: RuleId::ProductSearch,
        predicate: |m, _| {
            lexicon::resolve_category(m).is_some() || m.contains_any(tables::SEARCH_PATTERNS)
        },
        intent: Intent::ProductSearch,
    },
    Rule {
        id: RuleId::SaleItems,
        predicate: |m, _| m.contains_any(tables::SALE),
        intent: Intent::SaleItems,
    },
    Rule {
        id: RuleId::OrderTracking,
        predicate: |m, _| {
            m.contains_any(tables::TRACKING)
                && (m.contains("order") || extract::order_number(m.as_str()).is_some())
        },
        intent: Intent::OrderTracking,
    },
    Rule {
        id: RuleId::Shipping,
        predicate: |m, _| m.contains_any(tables::SHIPPING),
        intent: Intent::Shipping,
    },
    Rule {
        id: RuleId::BareGreeting,
        predicate: |m, _| m.contains("hi ") || m.is_exactly("hi"),
        intent: Intent::Greeting,
    },
    Rule {
        id: RuleId::ProductListing,
        predicate: |m, _| m.contains_any(tables::PRODUCT_LISTING),
        intent: Intent::ProductListing,
    },
    Rule {
        id: RuleId::Cart,
        predicate: |m, _| m.contains_any(tables::CART),
        intent: Intent::Cart,
    },
    Rule {
        id: RuleId::CollectionListing,
        predicate: |m, _| m.contains_any(tables::COLLECTION_LISTING),
        intent: Intent::CollectionListing,
    },
    Rule {
        id: RuleId::Returns,
        predicate: |m, _| m.contains_any(tables::RETURNS),
        intent: Intent::Returns,
    },
    Rule {
        id: RuleId::ThanksFallback,
        predicate: |m, _| m.contains("thank"),
        intent: Intent::Thanks,
    },
];
