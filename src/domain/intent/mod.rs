//! Intent module.
//!
//! Maps a normalized message plus conversation context to the handler that
//! answers it, via an ordered table of keyword predicates.

mod classifier;
pub mod extract;
mod rules;

pub use classifier::{classify, Classification};
pub use rules::{Predicate, Rule, RuleId, RULES, SEE_MORE_PROMPT};

use serde::Serialize;

use crate::domain::conversation::ConfirmationType;

/// What the user is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case", tag = "intent", content = "offer")]
pub enum Intent {
    Greeting,
    Wellbeing,
    Thanks,
    Goodbye,
    /// Yes to a pending question.
    Confirmation,
    /// No to a pending question.
    Rejection,
    /// Next page of search results.
    ShowMore,
    ProductQuestion,
    CollectionQuestion,
    /// Offer to open a promoted collection.
    CollectionOffer(ConfirmationType),
    ProductSearch,
    SaleItems,
    OrderTracking,
    Shipping,
    ProductListing,
    Cart,
    CollectionListing,
    Returns,
    /// Nothing matched.
    Filler,
}
