//! Lexicon module.
//!
//! Keyword tables per intent and the normalizer that prepares messages for
//! matching against them.

mod normalizer;
pub mod tables;

pub use normalizer::{normalize, NormalizedMessage};
pub use tables::Category;

/// Resolves the first category, in table order, with a matching synonym.
pub fn resolve_category(message: &NormalizedMessage) -> Option<&'static Category> {
    tables::PRODUCT_CATEGORIES
        .iter()
        .find(|category| message.contains_any(category.synonyms))
}

/// Resolves the first color, in table order, the message mentions.
pub fn resolve_color(message: &NormalizedMessage) -> Option<&'static str> {
    message.first_match(tables::COLORS)
}

pub fn is_affirmative(message: &NormalizedMessage) -> bool {
    message.contains_any(tables::AFFIRMATIVE)
}

pub fn is_negative(message: &NormalizedMessage) -> bool {
    message.contains_any(tables::NEGATIVE)
}
