//! Message normalization.
//!
//! Lower-cases a message and rewrites regional spelling variants to their
//! canonical form. Nothing else is touched: punctuation and whitespace are
//! kept so phrase keywords like "hi " still line up.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;

use super::tables::SPELLING_VARIANTS;

/// One compiled alternation per canonical spelling.
static VARIANT_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SPELLING_VARIANTS
        .iter()
        .map(|(canonical, variants)| {
            let alternation = variants
                .iter()
                .map(|v| regex::escape(v))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = Regex::new(&alternation).expect("spelling variants are literal words");
            (pattern, *canonical)
        })
        .collect()
});

/// A lower-cased, spelling-canonicalized message used for all matching.
///
/// Never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NormalizedMessage(String);

impl NormalizedMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the message contains `needle` anywhere.
    pub fn contains(&self, needle: &str) -> bool {
        self.0.contains(needle)
    }

    /// True when the message contains any of `keywords`.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|kw| self.0.contains(kw))
    }

    /// Returns the first keyword in table order that the message contains.
    pub fn first_match<'k>(&self, keywords: &[&'k str]) -> Option<&'k str> {
        keywords.iter().copied().find(|kw| self.0.contains(kw))
    }

    /// True when the message, ignoring surrounding whitespace, is exactly `word`.
    pub fn is_exactly(&self, word: &str) -> bool {
        self.0.trim() == word
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for NormalizedMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a raw user message. Pure and infallible.
pub fn normalize(message: &str) -> NormalizedMessage {
    let mut text = message.to_lowercase();
    for (pattern, canonical) in VARIANT_PATTERNS.iter() {
        if pattern.is_match(&text) {
            text = pattern.replace_all(&text, *canonical).into_owned();
        }
    }
    NormalizedMessage(text)
}
