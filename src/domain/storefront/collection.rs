//! Collection entity as exposed by the storefront.

use serde::Serialize;

/// A product collection. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub title: String,
    pub handle: String,
    pub products_count: u32,
}

impl Collection {
    pub fn new(title: impl Into<String>, handle: impl Into<String>, products_count: u32) -> Self {
        Self {
            title: title.into(),
            handle: handle.into(),
            products_count,
        }
    }

    /// Storefront path for this collection.
    pub fn url(&self) -> String {
        format!("/collections/{}", self.handle)
    }

    /// True when the lower-cased title or handle contains `term`.
    pub fn matches(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term) || self.handle.to_lowercase().contains(term)
    }

    pub fn has_products(&self) -> bool {
        self.products_count > 0
    }
}

/// Returns the first collection whose title or handle contains `term`.
pub fn find_collection<'a>(collections: &'a [Collection], term: &str) -> Option<&'a Collection> {
    collections.iter().find(|c| c.matches(term))
}
