//! Page the widget is embedded in.

use serde::Serialize;

use super::{Collection, Product};

/// Page template tag reported by the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Product,
    Collection,
    Cart,
    Search,
    /// Any other template (home, blog, page, ...). Carries the raw tag.
    Other(String),
}

impl PageKind {
    /// Maps a storefront template tag; matching is case-insensitive.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_lowercase().as_str() {
            "product" => PageKind::Product,
            "collection" => PageKind::Collection,
            "cart" => PageKind::Cart,
            "search" => PageKind::Search,
            other => PageKind::Other(other.to_string()),
        }
    }
}

impl Default for PageKind {
    fn default() -> Self {
        PageKind::Other(String::new())
    }
}

/// Page type plus the entity or search it is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageContext {
    pub kind: PageKind,
    pub product: Option<Product>,
    pub collection: Option<Collection>,
    pub search_terms: Option<String>,
    pub results_count: u32,
}

impl PageContext {
    pub fn product_page(product: Product) -> Self {
        Self {
            kind: PageKind::Product,
            product: Some(product),
            ..Default::default()
        }
    }

    pub fn collection_page(collection: Collection) -> Self {
        Self {
            kind: PageKind::Collection,
            collection: Some(collection),
            ..Default::default()
        }
    }

    pub fn cart_page() -> Self {
        Self {
            kind: PageKind::Cart,
            ..Default::default()
        }
    }

    pub fn search_page(terms: impl Into<String>, results_count: u32) -> Self {
        Self {
            kind: PageKind::Search,
            search_terms: Some(terms.into()),
            results_count,
            ..Default::default()
        }
    }

    /// Product the conversation is scoped to, only on product pages.
    pub fn scoped_product(&self) -> Option<&Product> {
        match self.kind {
            PageKind::Product => self.product.as_ref(),
            _ => None,
        }
    }

    /// Collection the conversation is scoped to, only on collection pages.
    pub fn scoped_collection(&self) -> Option<&Collection> {
        match self.kind {
            PageKind::Collection => self.collection.as_ref(),
            _ => None,
        }
    }

    /// Search terms if present and non-blank.
    pub fn search_terms(&self) -> Option<&str> {
        self.search_terms.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }
}
