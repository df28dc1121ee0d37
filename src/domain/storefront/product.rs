//! Product entity as exposed by the storefront.

use serde::Serialize;

use crate::domain::foundation::{Money, Percentage};

/// A product from the store snapshot. Read-only to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub title: String,
    pub handle: String,
    pub price: Money,
    pub compare_price: Option<Money>,
    pub tags: Vec<String>,
    pub product_type: Option<String>,
    pub image_url: Option<String>,
}

impl Product {
    /// Creates a product with no compare price, tags, type or image.
    pub fn new(title: impl Into<String>, handle: impl Into<String>, price: Money) -> Self {
        Self {
            title: title.into(),
            handle: handle.into(),
            price,
            compare_price: None,
            tags: Vec::new(),
            product_type: None,
            image_url: None,
        }
    }

    pub fn with_compare_price(mut self, compare_price: Money) -> Self {
        self.compare_price = Some(compare_price);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = Some(product_type.into());
        self
    }

    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Storefront path for this product.
    pub fn url(&self) -> String {
        format!("/products/{}", self.handle)
    }

    /// Discount when the compare price is strictly above the price.
    pub fn sale_discount(&self) -> Option<Percentage> {
        self.compare_price.and_then(|compare| compare.discount_to(self.price))
    }

    pub fn is_on_sale(&self) -> bool {
        self.sale_discount().is_some()
    }

    /// True when the lower-cased title or any lower-cased tag contains `term`.
    ///
    /// `term` is expected to be lower case already.
    pub fn title_or_tags_contain(&self, term: &str) -> bool {
        self.title.to_lowercase().contains(term)
            || self.tags.iter().any(|tag| tag.to_lowercase().contains(term))
    }

    /// Like [`Product::title_or_tags_contain`], also checking the product type.
    pub fn describes(&self, term: &str) -> bool {
        self.title_or_tags_contain(term)
            || self
                .product_type
                .as_deref()
                .is_some_and(|t| t.to_lowercase().contains(term))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn money(raw: &str) -> Money {
        Money::parse("price", raw).unwrap()
    }

    #[test]
    fn url_uses_handle() {
        let product = Product::new("Canvas Tote", "canvas-tote", money("45"));
        assert_eq!(product.url(), "/products/canvas-tote");
    }

    #[test]
    fn sale_requires_strictly_higher_compare_price() {
        let base = Product::new("Tote", "tote", money("40"));
        assert!(!base.is_on_sale());
        assert!(!base.clone().with_compare_price(money("40")).is_on_sale());
        assert_eq!(
            base.with_compare_price(money("50")).sale_discount(),
            Some(Percentage::new(20))
        );
    }

    #[test]
    fn matching_is_case_insensitive_on_product_side() {
        let product = Product::new("Leather WALLET", "leather-wallet", money("30"))
            .with_tags(["Gift Ideas"])
            .with_type("Accessories");
        assert!(product.title_or_tags_contain("wallet"));
        assert!(product.title_or_tags_contain("gift"));
        assert!(!product.title_or_tags_contain("accessor"));
        assert!(product.describes("accessor"));
    }
}
