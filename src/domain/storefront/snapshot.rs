//! Read-only store data handed to a chat session.
//!
//! The host page serializes its store data as camelCase JSON. That payload is
//! deserialized into [`RawStoreSnapshot`] and validated into a
//! [`StoreSnapshot`]; numeric fields that do not parse are rejected here so
//! handlers never see a malformed price.

use serde::Deserialize;

use crate::domain::foundation::{Money, ValidationError};

use super::{Cart, Collection, Customer, PageContext, PageKind, Product};

/// Validated store data. Never mutated by the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSnapshot {
    pub customer: Option<Customer>,
    pub cart: Option<Cart>,
    pub featured_products: Vec<Product>,
    pub collections: Vec<Collection>,
    pub page: PageContext,
}

impl StoreSnapshot {
    /// A snapshot with no customer, cart, products or collections.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_customer(mut self, customer: Customer) -> Self {
        self.customer = Some(customer);
        self
    }

    pub fn with_cart(mut self, cart: Cart) -> Self {
        self.cart = Some(cart);
        self
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.featured_products = products;
        self
    }

    pub fn with_collections(mut self, collections: Vec<Collection>) -> Self {
        self.collections = collections;
        self
    }

    pub fn with_page(mut self, page: PageContext) -> Self {
        self.page = page;
        self
    }

    /// Parses and validates the host page's JSON payload.
    pub fn from_json(json: &str) -> Result<Self, ValidationError> {
        let raw: RawStoreSnapshot = serde_json::from_str(json)
            .map_err(|e| ValidationError::invalid_format("snapshot", e.to_string()))?;
        raw.validate()
    }

    /// Customer first name, if the customer and the name are both known.
    pub fn customer_first_name(&self) -> Option<&str> {
        self.customer.as_ref().and_then(Customer::first_name)
    }
}

/// A JSON scalar that may be supplied as a string or a number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Text(String),
    Number(serde_json::Number),
}

impl RawScalar {
    fn as_text(&self) -> String {
        match self {
            RawScalar::Text(s) => s.clone(),
            RawScalar::Number(n) => n.to_string(),
        }
    }

    fn to_money(&self, field: &str) -> Result<Money, ValidationError> {
        Money::parse(field, &self.as_text())
    }

    fn to_count(&self, field: &str) -> Result<u32, ValidationError> {
        let text = self.as_text();
        text.trim()
            .parse::<u32>()
            .map_err(|_| ValidationError::invalid_number(field, text))
    }
}

/// Product as serialized by the storefront.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub title: String,
    pub handle: String,
    pub price: RawScalar,
    #[serde(default)]
    pub compare_price: Option<RawScalar>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default, rename = "type")]
    pub product_type: Option<String>,
    #[serde(default, alias = "image")]
    pub image_url: Option<String>,
}

impl RawProduct {
    fn validate(self) -> Result<Product, ValidationError> {
        if self.handle.trim().is_empty() {
            return Err(ValidationError::empty_field("handle"));
        }
        let price = self.price.to_money("price")?;
        // Storefront themes emit an empty compare price for regular items.
        let compare_price = match &self.compare_price {
            Some(RawScalar::Text(s)) if s.trim().is_empty() => None,
            Some(raw) => Some(raw.to_money("comparePrice")?),
            None => None,
        };
        Ok(Product {
            title: self.title,
            handle: self.handle,
            price,
            compare_price,
            tags: self.tags.unwrap_or_default(),
            product_type: self.product_type.filter(|t| !t.trim().is_empty()),
            image_url: self.image_url.filter(|u| !u.trim().is_empty()),
        })
    }
}

/// Collection as serialized by the storefront.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCollection {
    pub title: String,
    pub handle: String,
    #[serde(default)]
    pub products_count: Option<RawScalar>,
}

impl RawCollection {
    fn validate(self) -> Result<Collection, ValidationError> {
        if self.handle.trim().is_empty() {
            return Err(ValidationError::empty_field("handle"));
        }
        let products_count = match &self.products_count {
            Some(raw) => raw.to_count("productsCount")?,
            None => 0,
        };
        Ok(Collection::new(self.title, self.handle, products_count))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCustomer {
    #[serde(default)]
    pub id: Option<RawScalar>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub orders_count: Option<RawScalar>,
}

impl RawCustomer {
    fn validate(self) -> Result<Customer, ValidationError> {
        let orders_count = match &self.orders_count {
            Some(raw) => raw.to_count("ordersCount")?,
            None => 0,
        };
        Ok(Customer {
            id: self.id.map(|raw| raw.as_text()),
            first_name: self.first_name,
            email: self.email,
            orders_count,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCart {
    #[serde(default)]
    pub item_count: Option<RawScalar>,
    #[serde(default)]
    pub total_price: Option<RawScalar>,
}

impl RawCart {
    fn validate(self) -> Result<Cart, ValidationError> {
        let item_count = match &self.item_count {
            Some(raw) => raw.to_count("itemCount")?,
            None => 0,
        };
        let total_price = match &self.total_price {
            Some(raw) => raw.to_money("totalPrice")?,
            None => Money::ZERO,
        };
        Ok(Cart {
            item_count,
            total_price,
        })
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPageContext {
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub product: Option<RawProduct>,
    #[serde(default)]
    pub collection: Option<RawCollection>,
    #[serde(default)]
    pub search_terms: Option<String>,
    #[serde(default)]
    pub results_count: Option<RawScalar>,
}

impl RawPageContext {
    fn validate(self) -> Result<PageContext, ValidationError> {
        let product = self
            .product
            .map(|p| p.validate().map_err(|e| e.within("product")))
            .transpose()?;
        let collection = self
            .collection
            .map(|c| c.validate().map_err(|e| e.within("collection")))
            .transpose()?;
        let results_count = match &self.results_count {
            Some(raw) => raw.to_count("resultsCount")?,
            None => 0,
        };
        Ok(PageContext {
            kind: self.kind.as_deref().map(PageKind::from_tag).unwrap_or_default(),
            product,
            collection,
            search_terms: self.search_terms,
            results_count,
        })
    }
}

/// The host page payload before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStoreSnapshot {
    #[serde(default)]
    pub customer: Option<RawCustomer>,
    #[serde(default)]
    pub cart: Option<RawCart>,
    #[serde(default)]
    pub featured_products: Option<Vec<RawProduct>>,
    #[serde(default)]
    pub collections: Option<Vec<RawCollection>>,
    #[serde(default)]
    pub page_context: Option<RawPageContext>,
}

impl RawStoreSnapshot {
    /// Validates every numeric field, returning the first failure with its
    /// full field path.
    pub fn validate(self) -> Result<StoreSnapshot, ValidationError> {
        let customer = self
            .customer
            .map(|c| c.validate().map_err(|e| e.within("customer")))
            .transpose()?;
        let cart = self
            .cart
            .map(|c| c.validate().map_err(|e| e.within("cart")))
            .transpose()?;

        let featured_products = self
            .featured_products
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, p)| {
                p.validate()
                    .map_err(|e| e.within(&format!("[{}]", i)).within("featuredProducts"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let collections = self
            .collections
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, c)| {
                c.validate()
                    .map_err(|e| e.within(&format!("[{}]", i)).within("collections"))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let page = self
            .page_context
            .unwrap_or_default()
            .validate()
            .map_err(|e| e.within("pageContext"))?;

        Ok(StoreSnapshot {
            customer,
            cart,
            featured_products,
            collections,
            page,
        })
    }
}
