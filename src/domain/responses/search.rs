//! Smart product search and the "see more" continuation.
//!
//! A search resolves up to three criteria from the message: a category, a
//! color and a price ceiling. A product must satisfy every criterion that
//! was resolved. Collections are matched on the category alone.

use tracing::debug;

use crate::domain::conversation::ConversationContext;
use crate::domain::foundation::Money;
use crate::domain::intent::{extract, SEE_MORE_PROMPT};
use crate::domain::lexicon::{self, Category, NormalizedMessage};
use crate::domain::storefront::{Collection, Product, StoreSnapshot};

use super::markup;

/// Products listed per search reply and per "see more" page.
pub const PAGE_SIZE: usize = 3;

pub const BE_MORE_SPECIFIC: &str = "I'd love to help you find what you're looking for! Could you be more specific about the type of product you need? For example, are you looking for bags, watches, luggage, or something else?";

pub const NOTHING_MORE: &str = "That's everything I have to show you right now! Would you like help with something else, like shipping or our sale items?";

/// What the shopper asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchCriteria {
    pub category: Option<&'static Category>,
    pub color: Option<&'static str>,
    pub max_price: Option<Money>,
}

impl SearchCriteria {
    pub fn from_message(message: &NormalizedMessage) -> Self {
        Self {
            category: lexicon::resolve_category(message),
            color: lexicon::resolve_color(message),
            max_price: extract::price_ceiling(message.as_str()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.color.is_none() && self.max_price.is_none()
    }

    pub fn accepts(&self, product: &Product) -> bool {
        let category_ok = self
            .category
            .map_or(true, |c| c.synonyms.iter().any(|s| product.describes(s)));
        let color_ok = self.color.map_or(true, |color| product.title_or_tags_contain(color));
        let price_ok = self.max_price.map_or(true, |max| product.price <= max);
        category_ok && color_ok && price_ok
    }

    /// Collections whose title or handle mentions a category synonym.
    pub fn matching_collections<'a>(&self, collections: &'a [Collection]) -> Vec<&'a Collection> {
        match self.category {
            Some(category) => collections
                .iter()
                .filter(|c| category.synonyms.iter().any(|s| c.matches(s)))
                .collect(),
            None => Vec::new(),
        }
    }

    /// "black bag items under $100", "items under $50", "bag items".
    pub fn describe(&self) -> String {
        let mut words: Vec<String> = Vec::new();
        if let Some(color) = self.color {
            words.push(color.to_string());
        }
        if let Some(category) = self.category {
            words.push(category.name.to_string());
        }
        words.push("items".to_string());
        if let Some(max) = self.max_price {
            words.push(format!("under {}", markup::price(max)));
        }
        words.join(" ")
    }
}

/// Answers a product search.
pub fn search(
    message: &NormalizedMessage,
    snapshot: &StoreSnapshot,
    context: &mut ConversationContext,
    with_images: bool,
) -> String {
    let criteria = SearchCriteria::from_message(message);
    if criteria.is_empty() {
        debug!("search without criteria");
        return BE_MORE_SPECIFIC.to_string();
    }

    let description = criteria.describe();
    let products: Vec<&Product> = snapshot
        .featured_products
        .iter()
        .filter(|p| criteria.accepts(p))
        .collect();
    let collections = criteria.matching_collections(&snapshot.collections);
    debug!(
        criteria = %description,
        products = products.len(),
        collections = collections.len(),
        "search resolved"
    );

    let line = |p: &&Product| markup::product_line(p, with_images);
    let mut sections: Vec<String> = Vec::new();
    if !products.is_empty() {
        sections.push(format!(
            "Great! I found some {} for you:\n\n{}",
            description,
            markup::capped_list(&products, PAGE_SIZE, &description, line)
        ));
    } else if !snapshot.featured_products.is_empty() {
        let popular: Vec<&Product> = snapshot.featured_products.iter().take(PAGE_SIZE).collect();
        sections.push(format!(
            "I couldn't find any {} right now, but here are some of our popular products:\n\n{}",
            description,
            markup::capped_list(&popular, PAGE_SIZE, "products", line)
        ));
    }
    if !collections.is_empty() {
        let lines = collections
            .iter()
            .map(|c| markup::collection_line(c))
            .collect::<Vec<_>>()
            .join("\n");
        sections.push(format!(
            "We also have collections that might interest you:\n\n{}",
            lines
        ));
    }

    if sections.is_empty() {
        return format!(
            "I'm sorry, I couldn't find any {} right now. Could you describe what you need differently, or would you like to browse our collections instead?",
            description
        );
    }

    context.set_topic("search");
    context.set_last_question(SEE_MORE_PROMPT);
    format!("{}\n\n{}", sections.join("\n\n"), SEE_MORE_PROMPT)
}

/// Second page of featured products: items 4 to 6.
pub fn show_more(snapshot: &StoreSnapshot, with_images: bool) -> String {
    let next: Vec<&Product> = snapshot
        .featured_products
        .iter()
        .skip(PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();
    if next.is_empty() {
        return NOTHING_MORE.to_string();
    }
    let lines = next
        .iter()
        .map(|p| markup::product_line(p, with_images))
        .collect::<Vec<_>>()
        .join("\n");
    format!(
        "Here are a few more options:\n\n{}\n\nIs there anything else I can help you find?",
        lines
    )
}
