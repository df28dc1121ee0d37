//! Sale items and sale collections.

use crate::domain::conversation::collection_discount;
use crate::domain::storefront::{find_collection, Collection, Product, StoreSnapshot};

use super::markup;

pub const NOTHING_ON_SALE: &str = "We don't have any items on sale right now, but we regularly update our promotions! Would you like to see our featured products instead?";

/// Products with a compare price strictly above their price, in snapshot order.
pub fn sale_products(snapshot: &StoreSnapshot) -> Vec<&Product> {
    snapshot
        .featured_products
        .iter()
        .filter(|p| p.is_on_sale())
        .collect()
}

pub fn sale_items(snapshot: &StoreSnapshot) -> String {
    let on_sale = sale_products(snapshot);
    let collection_lines: Vec<String> = [
        ("on-sale", "On Sale Now", "off selected items"),
        ("final-sale", "Final Sale", "off items being discontinued"),
    ]
    .iter()
    .filter_map(|(handle, label, blurb)| {
        find_collection(&snapshot.collections, handle)
            .filter(|c| c.has_products())
            .map(|c| sale_collection_line(c, label, blurb))
    })
    .collect();

    if on_sale.is_empty() && collection_lines.is_empty() {
        return NOTHING_ON_SALE.to_string();
    }

    let mut reply = String::new();
    if !on_sale.is_empty() {
        reply.push_str("Here are some of our items currently on sale:\n\n");
        reply.push_str(&markup::capped_list(&on_sale, 3, "sale items", |p| {
            match (p.compare_price, p.sale_discount()) {
                (Some(compare), Some(discount)) => markup::sale_line(p, compare, discount),
                _ => markup::product_line(p, false),
            }
        }));
    }
    if !collection_lines.is_empty() {
        if on_sale.is_empty() {
            reply.push_str("We have special sale collections with great discounts:\n\n");
        } else {
            reply.push_str("\n\nWe also have special sale collections:\n\n");
        }
        reply.push_str(&collection_lines.join("\n"));
    }
    reply.push_str("\n\nWould you like to see more sale items?");
    reply
}

fn sale_collection_line(collection: &Collection, label: &str, blurb: &str) -> String {
    format!(
        "• {}: {} {} ({} products)",
        markup::strong(&markup::link(&collection.url(), label)),
        collection_discount(&collection.handle),
        blurb,
        collection.products_count
    )
}
