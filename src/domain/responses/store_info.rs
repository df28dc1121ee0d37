//! Templated store information: shipping, returns, cart and listings.

use crate::domain::storefront::StoreSnapshot;

use super::markup;
use super::policy::StorePolicy;

pub fn shipping(policy: &StorePolicy) -> String {
    format!(
        "Our shipping policy:\n\n\
         • Free shipping on orders over {}\n\
         • Standard shipping: {}\n\
         • Express shipping: {}\n\n\
         Shipping costs vary by product and destination country. The exact shipping cost will be calculated and displayed at checkout based on your location and the items in your cart.\n\n\
         Do you have any other questions about shipping?",
        markup::price(policy.free_shipping_threshold),
        policy.standard_shipping,
        policy.express_shipping
    )
}

pub fn returns(policy: &StorePolicy) -> String {
    format!(
        "Our return policy:\n\n\
         • {}-day return window\n\
         • Items must be in original condition\n\
         • Free returns on defective items\n\
         • Return shipping may apply for exchanges\n\n\
         Would you like help starting a return?",
        policy.return_window_days
    )
}

pub fn cart(snapshot: &StoreSnapshot) -> String {
    match snapshot.cart.as_ref().filter(|c| !c.is_empty()) {
        Some(cart) => format!(
            "You have {} item(s) in your cart with a total of {}. Ready to checkout or need help with anything else?",
            cart.item_count,
            markup::price(cart.total_price)
        ),
        None => "Your cart is currently empty. Would you like me to help you find some great products to add?"
            .to_string(),
    }
}

pub fn collection_listing(snapshot: &StoreSnapshot) -> String {
    if snapshot.collections.is_empty() {
        return "We have many great collections! What type of products are you interested in browsing?"
            .to_string();
    }
    format!(
        "Here are our popular collections:\n\n{}\n\nWhich collection interests you most?",
        markup::capped_list(&snapshot.collections, 5, "collections", markup::collection_line)
    )
}

pub fn product_listing(snapshot: &StoreSnapshot, with_images: bool) -> String {
    if snapshot.featured_products.is_empty() {
        return "I'd be happy to help you find products! What type of item are you looking for?"
            .to_string();
    }
    format!(
        "Here are some of our popular products:\n\n{}\n\nWould you like to know more about any of these?",
        markup::capped_list(&snapshot.featured_products, 3, "products", |p| {
            markup::product_line(p, with_images)
        })
    )
}
