//! Questions about the product or collection the shopper is looking at.

use crate::domain::lexicon::{tables, NormalizedMessage};
use crate::domain::storefront::{Collection, Product};

use super::markup::{escape, price};

pub fn product_question(message: &NormalizedMessage, product: Option<&Product>) -> String {
    let Some(product) = product else {
        return "I'm not sure which product you're referring to. Could you please provide more details?"
            .to_string();
    };
    let title = escape(&product.title);

    if message.contains_any(tables::PRODUCT_MATERIAL) {
        return format!(
            "I don't have specific material information for {}, but you can find all product details on the product page. Would you like me to help you with anything else about this product?",
            title
        );
    }
    if message.contains_any(tables::PRODUCT_SIZE) {
        return format!(
            "For detailed size information about {}, please check the product description and specifications on the page. Is there anything specific about the sizing you'd like to know?",
            title
        );
    }
    format!(
        "You're looking at {} which is priced at {}. All the product specifications are listed on the product page. Is there something specific about this product you'd like to know?",
        title,
        price(product.price)
    )
}

pub fn collection_question(message: &NormalizedMessage, collection: Option<&Collection>) -> String {
    let Some(collection) = collection else {
        return "I'm not sure which collection you're referring to. Could you please provide more details?"
            .to_string();
    };
    let title = escape(&collection.title);

    if message.contains_any(tables::COLLECTION_POPULARITY) {
        return format!(
            "In our {} collection, we have several popular items. While I don't have specific sales data to tell you which is most popular, I can help you browse through the collection. Would you like me to suggest some items from this collection?",
            title
        );
    }
    if message.contains_any(tables::COLLECTION_RECOMMENDATION) {
        return format!(
            "For recommendations from the {} collection, I'd be happy to help! Could you tell me a bit about what you're looking for? For example, any specific features, price range, or style preferences?",
            title
        );
    }
    format!(
        "You're browsing our {} collection which has {} products. Is there something specific you're looking for within this collection?",
        title, collection.products_count
    )
}
