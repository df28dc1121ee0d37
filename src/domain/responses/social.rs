//! Greeting, wellbeing, thanks and goodbye replies.
//!
//! Personalized with the customer's first name when the storefront knows it.
//! Social replies never touch the conversation context.

use crate::domain::storefront::StoreSnapshot;

use super::markup;

pub fn greeting(snapshot: &StoreSnapshot) -> String {
    match snapshot.customer_first_name() {
        Some(name) => format!("Hello {}! How can I help you today?", markup::escape(name)),
        None => "Hello! How can I help you today?".to_string(),
    }
}

pub fn wellbeing(snapshot: &StoreSnapshot) -> String {
    format!(
        "I'm doing great, thanks for asking{}! How can I help you with your shopping today?",
        name_suffix(snapshot)
    )
}

pub fn thanks(snapshot: &StoreSnapshot) -> String {
    format!(
        "You're very welcome{}! I'm here whenever you need assistance. Happy shopping! 😊",
        name_suffix(snapshot)
    )
}

pub fn goodbye(snapshot: &StoreSnapshot, store_name: &str) -> String {
    format!(
        "Goodbye{}! Thanks for visiting {}. Come back anytime!",
        name_suffix(snapshot),
        markup::escape(store_name)
    )
}

/// ", Ana" or nothing.
fn name_suffix(snapshot: &StoreSnapshot) -> String {
    snapshot
        .customer_first_name()
        .map(|name| format!(", {}", markup::escape(name)))
        .unwrap_or_default()
}
