//! Order tracking replies.

use crate::domain::intent::extract;
use crate::domain::storefront::Customer;

use super::markup;

pub const ASK_FOR_ORDER: &str = "To track your order, please provide your order number (e.g., 'track order 1234'). I'll need both your order number and the email address used for the purchase.";

/// Tracking page URL for an order, with the email when known.
pub fn tracking_url(base_url: &str, order_number: &str, email: Option<&str>) -> String {
    let mut url = format!(
        "{}?order_number={}",
        base_url,
        urlencoding::encode(order_number)
    );
    if let Some(email) = email {
        url.push_str("&email=");
        url.push_str(&urlencoding::encode(email));
    }
    url
}

/// Answers a tracking request. The order number is read from the raw
/// message, before normalization.
pub fn order_tracking(
    raw_message: &str,
    customer: Option<&Customer>,
    tracking_base_url: &str,
    account_url: &str,
) -> String {
    let email = customer.and_then(Customer::email);

    if let Some(number) = extract::order_number(raw_message) {
        let url = tracking_url(tracking_base_url, number, email);
        return match email {
            Some(_) => format!(
                "I can help you track order #{}. {} for this order. The page will open in a new tab with your order details.",
                number,
                markup::link(&url, "Click here to open the tracking page")
            ),
            None => format!(
                "I can help you track order #{}. {}. You'll need to enter the email address used for this order.",
                number,
                markup::link(&url, "Click here to open the tracking page")
            ),
        };
    }

    match customer.filter(|c| c.is_known()) {
        Some(customer) => {
            let greeting = customer
                .first_name()
                .map(|name| format!("Hi {}! ", markup::escape(name)))
                .unwrap_or_else(|| "Hi! ".to_string());
            format!(
                "{}I can help you track your orders. You've placed {} orders with us. To track a specific order, please provide the order number (e.g., \"track order 1234\"). Or you can {} to see all your orders.",
                greeting,
                customer.orders_count,
                markup::link(account_url, "visit your account page")
            )
        }
        None => ASK_FOR_ORDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://shop.example/apps/parcelpanel";
    const ACCOUNT: &str = "https://shop.example/account";

    fn customer(email: Option<&str>) -> Customer {
        Customer {
            id: Some("42".to_string()),
            first_name: Some("Ana".to_string()),
            email: email.map(str::to_string),
            orders_count: 3,
        }
    }

    #[test]
    fn order_number_without_email() {
        let reply = order_tracking("track order 4521", None, BASE, ACCOUNT);
        assert!(reply.starts_with("I can help you track order #4521."));
        assert!(reply.contains("href=\"https://shop.example/apps/parcelpanel?order_number=4521\""));
        assert!(reply.contains("You'll need to enter the email address"));
    }

    #[test]
    fn order_number_with_email_is_encoded() {
        let customer = customer(Some("ana+shop@example.com"));
        let reply = order_tracking("where is #98765", Some(&customer), BASE, ACCOUNT);
        assert!(reply.contains("order_number=98765&email=ana%2Bshop%40example.com"));
        assert!(reply.contains("The page will open in a new tab"));
    }

    #[test]
    fn known_customer_without_number_gets_account_link() {
        let reply = order_tracking("track order ab12", Some(&customer(None)), BASE, ACCOUNT);
        assert!(reply.starts_with("Hi Ana! I can help you track your orders."));
        assert!(reply.contains("You've placed 3 orders with us."));
        assert!(reply.contains("href=\"https://shop.example/account\""));
        assert!(!reply.contains("order_number="));
    }

    #[test]
    fn anonymous_without_number_gets_generic_prompt() {
        assert_eq!(order_tracking("track order ab12", None, BASE, ACCOUNT), ASK_FOR_ORDER);
    }

    #[test]
    fn customer_without_id_is_anonymous() {
        let guest = Customer {
            email: Some("a@b.c".to_string()),
            ..Default::default()
        };
        assert_eq!(order_tracking("track my order", Some(&guest), BASE, ACCOUNT), ASK_FOR_ORDER);
    }
}
