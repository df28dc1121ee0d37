//! Collection offers and the yes/no answers to them.

use tracing::debug;

use crate::domain::conversation::{offer_for, ConfirmationType, ConversationContext};

pub const GENERIC_ACKNOWLEDGMENT: &str = "Great! Is there anything else I can help you with today?";

const OFFER_DECLINED: &str = "No problem! Is there something else you'd like to see? I can show you our popular products or help you find something specific.";

const GENERIC_DECLINED: &str = "Alright! Is there something else I can help you with today?";

/// Poses the offer question and leaves it pending.
///
/// Does not check that the collection exists in the snapshot.
pub fn offer(kind: ConfirmationType, context: &mut ConversationContext) -> String {
    let offer = offer_for(kind);
    context.set_topic(offer.handle);
    context.set_last_collection(offer.handle);
    context.await_confirmation(kind);
    debug!(offer = %kind, "confirmation pending");
    offer.question.to_string()
}

/// Answers "yes" to the pending question. Always clears it.
pub fn confirm(context: &mut ConversationContext) -> String {
    match context.clear_confirmation() {
        Some(kind) => offer_for(kind).acceptance_reply(),
        None => GENERIC_ACKNOWLEDGMENT.to_string(),
    }
}

/// Answers "no" to the pending question. Always clears it.
pub fn reject(context: &mut ConversationContext) -> String {
    match context.clear_confirmation() {
        Some(_) => OFFER_DECLINED.to_string(),
        None => GENERIC_DECLINED.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offer_sets_pending_state_and_breadcrumbs() {
        let mut context = ConversationContext::new();
        let reply = offer(ConfirmationType::NewArrivals, &mut context);
        assert_eq!(
            reply,
            "Yes, our new products are in our New Arrivals collection and they also have 10% off. Shall I take you there?"
        );
        assert!(context.is_awaiting_confirmation());
        assert_eq!(context.confirmation_type(), Some(ConfirmationType::NewArrivals));
        assert_eq!(context.last_topic(), Some("new-arrivals"));
        assert_eq!(context.last_collection(), Some("new-arrivals"));
    }

    #[test]
    fn confirm_links_collection_and_clears() {
        let mut context = ConversationContext::new();
        context.await_confirmation(ConfirmationType::FinalSale);
        let reply = confirm(&mut context);
        assert!(reply.contains("href=\"/collections/final-sale\""));
        assert!(reply.contains("35% discount"));
        assert!(!context.is_awaiting_confirmation());
        assert_eq!(context.confirmation_type(), None);
    }

    #[test]
    fn confirm_without_type_is_generic() {
        let mut context = ConversationContext::new();
        context.await_unknown_confirmation();
        assert_eq!(confirm(&mut context), GENERIC_ACKNOWLEDGMENT);
        assert!(!context.is_awaiting_confirmation());
    }

    #[test]
    fn reject_clears_and_offers_alternatives() {
        let mut context = ConversationContext::new();
        context.await_confirmation(ConfirmationType::NewArrivals);
        assert!(reject(&mut context).starts_with("No problem!"));
        assert!(!context.is_awaiting_confirmation());
        assert_eq!(context.confirmation_type(), None);
    }

    #[test]
    fn reject_without_type_is_generic() {
        let mut context = ConversationContext::new();
        context.await_unknown_confirmation();
        assert!(reject(&mut context).starts_with("Alright!"));
    }
}
