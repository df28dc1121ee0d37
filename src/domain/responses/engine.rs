//! Response engine - one turn from raw message to reply.
//!
//! Normalizes the message, runs the rule cascade, dispatches to the handler
//! for the winning intent and records the reply in the context.

use std::sync::Arc;
use tracing::debug;

use crate::domain::conversation::ConversationContext;
use crate::domain::intent::{classify, Classification, Intent};
use crate::domain::lexicon::normalize;
use crate::domain::storefront::StoreSnapshot;
use crate::ports::ReplyChooser;

use super::policy::StorePolicy;
use super::{
    confirmation, filler, page_questions, sale, search, social, store_info, tracking,
};

/// The reply to one user message and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub classification: Classification,
    pub reply: String,
}

/// Stateless turn processor. Conversation state lives in the caller's
/// [`ConversationContext`].
#[derive(Clone)]
pub struct ResponseEngine {
    policy: StorePolicy,
    chooser: Arc<dyn ReplyChooser>,
}

impl ResponseEngine {
    pub fn new(policy: StorePolicy, chooser: Arc<dyn ReplyChooser>) -> Self {
        Self { policy, chooser }
    }

    pub fn policy(&self) -> &StorePolicy {
        &self.policy
    }

    /// Answers one message.
    ///
    /// A pending confirmation survives only a turn that answers it: any
    /// other intent clears it before its handler runs.
    pub fn respond(
        &self,
        raw_message: &str,
        snapshot: &StoreSnapshot,
        context: &mut ConversationContext,
    ) -> Turn {
        let message = normalize(raw_message);
        let classification = classify(&message, context);

        if context.is_awaiting_confirmation() && !classification.answers_confirmation() {
            let dropped = context.clear_confirmation();
            debug!(?dropped, "pending confirmation not answered, cleared");
        }

        let with_images = self.policy.product_images;
        let reply = match classification.intent {
            Intent::Greeting => social::greeting(snapshot),
            Intent::Wellbeing => social::wellbeing(snapshot),
            Intent::Thanks => social::thanks(snapshot),
            Intent::Goodbye => social::goodbye(snapshot, &self.policy.store_name),
            Intent::Confirmation => confirmation::confirm(context),
            Intent::Rejection => confirmation::reject(context),
            Intent::ShowMore => search::show_more(snapshot, with_images),
            Intent::ProductQuestion => {
                page_questions::product_question(&message, context.current_product())
            }
            Intent::CollectionQuestion => {
                page_questions::collection_question(&message, context.current_collection())
            }
            Intent::CollectionOffer(kind) => confirmation::offer(kind, context),
            Intent::ProductSearch => search::search(&message, snapshot, context, with_images),
            Intent::SaleItems => sale::sale_items(snapshot),
            Intent::OrderTracking => tracking::order_tracking(
                raw_message,
                snapshot.customer.as_ref(),
                &self.policy.tracking_base_url,
                &self.policy.account_url,
            ),
            Intent::Shipping => store_info::shipping(&self.policy),
            Intent::ProductListing => store_info::product_listing(snapshot, with_images),
            Intent::Cart => store_info::cart(snapshot),
            Intent::CollectionListing => store_info::collection_listing(snapshot),
            Intent::Returns => store_info::returns(&self.policy),
            Intent::Filler => filler::filler(self.chooser.as_ref()).to_string(),
        };

        context.record_bot_reply(&reply);
        Turn {
            classification,
            reply,
        }
    }
}

impl std::fmt::Debug for ResponseEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResponseEngine")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::ConfirmationType;
    use crate::domain::foundation::Money;
    use crate::domain::intent::RuleId;
    use crate::domain::storefront::{Customer, Product};

    struct First;

    impl ReplyChooser for First {
        fn choose(&self, _count: usize) -> usize {
            0
        }
    }

    fn engine() -> ResponseEngine {
        ResponseEngine::new(StorePolicy::default(), Arc::new(First))
    }

    mod confirmation_flow {
        use super::*;

        #[test]
        fn offer_then_accept() {
            let engine = engine();
            let snapshot = StoreSnapshot::empty();
            let mut context = ConversationContext::new();

            let turn = engine.respond("Any new arrivals?", &snapshot, &mut context);
            assert_eq!(
                turn.classification.intent,
                Intent::CollectionOffer(ConfirmationType::NewArrivals)
            );
            assert!(context.is_awaiting_confirmation());

            let turn = engine.respond("yes", &snapshot, &mut context);
            assert_eq!(turn.classification.intent, Intent::Confirmation);
            assert!(turn.reply.contains("/collections/new-arrivals"));
            assert!(!context.is_awaiting_confirmation());
            assert_eq!(context.confirmation_type(), None);
        }

        #[test]
        fn offer_then_decline() {
            let engine = engine();
            let snapshot = StoreSnapshot::empty();
            let mut context = ConversationContext::new();
            engine.respond("new products?", &snapshot, &mut context);

            let turn = engine.respond("nah", &snapshot, &mut context);
            assert_eq!(turn.classification.rule, Some(RuleId::PendingDeclined));
            assert!(!context.is_awaiting_confirmation());
            assert_eq!(context.confirmation_type(), None);
        }

        #[test]
        fn thanking_answer_drops_the_offer() {
            let engine = engine();
            let snapshot = StoreSnapshot::empty();
            let mut context = ConversationContext::new();
            engine.respond("new arrivals", &snapshot, &mut context);

            let turn = engine.respond("yes thanks", &snapshot, &mut context);
            assert_eq!(turn.classification.intent, Intent::Thanks);
            assert!(!turn.reply.contains("/collections/new-arrivals"));
            assert!(!context.is_awaiting_confirmation());
        }

        #[test]
        fn unrelated_answer_clears_pending_question() {
            let engine = engine();
            let snapshot = StoreSnapshot::empty();
            let mut context = ConversationContext::new();
            engine.respond("new arrivals", &snapshot, &mut context);

            let turn = engine.respond("what are your shipping times", &snapshot, &mut context);
            assert_eq!(turn.classification.intent, Intent::Shipping);
            assert!(!context.is_awaiting_confirmation());
            assert_eq!(context.confirmation_type(), None);
        }

        #[test]
        fn greeting_preempts_and_clears_pending_question() {
            let engine = engine();
            let snapshot = StoreSnapshot::empty();
            let mut context = ConversationContext::new();
            engine.respond("new arrivals", &snapshot, &mut context);

            let turn = engine.respond("hello again", &snapshot, &mut context);
            assert_eq!(turn.reply, "Hello! How can I help you today?");
            assert!(!context.is_awaiting_confirmation());
        }
    }

    mod see_more {
        use super::*;

        fn catalog() -> StoreSnapshot {
            let products = ["Tote One", "Tote Two", "Tote Three", "Tote Four", "Tote Five"]
                .iter()
                .map(|t| Product::new(*t, t.to_lowercase().replace(' ', "-"), Money::from_units(20)))
                .collect();
            StoreSnapshot::empty().with_products(products)
        }

        #[test]
        fn yes_after_search_pages_results() {
            let engine = engine();
            let snapshot = catalog();
            let mut context = ConversationContext::new();

            let turn = engine.respond("show me totes", &snapshot, &mut context);
            assert!(turn.reply.ends_with("Would you like to see more options or need help with anything specific?"));

            let turn = engine.respond("yes", &snapshot, &mut context);
            assert_eq!(turn.classification.intent, Intent::ShowMore);
            assert!(turn.reply.contains("Tote Four"));
            assert!(turn.reply.contains("Tote Five"));
            assert!(!turn.reply.contains("Tote One"));
        }

        #[test]
        fn second_yes_does_not_page_again() {
            let engine = engine();
            let snapshot = catalog();
            let mut context = ConversationContext::new();
            engine.respond("show me totes", &snapshot, &mut context);
            engine.respond("yes", &snapshot, &mut context);

            let turn = engine.respond("yes", &snapshot, &mut context);
            assert_ne!(turn.classification.intent, Intent::ShowMore);
        }
    }

    mod dispatch {
        use super::*;

        #[test]
        fn tracking_reads_raw_message() {
            let turn = engine().respond(
                "Track order 4521",
                &StoreSnapshot::empty(),
                &mut ConversationContext::new(),
            );
            assert!(turn.reply.contains("order_number=4521"));
        }

        #[test]
        fn greeting_is_personalized() {
            let snapshot = StoreSnapshot::empty().with_customer(Customer {
                id: Some("1".to_string()),
                first_name: Some("Sam".to_string()),
                ..Default::default()
            });
            let turn = engine().respond("good morning", &snapshot, &mut ConversationContext::new());
            assert_eq!(turn.reply, "Hello Sam! How can I help you today?");
        }

        #[test]
        fn unknown_message_uses_chooser() {
            let turn = engine().respond(
                "qwerty",
                &StoreSnapshot::empty(),
                &mut ConversationContext::new(),
            );
            assert_eq!(turn.reply, filler::FILLER_REPLIES[0]);
            assert_eq!(turn.classification.rule, None);
        }
    }
}
