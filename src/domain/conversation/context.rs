//! Conversation context carried between turns.
//!
//! Created once per session from the page the widget is on. Only the handler
//! running for the current turn mutates it.

use serde::Serialize;

use crate::domain::storefront::{Collection, PageContext, Product};

use super::ConfirmationType;

/// Per-session conversational state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversationContext {
    current_product: Option<Product>,
    current_collection: Option<Collection>,
    awaiting_confirmation: bool,
    confirmation_type: Option<ConfirmationType>,
    last_question: Option<String>,
    last_topic: Option<String>,
    last_collection: Option<String>,
}

impl ConversationContext {
    /// Creates an unscoped context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context scoped to the page's product or collection.
    pub fn for_page(page: &PageContext) -> Self {
        Self {
            current_product: page.scoped_product().cloned(),
            current_collection: page.scoped_collection().cloned(),
            ..Self::default()
        }
    }

    pub fn with_product(mut self, product: Product) -> Self {
        self.current_product = Some(product);
        self
    }

    pub fn with_collection(mut self, collection: Collection) -> Self {
        self.current_collection = Some(collection);
        self
    }

    pub fn current_product(&self) -> Option<&Product> {
        self.current_product.as_ref()
    }

    pub fn current_collection(&self) -> Option<&Collection> {
        self.current_collection.as_ref()
    }

    // === Confirmation flow ===

    pub fn is_awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation
    }

    pub fn confirmation_type(&self) -> Option<ConfirmationType> {
        self.confirmation_type
    }

    /// Marks a yes/no question as pending for the next turn.
    pub fn await_confirmation(&mut self, kind: ConfirmationType) {
        self.awaiting_confirmation = true;
        self.confirmation_type = Some(kind);
    }

    /// Forces a pending flag without a known question.
    ///
    /// Hosts restoring state from older widgets can end up here; the
    /// confirmation handler answers it with a generic acknowledgment.
    pub fn await_unknown_confirmation(&mut self) {
        self.awaiting_confirmation = true;
        self.confirmation_type = None;
    }

    /// Clears any pending question, returning what it was.
    pub fn clear_confirmation(&mut self) -> Option<ConfirmationType> {
        self.awaiting_confirmation = false;
        self.confirmation_type.take()
    }

    // === Breadcrumbs ===

    pub fn last_question(&self) -> Option<&str> {
        self.last_question.as_deref()
    }

    pub fn set_last_question(&mut self, question: impl Into<String>) {
        self.last_question = Some(question.into());
    }

    /// Remembers the last line of a bot reply that asks a question.
    ///
    /// Replies without a question mark leave the previous question in place.
    pub fn record_bot_reply(&mut self, reply: &str) {
        if let Some(line) = reply.lines().rev().find(|line| line.contains('?')) {
            self.last_question = Some(line.trim().to_string());
        }
    }

    pub fn last_topic(&self) -> Option<&str> {
        self.last_topic.as_deref()
    }

    pub fn last_collection(&self) -> Option<&str> {
        self.last_collection.as_deref()
    }

    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.last_topic = Some(topic.into());
    }

    pub fn set_last_collection(&mut self, handle: impl Into<String>) {
        self.last_collection = Some(handle.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::Money;

    mod scoping {
        use super::*;

        #[test]
        fn product_page_scopes_product() {
            let product = Product::new("Tote", "tote", Money::from_units(40));
            let context = ConversationContext::for_page(&PageContext::product_page(product.clone()));
            assert_eq!(context.current_product(), Some(&product));
            assert!(context.current_collection().is_none());
        }

        #[test]
        fn collection_page_scopes_collection() {
            let collection = Collection::new("Bags", "bags", 8);
            let context =
                ConversationContext::for_page(&PageContext::collection_page(collection.clone()));
            assert_eq!(context.current_collection(), Some(&collection));
            assert!(context.current_product().is_none());
        }

        #[test]
        fn other_pages_are_unscoped() {
            let context = ConversationContext::for_page(&PageContext::cart_page());
            assert_eq!(context, ConversationContext::new());
        }
    }

    mod confirmation {
        use super::*;

        #[test]
        fn await_then_clear() {
            let mut context = ConversationContext::new();
            context.await_confirmation(ConfirmationType::NewArrivals);
            assert!(context.is_awaiting_confirmation());
            assert_eq!(context.confirmation_type(), Some(ConfirmationType::NewArrivals));

            assert_eq!(context.clear_confirmation(), Some(ConfirmationType::NewArrivals));
            assert!(!context.is_awaiting_confirmation());
            assert_eq!(context.confirmation_type(), None);
        }

        #[test]
        fn unknown_confirmation_has_no_type() {
            let mut context = ConversationContext::new();
            context.await_unknown_confirmation();
            assert!(context.is_awaiting_confirmation());
            assert_eq!(context.clear_confirmation(), None);
        }
    }

    mod last_question {
        use super::*;

        #[test]
        fn records_replies_with_question_marks_only() {
            let mut context = ConversationContext::new();
            context.record_bot_reply("Would you like to see more options?");
            context.record_bot_reply("Our return policy is 30 days.");
            assert_eq!(context.last_question(), Some("Would you like to see more options?"));
        }

        #[test]
        fn keeps_only_the_asking_line() {
            let mut context = ConversationContext::new();
            context.record_bot_reply("Here you go:\n\n• Tote\n\nWant more options?\n");
            assert_eq!(context.last_question(), Some("Want more options?"));
        }

        #[test]
        fn later_questions_replace_earlier_ones() {
            let mut context = ConversationContext::new();
            context.record_bot_reply("Want more options?");
            context.record_bot_reply("Anything else?");
            assert_eq!(context.last_question(), Some("Anything else?"));
        }
    }
}
