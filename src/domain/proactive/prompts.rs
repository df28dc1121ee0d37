//! Proactive prompt wording.

use serde::Serialize;

use crate::domain::responses::markup::escape;
use crate::domain::storefront::{PageKind, StoreSnapshot};

/// Why a prompt was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptKind {
    /// Page-specific prompt shortly after load.
    Contextual,
    /// Pointer left through the top of the viewport.
    ExitIntent,
    /// No activity for the configured timeout.
    Inactivity,
}

/// A speech-bubble message offered next to the launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProactivePrompt {
    pub kind: PromptKind,
    pub message: String,
}

impl ProactivePrompt {
    pub fn new(kind: PromptKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub const EXIT_INTENT_MESSAGE: &str =
    "Wait! Before you go, can I help you find what you're looking for?";

pub const INACTIVITY_MESSAGE: &str = "Still browsing? I'm here if you need any assistance!";

/// Page-specific prompt, or `None` when the page warrants only the launcher
/// or the entity it is about is missing.
pub fn contextual_prompt(snapshot: &StoreSnapshot) -> Option<ProactivePrompt> {
    let page = &snapshot.page;
    let message = match &page.kind {
        PageKind::Product => format!(
            "I see you're looking at {}. Can I help answer any questions about this product?",
            escape(&page.product.as_ref()?.title)
        ),
        PageKind::Collection => format!(
            "Looking for something specific in our {} collection? I can help you find the perfect item!",
            escape(&page.collection.as_ref()?.title)
        ),
        PageKind::Cart => match snapshot.cart.as_ref().filter(|c| !c.is_empty()) {
            Some(_) => "Need any help with your cart or finding additional items?".to_string(),
            None => "Your cart is empty. Can I help you find something you'll love?".to_string(),
        },
        PageKind::Search => {
            let terms = escape(page.search_terms()?);
            if page.results_count > 0 {
                format!(
                    "I see you're searching for \"{}\". Can I help you narrow down these {} results?",
                    terms, page.results_count
                )
            } else {
                format!(
                    "I notice you searched for \"{}\" but we couldn't find any matches. Can I help you find something similar?",
                    terms
                )
            }
        }
        PageKind::Other(_) => return None,
    };
    Some(ProactivePrompt::new(PromptKind::Contextual, message))
}
