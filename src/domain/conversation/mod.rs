//! Conversation domain module.
//!
//! State carried across turns: the page-scoped context with its
//! confirmation flow, the collection offers that flow refers to, the
//! widget visibility state and transcript entries.

mod context;
mod message;
mod offers;
mod widget_state;

pub use context::ConversationContext;
pub use message::{ChatMessage, Sender};
pub use offers::{collection_discount, offer_for, CollectionOffer, ConfirmationType, OFFERS};
pub use widget_state::WidgetState;
