//! ChatSession - one visitor's conversation with the concierge.
//!
//! Owns the snapshot, the conversation context and the transcript. Turns
//! are processed one at a time through `&mut self`, so no locking is
//! needed around the context.

use std::time::Duration;
use tracing::{debug, info};

use crate::domain::conversation::{ChatMessage, ConversationContext};
use crate::domain::foundation::SessionId;
use crate::domain::responses::{ResponseEngine, Turn};
use crate::domain::storefront::StoreSnapshot;

pub struct ChatSession {
    id: SessionId,
    snapshot: StoreSnapshot,
    engine: ResponseEngine,
    context: ConversationContext,
    transcript: Vec<ChatMessage>,
    thinking_delay: Duration,
}

impl ChatSession {
    /// Starts a session scoped to the snapshot's page.
    pub fn new(snapshot: StoreSnapshot, engine: ResponseEngine) -> Self {
        let context = ConversationContext::for_page(&snapshot.page);
        let id = SessionId::new();
        info!(session_id = %id, page = ?snapshot.page.kind, "chat session started");
        Self {
            id,
            snapshot,
            engine,
            context,
            transcript: Vec::new(),
            thinking_delay: Duration::ZERO,
        }
    }

    /// Pause inserted before every reply.
    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn snapshot(&self) -> &StoreSnapshot {
        &self.snapshot
    }

    pub fn context(&self) -> &ConversationContext {
        &self.context
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Answers one user message. Blank input gets the filler reply.
    pub async fn respond(&mut self, text: &str) -> Turn {
        let text = text.trim();
        self.transcript.push(ChatMessage::user(text));

        if !self.thinking_delay.is_zero() {
            tokio::time::sleep(self.thinking_delay).await;
        }

        let turn = self.engine.respond(text, &self.snapshot, &mut self.context);
        debug!(
            session_id = %self.id,
            rule = turn.classification.rule.map(|r| r.as_str()).unwrap_or("filler"),
            awaiting_confirmation = self.context.is_awaiting_confirmation(),
            "turn answered"
        );
        self.transcript.push(ChatMessage::bot(turn.reply.clone()));
        turn
    }

    /// Ends the session, returning the transcript.
    pub fn end(self) -> Vec<ChatMessage> {
        info!(
            session_id = %self.id,
            messages = self.transcript.len(),
            "chat session ended"
        );
        self.transcript
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("context", &self.context)
            .field("messages", &self.transcript.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::FixedReplyChooser;
    use crate::domain::conversation::Sender;
    use crate::domain::foundation::Money;
    use crate::domain::intent::Intent;
    use crate::domain::responses::filler::FILLER_REPLIES;
    use crate::domain::responses::StorePolicy;
    use crate::domain::storefront::{PageContext, Product};
    use std::sync::Arc;

    fn engine() -> ResponseEngine {
        ResponseEngine::new(StorePolicy::default(), Arc::new(FixedReplyChooser::new(0)))
    }

    #[tokio::test]
    async fn blank_message_gets_filler_reply() {
        let mut session = ChatSession::new(StoreSnapshot::empty(), engine());
        let turn = session.respond("   ").await;
        assert_eq!(turn.classification.intent, Intent::Filler);
        assert_eq!(turn.reply, FILLER_REPLIES[0]);
        assert_eq!(session.transcript().len(), 2);
        assert_eq!(session.transcript()[1].content, FILLER_REPLIES[0]);
    }

    #[tokio::test]
    async fn transcript_alternates_user_and_bot() {
        let mut session = ChatSession::new(StoreSnapshot::empty(), engine());
        session.respond("hello").await;
        session.respond("what is your return policy").await;

        let senders: Vec<Sender> = session.transcript().iter().map(|m| m.sender).collect();
        assert_eq!(senders, [Sender::User, Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(session.transcript()[0].content, "hello");
        let transcript = session.transcript();
        assert!(transcript[1].created_at >= transcript[0].created_at);
    }

    #[tokio::test]
    async fn context_is_scoped_to_product_page() {
        let watch = Product::new("Steel Watch", "steel-watch", Money::from_units(120));
        let snapshot = StoreSnapshot::empty().with_page(PageContext::product_page(watch));
        let mut session = ChatSession::new(snapshot, engine());
        assert_eq!(
            session.context().current_product().map(|p| p.title.as_str()),
            Some("Steel Watch")
        );

        let turn = session.respond("tell me about this product").await;
        assert_eq!(turn.classification.intent, Intent::ProductQuestion);
        assert!(turn.reply.contains("$120"));
    }

    #[tokio::test]
    async fn thinking_delay_elapses_before_reply() {
        let mut session = ChatSession::new(StoreSnapshot::empty(), engine())
            .with_thinking_delay(Duration::from_millis(20));
        let started = tokio::time::Instant::now();
        session.respond("hi").await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn end_returns_transcript() {
        let mut session = ChatSession::new(StoreSnapshot::empty(), engine());
        session.respond("thanks").await;
        let transcript = session.end();
        assert_eq!(transcript.len(), 2);
        assert!(transcript[1].is_from_bot());
    }
}
