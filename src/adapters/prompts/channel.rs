//! Prompt publisher backed by a tokio mpsc channel.
//!
//! The receiving half is owned by whatever renders the widget (the CLI
//! prints prompts as they arrive).

use async_trait::async_trait;
use tokio::sync::mpsc;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::proactive::ProactivePrompt;
use crate::ports::PromptPublisher;

#[derive(Debug, Clone)]
pub struct ChannelPromptPublisher {
    sender: mpsc::Sender<ProactivePrompt>,
}

impl ChannelPromptPublisher {
    pub fn new(sender: mpsc::Sender<ProactivePrompt>) -> Self {
        Self { sender }
    }

    /// Creates a publisher together with its receiving half.
    pub fn channel(buffer: usize) -> (Self, mpsc::Receiver<ProactivePrompt>) {
        let (sender, receiver) = mpsc::channel(buffer);
        (Self::new(sender), receiver)
    }
}

#[async_trait]
impl PromptPublisher for ChannelPromptPublisher {
    async fn publish(&self, prompt: ProactivePrompt) -> Result<(), DomainError> {
        self.sender.send(prompt).await.map_err(|e| {
            DomainError::new(
                ErrorCode::PromptDeliveryFailed,
                "Prompt receiver has been dropped",
            )
            .with_detail("kind", format!("{:?}", e.0.kind))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::proactive::{PromptKind, EXIT_INTENT_MESSAGE};

    #[tokio::test]
    async fn delivers_prompt_to_receiver() {
        let (publisher, mut receiver) = ChannelPromptPublisher::channel(4);
        let prompt = ProactivePrompt::new(PromptKind::ExitIntent, EXIT_INTENT_MESSAGE);
        publisher.publish(prompt.clone()).await.unwrap();

        assert_eq!(receiver.recv().await, Some(prompt));
    }

    #[tokio::test]
    async fn dropped_receiver_is_delivery_failure() {
        let (publisher, receiver) = ChannelPromptPublisher::channel(1);
        drop(receiver);

        let err = publisher
            .publish(ProactivePrompt::new(PromptKind::ExitIntent, EXIT_INTENT_MESSAGE))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::PromptDeliveryFailed);
        assert_eq!(err.details.get("kind").map(String::as_str), Some("ExitIntent"));
    }
}
