//! PromptPublisher port - delivers proactive prompts to the widget.
//!
//! The rendering layer sits behind this boundary. It decides how a prompt
//! bubble looks; the concierge only decides what it says and when.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::proactive::ProactivePrompt;

/// Port for pushing proactive prompts to the presentation layer.
///
/// Implementations must return `ErrorCode::PromptDeliveryFailed` when the
/// receiving side has gone away.
#[async_trait]
pub trait PromptPublisher: Send + Sync {
    async fn publish(&self, prompt: ProactivePrompt) -> Result<(), DomainError>;
}
