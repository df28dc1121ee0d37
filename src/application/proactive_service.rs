//! ProactiveService - turns host events into published prompts.
//!
//! The host owns the timers and reports when they fire; the service applies
//! the gating policy and pushes any resulting prompt through the
//! `PromptPublisher` port.

use std::sync::Arc;
use tracing::{debug, info};

use crate::domain::conversation::WidgetState;
use crate::domain::proactive::{ProactivePolicy, ProactivePrompt, ProactiveSettings};
use crate::domain::storefront::StoreSnapshot;
use crate::ports::PromptPublisher;

use super::errors::SessionError;

/// Proactive prompts for one page view.
pub struct ProactiveService {
    policy: ProactivePolicy,
    publisher: Arc<dyn PromptPublisher>,
}

impl ProactiveService {
    pub fn new(settings: ProactiveSettings, publisher: Arc<dyn PromptPublisher>) -> Self {
        Self {
            policy: ProactivePolicy::new(settings),
            publisher,
        }
    }

    pub fn widget(&self) -> WidgetState {
        self.policy.widget()
    }

    pub fn visible_prompt(&self) -> Option<&ProactivePrompt> {
        self.policy.visible_prompt()
    }

    /// Welcome delay elapsed: show the launcher.
    pub fn on_welcome(&mut self) -> Result<(), SessionError> {
        self.policy.reveal_launcher()?;
        Ok(())
    }

    /// Contextual delay elapsed: publish the page prompt, if any.
    pub async fn on_page_settled(
        &mut self,
        snapshot: &StoreSnapshot,
    ) -> Result<Option<ProactivePrompt>, SessionError> {
        let prompt = self.policy.contextual(snapshot)?;
        self.publish(prompt).await
    }

    /// Pointer left through the top edge.
    pub async fn on_exit_intent(
        &mut self,
        viewport_width: u32,
    ) -> Result<Option<ProactivePrompt>, SessionError> {
        let prompt = self.policy.exit_intent(viewport_width)?;
        self.publish(prompt).await
    }

    /// Inactivity timer fired.
    pub async fn on_inactivity(&mut self) -> Result<Option<ProactivePrompt>, SessionError> {
        let prompt = self.policy.inactivity()?;
        self.publish(prompt).await
    }

    pub fn open_chat(&mut self) -> Result<(), SessionError> {
        self.policy.open_chat()?;
        info!("chat opened");
        Ok(())
    }

    pub fn close_chat(&mut self) -> Result<(), SessionError> {
        self.policy.close_chat()?;
        info!("chat closed");
        Ok(())
    }

    pub fn dismiss_prompt(&mut self) -> Result<(), SessionError> {
        self.policy.dismiss_prompt()?;
        Ok(())
    }

    async fn publish(
        &self,
        prompt: Option<ProactivePrompt>,
    ) -> Result<Option<ProactivePrompt>, SessionError> {
        let Some(prompt) = prompt else {
            debug!("no proactive prompt");
            return Ok(None);
        };
        self.publisher.publish(prompt.clone()).await?;
        info!(kind = ?prompt.kind, "proactive prompt published");
        Ok(Some(prompt))
    }
}

impl std::fmt::Debug for ProactiveService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProactiveService")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
