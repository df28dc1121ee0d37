//! When proactive prompts may be shown.
//!
//! Owns the widget state so the gating rules live in one place: nothing is
//! shown over an open chat, exit intent fires once per session, and the
//! inactivity nudge never stacks on a visible bubble.

use tracing::debug;

use crate::domain::conversation::WidgetState;
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::storefront::StoreSnapshot;

use super::prompts::{
    contextual_prompt, ProactivePrompt, PromptKind, EXIT_INTENT_MESSAGE, INACTIVITY_MESSAGE,
};

/// Feature switches and thresholds for proactive prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProactiveSettings {
    pub contextual_prompts: bool,
    pub exit_intent: bool,
    pub inactivity_prompt: bool,
    /// Exit intent is desktop-only: the viewport must be wider than this.
    pub exit_intent_min_viewport_width: u32,
}

impl Default for ProactiveSettings {
    fn default() -> Self {
        Self {
            contextual_prompts: true,
            exit_intent: true,
            inactivity_prompt: true,
            exit_intent_min_viewport_width: 768,
        }
    }
}

/// Per-page-view proactive state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProactivePolicy {
    settings: ProactiveSettings,
    widget: WidgetState,
    visible_prompt: Option<ProactivePrompt>,
    exit_intent_shown: bool,
}

impl ProactivePolicy {
    pub fn new(settings: ProactiveSettings) -> Self {
        Self {
            settings,
            widget: WidgetState::Hidden,
            visible_prompt: None,
            exit_intent_shown: false,
        }
    }

    pub fn widget(&self) -> WidgetState {
        self.widget
    }

    pub fn visible_prompt(&self) -> Option<&ProactivePrompt> {
        self.visible_prompt.as_ref()
    }

    /// Reveals the launcher after the welcome delay.
    pub fn reveal_launcher(&mut self) -> Result<(), ValidationError> {
        if self.widget == WidgetState::Hidden {
            self.widget = self.widget.transition_to(WidgetState::Launcher)?;
        }
        Ok(())
    }

    /// Page-specific prompt, raised once the contextual delay has passed.
    ///
    /// Pages without a prompt just reveal the launcher.
    pub fn contextual(
        &mut self,
        snapshot: &StoreSnapshot,
    ) -> Result<Option<ProactivePrompt>, ValidationError> {
        if self.widget.is_open() || !self.settings.contextual_prompts {
            return Ok(None);
        }
        match contextual_prompt(snapshot) {
            Some(prompt) => self.show(prompt).map(Some),
            None => {
                self.reveal_launcher()?;
                Ok(None)
            }
        }
    }

    /// Pointer left through the top edge of the page.
    pub fn exit_intent(
        &mut self,
        viewport_width: u32,
    ) -> Result<Option<ProactivePrompt>, ValidationError> {
        if !self.settings.exit_intent
            || self.exit_intent_shown
            || self.widget.is_open()
            || viewport_width <= self.settings.exit_intent_min_viewport_width
        {
            return Ok(None);
        }
        let prompt = self.show(ProactivePrompt::new(PromptKind::ExitIntent, EXIT_INTENT_MESSAGE))?;
        self.exit_intent_shown = true;
        Ok(Some(prompt))
    }

    /// The inactivity timer expired.
    pub fn inactivity(&mut self) -> Result<Option<ProactivePrompt>, ValidationError> {
        if !self.settings.inactivity_prompt
            || self.widget.is_open()
            || self.widget.has_visible_prompt()
        {
            return Ok(None);
        }
        self.show(ProactivePrompt::new(PromptKind::Inactivity, INACTIVITY_MESSAGE))
            .map(Some)
    }

    /// Launcher or bubble clicked. Any visible prompt is dismissed.
    pub fn open_chat(&mut self) -> Result<(), ValidationError> {
        if self.widget.is_open() {
            return Ok(());
        }
        self.reveal_launcher()?;
        self.widget = self.widget.transition_to(WidgetState::Open)?;
        self.visible_prompt = None;
        debug!("chat opened");
        Ok(())
    }

    pub fn close_chat(&mut self) -> Result<(), ValidationError> {
        self.widget = self.widget.transition_to(WidgetState::Launcher)?;
        debug!("chat closed");
        Ok(())
    }

    /// Bubble closed without opening the chat.
    pub fn dismiss_prompt(&mut self) -> Result<(), ValidationError> {
        if self.widget.has_visible_prompt() {
            self.widget = self.widget.transition_to(WidgetState::Launcher)?;
            self.visible_prompt = None;
        }
        Ok(())
    }

    fn show(&mut self, prompt: ProactivePrompt) -> Result<ProactivePrompt, ValidationError> {
        if !self.widget.has_visible_prompt() {
            self.widget = self.widget.transition_to(WidgetState::PromptShown)?;
        }
        debug!(kind = ?prompt.kind, "proactive prompt shown");
        self.visible_prompt = Some(prompt.clone());
        Ok(prompt)
    }
}
