//! Widget visibility state machine.
//!
//! Tracks what the shopper currently sees so proactive prompts are never
//! shown over an open chat and opening the chat dismisses any prompt.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::StateMachine;

/// What the widget is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WidgetState {
    /// Page just loaded, nothing rendered yet.
    #[default]
    Hidden,
    /// Launcher button visible, chat closed.
    Launcher,
    /// Launcher plus a proactive speech bubble.
    PromptShown,
    /// Chat panel open.
    Open,
}

impl WidgetState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn has_visible_prompt(&self) -> bool {
        matches!(self, Self::PromptShown)
    }
}

impl StateMachine for WidgetState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use WidgetState::*;
        matches!(
            (self, target),
            // Welcome reveals the launcher
            (Hidden, Launcher) |
            // A contextual prompt can appear straight from load
            (Hidden, PromptShown) |
            (Launcher, PromptShown) |
            // Bubble closed without opening chat
            (PromptShown, Launcher) |
            // Launcher or bubble clicked
            (Launcher, Open) |
            (PromptShown, Open) |
            (Open, Launcher)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use WidgetState::*;
        match self {
            Hidden => vec![Launcher, PromptShown],
            Launcher => vec![PromptShown, Open],
            PromptShown => vec![Launcher, Open],
            Open => vec![Launcher],
        }
    }
}
