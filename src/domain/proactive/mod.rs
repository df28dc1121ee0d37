//! Proactive prompts.
//!
//! Pure selection and gating. Timers and rendering belong to the host; it
//! reports events (welcome delay elapsed, pointer left the page, idle
//! timeout) and receives prompts through the `PromptPublisher` port.

mod policy;
mod prompts;

pub use policy::{ProactivePolicy, ProactiveSettings};
pub use prompts::{
    contextual_prompt, ProactivePrompt, PromptKind, EXIT_INTENT_MESSAGE, INACTIVITY_MESSAGE,
};
