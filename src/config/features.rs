//! Feature flags and proactive prompt configuration

use serde::Deserialize;

use crate::domain::proactive::ProactiveSettings;

use super::error::ValidationError;

/// Feature flags for enabling/disabling widget behavior
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Render products with images as image cards
    #[serde(default = "enabled")]
    pub product_images: bool,

    /// Show the page-specific prompt after load
    #[serde(default = "enabled")]
    pub contextual_prompts: bool,

    /// Prompt when the pointer leaves through the top of the page
    #[serde(default = "enabled")]
    pub exit_intent: bool,

    /// Prompt after a period of inactivity
    #[serde(default = "enabled")]
    pub inactivity_prompt: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            product_images: true,
            contextual_prompts: true,
            exit_intent: true,
            inactivity_prompt: true,
        }
    }
}

fn enabled() -> bool {
    true
}

/// Proactive prompt thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct ProactiveConfig {
    /// Exit intent only fires on viewports wider than this (desktop)
    #[serde(default = "default_exit_intent_min_viewport_width")]
    pub exit_intent_min_viewport_width: u32,
}

impl ProactiveConfig {
    /// Validate proactive configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.exit_intent_min_viewport_width == 0 {
            return Err(ValidationError::InvalidViewportWidth);
        }
        Ok(())
    }

    /// Combines thresholds with the feature switches.
    pub fn settings(&self, features: &FeatureFlags) -> ProactiveSettings {
        ProactiveSettings {
            contextual_prompts: features.contextual_prompts,
            exit_intent: features.exit_intent,
            inactivity_prompt: features.inactivity_prompt,
            exit_intent_min_viewport_width: self.exit_intent_min_viewport_width,
        }
    }
}

impl Default for ProactiveConfig {
    fn default() -> Self {
        Self {
            exit_intent_min_viewport_width: default_exit_intent_min_viewport_width(),
        }
    }
}

fn default_exit_intent_min_viewport_width() -> u32 {
    768
}
