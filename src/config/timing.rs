//! Timing configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const MAX_DELAY_MS: u64 = 60_000;

/// Delays for the reply and for proactive prompts
#[derive(Debug, Clone, Deserialize)]
pub struct TimingConfig {
    /// Pause before each bot reply
    #[serde(default = "default_thinking_delay_ms")]
    pub thinking_delay_ms: u64,

    /// Delay before the launcher appears
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,

    /// Delay after the launcher before the page prompt
    #[serde(default = "default_contextual_prompt_delay_ms")]
    pub contextual_prompt_delay_ms: u64,

    /// Idle time before the inactivity prompt
    #[serde(default = "default_inactivity_timeout_secs")]
    pub inactivity_timeout_secs: u64,
}

impl TimingConfig {
    pub fn thinking_delay(&self) -> Duration {
        Duration::from_millis(self.thinking_delay_ms)
    }

    pub fn welcome_delay(&self) -> Duration {
        Duration::from_millis(self.welcome_delay_ms)
    }

    pub fn contextual_prompt_delay(&self) -> Duration {
        Duration::from_millis(self.contextual_prompt_delay_ms)
    }

    pub fn inactivity_timeout(&self) -> Duration {
        Duration::from_secs(self.inactivity_timeout_secs)
    }

    /// Validate timing configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        for (name, value) in [
            ("timing.thinking_delay_ms", self.thinking_delay_ms),
            ("timing.welcome_delay_ms", self.welcome_delay_ms),
            ("timing.contextual_prompt_delay_ms", self.contextual_prompt_delay_ms),
        ] {
            if value > MAX_DELAY_MS {
                return Err(ValidationError::DelayTooLong(name, MAX_DELAY_MS));
            }
        }
        if self.inactivity_timeout_secs == 0 {
            return Err(ValidationError::InvalidInactivityTimeout);
        }
        Ok(())
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            thinking_delay_ms: default_thinking_delay_ms(),
            welcome_delay_ms: default_welcome_delay_ms(),
            contextual_prompt_delay_ms: default_contextual_prompt_delay_ms(),
            inactivity_timeout_secs: default_inactivity_timeout_secs(),
        }
    }
}

fn default_thinking_delay_ms() -> u64 {
    1000
}

fn default_welcome_delay_ms() -> u64 {
    1000
}

fn default_contextual_prompt_delay_ms() -> u64 {
    5000
}

fn default_inactivity_timeout_secs() -> u64 {
    60
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timing_defaults() {
        let config = TimingConfig::default();
        assert_eq!(config.thinking_delay(), Duration::from_secs(1));
        assert_eq!(config.contextual_prompt_delay(), Duration::from_secs(5));
        assert_eq!(config.inactivity_timeout(), Duration::from_secs(60));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_thinking_delay_is_allowed() {
        let config = TimingConfig {
            thinking_delay_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_long_delay() {
        let config = TimingConfig {
            welcome_delay_ms: 120_000,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::DelayTooLong("timing.welcome_delay_ms", MAX_DELAY_MS))
        );
    }

    #[test]
    fn test_validation_rejects_zero_inactivity_timeout() {
        let config = TimingConfig {
            inactivity_timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
