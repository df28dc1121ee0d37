//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CONCIERGE` prefix and nested values use double underscores as separators.
//! Every value has a default, so an empty environment loads.
//!
//! # Example
//!
//! ```no_run
//! use storefront_concierge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Thinking delay: {:?}", config.timing.thinking_delay());
//! ```

mod error;
mod features;
mod logging;
mod store;
mod timing;

pub use error::{ConfigError, ValidationError};
pub use features::{FeatureFlags, ProactiveConfig};
pub use logging::LoggingConfig;
pub use store::StoreConfig;
pub use timing::TimingConfig;

use serde::Deserialize;

use crate::domain::proactive::ProactiveSettings;
use crate::domain::responses::StorePolicy;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Store details quoted in replies (URLs, shipping, returns)
    #[serde(default)]
    pub store: StoreConfig,

    /// Reply and prompt delays
    #[serde(default)]
    pub timing: TimingConfig,

    /// Proactive prompt thresholds
    #[serde(default)]
    pub proactive: ProactiveConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,

    /// Tracing subscriber settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CONCIERGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CONCIERGE__STORE__FREE_SHIPPING_THRESHOLD=250` -> `store.free_shipping_threshold = 250`
    /// - `CONCIERGE__TIMING__THINKING_DELAY_MS=0` -> `timing.thinking_delay_ms = 0`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CONCIERGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.store.validate()?;
        self.timing.validate()?;
        self.proactive.validate()?;
        Ok(())
    }

    /// Store policy for the response engine.
    pub fn store_policy(&self) -> Result<StorePolicy, ValidationError> {
        self.store.policy(self.features.product_images)
    }

    /// Gating settings for proactive prompts.
    pub fn proactive_settings(&self) -> ProactiveSettings {
        self.proactive.settings(&self.features)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: &[&str] = &[
        "CONCIERGE__STORE__FREE_SHIPPING_THRESHOLD",
        "CONCIERGE__STORE__TRACKING_BASE_URL",
        "CONCIERGE__TIMING__THINKING_DELAY_MS",
        "CONCIERGE__FEATURES__EXIT_INTENT",
        "CONCIERGE__PROACTIVE__EXIT_INTENT_MIN_VIEWPORT_WIDTH",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.store.free_shipping_threshold, Decimal::from(50));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONCIERGE__STORE__FREE_SHIPPING_THRESHOLD", "250");
        env::set_var("CONCIERGE__TIMING__THINKING_DELAY_MS", "0");
        env::set_var("CONCIERGE__FEATURES__EXIT_INTENT", "false");
        env::set_var("CONCIERGE__PROACTIVE__EXIT_INTENT_MIN_VIEWPORT_WIDTH", "1024");
        let result = AppConfig::load();
        clear_env();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.store.free_shipping_threshold, Decimal::from(250));
        assert_eq!(config.timing.thinking_delay_ms, 0);
        assert!(!config.features.exit_intent);
        assert!(!config.proactive_settings().exit_intent);
        assert_eq!(config.proactive_settings().exit_intent_min_viewport_width, 1024);
    }

    #[test]
    fn test_validate_rejects_bad_url_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CONCIERGE__STORE__TRACKING_BASE_URL", "not-a-url");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidUrl("store.tracking_base_url"))
        );
    }

    #[test]
    fn test_store_policy_uses_feature_flags() {
        let mut config = AppConfig::default();
        config.features.product_images = false;
        let policy = config.store_policy().unwrap();
        assert!(!policy.product_images);
    }
}
