//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("{0} must be an http(s) URL")]
    InvalidUrl(&'static str),

    #[error("Free shipping threshold cannot be negative")]
    NegativeThreshold,

    #[error("Invalid {0} shipping window: min days must be at least 1 and not exceed max days")]
    InvalidShippingWindow(&'static str),

    #[error("Return window must be between 1 and 365 days")]
    InvalidReturnWindow,

    #[error("{0} exceeds maximum of {1} ms")]
    DelayTooLong(&'static str, u64),

    #[error("Inactivity timeout must be at least 1 second")]
    InvalidInactivityTimeout,

    #[error("Exit intent viewport width must be positive")]
    InvalidViewportWidth,
}
