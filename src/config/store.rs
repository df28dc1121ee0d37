//! Store configuration

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::foundation::Money;
use crate::domain::responses::{DeliveryWindow, StorePolicy};

use super::error::ValidationError;

/// Store details quoted in replies
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Store name used in goodbyes
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Order tracking page (order number is appended as a query string)
    #[serde(default = "default_tracking_base_url")]
    pub tracking_base_url: String,

    /// Customer account page
    #[serde(default = "default_account_url")]
    pub account_url: String,

    /// Order total above which shipping is free
    #[serde(default = "default_free_shipping_threshold")]
    pub free_shipping_threshold: Decimal,

    #[serde(default = "default_standard_min_days")]
    pub standard_shipping_min_days: u8,

    #[serde(default = "default_standard_max_days")]
    pub standard_shipping_max_days: u8,

    #[serde(default = "default_express_min_days")]
    pub express_shipping_min_days: u8,

    #[serde(default = "default_express_max_days")]
    pub express_shipping_max_days: u8,

    #[serde(default = "default_return_window_days")]
    pub return_window_days: u16,
}

impl StoreConfig {
    /// Validate store configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.store_name.trim().is_empty() {
            return Err(ValidationError::MissingRequired("store.store_name"));
        }
        if !is_http_url(&self.tracking_base_url) {
            return Err(ValidationError::InvalidUrl("store.tracking_base_url"));
        }
        if !is_http_url(&self.account_url) {
            return Err(ValidationError::InvalidUrl("store.account_url"));
        }
        if self.free_shipping_threshold.is_sign_negative() {
            return Err(ValidationError::NegativeThreshold);
        }
        check_window(
            "standard",
            self.standard_shipping_min_days,
            self.standard_shipping_max_days,
        )?;
        check_window(
            "express",
            self.express_shipping_min_days,
            self.express_shipping_max_days,
        )?;
        if self.return_window_days == 0 || self.return_window_days > 365 {
            return Err(ValidationError::InvalidReturnWindow);
        }
        Ok(())
    }

    /// Builds the policy handed to the response engine.
    pub fn policy(&self, product_images: bool) -> Result<StorePolicy, ValidationError> {
        let free_shipping_threshold =
            Money::try_new("store.free_shipping_threshold", self.free_shipping_threshold)
                .map_err(|_| ValidationError::NegativeThreshold)?;
        Ok(StorePolicy {
            store_name: self.store_name.clone(),
            tracking_base_url: self.tracking_base_url.clone(),
            account_url: self.account_url.clone(),
            free_shipping_threshold,
            standard_shipping: DeliveryWindow::new(
                self.standard_shipping_min_days,
                self.standard_shipping_max_days,
            ),
            express_shipping: DeliveryWindow::new(
                self.express_shipping_min_days,
                self.express_shipping_max_days,
            ),
            return_window_days: self.return_window_days,
            product_images,
        })
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            tracking_base_url: default_tracking_base_url(),
            account_url: default_account_url(),
            free_shipping_threshold: default_free_shipping_threshold(),
            standard_shipping_min_days: default_standard_min_days(),
            standard_shipping_max_days: default_standard_max_days(),
            express_shipping_min_days: default_express_min_days(),
            express_shipping_max_days: default_express_max_days(),
            return_window_days: default_return_window_days(),
        }
    }
}

fn is_http_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

fn check_window(name: &'static str, min: u8, max: u8) -> Result<(), ValidationError> {
    if min == 0 || min > max {
        return Err(ValidationError::InvalidShippingWindow(name));
    }
    Ok(())
}

fn default_store_name() -> String {
    "Lifestyle Travel Trading".to_string()
}

fn default_tracking_base_url() -> String {
    "https://lifestyletraveltrading.com.au/apps/parcelpanel".to_string()
}

fn default_account_url() -> String {
    "https://lifestyletraveltrading.com.au/account".to_string()
}

fn default_free_shipping_threshold() -> Decimal {
    Decimal::from(50)
}

fn default_standard_min_days() -> u8 {
    3
}

fn default_standard_max_days() -> u8 {
    5
}

fn default_express_min_days() -> u8 {
    1
}

fn default_express_max_days() -> u8 {
    2
}

fn default_return_window_days() -> u16 {
    30
}
