//! # Store Configuration
//!
//! Loaded once at startup and read-only afterwards.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FURNITURE_*`)
//! 2. Defaults (this file)

use serde::{Deserialize, Serialize};
use std::env;

use furniture_core::validation::validate_discount_percentage;

pub const DEFAULT_STORE_NAME: &str = "OOP Furniture Store";
pub const DEFAULT_CUSTOMER: &str = "Anonymous customer";

/// Store configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Shown in the inventory report header.
    pub store_name: String,

    /// Recorded on sales made without a customer name.
    pub default_customer: String,

    /// Highest discount percentage `apply_discount` accepts.
    pub max_discount_pct: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: DEFAULT_STORE_NAME.to_string(),
            default_customer: DEFAULT_CUSTOMER.to_string(),
            max_discount_pct: 100.0,
        }
    }
}

impl StoreConfig {
    /// Creates a StoreConfig from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FURNITURE_STORE_NAME`: Override store name
    /// - `FURNITURE_DEFAULT_CUSTOMER`: Override the walk-in customer name
    /// - `FURNITURE_MAX_DISCOUNT`: Discount ceiling in percent (e.g. "40")
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same rules as [`StoreConfig::from_env`], reading from `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(store_name) = non_blank(lookup("FURNITURE_STORE_NAME")) {
            config.store_name = store_name;
        }

        if let Some(customer) = non_blank(lookup("FURNITURE_DEFAULT_CUSTOMER")) {
            config.default_customer = customer;
        }

        if let Some(raw) = lookup("FURNITURE_MAX_DISCOUNT") {
            let pct: f64 = raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FURNITURE_MAX_DISCOUNT".to_string()))?;
            validate_discount_percentage(pct)
                .map_err(|_| ConfigError::OutOfRange("FURNITURE_MAX_DISCOUNT".to_string()))?;
            config.max_discount_pct = pct;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Value for {0} must be between 0 and 100")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = StoreConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.store_name, "OOP Furniture Store");
        assert_eq!(config.default_customer, "Anonymous customer");
    }

    #[test]
    fn test_overrides() {
        let config = StoreConfig::from_lookup(lookup_from(&[
            ("FURNITURE_STORE_NAME", "  Casa Nova "),
            ("FURNITURE_DEFAULT_CUSTOMER", "Walk-in"),
            ("FURNITURE_MAX_DISCOUNT", "40"),
        ]))
        .unwrap();
        assert_eq!(config.store_name, "Casa Nova");
        assert_eq!(config.default_customer, "Walk-in");
        assert_eq!(config.max_discount_pct, 40.0);
    }

    #[test]
    fn test_blank_values_keep_defaults() {
        let config =
            StoreConfig::from_lookup(lookup_from(&[("FURNITURE_STORE_NAME", "   ")])).unwrap();
        assert_eq!(config.store_name, DEFAULT_STORE_NAME);
    }

    #[test]
    fn test_invalid_max_discount() {
        let err = StoreConfig::from_lookup(lookup_from(&[("FURNITURE_MAX_DISCOUNT", "lots")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = StoreConfig::from_lookup(lookup_from(&[("FURNITURE_MAX_DISCOUNT", "150")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange(_)));
    }
}
