//! Segmentation thresholds.

use crate::errors::ConfigError;

pub const CUSTOMER_MIN_ORDER_COUNT: &str = "CUSTOMER_MIN_ORDER_COUNT";
pub const LUX_MIN_PURCHASE_AMOUNT: &str = "LUX_MIN_PURCHASE_AMOUNT";

/// Thresholds the segmentation predicates compare against.
///
/// Resolved once at startup, either from [`Default`] or from the environment
/// via [`SegmentationConfig::from_env`], and handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentationConfig {
    /// Users with strictly more orders than this are customers.
    pub customer_min_order_count: u32,
    /// Users who paid strictly more than this in total are lux users.
    pub lux_min_purchase_amount: u64,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            customer_min_order_count: 1,
            lux_min_purchase_amount: 30_000_000,
        }
    }
}

impl SegmentationConfig {
    /// Reads `CUSTOMER_MIN_ORDER_COUNT` and `LUX_MIN_PURCHASE_AMOUNT`,
    /// falling back to the defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CUSTOMER_MIN_ORDER_COUNT) {
            config.customer_min_order_count = parse_var(CUSTOMER_MIN_ORDER_COUNT, &value)?;
        }
        if let Some(value) = lookup(LUX_MIN_PURCHASE_AMOUNT) {
            config.lux_min_purchase_amount = parse_var(LUX_MIN_PURCHASE_AMOUNT, &value)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_customer_min_order_count(mut self, count: u32) -> Self {
        self.customer_min_order_count = count;
        self
    }

    pub fn with_lux_min_purchase_amount(mut self, amount: u64) -> Self {
        self.lux_min_purchase_amount = amount;
        self
    }

    /// Both thresholds must be positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.customer_min_order_count == 0 {
            return Err(ConfigError::NonPositive {
                name: CUSTOMER_MIN_ORDER_COUNT,
            });
        }
        if self.lux_min_purchase_amount == 0 {
            return Err(ConfigError::NonPositive {
                name: LUX_MIN_PURCHASE_AMOUNT,
            });
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(name: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        name,
        value: value.to_string(),
    })
}
