//! Configuration for the productos module

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog query configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Price above which a product counts as expensive
    #[serde(default = "default_expensive_threshold")]
    pub expensive_threshold: Decimal,

    /// Upper price bound inlined into the literal SQL query
    #[serde(default = "default_raw_limit")]
    pub raw_limit: Decimal,

    /// Upper price bound bound as a parameter of the raw SQL query
    #[serde(default = "default_raw_param_limit")]
    pub raw_param_limit: Decimal,

    /// Multiplier applied by the annotated query
    #[serde(default = "default_tax_factor")]
    pub tax_factor: Decimal,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            expensive_threshold: default_expensive_threshold(),
            raw_limit: default_raw_limit(),
            raw_param_limit: default_raw_param_limit(),
            tax_factor: default_tax_factor(),
        }
    }
}

fn default_expensive_threshold() -> Decimal {
    Decimal::from(50)
}

fn default_raw_limit() -> Decimal {
    Decimal::from(100)
}

fn default_raw_param_limit() -> Decimal {
    Decimal::from(75)
}

fn default_tax_factor() -> Decimal {
    Decimal::new(121, 2) // 1.21
}
