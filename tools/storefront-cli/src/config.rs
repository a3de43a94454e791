//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_core::cart::TaxRate;
use storefront_core::search::SelectionMode;
use storefront_core::search::DEFAULT_PRICE_CEILING;
use storefront_core::Money;

/// Names searched for, in order, in each directory up from the cwd.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Catalog accessor settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Listing filter defaults.
    #[serde(default)]
    pub filters: FiltersConfig,

    /// Cart summary settings.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Catalog accessor settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Artificial latency per catalog call, in milliseconds.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,

    /// Fail every catalog call.
    #[serde(default)]
    pub simulate_failure: bool,
}

fn default_latency_ms() -> u64 {
    storefront_core::catalog::DEFAULT_LATENCY.as_millis() as u64
}

impl CatalogConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
            simulate_failure: false,
        }
    }
}

/// Listing filter defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiltersConfig {
    /// Default price ceiling in major units.
    #[serde(default = "default_price_ceiling")]
    pub price_ceiling: f64,

    /// Category toggling in the shop session.
    #[serde(default)]
    pub category_mode: SelectionMode,
}

fn default_price_ceiling() -> f64 {
    DEFAULT_PRICE_CEILING.to_dollars()
}

impl Default for FiltersConfig {
    fn default() -> Self {
        Self {
            price_ceiling: default_price_ceiling(),
            category_mode: SelectionMode::default(),
        }
    }
}

/// Cart summary settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutConfig {
    /// Sales tax percentage.
    #[serde(default = "default_tax_rate_percent")]
    pub tax_rate_percent: f64,
}

fn default_tax_rate_percent() -> f64 {
    TaxRate::DEFAULT.percent()
}

impl CheckoutConfig {
    pub fn tax_rate(&self) -> TaxRate {
        TaxRate::from_percent(self.tax_rate_percent)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            tax_rate_percent: default_tax_rate_percent(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log line format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FiltersConfig {
    /// The configured ceiling as money.
    pub fn price_ceiling(&self) -> Money {
        Money::from_dollars(self.price_ceiling).non_negative()
    }
}

/// Generate a default storefront.toml.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront configuration

[catalog]
# Artificial delay for every catalog call
latency_ms = {latency}
# Make every catalog call fail (exercises the error views)
simulate_failure = false

[filters]
price_ceiling = {ceiling:.1}
# "single" (radio) or "multi" (checkbox) category selection
category_mode = "single"

[checkout]
tax_rate_percent = {tax:.1}

[logging]
# Used when RUST_LOG is unset
level = "info"
# "pretty" or "json"
format = "pretty"
"#,
        latency = default_latency_ms(),
        ceiling = default_price_ceiling(),
        tax = default_tax_rate_percent(),
    )
}
