//! # Pricing Configuration
//!
//! Where the catalog and the pricing rules come from.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     CHECKOUT_DEFAULT_CATALOG=false                                     │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH> or CHECKOUT_CONFIG=<PATH>                          │
//! │     otherwise ~/.config/checkout/pricing.toml (Linux)                  │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     default product list, no rules                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [catalog]
//! use_default = true
//!
//! [[catalog.products]]
//! sku = "kbd"
//! name = "Keyboard"
//! price_cents = 4999
//!
//! [[rules]]
//! kind = "buy_x_pay_y"
//! sku = "atv"
//! buy_x = 3
//! pay_y = 2
//!
//! [[rules]]
//! kind = "bulk_discount"
//! sku = "ipd"
//! threshold = 4
//! discounted_price_cents = 49999
//! ```

use std::path::{Path, PathBuf};

use checkout_core::{Catalog, CoreResult, Money, PricingRule};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CliError, CliResult};

// =============================================================================
// Catalog Settings
// =============================================================================

/// A product entry in the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub sku: String,
    pub name: String,
    pub price_cents: i64,
}

/// Catalog section of the config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Start from the built-in product list.
    #[serde(default = "default_true")]
    pub use_default: bool,

    /// Products added on top of (or instead of) the defaults.
    #[serde(default)]
    pub products: Vec<ProductConfig>,
}

fn default_true() -> bool {
    true
}

impl Default for CatalogSettings {
    fn default() -> Self {
        CatalogSettings {
            use_default: default_true(),
            products: Vec::new(),
        }
    }
}

// =============================================================================
// Rule Settings
// =============================================================================

/// A pricing rule entry in the config file, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RuleConfig {
    BuyXPayY {
        sku: String,
        buy_x: i64,
        pay_y: i64,
    },
    BulkDiscount {
        sku: String,
        threshold: i64,
        discounted_price_cents: i64,
    },
}

impl RuleConfig {
    /// Builds the validated engine rule.
    pub fn to_rule(&self) -> CoreResult<PricingRule> {
        match self {
            RuleConfig::BuyXPayY { sku, buy_x, pay_y } => {
                PricingRule::buy_x_pay_y(sku.as_str(), *buy_x, *pay_y)
            }
            RuleConfig::BulkDiscount {
                sku,
                threshold,
                discounted_price_cents,
            } => PricingRule::bulk_discount(
                sku.as_str(),
                *threshold,
                Money::from_cents(*discounted_price_cents),
            ),
        }
    }
}

// =============================================================================
// Pricing Configuration
// =============================================================================

/// Complete pricing configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricingConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

impl PricingConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file: `explicit_path`, else the platform default path
    /// 3. Environment variables
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means defaults.
    pub fn load(explicit_path: Option<&Path>) -> CliResult<Self> {
        let mut config = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path.to_path_buf()));
                }
                Self::from_file(path)?
            }
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Reads and parses one TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        info!(?path, "Loading pricing config from file");
        let contents = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Builds the catalog and the rule list.
    ///
    /// ## Errors
    /// Surfaces `Validation`, `DuplicateSku` and `InvalidRule` from the
    /// engine, so a bad config fails before anything is scanned.
    pub fn build(&self) -> CliResult<(Catalog, Vec<PricingRule>)> {
        let mut catalog = if self.catalog.use_default {
            Catalog::with_default_products()
        } else {
            Catalog::new()
        };

        for product in &self.catalog.products {
            catalog.add(&product.sku, &product.name, Money::from_cents(product.price_cents))?;
        }

        let rules = self
            .rules
            .iter()
            .map(RuleConfig::to_rule)
            .collect::<CoreResult<Vec<_>>>()?;

        info!(
            products = catalog.len(),
            rules = rules.len(),
            "Pricing configuration built"
        );
        Ok((catalog, rules))
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(value) = std::env::var("CHECKOUT_DEFAULT_CATALOG") {
            match parse_flag(&value) {
                Some(flag) => {
                    debug!(use_default = flag, "Overriding default catalog from environment");
                    self.catalog.use_default = flag;
                }
                None => warn!(value = %value, "Unknown CHECKOUT_DEFAULT_CATALOG value"),
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "checkout", "checkout")
            .map(|dirs| dirs.config_dir().join("pricing.toml"))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
