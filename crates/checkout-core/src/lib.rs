//! # checkout-core: Pricing Engine
//!
//! Computes the total price of a shopping cart from a product catalog and a
//! set of per-SKU pricing rules. Pure logic, zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              checkout-cli (config file, logging, output)        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ checkout-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │  catalog  │  │   cart    │  │   rules   │  │ rule_index │  │   │
//! │  │   │  Product  │  │ SKU → qty │  │ BuyXPayY  │  │  canonical │  │   │
//! │  │   │  lookup   │  │  snapshot │  │ Bulk      │  │  order+fold│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │   │
//! │  │                         ▲                                       │   │
//! │  │                    checkout: scan / total / receipt             │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents
//! - [`types`] - Product, LineState, Receipt
//! - [`error`] - Domain error types
//! - [`validation`] - Product field validation
//! - [`catalog`] - SKU → Product lookup table
//! - [`cart`] - SKU → scanned quantity
//! - [`rules`] - BuyXPayY and BulkDiscount pricing rules
//! - [`rule_index`] - Per-SKU canonical rule order and the pricing fold
//! - [`checkout`] - The checkout session
//!
//! ## Example Usage
//!
//! ```rust
//! use checkout_core::{Checkout, Money, PricingRule};
//!
//! let rules = vec![
//!     PricingRule::buy_x_pay_y("atv", 3, 2).unwrap(),
//!     PricingRule::bulk_discount("ipd", 4, Money::from_cents(49999)).unwrap(),
//! ];
//! let mut checkout = Checkout::with_default_catalog(rules);
//!
//! for sku in ["atv", "atv", "atv", "vga"] {
//!     checkout.scan(sku).unwrap();
//! }
//!
//! assert_eq!(checkout.total(), Money::from_cents(24900)); // $249.00
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod money;
pub mod rule_index;
pub mod rules;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::Cart;
pub use catalog::{Catalog, DEFAULT_PRODUCTS};
pub use checkout::Checkout;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use rule_index::{RuleIndex, SkuRules};
pub use rules::{BulkDiscountRule, BuyXPayYRule, PricingRule, RuleKind};
pub use types::*;
