//! # Pricing Rules
//!
//! Per-SKU discount logic. Every rule maps a running [`LineState`] to a new
//! one, so a SKU's rules compose as a pipeline.
//!
//! ## Rule Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  apply(original_quantity, LineState { quantity, unit_price })           │
//! │        ──► LineState { quantity', unit_price' }                         │
//! │                                                                         │
//! │  original_quantity  units actually scanned; constant across the fold    │
//! │  quantity           running count, possibly already reduced             │
//! │                                                                         │
//! │  BuyXPayY      reshapes quantity   (3 scanned, pay for 2)               │
//! │  BulkDiscount  reshapes unit price (≥ 4 scanned, 499.99 each)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bulk thresholds are judged on `original_quantity`, so a 3-for-2 applied
//! earlier in the fold can never push a customer below a bulk tier.
//!
//! Construction validates parameters; `apply` is total and never fails.

use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::LineState;

// =============================================================================
// Rule Kind
// =============================================================================

/// Discriminant of a [`PricingRule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// Quantity-shaping: pay for `pay_y` of every `buy_x` units.
    BuyXPayY,
    /// Price-shaping: flat unit price once a threshold is reached.
    BulkDiscount,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleKind::BuyXPayY => write!(f, "buy_x_pay_y"),
            RuleKind::BulkDiscount => write!(f, "bulk_discount"),
        }
    }
}

fn require_sku(sku: &str) -> CoreResult<()> {
    if sku.is_empty() {
        return Err(CoreError::invalid_rule(sku, "sku cannot be empty"));
    }
    Ok(())
}

// =============================================================================
// Bulk Discount
// =============================================================================

/// Every unit of `sku` costs `discounted_price` once at least `threshold`
/// units are scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkDiscountRule {
    sku: String,
    threshold: i64,
    discounted_price: Money,
}

impl BulkDiscountRule {
    /// ## Errors
    /// `CoreError::InvalidRule` if `threshold <= 0`, `discounted_price < 0`
    /// or `sku` is empty.
    pub fn new(
        sku: impl Into<String>,
        threshold: i64,
        discounted_price: Money,
    ) -> CoreResult<Self> {
        let sku = sku.into();
        require_sku(&sku)?;

        if threshold <= 0 {
            return Err(CoreError::invalid_rule(
                &sku,
                format!("threshold must be positive, got {}", threshold),
            ));
        }

        if discounted_price.is_negative() {
            return Err(CoreError::invalid_rule(
                &sku,
                format!("discounted price cannot be negative, got {}", discounted_price),
            ));
        }

        Ok(BulkDiscountRule {
            sku,
            threshold,
            discounted_price,
        })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn threshold(&self) -> i64 {
        self.threshold
    }

    pub fn discounted_price(&self) -> Money {
        self.discounted_price
    }

    /// True when `original_quantity` reaches the threshold.
    #[inline]
    pub fn qualifies(&self, original_quantity: i64) -> bool {
        original_quantity >= self.threshold
    }

    /// Replaces the unit price when the scanned quantity qualifies.
    pub fn apply(&self, original_quantity: i64, state: LineState) -> LineState {
        if self.qualifies(original_quantity) {
            LineState::new(state.quantity, self.discounted_price)
        } else {
            state
        }
    }
}

// =============================================================================
// Buy X Pay Y
// =============================================================================

/// For every complete group of `buy_x` units only `pay_y` are charged;
/// leftover units are charged in full.
///
/// ## Example: 3-for-2 on 5 units
/// ```text
/// sets = 5 / 3 = 1, remainder = 5 % 3 = 2
/// charged = 1 × 2 + 2 = 4
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuyXPayYRule {
    sku: String,
    buy_x: i64,
    pay_y: i64,
}

impl BuyXPayYRule {
    /// ## Errors
    /// `CoreError::InvalidRule` if `buy_x <= 0`, `pay_y` is outside
    /// `0..=buy_x` or `sku` is empty.
    pub fn new(sku: impl Into<String>, buy_x: i64, pay_y: i64) -> CoreResult<Self> {
        let sku = sku.into();
        require_sku(&sku)?;

        if buy_x <= 0 {
            return Err(CoreError::invalid_rule(
                &sku,
                format!("buy_x must be positive, got {}", buy_x),
            ));
        }

        if !(0..=buy_x).contains(&pay_y) {
            return Err(CoreError::invalid_rule(
                &sku,
                format!("pay_y must be between 0 and {}, got {}", buy_x, pay_y),
            ));
        }

        Ok(BuyXPayYRule { sku, buy_x, pay_y })
    }

    pub fn sku(&self) -> &str {
        &self.sku
    }

    pub fn buy_x(&self) -> i64 {
        self.buy_x
    }

    pub fn pay_y(&self) -> i64 {
        self.pay_y
    }

    /// Reduces the running quantity; the unit price passes through.
    pub fn apply(&self, _original_quantity: i64, state: LineState) -> LineState {
        let sets = state.quantity / self.buy_x;
        let remainder = state.quantity % self.buy_x;
        LineState::new(sets * self.pay_y + remainder, state.unit_price)
    }
}

// =============================================================================
// Pricing Rule
// =============================================================================

/// A pricing rule for a single SKU.
///
/// Closed set of variants; dispatch is a `match`, never type probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PricingRule {
    BuyXPayY(BuyXPayYRule),
    BulkDiscount(BulkDiscountRule),
}

impl PricingRule {
    /// Shorthand for `BulkDiscountRule::new(..).map(Into::into)`.
    pub fn bulk_discount(
        sku: impl Into<String>,
        threshold: i64,
        discounted_price: Money,
    ) -> CoreResult<Self> {
        BulkDiscountRule::new(sku, threshold, discounted_price).map(Into::into)
    }

    /// Shorthand for `BuyXPayYRule::new(..).map(Into::into)`.
    pub fn buy_x_pay_y(sku: impl Into<String>, buy_x: i64, pay_y: i64) -> CoreResult<Self> {
        BuyXPayYRule::new(sku, buy_x, pay_y).map(Into::into)
    }

    pub fn sku(&self) -> &str {
        match self {
            PricingRule::BuyXPayY(rule) => rule.sku(),
            PricingRule::BulkDiscount(rule) => rule.sku(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        match self {
            PricingRule::BuyXPayY(_) => RuleKind::BuyXPayY,
            PricingRule::BulkDiscount(_) => RuleKind::BulkDiscount,
        }
    }

    pub fn apply(&self, original_quantity: i64, state: LineState) -> LineState {
        match self {
            PricingRule::BuyXPayY(rule) => rule.apply(original_quantity, state),
            PricingRule::BulkDiscount(rule) => rule.apply(original_quantity, state),
        }
    }
}

impl From<BulkDiscountRule> for PricingRule {
    fn from(rule: BulkDiscountRule) -> Self {
        PricingRule::BulkDiscount(rule)
    }
}

impl From<BuyXPayYRule> for PricingRule {
    fn from(rule: BuyXPayYRule) -> Self {
        PricingRule::BuyXPayY(rule)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
