//! # Rule Index
//!
//! Groups the flat rule list by SKU and fixes the order in which each SKU's
//! rules are folded.
//!
//! ## Canonical Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  input: [Bulk(atv,5), BuyXPayY(atv,3,2), Bulk(ipd,4), BuyXPayY(atv,2,1)]│
//! │                                                                         │
//! │  atv ─► quantity phase: BuyXPayY(2,1), BuyXPayY(3,2)   best deal first  │
//! │         price phase:    Bulk(5)                                         │
//! │  ipd ─► quantity phase: (none)                                          │
//! │         price phase:    Bulk(4)                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rules are bucketed by kind (a stable partition, not a comparator over all
//! rules): quantity-shaping rules always run before price-shaping rules.
//!
//! ## Policies for Several Rules of One Kind
//! - **BuyXPayY**: applied in sequence, each consuming the running quantity
//!   left by the previous one. The sequence is sorted best deal first
//!   (lowest `pay_y / buy_x`, then larger `buy_x`), so the result does not
//!   depend on input order.
//! - **BulkDiscount**: of the rules whose threshold is met by the scanned
//!   quantity, the lowest discounted price wins. Thresholds that are not met
//!   have no effect.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::{debug, trace};

use crate::money::Money;
use crate::rules::{BulkDiscountRule, BuyXPayYRule, PricingRule};
use crate::types::LineState;

/// The rules that apply to one SKU, already in canonical order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkuRules {
    quantity_rules: Vec<BuyXPayYRule>,
    price_rules: Vec<BulkDiscountRule>,
}

/// Best deal first: lower paid fraction, then the larger group.
///
/// Fractions are compared by cross-multiplying in `i128`, which cannot
/// overflow for any pair of `i64` rule parameters.
fn deal_order(a: &BuyXPayYRule, b: &BuyXPayYRule) -> Ordering {
    let lhs = i128::from(a.pay_y()) * i128::from(b.buy_x());
    let rhs = i128::from(b.pay_y()) * i128::from(a.buy_x());
    lhs.cmp(&rhs).then_with(|| b.buy_x().cmp(&a.buy_x()))
}

impl SkuRules {
    fn push(&mut self, rule: PricingRule) {
        match rule {
            PricingRule::BuyXPayY(rule) => self.quantity_rules.push(rule),
            PricingRule::BulkDiscount(rule) => self.price_rules.push(rule),
        }
    }

    fn canonicalize(&mut self) {
        // sort_by is stable: identical deals keep input order
        self.quantity_rules.sort_by(deal_order);
    }

    /// Quantity-shaping rules, in fold order.
    pub fn quantity_rules(&self) -> &[BuyXPayYRule] {
        &self.quantity_rules
    }

    /// Price-shaping rules, in input order.
    pub fn price_rules(&self) -> &[BulkDiscountRule] {
        &self.price_rules
    }

    /// The full canonical sequence: quantity rules, then price rules.
    pub fn ordered(&self) -> Vec<PricingRule> {
        self.quantity_rules
            .iter()
            .cloned()
            .map(PricingRule::from)
            .chain(self.price_rules.iter().cloned().map(PricingRule::from))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.quantity_rules.len() + self.price_rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Folds the rules over `(quantity, base_price)`.
    ///
    /// ## Steps
    /// 1. Start from `LineState { quantity, base_price }`
    /// 2. Quantity phase: every BuyXPayY rule, in order, on the running state
    /// 3. Price phase: the qualifying BulkDiscount rule with the lowest price
    ///
    /// `quantity` is passed to every rule as the original quantity.
    pub fn fold(&self, quantity: i64, base_price: Money) -> LineState {
        let shaped = self
            .quantity_rules
            .iter()
            .fold(LineState::new(quantity, base_price), |state, rule| {
                let next = rule.apply(quantity, state);
                trace!(
                    sku = rule.sku(),
                    buy_x = rule.buy_x(),
                    pay_y = rule.pay_y(),
                    from = state.quantity,
                    to = next.quantity,
                    "Applied buy-x-pay-y rule"
                );
                next
            });

        let best_tier = self
            .price_rules
            .iter()
            .filter(|rule| rule.qualifies(quantity))
            .min_by_key(|rule| rule.discounted_price());

        match best_tier {
            Some(rule) => {
                trace!(
                    sku = rule.sku(),
                    threshold = rule.threshold(),
                    price = %rule.discounted_price(),
                    "Applied bulk discount rule"
                );
                rule.apply(quantity, shaped)
            }
            None => shaped,
        }
    }
}

/// Mapping SKU → canonical rule sequence, built once per checkout session.
#[derive(Debug, Clone, Default)]
pub struct RuleIndex {
    by_sku: HashMap<String, SkuRules>,
}

impl RuleIndex {
    /// Groups `rules` by SKU and puts each group in canonical order.
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = PricingRule>,
    {
        let mut by_sku: HashMap<String, SkuRules> = HashMap::new();
        for rule in rules {
            by_sku.entry(rule.sku().to_string()).or_default().push(rule);
        }

        for (sku, sku_rules) in by_sku.iter_mut() {
            sku_rules.canonicalize();
            debug!(
                sku = %sku,
                buy_x_pay_y = sku_rules.quantity_rules.len(),
                bulk_discount = sku_rules.price_rules.len(),
                "Indexed pricing rules"
            );
        }

        RuleIndex { by_sku }
    }

    /// Rules for `sku`, if any were configured.
    pub fn rules_for(&self, sku: &str) -> Option<&SkuRules> {
        self.by_sku.get(sku)
    }

    /// Final `(charged quantity, unit price)` for one SKU. A SKU without
    /// rules is priced at `quantity × base_price`.
    pub fn price_line(&self, sku: &str, quantity: i64, base_price: Money) -> LineState {
        match self.rules_for(sku) {
            Some(rules) => rules.fold(quantity, base_price),
            None => LineState::new(quantity, base_price),
        }
    }

    /// Number of SKUs that have at least one rule.
    pub fn len(&self) -> usize {
        self.by_sku.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_sku.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
