//! # Checkout
//!
//! One shopper's session: scan SKUs, ask for the total as often as needed.
//!
//! ## Pricing Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  scan(sku) ──► catalog.lookup ──► None?  UnknownSku (cart untouched)    │
//! │                                   Some   cart.add_item(sku)             │
//! │                                                                         │
//! │  total()   ──► for (sku, qty) in cart                                   │
//! │                   product = catalog.lookup(sku)   (missing → skip)      │
//! │                   line    = rule_index.price_line(sku, qty, price)      │
//! │                Σ line totals                                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no closed state: `total()` and `receipt()` read the session
//! without changing it and may be interleaved freely with further scans.
//!
//! ## Sharing
//! The cart and rule index belong to this session only. The catalog is held
//! through an `Arc` so one read-only catalog can serve many sessions.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::rule_index::RuleIndex;
use crate::rules::PricingRule;
use crate::types::{Receipt, ReceiptLine};

/// A checkout session.
#[derive(Debug, Clone)]
pub struct Checkout {
    catalog: Arc<Catalog>,
    rules: RuleIndex,
    cart: Cart,
}

impl Checkout {
    /// Starts a session over `catalog` with a fixed rule set.
    ///
    /// Rules are indexed once here and cannot change for the rest of the
    /// session.
    pub fn new<C, I>(catalog: C, rules: I) -> Self
    where
        C: Into<Arc<Catalog>>,
        I: IntoIterator<Item = PricingRule>,
    {
        let catalog = catalog.into();
        let rules = RuleIndex::new(rules);

        debug!(
            products = catalog.len(),
            rule_skus = rules.len(),
            "Checkout session started"
        );

        Checkout {
            catalog,
            rules,
            cart: Cart::new(),
        }
    }

    /// Starts a session over the default seed catalog.
    pub fn with_default_catalog<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = PricingRule>,
    {
        Self::new(Catalog::with_default_products(), rules)
    }

    /// Records one unit of `sku`.
    ///
    /// ## Errors
    /// - `CoreError::UnknownSku` if the catalog has no such product. The
    ///   failed scan is not counted.
    pub fn scan(&mut self, sku: &str) -> CoreResult<()> {
        if !self.catalog.contains(sku) {
            warn!(sku = %sku, "Rejected scan of unknown SKU");
            return Err(CoreError::UnknownSku {
                sku: sku.to_string(),
            });
        }

        self.cart.add_item(sku)?;
        debug!(sku = %sku, quantity = self.cart.count(sku), "Scanned item");
        Ok(())
    }

    /// Grand total of the cart with all pricing rules applied.
    ///
    /// Lines are summed in exact cents and the sum is the final
    /// two-decimal amount; nothing is rounded per line.
    pub fn total(&self) -> Money {
        self.priced_lines().map(|line| line.line_total).sum()
    }

    /// Itemised breakdown of [`Checkout::total`], lines in SKU order.
    pub fn receipt(&self) -> Receipt {
        let lines: Vec<ReceiptLine> = self.priced_lines().collect();
        let total: Money = lines.iter().map(|line| line.line_total).sum();
        Receipt { lines, total }
    }

    /// Copy of the scanned quantities.
    pub fn cart(&self) -> BTreeMap<String, i64> {
        self.cart.snapshot()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &RuleIndex {
        &self.rules
    }

    /// Folds every cart line. SKUs missing from the catalog are skipped.
    fn priced_lines(&self) -> impl Iterator<Item = ReceiptLine> + '_ {
        self.cart.iter().filter_map(move |(sku, quantity)| {
            let Some(product) = self.catalog.lookup(sku) else {
                debug!(sku = %sku, "Skipping SKU absent from catalog");
                return None;
            };

            let base_unit_price = product.price();
            let state = self.rules.price_line(sku, quantity, base_unit_price);
            let line_total = state.line_total();

            Some(ReceiptLine {
                sku: product.sku.clone(),
                name: product.name.clone(),
                quantity,
                charged_quantity: state.quantity,
                base_unit_price,
                unit_price: state.unit_price,
                line_total,
                savings: base_unit_price.multiply_quantity(quantity) - line_total,
            })
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;

    fn bulk(sku: &str, threshold: i64, cents: i64) -> PricingRule {
        PricingRule::bulk_discount(sku, threshold, Money::from_cents(cents)).unwrap()
    }

    fn deal(sku: &str, buy_x: i64, pay_y: i64) -> PricingRule {
        PricingRule::buy_x_pay_y(sku, buy_x, pay_y).unwrap()
    }

    fn scan_n(checkout: &mut Checkout, sku: &str, n: usize) {
        for _ in 0..n {
            checkout.scan(sku).unwrap();
        }
    }

    #[test]
    fn test_empty_cart_totals_zero() {
        let checkout = Checkout::with_default_catalog(Vec::new());
        assert!(checkout.total().is_zero());
        assert!(checkout.receipt().is_empty());
    }

    #[test]
    fn test_unknown_sku_rejected_and_not_counted() {
        let mut checkout = Checkout::with_default_catalog(Vec::new());
        checkout.scan("atv").unwrap();
        let before = checkout.total();

        let err = checkout.scan("doesnotexist").unwrap_err();
        assert!(matches!(err, CoreError::UnknownSku { ref sku } if sku == "doesnotexist"));
        assert_eq!(err.to_string(), "SKU doesnotexist does not exist in the catalog");

        assert!(matches!(checkout.scan(""), Err(CoreError::UnknownSku { .. })));

        assert_eq!(checkout.total(), before);
        assert_eq!(checkout.cart().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Reference scenarios (ipd=549.99, atv=109.50, vga=30.00)
    // -------------------------------------------------------------------------

    #[test]
    fn test_scenario_no_rules() {
        let mut checkout = Checkout::with_default_catalog(Vec::new());
        checkout.scan("atv").unwrap();
        checkout.scan("atv").unwrap();
        checkout.scan("ipd").unwrap();

        assert_eq!(checkout.total(), Money::from_cents(76899));
    }

    #[test]
    fn test_scenario_bulk_discount() {
        let rules = vec![bulk("ipd", 4, 49999)];

        let mut checkout = Checkout::with_default_catalog(rules.clone());
        scan_n(&mut checkout, "ipd", 4);
        assert_eq!(checkout.total(), Money::from_cents(199996));

        let mut checkout = Checkout::with_default_catalog(rules);
        scan_n(&mut checkout, "ipd", 3);
        assert_eq!(checkout.total(), Money::from_cents(164997));
    }

    #[test]
    fn test_scenario_buy_x_pay_y() {
        let mut checkout = Checkout::with_default_catalog(vec![deal("atv", 3, 2)]);
        scan_n(&mut checkout, "atv", 5);
        assert_eq!(checkout.total(), Money::from_cents(43800));
    }

    #[test]
    fn test_scenario_rules_on_different_skus() {
        let mut checkout =
            Checkout::with_default_catalog(vec![deal("atv", 3, 2), bulk("ipd", 4, 49999)]);
        scan_n(&mut checkout, "atv", 3);
        scan_n(&mut checkout, "ipd", 5);

        assert_eq!(checkout.total(), Money::from_cents(271895));
    }

    #[test]
    fn test_scenario_degenerate_rules_nothing_scanned() {
        let checkout =
            Checkout::with_default_catalog(vec![bulk("vga", 1, 100000), deal("vga", 1, 0)]);
        assert!(checkout.total().is_zero());
    }

    #[test]
    fn test_scan_order_irrelevant() {
        let rules = vec![deal("atv", 3, 2), bulk("ipd", 4, 49999)];
        let mut checkout = Checkout::with_default_catalog(rules);

        for sku in ["atv", "ipd", "ipd", "atv", "ipd", "ipd", "ipd"] {
            checkout.scan(sku).unwrap();
        }

        // 2 atv (no full set) + 5 ipd at bulk price
        assert_eq!(checkout.total(), Money::from_cents(271895));
    }

    #[test]
    fn test_mixed_rules_same_sku() {
        let mut checkout =
            Checkout::with_default_catalog(vec![bulk("atv", 5, 9900), deal("atv", 3, 2)]);
        scan_n(&mut checkout, "atv", 7);

        // 7 scanned → 5 charged at 99.00
        assert_eq!(checkout.total(), Money::from_cents(49500));
    }

    #[test]
    fn test_total_is_idempotent_and_interleaves_with_scans() {
        let mut checkout = Checkout::with_default_catalog(vec![deal("atv", 3, 2)]);
        scan_n(&mut checkout, "atv", 2);

        let first = checkout.total();
        assert_eq!(checkout.total(), first);
        assert_eq!(checkout.receipt().total, first);

        checkout.scan("atv").unwrap();
        assert_eq!(checkout.total(), first);

        checkout.scan("atv").unwrap();
        assert_eq!(checkout.total(), Money::from_cents(32850));
        assert_eq!(checkout.total(), Money::from_cents(32850));
    }

    #[test]
    fn test_monotonic_without_rules() {
        let mut checkout = Checkout::with_default_catalog(Vec::new());
        let mut previous = checkout.total();

        for sku in ["vga", "ipd", "vga", "atv", "mbp", "vga"] {
            checkout.scan(sku).unwrap();
            let current = checkout.total();
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_no_rules_total_is_sum_of_lines() {
        let catalog = Catalog::with_default_products();
        let mut checkout = Checkout::new(catalog.clone(), Vec::new());
        let scans = [("ipd", 2), ("atv", 3), ("vga", 7), ("mbp", 1)];

        let mut expected = Money::zero();
        for (sku, n) in scans {
            scan_n(&mut checkout, sku, n);
            expected += catalog.lookup(sku).unwrap().price() * n as i64;
        }

        assert_eq!(checkout.total(), expected);
    }

    #[test]
    fn test_rule_input_order_does_not_change_total() {
        let rules = vec![
            deal("atv", 3, 2),
            bulk("atv", 5, 9900),
            bulk("ipd", 3, 52000),
            bulk("ipd", 5, 49999),
            deal("vga", 2, 1),
            bulk("vga", 4, 2500),
        ];

        let build = |rules: Vec<PricingRule>| {
            let mut checkout = Checkout::with_default_catalog(rules);
            scan_n(&mut checkout, "atv", 7);
            scan_n(&mut checkout, "ipd", 5);
            scan_n(&mut checkout, "vga", 4);
            checkout.total()
        };

        let expected = build(rules.clone());
        assert_eq!(expected, Money::from_cents(49500 + 249995 + 5000));

        let mut reversed = rules.clone();
        reversed.reverse();
        assert_eq!(build(reversed), expected);

        for shift in 1..rules.len() {
            let mut rotated = rules.clone();
            rotated.rotate_left(shift);
            assert_eq!(build(rotated), expected, "rotation {}", shift);
        }
    }

    #[test]
    fn test_rules_for_sku_missing_from_catalog_are_ignored() {
        let mut checkout =
            Checkout::with_default_catalog(vec![bulk("ghost", 1, 100), deal("ghost", 1, 0)]);
        checkout.scan("vga").unwrap();
        assert_eq!(checkout.total(), Money::from_cents(3000));
    }

    #[test]
    fn test_many_scans_of_one_sku() {
        let mut checkout = Checkout::with_default_catalog(Vec::new());
        scan_n(&mut checkout, "vga", 1000);
        assert_eq!(checkout.total(), Money::from_cents(3_000_000));
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = Catalog::with_products(vec![
            Product::new("pen", "Pen", 199),
            Product::new("pad", "Pad", 350),
        ])
        .unwrap();
        let mut checkout = Checkout::new(catalog, vec![deal("pen", 2, 1)]);

        scan_n(&mut checkout, "pen", 4);
        checkout.scan("pad").unwrap();
        assert!(checkout.scan("ipd").is_err());

        assert_eq!(checkout.total(), Money::from_cents(2 * 199 + 350));
    }

    #[test]
    fn test_punctuated_sku_can_be_priced_by_rules() {
        let mut catalog = Catalog::new();
        catalog.add("sku.1", "Gift card", Money::from_cents(2500)).unwrap();
        let mut checkout = Checkout::new(catalog, vec![deal("sku.1", 2, 1)]);

        scan_n(&mut checkout, "sku.1", 4);
        assert_eq!(checkout.total(), Money::from_cents(2 * 2500));
    }

    #[test]
    fn test_shared_catalog_separate_carts() {
        let catalog = Arc::new(Catalog::with_default_products());
        let mut first = Checkout::new(Arc::clone(&catalog), Vec::new());
        let mut second = Checkout::new(Arc::clone(&catalog), vec![bulk("ipd", 1, 50000)]);

        first.scan("ipd").unwrap();
        second.scan("ipd").unwrap();
        second.scan("ipd").unwrap();

        assert_eq!(first.cart().get("ipd"), Some(&1));
        assert_eq!(second.cart().get("ipd"), Some(&2));
        assert_eq!(first.total(), Money::from_cents(54999));
        assert_eq!(second.total(), Money::from_cents(100000));
    }

    #[test]
    fn test_receipt_breakdown() {
        let mut checkout =
            Checkout::with_default_catalog(vec![deal("atv", 3, 2), bulk("ipd", 4, 49999)]);
        scan_n(&mut checkout, "ipd", 4);
        scan_n(&mut checkout, "atv", 3);
        checkout.scan("vga").unwrap();

        let receipt = checkout.receipt();
        assert_eq!(receipt.total, checkout.total());

        let skus: Vec<&str> = receipt.lines.iter().map(|l| l.sku.as_str()).collect();
        assert_eq!(skus, vec!["atv", "ipd", "vga"]);

        let atv = &receipt.lines[0];
        assert_eq!(atv.name, "Apple TV");
        assert_eq!(atv.quantity, 3);
        assert_eq!(atv.charged_quantity, 2);
        assert_eq!(atv.unit_price, Money::from_cents(10950));
        assert_eq!(atv.savings, Money::from_cents(10950));

        let ipd = &receipt.lines[1];
        assert_eq!(ipd.charged_quantity, 4);
        assert_eq!(ipd.base_unit_price, Money::from_cents(54999));
        assert_eq!(ipd.unit_price, Money::from_cents(49999));
        assert_eq!(ipd.savings, Money::from_cents(20000));

        let vga = &receipt.lines[2];
        assert!(vga.savings.is_zero());

        assert_eq!(receipt.total_savings(), Money::from_cents(30950));
    }

    #[test]
    fn test_cart_view_is_a_copy() {
        let mut checkout = Checkout::with_default_catalog(Vec::new());
        checkout.scan("ipd").unwrap();

        let mut view = checkout.cart();
        view.insert("ipd".to_string(), 50);

        assert_eq!(checkout.cart().get("ipd"), Some(&1));
        assert_eq!(checkout.total(), Money::from_cents(54999));
    }
}
