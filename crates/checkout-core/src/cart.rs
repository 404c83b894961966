//! # Cart
//!
//! Per-session scan counter: SKU → quantity.
//!
//! ## Cart Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Checkout::scan("atv")                                                  │
//! │       │  (catalog check happens in Checkout, not here)                  │
//! │       ▼                                                                 │
//! │  cart.add_item("atv") ──► items["atv"] += 1                             │
//! │                                                                         │
//! │  cart.count("atv")    ──► 0 when never scanned                          │
//! │  cart.snapshot()      ──► independent copy, safe to hand out            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - A SKU present in the map has quantity >= 1
//! - Each successful `add_item` raises exactly one SKU's quantity by 1
//! - There is no way to lower a quantity

use std::collections::BTreeMap;

use crate::error::{CoreError, CoreResult};

/// Scanned quantities keyed by SKU.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    items: BTreeMap<String, i64>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of `sku`.
    ///
    /// ## Errors
    /// - `CoreError::InvalidSku` if `sku` is empty
    pub fn add_item(&mut self, sku: &str) -> CoreResult<()> {
        if sku.is_empty() {
            return Err(CoreError::InvalidSku);
        }

        *self.items.entry(sku.to_string()).or_insert(0) += 1;
        Ok(())
    }

    /// Quantity scanned for `sku`, 0 if absent.
    pub fn count(&self, sku: &str) -> i64 {
        self.items.get(sku).copied().unwrap_or(0)
    }

    /// Returns a copy of the cart contents. Mutating it never affects the cart.
    pub fn snapshot(&self) -> BTreeMap<String, i64> {
        self.items.clone()
    }

    /// Iterates `(sku, quantity)` pairs in SKU order without copying.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.items.iter().map(|(sku, &qty)| (sku.as_str(), qty))
    }

    /// Number of distinct SKUs.
    pub fn distinct_skus(&self) -> usize {
        self.items.len()
    }

    /// Total units across all SKUs.
    pub fn total_quantity(&self) -> i64 {
        self.items.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_starts_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert!(cart.snapshot().is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }

    #[test]
    fn test_add_item_increments_quantity() {
        let mut cart = Cart::new();
        cart.add_item("ipd").unwrap();
        cart.add_item("ipd").unwrap();

        assert_eq!(cart.count("ipd"), 2);
        assert_eq!(cart.distinct_skus(), 1);
    }

    #[test]
    fn test_count_missing_is_zero() {
        let cart = Cart::new();
        assert_eq!(cart.count("nonexistent"), 0);
    }

    #[test]
    fn test_empty_sku_rejected() {
        let mut cart = Cart::new();
        let err = cart.add_item("").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSku));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_separate_quantities() {
        let mut cart = Cart::new();
        cart.add_item("ipd").unwrap();
        cart.add_item("mbp").unwrap();
        cart.add_item("ipd").unwrap();

        assert_eq!(cart.count("ipd"), 2);
        assert_eq!(cart.count("mbp"), 1);
        assert_eq!(cart.total_quantity(), 3);

        let pairs: Vec<(&str, i64)> = cart.iter().collect();
        assert_eq!(pairs, vec![("ipd", 2), ("mbp", 1)]);
    }

    #[test]
    fn test_snapshot_is_independent_copy() {
        let mut cart = Cart::new();
        cart.add_item("ipd").unwrap();

        let mut first = cart.snapshot();
        let second = cart.snapshot();
        assert_eq!(first, second);

        first.insert("ipd".to_string(), 100);
        first.insert("atv".to_string(), 5);

        assert_eq!(cart.count("ipd"), 1);
        assert_eq!(cart.count("atv"), 0);
        assert_eq!(cart.snapshot(), second);
    }
}
