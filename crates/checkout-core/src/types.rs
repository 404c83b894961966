//! # Domain Types
//!
//! Value types shared by the catalog, the rule engine and the checkout.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   LineState     │   │    Receipt      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  sku (key)      │   │  quantity       │   │  lines          │       │
//! │  │  name           │   │  unit_price     │   │  total          │       │
//! │  │  price_cents    │   └─────────────────┘   └─────────────────┘       │
//! │  └─────────────────┘     running pair fed                               │
//! │                          through the rules                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Product
// =============================================================================

/// A product available for sale. Owned by the [`Catalog`](crate::Catalog)
/// and never modified after it is added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - the catalog key.
    pub sku: String,

    /// Display name shown on the receipt.
    pub name: String,

    /// Unit price in cents.
    pub price_cents: i64,
}

impl Product {
    /// Builds a product value. Validation happens when it enters the catalog.
    pub fn new(sku: impl Into<String>, name: impl Into<String>, price_cents: i64) -> Self {
        Product {
            sku: sku.into(),
            name: name.into(),
            price_cents,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Line State
// =============================================================================

/// The running `(quantity, unit price)` pair of one SKU while its rules are
/// folded.
///
/// Rules never produce a total or a discount amount; they map one
/// `LineState` to the next, and the line total is read off the final state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineState {
    /// Units that will be charged.
    pub quantity: i64,
    /// Price charged per unit.
    pub unit_price: Money,
}

impl LineState {
    pub const fn new(quantity: i64, unit_price: Money) -> Self {
        LineState {
            quantity,
            unit_price,
        }
    }

    /// `quantity × unit_price`.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One priced SKU on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptLine {
    pub sku: String,
    pub name: String,
    /// Units scanned.
    pub quantity: i64,
    /// Units charged after quantity rules (e.g. 3-for-2).
    pub charged_quantity: i64,
    /// Catalog price per unit.
    pub base_unit_price: Money,
    /// Price per unit after price rules (e.g. bulk discount).
    pub unit_price: Money,
    pub line_total: Money,
    /// `quantity × base_unit_price - line_total`.
    pub savings: Money,
}

/// Itemised result of pricing a cart.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    /// Lines ordered by SKU.
    pub lines: Vec<ReceiptLine>,
    pub total: Money,
}

impl Receipt {
    /// Total saved across all lines.
    pub fn total_savings(&self) -> Money {
        self.lines.iter().map(|line| line.savings).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
