//! # Catalog
//!
//! Read-mostly lookup table from SKU to [`Product`].
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  SETUP PHASE (single writer)                                            │
//! │    Catalog::with_default_products() / Catalog::with_products(list)      │
//! │    catalog.add("mbp", "MacBook Pro", price)   ← re-validated            │
//! │                                                                         │
//! │  PRICING PHASE (read only)                                              │
//! │    Arc<Catalog> shared by any number of Checkout sessions               │
//! │    catalog.lookup(sku)                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Entries are never removed or replaced. There is no interior locking:
//! callers that need to mutate a catalog already shared across threads must
//! synchronise externally.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Product;
use crate::validation::validate_product;

/// Seed products used when no product list is supplied: `(sku, name, price_cents)`.
pub const DEFAULT_PRODUCTS: &[(&str, &str, i64)] = &[
    ("ipd", "Super iPad", 54999),
    ("mbp", "MacBook Pro", 139999),
    ("atv", "Apple TV", 10950),
    ("vga", "VGA adapter", 3000),
];

/// Mapping SKU → Product with no duplicate SKUs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: BTreeMap<String, Product>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog seeded with [`DEFAULT_PRODUCTS`].
    pub fn with_default_products() -> Self {
        let products = DEFAULT_PRODUCTS
            .iter()
            .map(|&(sku, name, cents)| (sku.to_string(), Product::new(sku, name, cents)))
            .collect::<BTreeMap<_, _>>();

        debug!(count = products.len(), "Catalog seeded with default products");
        Catalog { products }
    }

    /// Creates a catalog from a caller-provided product list.
    ///
    /// Every product goes through the same checks as [`Catalog::add`]; the
    /// first invalid or duplicate product aborts construction.
    pub fn with_products<I>(products: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = Product>,
    {
        let mut catalog = Catalog::new();
        for product in products {
            catalog.add(&product.sku, &product.name, product.price())?;
        }

        debug!(count = catalog.len(), "Catalog built from product list");
        Ok(catalog)
    }

    /// Returns the product for `sku`, or `None`. Never fails for a missing SKU.
    pub fn lookup(&self, sku: &str) -> Option<&Product> {
        self.products.get(sku)
    }

    /// Validates and inserts a new product.
    ///
    /// ## Errors
    /// - `CoreError::Validation` - empty sku/name or negative price
    /// - `CoreError::DuplicateSku` - sku already present
    pub fn add(&mut self, sku: &str, name: &str, price: Money) -> CoreResult<&Product> {
        validate_product(sku, name, price.cents())?;

        match self.products.entry(sku.to_string()) {
            Entry::Occupied(_) => Err(CoreError::DuplicateSku {
                sku: sku.to_string(),
            }),
            Entry::Vacant(slot) => {
                let product = slot.insert(Product::new(sku, name, price.cents()));
                Ok(&*product)
            }
        }
    }

    pub fn contains(&self, sku: &str) -> bool {
        self.products.contains_key(sku)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in SKU order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
