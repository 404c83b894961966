//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Catalog, cart, rule and scan failures          │
//! │  └── ValidationError  - Malformed product fields                       │
//! │                                                                         │
//! │  checkout-cli errors (app crate)                                       │
//! │  └── CliError         - Config file / TOML failures + CoreError        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → stderr + exit code     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## When Each Error Surfaces
//! All errors are raised eagerly where the bad input enters:
//! - catalog construction / `Catalog::add` → `Validation`, `DuplicateSku`
//! - rule construction → `InvalidRule`
//! - `Cart::add_item` → `InvalidSku`
//! - `Checkout::scan` → `UnknownSku`
//!
//! `Checkout::total` never fails.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Product fields failed validation when adding to the catalog.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// A product with this SKU is already in the catalog.
    #[error("Product with SKU {sku} already exists in catalog")]
    DuplicateSku { sku: String },

    /// Empty SKU passed to the cart.
    #[error("Invalid SKU: SKU cannot be empty")]
    InvalidSku,

    /// Scanned SKU has no product in the catalog.
    ///
    /// ## User Workflow
    /// ```text
    /// scan("doesnotexist")
    ///      │
    ///      ▼
    /// catalog.lookup → None
    ///      │
    ///      ▼
    /// UnknownSku { sku: "doesnotexist" }   (cart left untouched)
    /// ```
    #[error("SKU {sku} does not exist in the catalog")]
    UnknownSku { sku: String },

    /// Pricing rule parameters are out of range.
    #[error("Invalid pricing rule for {sku}: {reason}")]
    InvalidRule { sku: String, reason: String },
}

impl CoreError {
    pub(crate) fn invalid_rule(sku: &str, reason: impl Into<String>) -> Self {
        CoreError::InvalidRule {
            sku: sku.to_string(),
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors for product fields.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
