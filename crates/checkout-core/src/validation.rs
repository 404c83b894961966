//! # Validation Module
//!
//! Field validators for products entering the catalog.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Config file / caller-supplied product list                            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog::with_products / Catalog::add                                 │
//! │  └── THIS MODULE: sku, name, price checks                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Catalog map (only valid products ever stored)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Pricing rule parameters are checked by the rule constructors in
//! [`crate::rules`], since they report `InvalidRule` rather than a field error.

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a SKU (Stock Keeping Unit).
///
/// Any non-empty string is a SKU; its characters are not restricted, so
/// `"sku.1"` or `"gift card"` are accepted.
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_sku;
///
/// assert!(validate_sku("ipd").is_ok());
/// assert!(validate_sku("sku.1").is_ok());
/// assert!(validate_sku("").is_err());
/// ```
pub fn validate_sku(sku: &str) -> ValidationResult<()> {
    if sku.is_empty() {
        return Err(ValidationError::Required {
            field: "sku".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name: must not be empty.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free items).
///
/// ## Example
/// ```rust
/// use checkout_core::validation::validate_price_cents;
///
/// assert!(validate_price_cents(54999).is_ok());
/// assert!(validate_price_cents(0).is_ok());
/// assert!(validate_price_cents(-1000).is_err());
/// ```
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Runs all product field validators in order: sku, name, price.
pub fn validate_product(sku: &str, name: &str, price_cents: i64) -> ValidationResult<()> {
    validate_sku(sku)?;
    validate_product_name(name)?;
    validate_price_cents(price_cents)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sku() {
        assert!(validate_sku("ipd").is_ok());
        assert!(validate_sku("COKE-330").is_ok());
        assert!(validate_sku("sku.1").is_ok());
        assert!(validate_sku("gift card").is_ok());
        assert!(validate_sku(&"A".repeat(500)).is_ok());

        assert_eq!(
            validate_sku(""),
            Err(ValidationError::Required {
                field: "sku".to_string()
            })
        );
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Super iPad").is_ok());
        assert!(validate_product_name(&"A".repeat(300)).is_ok());
        assert!(validate_product_name("").is_err());
    }

    #[test]
    fn test_validate_price_cents() {
        assert!(validate_price_cents(0).is_ok());
        assert!(validate_price_cents(10950).is_ok());
        assert!(validate_price_cents(-1).is_err());
    }

    #[test]
    fn test_validate_product_reports_first_failure() {
        let err = validate_product("", "", -1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "sku".to_string()
            }
        );

        let err = validate_product("test", "", -1).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Required {
                field: "name".to_string()
            }
        );

        let err = validate_product("test", "Test", -1000).unwrap_err();
        assert!(matches!(err, ValidationError::OutOfRange { .. }));
    }
}
