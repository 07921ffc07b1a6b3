//! # Validation Module
//!
//! Input validation utilities for Pantry.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Host application                                             │
//! │  ├── Parsing / deserialization of user input                           │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (Rust)                                          │
//! │  ├── GroceryItem::new → field rules (THIS MODULE)                     │
//! │  └── GroceryCatalog::with_config → catalog rules (THIS MODULE)        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Aggregates                                                   │
//! │  └── Pure functions over already-valid values, cannot fail            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::validation::{validate_quantity, validate_vat_percentage};
//! use rust_decimal::Decimal;
//!
//! assert!(validate_quantity(2).is_ok());
//! assert!(validate_quantity(-1).is_err());
//! assert!(validate_vat_percentage(Decimal::TEN).is_ok());
//! ```

use rust_decimal::Decimal;
use std::collections::HashSet;

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Upper bound for a VAT percentage.
pub const MAX_VAT_PERCENTAGE: Decimal = Decimal::ONE_HUNDRED;

/// Maximum quantity on a single grocery line.
pub const MAX_ITEM_QUANTITY: i64 = 1_000_000;

/// Maximum unit price (1,000,000,000).
///
/// With [`MAX_ITEM_QUANTITY`] and [`MAX_VAT_PERCENTAGE`] a line total stays
/// below 2 × 10^15, far inside `Decimal` range, so catalog sums cannot
/// overflow for any catalog that fits in memory.
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

// =============================================================================
// String Validators
// =============================================================================

/// Validates that a text field is not blank.
pub fn validate_required(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a grocery item name.
///
/// ## Example
/// ```rust
/// use pantry_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Tomato Sauce").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    validate_required("name", name)
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (item listed but not bought yet)
/// - Must not exceed MAX_ITEM_QUANTITY
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
            value: qty.to_string(),
        });
    }

    if qty > MAX_ITEM_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: "0".to_string(),
            max: MAX_ITEM_QUANTITY.to_string(),
            value: qty.to_string(),
        });
    }

    Ok(())
}

/// Validates a unit price.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (free items)
/// - Must not exceed MAX_UNIT_PRICE
pub fn validate_unit_price(price: Decimal) -> ValidationResult<()> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit_price".to_string(),
            value: price.to_string(),
        });
    }

    if price > MAX_UNIT_PRICE {
        return Err(ValidationError::OutOfRange {
            field: "unit_price".to_string(),
            min: "0".to_string(),
            max: MAX_UNIT_PRICE.to_string(),
            value: price.to_string(),
        });
    }

    Ok(())
}

/// Validates a VAT percentage.
///
/// ## Rules
/// - Must be non-negative
/// - Must not exceed 100 (%)
///
/// ## Example
/// ```rust
/// use pantry_core::validation::validate_vat_percentage;
/// use rust_decimal::Decimal;
///
/// assert!(validate_vat_percentage(Decimal::new(55, 1)).is_ok()); // 5.5%
/// assert!(validate_vat_percentage(Decimal::new(-1, 0)).is_err());
/// assert!(validate_vat_percentage(Decimal::new(101, 0)).is_err());
/// ```
pub fn validate_vat_percentage(percentage: Decimal) -> ValidationResult<()> {
    if percentage.is_sign_negative() && !percentage.is_zero() {
        return Err(ValidationError::MustBeNonNegative {
            field: "vat_percentage".to_string(),
            value: percentage.to_string(),
        });
    }

    if percentage > MAX_VAT_PERCENTAGE {
        return Err(ValidationError::OutOfRange {
            field: "vat_percentage".to_string(),
            min: "0".to_string(),
            max: MAX_VAT_PERCENTAGE.to_string(),
            value: percentage.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that no name appears twice.
///
/// Returns the first repeated name as a `Duplicate` error.
pub fn validate_unique_names<'a>(names: impl IntoIterator<Item = &'a str>) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ValidationError::Duplicate {
                field: "item name".to_string(),
                value: name.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
