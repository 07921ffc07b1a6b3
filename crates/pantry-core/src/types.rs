//! # Domain Types
//!
//! Core domain types used throughout Pantry.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐        ┌─────────────────┐                    │
//! │  │    GroceryItem      │        │    VatRate      │                    │
//! │  │  ─────────────────  │        │  ─────────────  │                    │
//! │  │  name               │───────►│  percentage     │                    │
//! │  │  unit_price (Money) │        │  10 = 10%       │                    │
//! │  │  category           │        └─────────────────┘                    │
//! │  │  vat (VatRate)      │                                                │
//! │  │  quantity           │        Aggregated by GroceryCatalog           │
//! │  │  ingredients        │        (see `grocery` module)                  │
//! │  └─────────────────────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::money::Money;
use crate::validation::{
    validate_item_name, validate_quantity, validate_unit_price, validate_vat_percentage,
    ValidationResult,
};

// =============================================================================
// VAT Rate
// =============================================================================

/// VAT rate as a decimal percentage.
///
/// ## Why a Percentage?
/// Grocery VAT rates are quoted as percentages, often fractional
/// (5.5%, 2.1%). Decimal keeps them exact: `from_percentage(dec!(5.5))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VatRate(Decimal);

impl VatRate {
    /// Creates a rate from a percentage (`10` = 10%).
    #[inline]
    pub const fn from_percentage(percentage: Decimal) -> Self {
        VatRate(percentage)
    }

    /// Returns the rate as a percentage.
    #[inline]
    pub const fn percentage(&self) -> Decimal {
        self.0
    }

    /// Returns `1 + percentage / 100`, the factor turning a net price gross.
    #[inline]
    pub fn multiplier(&self) -> Decimal {
        Decimal::ONE + self.0 / Decimal::ONE_HUNDRED
    }

    /// Zero VAT rate.
    #[inline]
    pub const fn zero() -> Self {
        VatRate(Decimal::ZERO)
    }

    /// Checks if VAT rate is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Default for VatRate {
    fn default() -> Self {
        VatRate::zero()
    }
}

// =============================================================================
// Grocery Item
// =============================================================================

/// A line on a grocery list.
///
/// Immutable once built; construct through [`GroceryItem::new`] so the
/// quantity, VAT and price rules are enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroceryItem {
    name: String,
    unit_price: Money,
    category: String,
    vat: VatRate,
    quantity: i64,
    ingredients: Vec<String>,
}

impl GroceryItem {
    /// Creates a validated grocery item.
    ///
    /// ## Rules
    /// - `name` must not be blank
    /// - `unit_price` must be non-negative
    /// - `vat_percentage` must be within 0..=100
    /// - `quantity` must be non-negative (zero is a valid "none yet" line)
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::types::GroceryItem;
    /// use rust_decimal::Decimal;
    ///
    /// let beef = GroceryItem::new(
    ///     "Beef",
    ///     Decimal::new(123, 1), // 12.3
    ///     "Meat",
    ///     Decimal::TEN,
    ///     2,
    ///     vec!["Beef".to_string()],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(beef.to_string(), "Beef x 2");
    /// assert_eq!(beef.total_price().amount(), Decimal::new(2706, 2));
    /// assert_eq!(beef.total_vat().amount(), Decimal::new(246, 2));
    /// ```
    pub fn new(
        name: impl Into<String>,
        unit_price: Decimal,
        category: impl Into<String>,
        vat_percentage: Decimal,
        quantity: i64,
        ingredients: Vec<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();

        let checks = validate_item_name(&name)
            .and_then(|_| validate_unit_price(unit_price))
            .and_then(|_| validate_vat_percentage(vat_percentage))
            .and_then(|_| validate_quantity(quantity));
        if let Err(err) = checks {
            debug!(item = %name, error = %err, "Rejected grocery item");
            return Err(err);
        }

        Ok(GroceryItem {
            name,
            unit_price: Money::from_decimal(unit_price),
            category: category.into(),
            vat: VatRate::from_percentage(vat_percentage),
            quantity,
            ingredients,
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn vat_rate(&self) -> VatRate {
        self.vat
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Ingredients in the order they were listed.
    #[inline]
    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    /// Checks whether `ingredient` appears in this item (exact match).
    pub fn contains_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }

    /// Line total before VAT (unit price × quantity).
    pub fn subtotal(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }

    /// VAT for this line: `unit_price × quantity × vat / 100`.
    pub fn total_vat(&self) -> Money {
        self.subtotal().calculate_vat(self.vat)
    }

    /// Line total including VAT: `unit_price × quantity × (1 + vat / 100)`.
    pub fn total_price(&self) -> Money {
        self.subtotal().with_vat(self.vat)
    }
}

/// `"{name} x {quantity}"`, the way a shopping list reads.
impl fmt::Display for GroceryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.name, self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
