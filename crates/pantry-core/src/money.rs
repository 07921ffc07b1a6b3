//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Exact Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    12.3 × 2 × 1.1 = 27.060000000000002  ❌ WRONG!                       │
//! │                                                                         │
//! │  OUR SOLUTION: base-10 Decimal                                          │
//! │    12.3 × 2 × 1.1 = 27.06 exactly                                       │
//! │    Sums over a whole catalog stay exact; rounding happens ONLY when     │
//! │    a value is displayed.                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::money::Money;
//! use pantry_core::types::VatRate;
//! use rust_decimal::Decimal;
//!
//! let price = Money::from_cents(1230); // 12.30
//! let line = price.multiply_quantity(2); // 24.60
//!
//! let vat = line.calculate_vat(VatRate::from_percentage(Decimal::TEN));
//! assert_eq!(vat, Money::from_cents(246));
//! assert_eq!(line.with_vat(VatRate::from_percentage(Decimal::TEN)).to_string(), "27.06 €");
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::types::VatRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value as an exact decimal amount.
///
/// ## Design Decisions
/// - **Decimal (signed)**: Allows negative values for refunds, discounts
/// - **Single field tuple struct**: Zero-cost abstraction over Decimal
/// - **No rounding in arithmetic**: catalog totals stay exact
///
/// ## Where Money is Used
/// ```text
/// GroceryItem.unit_price ──► subtotal (× quantity) ──► + VAT ──► total_price
///                                                                   │
/// GroceryCatalog ◄──── total_invoice / total_for / price_by_category ┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(Decimal);

impl Money {
    /// Creates a Money value from an exact decimal amount.
    #[inline]
    pub const fn from_decimal(amount: Decimal) -> Self {
        Money(amount)
    }

    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.to_string(), "10.99 €");
    /// ```
    #[inline]
    pub fn from_cents(cents: i64) -> Self {
        Money(Decimal::new(cents, 2))
    }

    /// Returns the exact amount.
    #[inline]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(Decimal::ZERO)
    }

    /// Checks if the value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.multiply_quantity(3), Money::from_cents(897));
    /// ```
    #[inline]
    pub fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * Decimal::from(qty))
    }

    /// VAT owed on this amount: `amount × percentage / 100`, unrounded.
    pub fn calculate_vat(&self, rate: VatRate) -> Money {
        Money(self.0 * rate.percentage() / Decimal::ONE_HUNDRED)
    }

    /// This amount with VAT applied: `amount × (1 + percentage / 100)`, unrounded.
    pub fn with_vat(&self, rate: VatRate) -> Money {
        Money(self.0 * rate.multiplier())
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display rounds to cents and always shows two decimals: `"35.40 €"`.
///
/// ## Note
/// The underlying value keeps full precision; this is presentation only.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rounded = self.0.round_dp(2);
        rounded.rescale(2);
        write!(f, "{} €", rounded)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Money(amount)
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summing an iterator of Money; the empty sum is zero.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
