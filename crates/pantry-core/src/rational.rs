//! # Rational Module
//!
//! Provides the `Rational` type: an exact fraction that is always stored in
//! lowest terms.
//!
//! ## Canonical Form
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  EVERY Rational is reduced at construction                              │
//! │                                                                         │
//! │    Rational::new(4, 8)    →  1/2                                        │
//! │    Rational::new(3, -6)   → -1/2   (sign lives on the numerator)        │
//! │    Rational::new(0, -5)   →  0/1                                        │
//! │    Rational::new(7, 0)    →  Err(DivisionByZero)                        │
//! │                                                                         │
//! │  Because the form is canonical, structural equality (==) IS            │
//! │  mathematical equality. No cross-multiplication needed to compare.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use pantry_core::rational::Rational;
//!
//! let a = Rational::new(2, 3).unwrap();
//! let b = Rational::new(3, 4).unwrap();
//!
//! let sum = a.checked_add(&b).unwrap();
//! assert_eq!(sum, Rational::new(17, 12).unwrap());
//! assert_eq!(sum.to_string(), "17/12");
//!
//! // Operators are available too; they panic where integer operators would.
//! assert_eq!((a * b).to_string(), "1/2");
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

use crate::error::ArithmeticError;

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

// =============================================================================
// Sign-aware GCD
// =============================================================================

/// Sign-aware Euclidean gcd.
///
/// ## Branches
/// ```text
/// gcd(0, y)          = y
/// gcd(x, y), x < 0   = gcd(-x, y)
/// gcd(x, y), y < 0   = -gcd(x, -y)
/// gcd(x, y)          = gcd(y mod x, x)
/// ```
///
/// The result carries the sign of `y`, so dividing `(n, d)` by `gcd(n, d)`
/// always leaves a positive denominator. Reduction depends on this.
pub(crate) fn gcd(x: i128, y: i128) -> i128 {
    if x == 0 {
        y
    } else if x < 0 {
        gcd(-x, y)
    } else if y < 0 {
        -gcd(x, -y)
    } else {
        gcd(y % x, x)
    }
}

// =============================================================================
// Rational Type
// =============================================================================

/// An exact rational number `numerator / denominator`.
///
/// ## Invariants
/// - `denominator > 0`
/// - `gcd(|numerator|, denominator) == 1`
/// - zero is `0/1`
///
/// Fields are private: the only way in is through a reducing constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawRational")]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

/// Unreduced wire shape; deserialization goes through `Rational::new`.
#[derive(Deserialize)]
struct RawRational {
    numerator: i64,
    denominator: i64,
}

impl TryFrom<RawRational> for Rational {
    type Error = ArithmeticError;

    fn try_from(raw: RawRational) -> Result<Self, Self::Error> {
        Rational::new(raw.numerator, raw.denominator)
    }
}

impl Rational {
    /// Creates a rational from a raw pair, reducing to lowest terms.
    ///
    /// ## Errors
    /// - `DivisionByZero` if `denominator == 0`
    /// - `Overflow` if the reduced value does not fit (only `i64::MIN / -1`)
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::rational::Rational;
    ///
    /// let half = Rational::new(4, 8).unwrap();
    /// assert_eq!((half.numerator(), half.denominator()), (1, 2));
    ///
    /// let negative = Rational::new(3, -6).unwrap();
    /// assert_eq!(negative.to_string(), "-1/2");
    ///
    /// assert!(Rational::new(1, 0).is_err());
    /// ```
    pub fn new(numerator: i64, denominator: i64) -> ArithmeticResult<Self> {
        Self::reduce(numerator as i128, denominator as i128, "new")
    }

    /// Creates `n/1`.
    #[inline]
    pub const fn from_integer(n: i64) -> Self {
        Rational {
            numerator: n,
            denominator: 1,
        }
    }

    /// Returns `0/1`.
    #[inline]
    pub const fn zero() -> Self {
        Self::from_integer(0)
    }

    /// Returns `1/1`.
    #[inline]
    pub const fn one() -> Self {
        Self::from_integer(1)
    }

    /// Reduces a wide pair and narrows it back to `i64`.
    fn reduce(numerator: i128, denominator: i128, operation: &'static str) -> ArithmeticResult<Self> {
        if denominator == 0 {
            return Err(ArithmeticError::DivisionByZero);
        }

        // Non-zero because denominator is non-zero; sign follows the denominator.
        let g = gcd(numerator, denominator);
        let overflow = || ArithmeticError::Overflow { operation };

        Ok(Rational {
            numerator: i64::try_from(numerator / g).map_err(|_| overflow())?,
            denominator: i64::try_from(denominator / g).map_err(|_| overflow())?,
        })
    }

    /// Returns the (signed) numerator.
    #[inline]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the (always positive) denominator.
    #[inline]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// True when the denominator is 1.
    #[inline]
    pub const fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns -1, 0 or 1.
    #[inline]
    pub const fn signum(&self) -> i64 {
        self.numerator.signum()
    }

    // =========================================================================
    // Checked arithmetic
    // =========================================================================

    /// `self + other`, re-reduced.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::rational::Rational;
    ///
    /// let a = Rational::new(2, 3).unwrap();
    /// let b = Rational::new(3, 4).unwrap();
    /// assert_eq!(a.checked_add(&b).unwrap().to_string(), "17/12");
    /// ```
    pub fn checked_add(&self, other: &Self) -> ArithmeticResult<Self> {
        let (a, b, c, d) = self.widen(other);
        let numerator = (a * d)
            .checked_add(c * b)
            .ok_or(ArithmeticError::Overflow { operation: "add" })?;
        Self::reduce(numerator, b * d, "add")
    }

    /// `self - other`, re-reduced.
    pub fn checked_sub(&self, other: &Self) -> ArithmeticResult<Self> {
        let (a, b, c, d) = self.widen(other);
        let numerator = (a * d)
            .checked_sub(c * b)
            .ok_or(ArithmeticError::Overflow { operation: "subtract" })?;
        Self::reduce(numerator, b * d, "subtract")
    }

    /// `self * other`, re-reduced.
    pub fn checked_mul(&self, other: &Self) -> ArithmeticResult<Self> {
        let (a, b, c, d) = self.widen(other);
        Self::reduce(a * c, b * d, "multiply")
    }

    /// `self / other`, re-reduced.
    ///
    /// ## Errors
    /// `DivisionByZero` when `other` is zero.
    pub fn checked_div(&self, other: &Self) -> ArithmeticResult<Self> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (a, b, c, d) = self.widen(other);
        Self::reduce(a * d, b * c, "divide")
    }

    /// `self * k` for an integer scalar.
    pub fn checked_mul_int(&self, k: i64) -> ArithmeticResult<Self> {
        Self::reduce(
            self.numerator as i128 * k as i128,
            self.denominator as i128,
            "multiply",
        )
    }

    /// `-self`.
    pub fn checked_neg(&self) -> ArithmeticResult<Self> {
        Self::reduce(-(self.numerator as i128), self.denominator as i128, "negate")
    }

    /// `1 / self`.
    ///
    /// ## Errors
    /// `DivisionByZero` when `self` is zero.
    pub fn recip(&self) -> ArithmeticResult<Self> {
        Self::one().checked_div(self)
    }

    /// `|self|`.
    pub fn abs(&self) -> ArithmeticResult<Self> {
        if self.numerator < 0 {
            self.checked_neg()
        } else {
            Ok(*self)
        }
    }

    /// Products of two i64 values always fit in i128.
    #[inline]
    fn widen(&self, other: &Self) -> (i128, i128, i128, i128) {
        (
            self.numerator as i128,
            self.denominator as i128,
            other.numerator as i128,
            other.denominator as i128,
        )
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as `"{numerator}/{denominator}"`, integers included (`"2/1"`).
impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Default rational is zero (`0/1`, never `0/0`).
impl Default for Rational {
    fn default() -> Self {
        Rational::zero()
    }
}

impl From<i64> for Rational {
    fn from(n: i64) -> Self {
        Rational::from_integer(n)
    }
}

impl From<i32> for Rational {
    fn from(n: i32) -> Self {
        Rational::from_integer(i64::from(n))
    }
}

/// Ordering by cross-multiplication; denominators are positive.
impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b, c, d) = self.widen(other);
        (a * d).cmp(&(c * b))
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Parses `"n/d"` or `"n"`, with optional whitespace around each part.
impl FromStr for Rational {
    type Err = ArithmeticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_part = |part: &str, what: &str| {
            part.trim().parse::<i64>().map_err(|e| ArithmeticError::Parse {
                input: s.to_string(),
                reason: format!("invalid {}: {}", what, e),
            })
        };

        match s.split_once('/') {
            Some((n, d)) => Rational::new(parse_part(n, "numerator")?, parse_part(d, "denominator")?),
            None => Ok(Rational::from_integer(parse_part(s, "integer")?)),
        }
    }
}

// Operators mirror std integer semantics: they panic on division by zero and
// overflow. Use the checked_* methods to handle those as errors.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $checked:ident, $verb:literal) => {
        impl $trait for Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Rational {
                self.$checked(&rhs)
                    .unwrap_or_else(|err| panic!("attempt to {} rationals: {}", $verb, err))
            }
        }

        impl $trait<&Rational> for Rational {
            type Output = Rational;

            fn $method(self, rhs: &Rational) -> Rational {
                $trait::$method(self, *rhs)
            }
        }

        impl $trait for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Rational {
                $trait::$method(*self, *rhs)
            }
        }
    };
}

forward_binop!(Add, add, checked_add, "add");
forward_binop!(Sub, sub, checked_sub, "subtract");
forward_binop!(Mul, mul, checked_mul, "multiply");
forward_binop!(Div, div, checked_div, "divide");

/// Scalar multiplication (for `2 * x`-style polynomial terms).
impl Mul<i64> for Rational {
    type Output = Rational;

    fn mul(self, k: i64) -> Rational {
        self.checked_mul_int(k)
            .unwrap_or_else(|err| panic!("attempt to multiply rational by integer: {}", err))
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        self.checked_neg()
            .unwrap_or_else(|err| panic!("attempt to negate rational: {}", err))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
