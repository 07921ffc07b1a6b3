//! # Polynomial Module
//!
//! Univariate polynomials with exact [`Rational`] coefficients.
//!
//! `P(x) = c0 + c1·x + c2·x² + …`, coefficients stored in ascending degree.
//!
//! ```rust
//! use pantry_core::polynomial::Polynomial;
//! use pantry_core::rational::Rational;
//!
//! let p = Polynomial::from_integers(&[2, 4, -1]);
//! assert_eq!(p.evaluate(2).unwrap(), Rational::from_integer(6));
//! assert_eq!(p.to_string(), "+2+4x-1x^2");
//! assert_eq!(p.derivative().unwrap(), Polynomial::from_integers(&[4, -2]));
//! ```

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use crate::rational::{ArithmeticResult, Rational};

/// A polynomial in one variable.
///
/// Trailing zero coefficients are trimmed, so equal polynomials compare
/// equal and the zero polynomial has no coefficients at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Polynomial {
    coeffs: Vec<Rational>,
}

impl Polynomial {
    /// Creates a polynomial from ascending-degree coefficients.
    pub fn new(coeffs: Vec<Rational>) -> Self {
        let mut coeffs = coeffs;
        while coeffs.last().is_some_and(Rational::is_zero) {
            coeffs.pop();
        }
        Polynomial { coeffs }
    }

    /// Creates a polynomial from integer coefficients.
    pub fn from_integers(coeffs: &[i64]) -> Self {
        Self::new(coeffs.iter().copied().map(Rational::from_integer).collect())
    }

    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Highest exponent with a non-zero coefficient; `None` for zero.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Coefficients in ascending degree, without trailing zeros.
    pub fn coefficients(&self) -> &[Rational] {
        &self.coeffs
    }

    /// Coefficient of `x^exp` (zero beyond the degree).
    pub fn coefficient(&self, exp: usize) -> Rational {
        self.coeffs.get(exp).copied().unwrap_or_default()
    }

    /// Evaluates `P(x)` with Horner's scheme.
    pub fn evaluate(&self, x: impl Into<Rational>) -> ArithmeticResult<Rational> {
        let x = x.into();
        self.coeffs
            .iter()
            .rev()
            .try_fold(Rational::zero(), |acc, c| acc.checked_mul(&x)?.checked_add(c))
    }

    /// First derivative.
    pub fn derivative(&self) -> ArithmeticResult<Self> {
        let coeffs = self
            .coeffs
            .iter()
            .enumerate()
            .skip(1)
            .map(|(exp, c)| {
                let exp = i64::try_from(exp).map_err(|_| crate::error::ArithmeticError::Overflow {
                    operation: "differentiate",
                })?;
                c.checked_mul_int(exp)
            })
            .collect::<ArithmeticResult<Vec<_>>>()?;
        Ok(Self::new(coeffs))
    }

    /// nth derivative; `diff(0)` is the polynomial itself.
    pub fn diff(&self, n: usize) -> ArithmeticResult<Self> {
        let mut result = self.clone();
        for _ in 0..n {
            if result.is_zero() {
                break;
            }
            result = result.derivative()?;
        }
        Ok(result)
    }

    pub fn checked_add(&self, other: &Self) -> ArithmeticResult<Self> {
        self.zip_with(other, Rational::checked_add)
    }

    pub fn checked_sub(&self, other: &Self) -> ArithmeticResult<Self> {
        self.zip_with(other, Rational::checked_sub)
    }

    /// Product by convolution of the coefficient lists.
    pub fn checked_mul(&self, other: &Self) -> ArithmeticResult<Self> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::zero());
        }

        let mut coeffs = vec![Rational::zero(); self.coeffs.len() + other.coeffs.len() - 1];
        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = coeffs[i + j].checked_add(&a.checked_mul(b)?)?;
            }
        }
        Ok(Self::new(coeffs))
    }

    pub fn checked_neg(&self) -> ArithmeticResult<Self> {
        let coeffs = self
            .coeffs
            .iter()
            .map(Rational::checked_neg)
            .collect::<ArithmeticResult<Vec<_>>>()?;
        Ok(Self::new(coeffs))
    }

    /// Applies `op` coefficient-wise, padding the shorter side with zeros.
    fn zip_with(
        &self,
        other: &Self,
        op: impl Fn(&Rational, &Rational) -> ArithmeticResult<Rational>,
    ) -> ArithmeticResult<Self> {
        let len = self.coeffs.len().max(other.coeffs.len());
        let coeffs = (0..len)
            .map(|exp| op(&self.coefficient(exp), &other.coefficient(exp)))
            .collect::<ArithmeticResult<Vec<_>>>()?;
        Ok(Self::new(coeffs))
    }
}

/// Signed terms in ascending degree: `+2+4x-1x^2`.
///
/// Non-integer coefficients are parenthesized (`+(1/2)x`); zero terms are
/// skipped and the zero polynomial renders as `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (exp, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }

            if c.is_integer() {
                write!(f, "{:+}", c.numerator())?;
            } else {
                let sign = if c.signum() < 0 { '-' } else { '+' };
                write!(f, "{}({}/{})", sign, c.numerator().unsigned_abs(), c.denominator())?;
            }

            match exp {
                0 => {}
                1 => write!(f, "x")?,
                _ => write!(f, "x^{}", exp)?,
            }
        }
        Ok(())
    }
}

macro_rules! forward_poly_binop {
    ($trait:ident, $method:ident, $checked:ident, $verb:literal) => {
        impl $trait for &Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Self) -> Polynomial {
                self.$checked(rhs)
                    .unwrap_or_else(|err| panic!("attempt to {} polynomials: {}", $verb, err))
            }
        }

        impl $trait for Polynomial {
            type Output = Polynomial;

            fn $method(self, rhs: Polynomial) -> Polynomial {
                $trait::$method(&self, &rhs)
            }
        }
    };
}

forward_poly_binop!(Add, add, checked_add, "add");
forward_poly_binop!(Sub, sub, checked_sub, "subtract");
forward_poly_binop!(Mul, mul, checked_mul, "multiply");

impl Neg for Polynomial {
    type Output = Polynomial;

    fn neg(self) -> Polynomial {
        self.checked_neg()
            .unwrap_or_else(|err| panic!("attempt to negate polynomial: {}", err))
    }
}
