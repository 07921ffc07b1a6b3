//! # Error Types
//!
//! Domain-specific error types for pantry-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  pantry-core errors (this file)                                        │
//! │  ├── ArithmeticError  - Division by zero, overflow, bad rational text  │
//! │  ├── ValidationError  - Invalid grocery item / catalog input           │
//! │  └── CoreError        - Umbrella for callers (incl. config failures)   │
//! │                                                                         │
//! │  Flow: ArithmeticError / ValidationError → CoreError → host app        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Arithmetic Error
// =============================================================================

/// Failures of exact rational and polynomial arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A zero denominator was supplied, or a value was divided by zero.
    ///
    /// ## When This Occurs
    /// - `Rational::new(n, 0)`
    /// - `a.checked_div(&zero)`
    /// - `zero.recip()`
    #[error("Division by zero")]
    DivisionByZero,

    /// The reduced result does not fit in a 64-bit numerator/denominator.
    #[error("Arithmetic overflow: {operation}")]
    Overflow { operation: &'static str },

    /// Text could not be parsed as a rational (`"n/d"` or `"n"`).
    #[error("Invalid rational '{input}': {reason}")]
    Parse { input: String, reason: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when grocery data doesn't meet requirements.
/// Raised at construction time, before any aggregate is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative (got {value})")]
    MustBeNonNegative { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max} (got {value})")]
    OutOfRange {
        field: String,
        min: String,
        max: String,
        value: String,
    },

    /// Duplicate value (e.g., two items with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Core Error
// =============================================================================

/// Umbrella error for callers that mix arithmetic, validation and config.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Arithmetic error (wraps ArithmeticError).
    #[error("Arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration text or values are invalid.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// TOML parse error.
    #[error("Config parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arithmetic_error_messages() {
        assert_eq!(ArithmeticError::DivisionByZero.to_string(), "Division by zero");

        let err = ArithmeticError::Overflow { operation: "add" };
        assert_eq!(err.to_string(), "Arithmetic overflow: add");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must not be negative (got -1)");

        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Duplicate {
            field: "item name".to_string(),
            value: "Beef".to_string(),
        };
        assert_eq!(err.to_string(), "item name 'Beef' already exists");
    }

    #[test]
    fn test_errors_convert_to_core_error() {
        let core_err: CoreError = ArithmeticError::DivisionByZero.into();
        assert!(matches!(core_err, CoreError::Arithmetic(_)));

        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
