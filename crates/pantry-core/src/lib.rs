//! # pantry-core: Pure Business Logic for Pantry
//!
//! Exact arithmetic and grocery-list aggregation as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pantry Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Host application                             │   │
//! │  │    reads config text ──► builds items ──► prints reports        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pantry-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐ │   │
//! │  │   │ rational  │  │ polynomial │  │   money   │  │  grocery  │ │   │
//! │  │   │ Rational  │  │ Polynomial │  │   Money   │  │  Catalog  │ │   │
//! │  │   │   gcd     │  │ diff, eval │  │  VatRate  │  │  Summary  │ │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘ │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`rational`] - Exact fractions, always in lowest terms
//! - [`polynomial`] - Polynomials over rationals (evaluate, differentiate)
//! - [`money`] - Money type with exact decimal arithmetic (no floating point!)
//! - [`types`] - Domain types (GroceryItem, VatRate)
//! - [`grocery`] - Catalog aggregation (totals, VAT, rankings)
//! - [`validation`] - Business rule validation
//! - [`config`] - Layered catalog configuration
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Exact Numbers**: Rationals and decimals, never floats
//! 4. **Explicit Errors**: All errors are typed; operators panic only where std integers do
//!
//! ## Example Usage
//!
//! ```rust
//! use pantry_core::{GroceryCatalog, GroceryItem, Rational};
//! use rust_decimal::Decimal;
//!
//! let sum = Rational::new(2, 3).unwrap() + Rational::new(3, 4).unwrap();
//! assert_eq!(sum.to_string(), "17/12");
//!
//! let beef = GroceryItem::new("Beef", Decimal::new(123, 1), "Meat", Decimal::TEN, 2, vec![]).unwrap();
//! let catalog = GroceryCatalog::new(vec![beef]);
//! assert_eq!(catalog.total_invoice().to_string(), "27.06 €");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod grocery;
pub mod money;
pub mod polynomial;
pub mod rational;
pub mod types;
pub mod validation;

#[cfg(test)]
mod proptests;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use pantry_core::Money` instead of
// `use pantry_core::money::Money`

pub use config::{CatalogConfig, DuplicateNamePolicy};
pub use error::{ArithmeticError, CoreError, CoreResult, ValidationError};
pub use grocery::{CatalogSummary, GroceryCatalog};
pub use money::Money;
pub use polynomial::Polynomial;
pub use rational::Rational;
pub use types::{GroceryItem, VatRate};
