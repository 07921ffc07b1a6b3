//! # Grocery Catalog
//!
//! Read-only aggregation over a list of [`GroceryItem`]s.
//!
//! ## Report Operations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog Projections                                  │
//! │                                                                         │
//! │  Question                        Method                 Result          │
//! │  ────────                        ──────                 ──────          │
//! │  Which items are meat?           items_with_meat()      Vec<&Item>      │
//! │  Price of each item w/ VAT?      prices_with_vat()      name → Money    │
//! │  Which ingredients overall?      ingredients_list()     set             │
//! │  What do I pay?                  total_invoice()        Money           │
//! │  What do I pay for "Can"?        total_for("Can")       Money           │
//! │  Spend per category?             price_by_category()    category → Money│
//! │  How much of that is VAT?        total_vat()            Money           │
//! │  Most common ingredients?        top_ingredients(n)     Vec<String>     │
//! │  What is on the list?            all_item_names()       Vec<&str>       │
//! │                                                                         │
//! │  NOTE: Every projection is a pure fold over `items` in insertion       │
//! │        order. Maps and sets keep first-seen key order.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use crate::config::{CatalogConfig, CatalogSettings, DuplicateNamePolicy};
use crate::money::Money;
use crate::types::GroceryItem;
use crate::validation::{validate_unique_names, ValidationResult};

/// An ordered, immutable collection of grocery items.
///
/// ## Invariants
/// - Items keep insertion order
/// - Under [`DuplicateNamePolicy::Reject`], item names are unique
/// - An empty catalog is valid; every aggregate over it is zero/empty
/// - Every item is within the validation caps, so sums never overflow
#[derive(Debug, Clone, Default)]
pub struct GroceryCatalog {
    items: Vec<GroceryItem>,
    settings: CatalogSettings,
}

impl GroceryCatalog {
    /// Creates a catalog with default settings (meat category `"Meat"`,
    /// duplicate names last-wins).
    pub fn new(items: Vec<GroceryItem>) -> Self {
        Self::build(items, CatalogSettings::default())
    }

    /// Creates a catalog honoring `config`.
    ///
    /// ## Errors
    /// `ValidationError::Duplicate` when two items share a name and the
    /// policy is [`DuplicateNamePolicy::Reject`].
    pub fn with_config(items: Vec<GroceryItem>, config: &CatalogConfig) -> ValidationResult<Self> {
        if config.duplicate_names() == DuplicateNamePolicy::Reject {
            if let Err(err) = validate_unique_names(items.iter().map(GroceryItem::name)) {
                debug!(error = %err, "Rejected grocery catalog");
                return Err(err);
            }
        }

        Ok(Self::build(items, config.catalog.clone()))
    }

    fn build(items: Vec<GroceryItem>, settings: CatalogSettings) -> Self {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name()) {
                warn!(name = item.name(), "Duplicate item name; later price wins in name-keyed reports");
            }
        }

        debug!(
            items = items.len(),
            meat_category = %settings.meat_category,
            "Built grocery catalog"
        );

        GroceryCatalog { items, settings }
    }

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, GroceryItem> {
        self.items.iter()
    }

    /// Number of item lines (not the total quantity).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items of the meat category, in insertion order.
    pub fn items_with_meat(&self) -> Vec<&GroceryItem> {
        self.items
            .iter()
            .filter(|i| i.category() == self.settings.meat_category)
            .collect()
    }

    /// Item name → total price including VAT.
    ///
    /// A repeated name keeps its first position and takes the last price.
    pub fn prices_with_vat(&self) -> IndexMap<String, Money> {
        let mut prices = IndexMap::with_capacity(self.items.len());
        for item in &self.items {
            prices.insert(item.name().to_string(), item.total_price());
        }
        prices
    }

    /// Every ingredient once, in first-seen order.
    pub fn ingredients_list(&self) -> IndexSet<String> {
        self.items
            .iter()
            .flat_map(|i| i.ingredients())
            .cloned()
            .collect()
    }

    /// Sum of every item's total price (VAT included).
    pub fn total_invoice(&self) -> Money {
        self.items.iter().map(GroceryItem::total_price).sum()
    }

    /// Sum of total prices for items whose category is exactly `category`.
    pub fn total_for(&self, category: &str) -> Money {
        self.items
            .iter()
            .filter(|i| i.category() == category)
            .map(GroceryItem::total_price)
            .sum()
    }

    /// Category → summed total price, categories in first-seen order.
    pub fn price_by_category(&self) -> IndexMap<String, Money> {
        let mut totals: IndexMap<String, Money> = IndexMap::new();
        for item in &self.items {
            *totals.entry(item.category().to_string()).or_default() += item.total_price();
        }
        totals
    }

    /// Sum of every item's VAT.
    pub fn total_vat(&self) -> Money {
        self.items.iter().map(GroceryItem::total_vat).sum()
    }

    /// Sum of every item's pre-VAT line total.
    pub fn subtotal(&self) -> Money {
        self.items.iter().map(GroceryItem::subtotal).sum()
    }

    /// Total units across all lines.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(GroceryItem::quantity).sum()
    }

    /// The `n` most frequent ingredients.
    ///
    /// Every occurrence counts, even repeats within one item. Ties keep
    /// first-seen order. Returns at most `min(n, distinct ingredients)` names.
    ///
    /// ## Example
    /// ```rust
    /// use pantry_core::grocery::GroceryCatalog;
    /// use pantry_core::types::GroceryItem;
    /// use rust_decimal::Decimal;
    ///
    /// let item = |name: &str, ingredients: &[&str]| {
    ///     let ingredients = ingredients.iter().map(|s| s.to_string()).collect();
    ///     GroceryItem::new(name, Decimal::ONE, "Can", Decimal::ZERO, 1, ingredients).unwrap()
    /// };
    /// let catalog = GroceryCatalog::new(vec![
    ///     item("Beans", &["Beans", "Water", "Salt"]),
    ///     item("Tuna", &["Fish", "Salt", "Oil"]),
    /// ]);
    ///
    /// assert_eq!(catalog.top_ingredients(2), vec!["Salt", "Beans"]);
    /// ```
    pub fn top_ingredients(&self, n: usize) -> Vec<String> {
        let mut counts: IndexMap<&str, usize> = IndexMap::new();
        for ingredient in self.items.iter().flat_map(|i| i.ingredients()) {
            *counts.entry(ingredient.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        // sort_by is stable, so equal counts stay in first-seen order
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        ranked
            .into_iter()
            .take(n)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    /// Item names in insertion order, duplicates included.
    pub fn all_item_names(&self) -> Vec<&str> {
        self.items.iter().map(GroceryItem::name).collect()
    }

    /// Snapshot of the headline totals.
    pub fn summary(&self) -> CatalogSummary {
        CatalogSummary::from(self)
    }
}

impl FromIterator<GroceryItem> for GroceryCatalog {
    fn from_iter<I: IntoIterator<Item = GroceryItem>>(iter: I) -> Self {
        GroceryCatalog::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a GroceryCatalog {
    type Item = &'a GroceryItem;
    type IntoIter = std::slice::Iter<'a, GroceryItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Catalog totals summary, ready to serialize for a host UI or report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    pub item_count: usize,
    pub total_quantity: i64,
    pub subtotal: Money,
    pub total_vat: Money,
    pub total_invoice: Money,
    pub by_category: IndexMap<String, Money>,
}

impl From<&GroceryCatalog> for CatalogSummary {
    fn from(catalog: &GroceryCatalog) -> Self {
        CatalogSummary {
            item_count: catalog.len(),
            total_quantity: catalog.total_quantity(),
            subtotal: catalog.subtotal(),
            total_vat: catalog.total_vat(),
            total_invoice: catalog.total_invoice(),
            by_category: catalog.price_by_category(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
