//! End-to-end report over a sample shopping list.

use pantry_core::{
    CatalogConfig, DuplicateNamePolicy, GroceryCatalog, GroceryItem, Money, Rational, ValidationError,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pantry_core=debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

fn item(name: &str, price: Decimal, category: &str, vat: Decimal, quantity: i64, ingredients: &[&str]) -> GroceryItem {
    let ingredients = ingredients.iter().map(|s| s.to_string()).collect();
    GroceryItem::new(name, price, category, vat, quantity, ingredients).unwrap()
}

fn shopping_items() -> Vec<GroceryItem> {
    vec![
        item("Beef", dec!(12.3), "Meat", dec!(10), 2, &["Beef"]),
        item("Pork", dec!(6.95), "Meat", dec!(20), 1, &["Pork", "Salt"]),
        item("Tomato Sauce", dec!(1.2), "Can", dec!(10), 5, &["Tomato", "Salt", "Water", "Sugar"]),
        item("Beans", dec!(3.5), "Can", dec!(10), 4, &["Beans", "Water", "Salt", "Sugar", "Preservatives"]),
        item("Tuna", dec!(2.5), "Can", dec!(5.5), 2, &["Fish", "Oil", "Water", "Salt"]),
    ]
}

#[test]
fn shopping_list_report() {
    init_tracing();
    let catalog = GroceryCatalog::new(shopping_items());

    let meat: Vec<&str> = catalog.items_with_meat().iter().map(|i| i.name()).collect();
    assert_eq!(meat, vec!["Beef", "Pork"]);

    let prices = catalog.prices_with_vat();
    assert_eq!(prices["Beef"], Money::from_decimal(dec!(27.06)));
    assert_eq!(prices["Pork"], Money::from_decimal(dec!(8.34)));
    assert_eq!(prices["Tuna"], Money::from_decimal(dec!(5.275)));

    assert_eq!(catalog.ingredients_list().len(), 10);
    assert_eq!(catalog.total_invoice().to_string(), "62.68 €");
    assert_eq!(catalog.total_for("Meat"), Money::from_decimal(dec!(35.40)));
    assert_eq!(catalog.total_for("Fruit"), Money::zero());
    assert_eq!(catalog.top_ingredients(3), vec!["Salt", "Water", "Sugar"]);
    assert_eq!(
        catalog.all_item_names(),
        vec!["Beef", "Pork", "Tomato Sauce", "Beans", "Tuna"]
    );

    let totals = catalog.price_by_category();
    let by_category: Vec<&str> = totals.keys().map(String::as_str).collect();
    assert_eq!(by_category, vec!["Meat", "Can"]);
}

#[test]
fn summary_serializes_for_reports() {
    let summary = GroceryCatalog::new(shopping_items()).summary();
    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["itemCount"], 5);
    assert_eq!(json["totalQuantity"], 14);

    let invoice: Decimal = json["totalInvoice"].as_str().unwrap().parse().unwrap();
    assert_eq!(invoice, dec!(62.675));
    let cans: Decimal = json["byCategory"]["Can"].as_str().unwrap().parse().unwrap();
    assert_eq!(cans, dec!(27.275));
}

#[test]
fn empty_catalog_reports_nothing() {
    let catalog = GroceryCatalog::new(vec![]);

    assert!(catalog.items_with_meat().is_empty());
    assert!(catalog.prices_with_vat().is_empty());
    assert!(catalog.ingredients_list().is_empty());
    assert!(catalog.top_ingredients(3).is_empty());
    assert_eq!(catalog.total_invoice(), Money::zero());
    assert_eq!(catalog.total_invoice().to_string(), "0.00 €");
}

#[test]
fn config_driven_catalog() {
    init_tracing();
    let config = CatalogConfig::from_toml_str(
        r#"
        [catalog]
        meat_category = "Can"
        duplicate_names = "reject"
        "#,
    )
    .unwrap();
    assert_eq!(config.duplicate_names(), DuplicateNamePolicy::Reject);

    let catalog = GroceryCatalog::with_config(shopping_items(), &config).unwrap();
    assert_eq!(catalog.items_with_meat().len(), 3);

    let mut items = shopping_items();
    items.push(item("Beef", dec!(15), "Meat", dec!(10), 1, &["Beef"]));
    let err = GroceryCatalog::with_config(items.clone(), &config).unwrap_err();
    assert!(matches!(err, ValidationError::Duplicate { .. }));

    // default policy keeps the first position and the last price
    let catalog = GroceryCatalog::new(items);
    let prices = catalog.prices_with_vat();
    assert_eq!(prices.len(), 5);
    assert_eq!(prices.get_index(0).map(|(k, _)| k.as_str()), Some("Beef"));
    assert_eq!(prices["Beef"], Money::from_decimal(dec!(16.5)));
}

#[test]
fn rational_arithmetic_session() {
    let a = Rational::new(2, 3).unwrap();
    let b = Rational::new(3, 4).unwrap();

    assert_eq!((a + b).to_string(), "17/12");
    assert_eq!((a - b).to_string(), "-1/12");
    assert_eq!((a * b).to_string(), "1/2");
    assert_eq!((a / b).to_string(), "8/9");
    assert_eq!(Rational::new(4, 2).unwrap().to_string(), "2/1");
    assert!(Rational::new(1, 0).is_err());
}
