//! Property-based tests for exact arithmetic and catalog rankings.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    use crate::rational::gcd;
    use crate::{GroceryCatalog, GroceryItem, Polynomial, Rational};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating non-zero integers
    fn non_zero_int() -> impl Strategy<Value = i64> {
        prop_oneof![(-1000i64..=-1i64), (1i64..=1000i64)]
    }

    fn rational() -> impl Strategy<Value = Rational> {
        (small_int(), non_zero_int()).prop_map(|(n, d)| Rational::new(n, d).unwrap())
    }

    fn ingredient_lists() -> impl Strategy<Value = Vec<Vec<String>>> {
        let ingredient = prop::sample::select(vec!["Salt", "Water", "Sugar", "Oil", "Fish", "Beef"]);
        prop::collection::vec(prop::collection::vec(ingredient.prop_map(String::from), 0..6), 0..8)
    }

    fn catalog_from(lists: Vec<Vec<String>>) -> GroceryCatalog {
        lists
            .into_iter()
            .enumerate()
            .map(|(i, ingredients)| {
                GroceryItem::new(format!("Item {}", i), Decimal::ONE, "Can", Decimal::ZERO, 1, ingredients)
                    .unwrap()
            })
            .collect()
    }

    proptest! {
        // Canonical form

        #[test]
        fn rational_is_canonical(n in any::<i32>(), d in any::<i32>().prop_filter("non-zero", |d| *d != 0)) {
            let q = Rational::new(i64::from(n), i64::from(d)).unwrap();
            prop_assert!(q.denominator() > 0);
            prop_assert_eq!(gcd(i128::from(q.numerator().abs()), i128::from(q.denominator())), 1);
        }

        #[test]
        fn rational_zero_denominator_fails(n in any::<i64>()) {
            prop_assert!(Rational::new(n, 0).is_err());
        }

        #[test]
        fn rational_scaling_is_equal(n in small_int(), d in non_zero_int(), k in non_zero_int()) {
            prop_assert_eq!(Rational::new(n * k, d * k).unwrap(), Rational::new(n, d).unwrap());
        }

        // Field laws

        #[test]
        fn rational_add_sub_round_trip(a in rational(), b in rational()) {
            prop_assert_eq!(a.checked_add(&b).unwrap().checked_sub(&b).unwrap(), a);
        }

        #[test]
        fn rational_mul_div_round_trip(a in rational(), b in rational()) {
            prop_assume!(!b.is_zero());
            prop_assert_eq!((a * b) / b, a);
        }

        #[test]
        fn rational_add_commutative(a in rational(), b in rational()) {
            prop_assert_eq!(a + b, b + a);
        }

        #[test]
        fn rational_distributive(a in rational(), b in rational(), c in rational()) {
            prop_assert_eq!(a * (b + c), a * b + a * c);
        }

        #[test]
        fn rational_order_matches_difference_sign(a in rational(), b in rational()) {
            let diff = a - b;
            prop_assert_eq!(a.cmp(&b), diff.signum().cmp(&0));
        }

        #[test]
        fn rational_display_parses_back(a in rational()) {
            prop_assert_eq!(a.to_string().parse::<Rational>().unwrap(), a);
        }

        // Polynomials

        #[test]
        fn polynomial_sum_evaluates_as_sum(
            p in prop::collection::vec(small_int(), 0..5),
            q in prop::collection::vec(small_int(), 0..5),
            x in small_int(),
        ) {
            let p = Polynomial::from_integers(&p);
            let q = Polynomial::from_integers(&q);
            let lhs = (&p + &q).evaluate(x).unwrap();
            let rhs = p.evaluate(x).unwrap() + q.evaluate(x).unwrap();
            prop_assert_eq!(lhs, rhs);
        }

        // Catalog rankings

        #[test]
        fn top_ingredients_bounded_and_stable(lists in ingredient_lists(), n in 0usize..10) {
            let catalog = catalog_from(lists);
            let distinct = catalog.ingredients_list().len();

            let first = catalog.top_ingredients(n);
            prop_assert_eq!(first.len(), n.min(distinct));
            prop_assert_eq!(first, catalog.top_ingredients(n));
        }

        #[test]
        fn top_ingredients_sorted_by_count(lists in ingredient_lists()) {
            let catalog = catalog_from(lists);
            let count = |name: &str| {
                catalog.iter().flat_map(|i| i.ingredients()).filter(|i| *i == name).count()
            };

            let ranked = catalog.top_ingredients(usize::MAX);
            for pair in ranked.windows(2) {
                prop_assert!(count(&pair[0]) >= count(&pair[1]));
            }
        }
    }
}
