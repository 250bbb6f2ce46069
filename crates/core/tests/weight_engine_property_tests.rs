//! Property-based integration tests for the blueprint weight engine.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use blueprint_core::blueprint::weight_engine::allocate;
use blueprint_core::blueprint::{CategoryWeight, DistributionMode};
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

/// Generates a non-negative weight with up to two decimal places.
fn arb_weight() -> impl Strategy<Value = Decimal> {
    (0u32..=10_000).prop_map(|cents| Decimal::new(i64::from(cents), 2))
}

/// Generates a fully weighted category list whose weights do not all equal zero.
fn arb_weighted_categories(max_count: usize) -> impl Strategy<Value = Vec<CategoryWeight>> {
    proptest::collection::vec(arb_weight(), 1..=max_count)
        .prop_filter("total weight must be positive", |weights| {
            weights.iter().any(|w| !w.is_zero())
        })
        .prop_map(|weights| {
            weights
                .into_iter()
                .enumerate()
                .map(|(i, w)| CategoryWeight::new(format!("BC{:03}", i), format!("Cat {}", i), Some(w)))
                .collect()
        })
}

/// Generates a category list where each weight may be missing.
fn arb_mixed_categories(max_count: usize) -> impl Strategy<Value = Vec<CategoryWeight>> {
    proptest::collection::vec(proptest::option::of(arb_weight()), 1..=max_count).prop_map(
        |weights| {
            weights
                .into_iter()
                .enumerate()
                .map(|(i, w)| CategoryWeight::new(format!("BC{:03}", i), format!("Cat {}", i), w))
                .collect()
        },
    )
}

/// Generated weights carry two decimal places, so cents are exact integers.
fn weight_in_cents(weight: Decimal) -> i128 {
    let mut weight = weight;
    weight.rescale(2);
    weight.mantissa()
}

/// Generates a requested total in the range the server accepts.
fn arb_total() -> impl Strategy<Value = u32> {
    1u32..=1000
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Allocations always add up to the requested total.
    #[test]
    fn prop_conservation(categories in arb_weighted_categories(40), total in arb_total()) {
        let allocation = allocate(&categories, total).unwrap();
        prop_assert_eq!(allocation.total(), u64::from(total));
        prop_assert_eq!(allocation.categories.len(), categories.len());
    }

    /// Proportional counts stay within one unit of the exact share.
    ///
    /// Checked in integer cents: `|allocated * W - w * total| < W`, where `W`
    /// is the total weight, so no decimal division is involved.
    #[test]
    fn prop_proportional_fidelity(categories in arb_weighted_categories(40), total in arb_total()) {
        let allocation = allocate(&categories, total).unwrap();
        prop_assert_eq!(allocation.mode, DistributionMode::Proportional);

        let cents: Vec<i128> = categories.iter().map(|c| weight_in_cents(c.weight.unwrap())).collect();
        let total_cents: i128 = cents.iter().sum();
        for ((category, result), w) in categories.iter().zip(&allocation.categories).zip(&cents) {
            let diff = (i128::from(result.allocated) * total_cents - w * i128::from(total)).abs();
            prop_assert!(
                diff < total_cents,
                "{} got {} of {} with weight {}/{}",
                category.code, result.allocated, total, w, total_cents
            );
        }
    }

    /// Mode is proportional exactly when no weight is missing.
    #[test]
    fn prop_mode_derivation(categories in arb_mixed_categories(20), total in arb_total()) {
        let all_weighted = categories.iter().all(|c| c.weight.is_some());
        let all_zero = categories.iter().all(|c| c.weight.map(|w| w.is_zero()).unwrap_or(false));

        match allocate(&categories, total) {
            Ok(allocation) => {
                let expected = if all_weighted {
                    DistributionMode::Proportional
                } else {
                    DistributionMode::Uniform
                };
                prop_assert_eq!(allocation.mode, expected);
                prop_assert_eq!(allocation.total(), u64::from(total));
            }
            Err(err) => {
                prop_assert!(all_weighted && all_zero, "unexpected error: {}", err);
            }
        }
    }

    /// Uniform counts differ by at most one and the extras sit at the front.
    #[test]
    fn prop_uniform_fairness(count in 1usize..60, total in arb_total()) {
        let categories: Vec<CategoryWeight> = (0..count)
            .map(|i| CategoryWeight::new(format!("BC{:03}", i), format!("Cat {}", i), None))
            .collect();

        let allocation = allocate(&categories, total).unwrap();
        let counts = allocation.counts();
        let base = total / count as u32;
        let remainder = (total % count as u32) as usize;

        for (i, c) in counts.iter().enumerate() {
            let expected = if i < remainder { base + 1 } else { base };
            prop_assert_eq!(*c, expected);
        }
    }

    /// Re-running the engine on the same input yields the same output.
    #[test]
    fn prop_determinism(categories in arb_mixed_categories(30), total in arb_total()) {
        let first = allocate(&categories, total);
        let second = allocate(&categories, total);
        prop_assert_eq!(first, second);
    }
}
