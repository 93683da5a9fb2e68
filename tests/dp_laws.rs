#![cfg(feature = "dp")]
//! Property-based tests for the dynamic-programming suite, checked
//! against brute-force references on small inputs.

use algokit::dp::{
    coin_change, edit_distance, house_robber, longest_increasing_subsequence, unique_paths,
};
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_word() -> impl Strategy<Value = String> {
    "[a-d]{0,12}"
}

fn arbitrary_small_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50..50i32, 0..24)
}

/// O(n^2) reference for the longest strictly increasing subsequence.
fn lis_by_quadratic_scan(values: &[i32]) -> usize {
    let mut best_ending_here = vec![1usize; values.len()];
    for index in 0..values.len() {
        for earlier in 0..index {
            if values[earlier] < values[index] {
                best_ending_here[index] = best_ending_here[index].max(best_ending_here[earlier] + 1);
            }
        }
    }
    best_ending_here.into_iter().max().unwrap_or(0)
}

/// Exhaustive reference for the maximum non-adjacent sum on a ring of
/// houses (the first and last are neighbors), n <= 16.
fn rob_by_subsets(values: &[u32]) -> u64 {
    let length = values.len();
    let mut best = 0u64;
    for mask in 0u32..(1 << length) {
        if mask & (mask << 1) != 0 {
            continue;
        }
        let wraps = length > 1 && mask & 1 != 0 && mask & (1 << (length - 1)) != 0;
        if wraps {
            continue;
        }
        let total: u64 = values
            .iter()
            .enumerate()
            .filter(|(index, _)| mask & (1 << index) != 0)
            .map(|(_, &value)| u64::from(value))
            .sum();
        best = best.max(total);
    }
    best
}

// =============================================================================
// edit_distance Laws: metric axioms
// =============================================================================

proptest! {
    #[test]
    fn prop_edit_distance_is_zero_on_equal_words(word in arbitrary_word()) {
        prop_assert_eq!(edit_distance(&word, &word), 0);
    }

    #[test]
    fn prop_edit_distance_is_symmetric(
        first in arbitrary_word(),
        second in arbitrary_word(),
    ) {
        prop_assert_eq!(edit_distance(&first, &second), edit_distance(&second, &first));
    }

    #[test]
    fn prop_edit_distance_is_bounded_by_longer_length(
        first in arbitrary_word(),
        second in arbitrary_word(),
    ) {
        let distance = edit_distance(&first, &second);
        let first_length = first.chars().count();
        let second_length = second.chars().count();

        prop_assert!(distance >= first_length.abs_diff(second_length));
        prop_assert!(distance <= first_length.max(second_length));
    }
}

// =============================================================================
// longest_increasing_subsequence Law: agrees with the O(n^2) reference
// =============================================================================

proptest! {
    #[test]
    fn prop_lis_agrees_with_quadratic_reference(values in arbitrary_small_values()) {
        prop_assert_eq!(
            longest_increasing_subsequence(&values),
            lis_by_quadratic_scan(&values)
        );
    }
}

// =============================================================================
// coin_change Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_coin_change_with_unit_coin_pays_exactly(amount in 0u32..500) {
        prop_assert_eq!(coin_change(&[1], amount), Some(amount as usize));
    }

    #[test]
    fn prop_coin_change_never_overpays(
        coins in prop::collection::vec(1u32..50, 1..6),
        amount in 0u32..200,
    ) {
        if let Some(count) = coin_change(&coins, amount) {
            let smallest = u64::from(*coins.iter().min().unwrap());
            prop_assert!(count as u64 * smallest <= u64::from(amount));
        }
    }
}

// =============================================================================
// house_robber Law: agrees with the exhaustive subset reference
// =============================================================================

proptest! {
    #[test]
    fn prop_house_robber_agrees_with_subset_reference(
        values in prop::collection::vec(0u32..1000, 0..16),
    ) {
        prop_assert_eq!(house_robber(&values), rob_by_subsets(&values));
    }
}

// =============================================================================
// unique_paths Law: Pascal recurrence
// =============================================================================

proptest! {
    #[test]
    fn prop_unique_paths_satisfies_pascal_recurrence(
        rows in 2usize..12,
        columns in 2usize..12,
    ) {
        prop_assert_eq!(
            unique_paths(rows, columns),
            unique_paths(rows - 1, columns) + unique_paths(rows, columns - 1)
        );
    }
}
