//! Hashing-based grouping and order statistics.
//!
//! # Overview
//!
//! | Routine          | Time            | Space |
//! |------------------|-----------------|-------|
//! | `group_anagrams` | O(n · k log k)  | O(n · k) |
//! | `top_k_frequent` | O(n)            | O(n)  |
//! | `kth_largest`    | O(n) expected   | O(1)  |
//!
//! # Examples
//!
//! ```rust
//! use algokit::select::kth_largest;
//!
//! let mut values = vec![3, 2, 1, 5, 6, 4];
//! assert_eq!(kth_largest(&mut values, 2), Ok(5));
//! ```

use std::collections::HashMap;

use crate::error::InputError;

/// Groups words that are anagrams of each other.
///
/// Words hash to their sorted character sequence. Within a group, words
/// keep their input order; groups are sorted by their first word so the
/// output is deterministic.
///
/// # Complexity
///
/// O(n · k log k) time for n words of length k
///
/// # Examples
///
/// ```rust
/// use algokit::select::group_anagrams;
///
/// let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
/// assert_eq!(
///     groups,
///     vec![
///         vec!["bat".to_string()],
///         vec!["eat".to_string(), "tea".to_string(), "ate".to_string()],
///         vec!["tan".to_string(), "nat".to_string()],
///     ]
/// );
/// ```
#[must_use]
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut groups: HashMap<Vec<char>, Vec<String>> = HashMap::new();
    for &word in words {
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        groups.entry(key).or_default().push(word.to_string());
    }
    let mut grouped: Vec<Vec<String>> = groups.into_values().collect();
    grouped.sort_by(|left, right| left[0].cmp(&right[0]));
    grouped
}

/// Returns the `k` most frequent values, most frequent first, ties broken
/// by ascending value.
///
/// Frequency buckets: a value occurring `c` times lands in bucket `c`,
/// and buckets are drained from the highest count down. Requesting more
/// values than exist returns all of them.
///
/// # Complexity
///
/// O(n) time and space
///
/// # Examples
///
/// ```rust
/// use algokit::select::top_k_frequent;
///
/// assert_eq!(top_k_frequent(&[1, 1, 1, 2, 2, 3], 2), vec![1, 2]);
/// assert_eq!(top_k_frequent(&[1], 1), vec![1]);
/// ```
#[must_use]
pub fn top_k_frequent(values: &[i32], k: usize) -> Vec<i32> {
    let mut frequencies: HashMap<i32, usize> = HashMap::new();
    for &value in values {
        *frequencies.entry(value).or_insert(0) += 1;
    }
    let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); values.len() + 1];
    for (value, count) in frequencies {
        buckets[count].push(value);
    }
    let mut most_frequent = Vec::with_capacity(k.min(values.len()));
    for bucket in buckets.iter_mut().rev() {
        bucket.sort_unstable();
        for &value in bucket.iter() {
            if most_frequent.len() == k {
                return most_frequent;
            }
            most_frequent.push(value);
        }
    }
    most_frequent
}

/// Orders `low`, `middle`, and `high` samples and returns the index
/// holding the median value, to steer the pivot away from sorted-input
/// worst cases.
fn median_of_three(values: &[i32], low: usize, high: usize) -> usize {
    let middle = low.midpoint(high);
    let mut ordered = [(values[low], low), (values[middle], middle), (values[high], high)];
    ordered.sort_unstable_by_key(|&(value, _)| value);
    ordered[1].1
}

/// Partitions `values[low..=high]` around the pivot at `pivot_index`,
/// returning the pivot's final position.
fn partition(values: &mut [i32], low: usize, high: usize, pivot_index: usize) -> usize {
    values.swap(pivot_index, high);
    let pivot_value = values[high];
    let mut boundary = low;
    for index in low..high {
        if values[index] < pivot_value {
            values.swap(index, boundary);
            boundary += 1;
        }
    }
    values.swap(boundary, high);
    boundary
}

/// Returns the `k`-th largest value (1-based) via in-place quickselect.
///
/// Destructive: the slice is partially reordered. The pivot is the
/// median of the low/middle/high samples, so already-sorted input does
/// not degrade to quadratic time.
///
/// # Errors
///
/// Returns [`InputError::RankOutOfRange`] unless `1 <= k <= len`.
///
/// # Complexity
///
/// O(n) expected time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::select::kth_largest;
///
/// let mut values = vec![3, 2, 1, 5, 6, 4];
/// assert_eq!(kth_largest(&mut values, 2), Ok(5));
///
/// let mut values = vec![3, 2, 3, 1, 2, 4, 5, 5, 6];
/// assert_eq!(kth_largest(&mut values, 4), Ok(4));
/// ```
pub fn kth_largest(values: &mut [i32], k: usize) -> Result<i32, InputError> {
    let length = values.len();
    if k == 0 || k > length {
        return Err(InputError::RankOutOfRange { rank: k, length });
    }
    // The k-th largest is the (len - k)-th smallest, 0-based.
    let target = length - k;
    let mut low = 0;
    let mut high = length - 1;
    loop {
        if low == high {
            return Ok(values[low]);
        }
        let pivot_index = median_of_three(values, low, high);
        let split = partition(values, low, high, pivot_index);
        match target.cmp(&split) {
            std::cmp::Ordering::Equal => return Ok(values[split]),
            std::cmp::Ordering::Less => high = split - 1,
            std::cmp::Ordering::Greater => low = split + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // group_anagrams Tests
    // =========================================================================

    #[rstest]
    fn test_group_anagrams_classic() {
        let groups = group_anagrams(&["eat", "tea", "tan", "ate", "nat", "bat"]);
        assert_eq!(
            groups,
            vec![
                vec!["bat".to_string()],
                vec!["eat".to_string(), "tea".to_string(), "ate".to_string()],
                vec!["tan".to_string(), "nat".to_string()],
            ]
        );
    }

    #[rstest]
    fn test_group_anagrams_empty_input() {
        assert!(group_anagrams(&[]).is_empty());
    }

    #[rstest]
    fn test_group_anagrams_empty_string() {
        assert_eq!(group_anagrams(&[""]), vec![vec![String::new()]]);
    }

    #[rstest]
    fn test_group_anagrams_no_shared_groups() {
        let groups = group_anagrams(&["ab", "cd"]);
        assert_eq!(groups.len(), 2);
    }

    // =========================================================================
    // top_k_frequent Tests
    // =========================================================================

    #[rstest]
    #[case(&[1, 1, 1, 2, 2, 3], 2, vec![1, 2])]
    #[case(&[1], 1, vec![1])]
    #[case(&[], 3, vec![])]
    #[case(&[5, 5, 6, 6], 2, vec![5, 6])]
    fn test_top_k_frequent(
        #[case] values: &[i32],
        #[case] k: usize,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(top_k_frequent(values, k), expected);
    }

    #[rstest]
    fn test_top_k_frequent_k_larger_than_distinct_count() {
        assert_eq!(top_k_frequent(&[4, 4, 7], 10), vec![4, 7]);
    }

    // =========================================================================
    // kth_largest Tests
    // =========================================================================

    #[rstest]
    #[case(vec![3, 2, 1, 5, 6, 4], 2, 5)]
    #[case(vec![3, 2, 3, 1, 2, 4, 5, 5, 6], 4, 4)]
    #[case(vec![1], 1, 1)]
    #[case(vec![7, 7, 7], 2, 7)]
    #[case(vec![2, 1], 2, 1)]
    fn test_kth_largest(#[case] mut values: Vec<i32>, #[case] k: usize, #[case] expected: i32) {
        assert_eq!(kth_largest(&mut values, k), Ok(expected));
    }

    #[rstest]
    fn test_kth_largest_sorted_input() {
        let mut ascending: Vec<i32> = (0..1000).collect();
        assert_eq!(kth_largest(&mut ascending, 1), Ok(999));
        let mut descending: Vec<i32> = (0..1000).rev().collect();
        assert_eq!(kth_largest(&mut descending, 1000), Ok(0));
    }

    #[rstest]
    #[case(vec![], 1)]
    #[case(vec![1, 2], 0)]
    #[case(vec![1, 2], 3)]
    fn test_kth_largest_rejects_bad_rank(#[case] mut values: Vec<i32>, #[case] k: usize) {
        let length = values.len();
        assert_eq!(
            kth_largest(&mut values, k),
            Err(InputError::RankOutOfRange { rank: k, length })
        );
    }
}
