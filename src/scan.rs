//! Single-pass and two-pointer array/string routines.
//!
//! Every routine in this module runs in one or two linear passes (or
//! O(n log n) where a sort is required) with O(1) or O(n) auxiliary space.
//! None of them retains state across calls.
//!
//! # Overview
//!
//! | Routine                     | Time       | Space |
//! |-----------------------------|------------|-------|
//! | `two_sum`                   | O(n)       | O(n)  |
//! | `max_profit`                | O(n)       | O(1)  |
//! | `is_palindrome`             | O(n)       | O(n)  |
//! | `max_subarray`              | O(n)       | O(1)  |
//! | `contains_duplicate`        | O(n)       | O(n)  |
//! | `move_zeroes`               | O(n)       | O(1)  |
//! | `max_area`                  | O(n)       | O(1)  |
//! | `product_except_self`       | O(n)       | O(n)  |
//! | `single_number`             | O(n)       | O(1)  |
//! | `intersection`              | O(n + m)   | O(n)  |
//! | `three_sum`                 | O(n²)      | O(n)  |
//! | `longest_unique_substring`  | O(n)       | O(n)  |
//! | `can_jump`                  | O(n)       | O(1)  |
//! | `merge_intervals`           | O(n log n) | O(n)  |
//! | `rotate_image`              | O(n²)      | O(1)  |
//! | `spiral_order`              | O(n · m)   | O(1)  |
//! | `fizz_buzz`                 | O(n)       | O(n)  |
//!
//! # Examples
//!
//! ```rust
//! use algokit::scan::{max_subarray, two_sum};
//!
//! assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
//! assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
//! ```

use std::collections::{HashMap, HashSet};

use crate::error::InputError;

/// Finds two distinct indices whose elements sum to `target`.
///
/// Scans left to right while maintaining a map from element value to its
/// first-seen index. Returns the first qualifying pair `(i, j)` with
/// `i < j`, or `None` if no pair sums to `target`.
///
/// # Arguments
///
/// * `values` - The sequence to search
/// * `target` - The required pair sum
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::two_sum;
///
/// assert_eq!(two_sum(&[2, 7, 11, 15], 9), Some((0, 1)));
/// assert_eq!(two_sum(&[3, 2, 4], 6), Some((1, 2)));
/// assert_eq!(two_sum(&[1, 2], 7), None);
/// ```
#[must_use]
pub fn two_sum(values: &[i32], target: i32) -> Option<(usize, usize)> {
    // Widen to i64 so the complement cannot overflow.
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        let complement = i64::from(target) - i64::from(value);
        if let Some(&partner) = first_seen.get(&complement) {
            return Some((partner, index));
        }
        first_seen.entry(i64::from(value)).or_insert(index);
    }
    None
}

/// Returns the maximum profit from one buy followed by one later sell.
///
/// Tracks the minimum price seen so far and the best profit achievable by
/// selling at the current price. Returns `0` when no profitable trade
/// exists (including empty input).
///
/// # Complexity
///
/// O(n) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::max_profit;
///
/// assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
/// assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
/// ```
#[must_use]
pub fn max_profit(prices: &[i32]) -> i32 {
    let mut minimum_price = i32::MAX;
    let mut best_profit = 0;
    for &price in prices {
        minimum_price = minimum_price.min(price);
        best_profit = best_profit.max(price.saturating_sub(minimum_price));
    }
    best_profit
}

/// Reports whether `text` reads the same forwards and backwards, comparing
/// only alphanumeric characters case-insensitively.
///
/// The empty string and strings with no alphanumeric characters are
/// palindromes.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::is_palindrome;
///
/// assert!(is_palindrome("A man, a plan, a canal: Panama"));
/// assert!(!is_palindrome("race a car"));
/// assert!(is_palindrome(""));
/// ```
#[must_use]
pub fn is_palindrome(text: &str) -> bool {
    let normalized: Vec<char> = text
        .chars()
        .filter(|character| character.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect();
    let mut left = 0;
    let mut right = normalized.len();
    while left + 1 < right {
        right -= 1;
        if normalized[left] != normalized[right] {
            return false;
        }
        left += 1;
    }
    true
}

/// Returns the maximum sum of any non-empty contiguous subsequence
/// (Kadane's algorithm).
///
/// The routine is defined only for non-empty input; an empty slice fails
/// fast with [`InputError::Empty`].
///
/// # Errors
///
/// Returns [`InputError::Empty`] if `values` is empty.
///
/// # Complexity
///
/// O(n) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::max_subarray;
///
/// assert_eq!(max_subarray(&[-2, 1, -3, 4, -1, 2, 1, -5, 4]), Ok(6));
/// assert_eq!(max_subarray(&[-3, -1, -2]), Ok(-1));
/// assert!(max_subarray(&[]).is_err());
/// ```
pub fn max_subarray(values: &[i32]) -> Result<i32, InputError> {
    let (&first, rest) = values.split_first().ok_or(InputError::Empty {
        routine_name: "max_subarray",
    })?;
    let mut running_sum = first;
    let mut best_sum = first;
    for &value in rest {
        running_sum = value.max(running_sum + value);
        best_sum = best_sum.max(running_sum);
    }
    Ok(best_sum)
}

/// Reports whether any value occurs more than once.
///
/// # Examples
///
/// ```rust
/// use algokit::scan::contains_duplicate;
///
/// assert!(contains_duplicate(&[1, 2, 3, 1]));
/// assert!(!contains_duplicate(&[1, 2, 3, 4]));
/// ```
#[must_use]
pub fn contains_duplicate(values: &[i32]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().any(|&value| !seen.insert(value))
}

/// Moves every zero to the end of the slice, preserving the relative order
/// of the non-zero elements. Operates in place.
///
/// # Complexity
///
/// O(n) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::move_zeroes;
///
/// let mut values = vec![0, 1, 0, 3, 12];
/// move_zeroes(&mut values);
/// assert_eq!(values, vec![1, 3, 12, 0, 0]);
/// ```
pub fn move_zeroes(values: &mut [i32]) {
    let mut write_position = 0;
    for read_position in 0..values.len() {
        if values[read_position] != 0 {
            values[write_position] = values[read_position];
            write_position += 1;
        }
    }
    for slot in &mut values[write_position..] {
        *slot = 0;
    }
}

/// Returns the largest area of water a pair of vertical lines can contain.
///
/// Two pointers converge from both ends; the shorter side moves inwards,
/// since moving the taller side can never improve the area.
///
/// Heights are expected to be non-negative.
///
/// # Complexity
///
/// O(n) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::max_area;
///
/// assert_eq!(max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
/// assert_eq!(max_area(&[1, 1]), 1);
/// ```
#[must_use]
pub fn max_area(heights: &[i32]) -> i64 {
    if heights.len() < 2 {
        return 0;
    }
    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut best_area = 0_i64;
    while left < right {
        let bounded_height = i64::from(heights[left].min(heights[right]));
        let width = (right - left) as i64;
        best_area = best_area.max(bounded_height * width);
        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }
    best_area
}

/// Returns a vector whose `i`-th element is the product of every input
/// element except `values[i]`, without using division.
///
/// Two passes: a prefix-product pass left to right, then a suffix-product
/// pass right to left. The caller must ensure each product fits in `i32`.
///
/// # Complexity
///
/// O(n) time, O(n) space (the output)
///
/// # Examples
///
/// ```rust
/// use algokit::scan::product_except_self;
///
/// assert_eq!(product_except_self(&[1, 2, 3, 4]), vec![24, 12, 8, 6]);
/// assert_eq!(product_except_self(&[-1, 1, 0, -3, 3]), vec![0, 0, 9, 0, 0]);
/// ```
#[must_use]
pub fn product_except_self(values: &[i32]) -> Vec<i32> {
    let length = values.len();
    let mut products = vec![1; length];
    for index in 1..length {
        products[index] = products[index - 1] * values[index - 1];
    }
    let mut suffix_product = 1;
    for index in (0..length).rev() {
        products[index] *= suffix_product;
        suffix_product *= values[index];
    }
    products
}

/// Returns the value that appears exactly once when every other value
/// appears exactly twice, using an XOR fold.
///
/// # Examples
///
/// ```rust
/// use algokit::scan::single_number;
///
/// assert_eq!(single_number(&[4, 1, 2, 1, 2]), 4);
/// ```
#[inline]
#[must_use]
pub fn single_number(values: &[i32]) -> i32 {
    values.iter().fold(0, |accumulator, &value| accumulator ^ value)
}

/// Returns the distinct values present in both slices, in ascending order.
///
/// The source of this routine returned hash-set order; the result is
/// sorted here so the output is deterministic.
///
/// # Complexity
///
/// O(n + m) time plus O(k log k) to sort the k shared values
///
/// # Examples
///
/// ```rust
/// use algokit::scan::intersection;
///
/// assert_eq!(intersection(&[1, 2, 2, 1], &[2, 2]), vec![2]);
/// assert_eq!(intersection(&[4, 9, 5], &[9, 4, 9, 8, 4]), vec![4, 9]);
/// ```
#[must_use]
pub fn intersection(first: &[i32], second: &[i32]) -> Vec<i32> {
    let first_set: HashSet<i32> = first.iter().copied().collect();
    let shared: HashSet<i32> = second
        .iter()
        .copied()
        .filter(|value| first_set.contains(value))
        .collect();
    let mut result: Vec<i32> = shared.into_iter().collect();
    result.sort_unstable();
    result
}

/// Returns every unique triple of values summing to zero.
///
/// Sorts a copy of the input, then fixes the first element and walks two
/// pointers over the remainder, skipping duplicate values on all three
/// positions. Triples are emitted in ascending lexicographic order.
///
/// # Complexity
///
/// O(n²) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::three_sum;
///
/// assert_eq!(
///     three_sum(&[-1, 0, 1, 2, -1, -4]),
///     vec![[-1, -1, 2], [-1, 0, 1]]
/// );
/// assert!(three_sum(&[0, 1, 1]).is_empty());
/// ```
#[must_use]
pub fn three_sum(values: &[i32]) -> Vec<[i32; 3]> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    let mut triples = Vec::new();
    for anchor in 0..sorted.len() {
        if anchor > 0 && sorted[anchor] == sorted[anchor - 1] {
            continue;
        }
        let mut left = anchor + 1;
        let mut right = sorted.len().saturating_sub(1);
        while left < right {
            let sum = i64::from(sorted[anchor]) + i64::from(sorted[left]) + i64::from(sorted[right]);
            match sum.cmp(&0) {
                std::cmp::Ordering::Equal => {
                    triples.push([sorted[anchor], sorted[left], sorted[right]]);
                    while left < right && sorted[left] == sorted[left + 1] {
                        left += 1;
                    }
                    while left < right && sorted[right] == sorted[right - 1] {
                        right -= 1;
                    }
                    left += 1;
                    right -= 1;
                }
                std::cmp::Ordering::Less => left += 1,
                std::cmp::Ordering::Greater => right -= 1,
            }
        }
    }
    triples
}

/// Returns the length, in characters, of the longest substring of `text`
/// containing no repeated character.
///
/// Sliding window: the window start jumps past the previous occurrence of
/// a repeated character.
///
/// # Complexity
///
/// O(n) time, O(min(n, alphabet)) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::longest_unique_substring;
///
/// assert_eq!(longest_unique_substring("abcabcbb"), 3);
/// assert_eq!(longest_unique_substring("bbbbb"), 1);
/// assert_eq!(longest_unique_substring("pwwkew"), 3);
/// ```
#[must_use]
pub fn longest_unique_substring(text: &str) -> usize {
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut window_start = 0;
    let mut best_length = 0;
    for (position, character) in text.chars().enumerate() {
        if let Some(&previous) = last_seen.get(&character)
            && previous >= window_start
        {
            window_start = previous + 1;
        }
        last_seen.insert(character, position);
        best_length = best_length.max(position - window_start + 1);
    }
    best_length
}

/// Reports whether the last index is reachable from the first, where each
/// element is the maximum jump length from its position.
///
/// Greedy: maintains the furthest reachable index; the input is infeasible
/// as soon as the scan passes it.
///
/// # Examples
///
/// ```rust
/// use algokit::scan::can_jump;
///
/// assert!(can_jump(&[2, 3, 1, 1, 4]));
/// assert!(!can_jump(&[3, 2, 1, 0, 4]));
/// ```
#[must_use]
pub fn can_jump(jump_lengths: &[usize]) -> bool {
    let mut furthest_reach = 0;
    for (index, &jump_length) in jump_lengths.iter().enumerate() {
        if index > furthest_reach {
            return false;
        }
        furthest_reach = furthest_reach.max(index + jump_length);
    }
    true
}

/// Coalesces overlapping intervals, returning the merged set sorted by
/// start.
///
/// Intervals are `[start, end]` pairs with `start <= end`; two intervals
/// touching at a boundary are merged.
///
/// # Complexity
///
/// O(n log n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::merge_intervals;
///
/// assert_eq!(
///     merge_intervals(&[[1, 3], [2, 6], [8, 10], [15, 18]]),
///     vec![[1, 6], [8, 10], [15, 18]]
/// );
/// assert_eq!(merge_intervals(&[[1, 4], [4, 5]]), vec![[1, 5]]);
/// ```
#[must_use]
pub fn merge_intervals(intervals: &[[i32; 2]]) -> Vec<[i32; 2]> {
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();
    let mut merged: Vec<[i32; 2]> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(previous) if interval[0] <= previous[1] => {
                previous[1] = previous[1].max(interval[1]);
            }
            _ => merged.push(interval),
        }
    }
    merged
}

/// Rotates a square matrix 90 degrees clockwise, in place.
///
/// Transposes the matrix, then reverses each row. Rows shorter than the
/// matrix height are left untouched beyond their length; callers are
/// expected to pass a square matrix.
///
/// # Complexity
///
/// O(n²) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::scan::rotate_image;
///
/// let mut matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// rotate_image(&mut matrix);
/// assert_eq!(matrix, vec![vec![7, 4, 1], vec![8, 5, 2], vec![9, 6, 3]]);
/// ```
pub fn rotate_image(matrix: &mut [Vec<i32>]) {
    let size = matrix.len();
    for row in 0..size {
        for column in (row + 1)..size {
            let transposed = matrix[row][column];
            matrix[row][column] = matrix[column][row];
            matrix[column][row] = transposed;
        }
    }
    for row in matrix {
        row.reverse();
    }
}

/// Returns the elements of a rectangular matrix in clockwise spiral order.
///
/// Walks the outer layer (top row, right column, bottom row, left column)
/// and shrinks the boundaries inwards after each side.
///
/// # Examples
///
/// ```rust
/// use algokit::scan::spiral_order;
///
/// let matrix = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
/// assert_eq!(spiral_order(&matrix), vec![1, 2, 3, 6, 9, 8, 7, 4, 5]);
/// ```
#[must_use]
pub fn spiral_order(matrix: &[Vec<i32>]) -> Vec<i32> {
    if matrix.is_empty() || matrix[0].is_empty() {
        return Vec::new();
    }
    // Signed cursors: the bottom/right bounds may pass below zero on the
    // final layer of a thin matrix.
    let mut top = 0_isize;
    let mut bottom = matrix.len() as isize - 1;
    let mut left = 0_isize;
    let mut right = matrix[0].len() as isize - 1;
    let mut walked = Vec::with_capacity(matrix.len() * matrix[0].len());
    while top <= bottom && left <= right {
        for column in left..=right {
            walked.push(matrix[top as usize][column as usize]);
        }
        top += 1;
        for row in top..=bottom {
            walked.push(matrix[row as usize][right as usize]);
        }
        right -= 1;
        if top <= bottom {
            for column in (left..=right).rev() {
                walked.push(matrix[bottom as usize][column as usize]);
            }
            bottom -= 1;
        }
        if left <= right {
            for row in (top..=bottom).rev() {
                walked.push(matrix[row as usize][left as usize]);
            }
            left += 1;
        }
    }
    walked
}

/// Returns the FizzBuzz sequence from 1 to `limit` inclusive.
///
/// # Examples
///
/// ```rust
/// use algokit::scan::fizz_buzz;
///
/// let sequence = fizz_buzz(5);
/// assert_eq!(sequence, vec!["1", "2", "Fizz", "4", "Buzz"]);
/// ```
#[must_use]
pub fn fizz_buzz(limit: u32) -> Vec<String> {
    (1..=limit)
        .map(|number| match (number % 3, number % 5) {
            (0, 0) => "FizzBuzz".to_string(),
            (0, _) => "Fizz".to_string(),
            (_, 0) => "Buzz".to_string(),
            _ => number.to_string(),
        })
        .collect()
}
