//! Dynamic-programming routines.
//!
//! Each routine fills a dense table indexed by one or two integer state
//! dimensions; where only the previous row is ever read, the table is
//! collapsed to a rolling row.
//!
//! # Overview
//!
//! | Routine                          | Time         | Space    |
//! |----------------------------------|--------------|----------|
//! | `edit_distance`                  | O(m · n)     | O(n)     |
//! | `wildcard_match`                 | O(m · n)     | O(m · n) |
//! | `word_break`                     | O(n² · w)    | O(n)     |
//! | `coin_change`                    | O(amount · k)| O(amount)|
//! | `longest_increasing_subsequence` | O(n log n)   | O(n)     |
//! | `unique_paths`                   | O(m · n)     | O(n)     |
//! | `house_robber`                   | O(n)         | O(1)     |
//! | `climb_stairs`                   | O(n)         | O(1)     |
//!
//! # Examples
//!
//! ```rust
//! use algokit::dp::{coin_change, edit_distance};
//!
//! assert_eq!(edit_distance("horse", "ros"), 3);
//! assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
//! assert_eq!(coin_change(&[2], 3), None);
//! ```

use std::collections::HashSet;

/// Returns the minimum number of single-character insertions, deletions,
/// and substitutions transforming `first` into `second`.
///
/// `dp[i][j]` is the cost of transforming the first `i` characters of
/// `first` into the first `j` characters of `second`; the base row and
/// column are pure insert/delete costs, a match inherits the diagonal,
/// and a mismatch pays one plus the cheapest of delete, insert, or
/// substitute. Only the previous row is live, so the table is one
/// rolling row.
///
/// Operates on `char`s, so multi-byte input is handled per code point.
///
/// # Complexity
///
/// O(m · n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::dp::edit_distance;
///
/// assert_eq!(edit_distance("horse", "ros"), 3);
/// assert_eq!(edit_distance("intention", "execution"), 5);
/// assert_eq!(edit_distance("same", "same"), 0);
/// assert_eq!(edit_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn edit_distance(first: &str, second: &str) -> usize {
    let source: Vec<char> = first.chars().collect();
    let target: Vec<char> = second.chars().collect();
    let mut previous_row: Vec<usize> = (0..=target.len()).collect();
    for (row_index, &source_character) in source.iter().enumerate() {
        let mut current_row = Vec::with_capacity(target.len() + 1);
        current_row.push(row_index + 1);
        for (column_index, &target_character) in target.iter().enumerate() {
            let cost = if source_character == target_character {
                previous_row[column_index]
            } else {
                let delete = previous_row[column_index + 1];
                let insert = current_row[column_index];
                let substitute = previous_row[column_index];
                1 + delete.min(insert).min(substitute)
            };
            current_row.push(cost);
        }
        previous_row = current_row;
    }
    previous_row[target.len()]
}

/// Reports whether `text` matches `pattern`, where `?` matches any single
/// character and `*` matches any run of characters including the empty
/// run.
///
/// `dp[i][j]` is true when the first `i` characters of `text` match the
/// first `j` of `pattern`: `*` inherits from `dp[i-1][j]` (consume a text
/// character) or `dp[i][j-1]` (consume the wildcard); `?` and an exact
/// character match inherit the diagonal.
///
/// # Complexity
///
/// O(m · n) time and space
///
/// # Examples
///
/// ```rust
/// use algokit::dp::wildcard_match;
///
/// assert!(wildcard_match("adceb", "*a*b"));
/// assert!(!wildcard_match("cb", "?a"));
/// assert!(!wildcard_match("acdcb", "a*c?b"));
/// assert!(wildcard_match("", "***"));
/// ```
#[must_use]
pub fn wildcard_match(text: &str, pattern: &str) -> bool {
    let text_characters: Vec<char> = text.chars().collect();
    let pattern_characters: Vec<char> = pattern.chars().collect();
    let mut matches =
        vec![vec![false; pattern_characters.len() + 1]; text_characters.len() + 1];
    matches[0][0] = true;
    for (column, &pattern_character) in pattern_characters.iter().enumerate() {
        if pattern_character == '*' {
            matches[0][column + 1] = matches[0][column];
        }
    }
    for (row, &text_character) in text_characters.iter().enumerate() {
        for (column, &pattern_character) in pattern_characters.iter().enumerate() {
            matches[row + 1][column + 1] = match pattern_character {
                '*' => matches[row][column + 1] || matches[row + 1][column],
                '?' => matches[row][column],
                exact => exact == text_character && matches[row][column],
            };
        }
    }
    matches[text_characters.len()][pattern_characters.len()]
}

/// Reports whether `text` can be segmented into a sequence of dictionary
/// words.
///
/// `dp[i]` is true when the first `i` bytes form a segmentable prefix:
/// true if any earlier true position `j` has `text[j..i]` in the
/// dictionary. Keys are byte slices, so no UTF-8 boundary is ever split.
///
/// # Examples
///
/// ```rust
/// use algokit::dp::word_break;
///
/// assert!(word_break("leetcode", &["leet", "code"]));
/// assert!(word_break("applepenapple", &["apple", "pen"]));
/// assert!(!word_break("catsandog", &["cats", "dog", "sand", "and", "cat"]));
/// assert!(word_break("", &[]));
/// ```
#[must_use]
pub fn word_break(text: &str, dictionary: &[&str]) -> bool {
    let words: HashSet<&[u8]> = dictionary.iter().map(|word| word.as_bytes()).collect();
    let bytes = text.as_bytes();
    let mut segmentable = vec![false; bytes.len() + 1];
    segmentable[0] = true;
    for end in 1..=bytes.len() {
        for start in 0..end {
            if segmentable[start] && words.contains(&bytes[start..end]) {
                segmentable[end] = true;
                break;
            }
        }
    }
    segmentable[bytes.len()]
}

/// Returns the minimum number of coins summing to `amount`, or `None`
/// when the amount is unreachable with the given denominations.
///
/// `dp[a]` is the minimum coin count reaching amount `a`, with `dp[0] =
/// 0`; unreachable amounts carry the sentinel `amount + 1` internally and
/// surface as `None`. Zero-valued coins are ignored.
///
/// # Complexity
///
/// O(amount · k) time for k denominations, O(amount) space
///
/// # Examples
///
/// ```rust
/// use algokit::dp::coin_change;
///
/// assert_eq!(coin_change(&[1, 2, 5], 11), Some(3));
/// assert_eq!(coin_change(&[2], 3), None);
/// assert_eq!(coin_change(&[7], 0), Some(0));
/// ```
#[must_use]
pub fn coin_change(coins: &[u32], amount: u32) -> Option<usize> {
    let amount = amount as usize;
    let unreachable = amount + 1;
    let mut fewest = vec![unreachable; amount + 1];
    fewest[0] = 0;
    for target in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin > 0 && coin <= target {
                fewest[target] = fewest[target].min(fewest[target - coin] + 1);
            }
        }
    }
    (fewest[amount] < unreachable).then_some(fewest[amount])
}

/// Returns the length of the longest strictly increasing subsequence.
///
/// Patience sorting: `tails[l]` holds the smallest possible tail of an
/// increasing subsequence of length `l + 1` and stays sorted, so each new
/// value binary-searches its insertion point. Reports the length only,
/// not the subsequence itself.
///
/// # Complexity
///
/// O(n log n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::dp::longest_increasing_subsequence;
///
/// assert_eq!(longest_increasing_subsequence(&[10, 9, 2, 5, 3, 7, 101, 18]), 4);
/// assert_eq!(longest_increasing_subsequence(&[7, 7, 7, 7]), 1);
/// assert_eq!(longest_increasing_subsequence(&[]), 0);
/// ```
#[must_use]
pub fn longest_increasing_subsequence(values: &[i32]) -> usize {
    let mut tails: Vec<i32> = Vec::new();
    for &value in values {
        let position = tails.partition_point(|&tail| tail < value);
        if position == tails.len() {
            tails.push(value);
        } else {
            tails[position] = value;
        }
    }
    tails.len()
}

/// Returns the number of monotone lattice paths from the top-left to the
/// bottom-right corner of an `rows × columns` grid, moving only right or
/// down.
///
/// One rolling row: each cell accumulates the path counts from above and
/// from the left. A grid with no rows or no columns has no paths.
///
/// # Complexity
///
/// O(rows · columns) time, O(columns) space
///
/// # Examples
///
/// ```rust
/// use algokit::dp::unique_paths;
///
/// assert_eq!(unique_paths(3, 7), 28);
/// assert_eq!(unique_paths(3, 2), 3);
/// assert_eq!(unique_paths(1, 1), 1);
/// assert_eq!(unique_paths(0, 5), 0);
/// ```
#[must_use]
pub fn unique_paths(rows: usize, columns: usize) -> u64 {
    if rows == 0 || columns == 0 {
        return 0;
    }
    let mut path_counts = vec![1_u64; columns];
    for _ in 1..rows {
        for column in 1..columns {
            path_counts[column] += path_counts[column - 1];
        }
    }
    path_counts[columns - 1]
}

fn rob_linear(values: &[u32]) -> u64 {
    let mut loot_two_back = 0_u64;
    let mut loot_one_back = 0_u64;
    for &value in values {
        let loot_here = loot_one_back.max(loot_two_back + u64::from(value));
        loot_two_back = loot_one_back;
        loot_one_back = loot_here;
    }
    loot_one_back
}

/// Returns the maximum sum selectable from a circular arrangement of
/// values with no two adjacent selections (the houses form a ring, so the
/// first and last are adjacent).
///
/// Two linear passes: one excluding the last value, one excluding the
/// first; the answer is the larger. A single value is its own answer.
///
/// # Examples
///
/// ```rust
/// use algokit::dp::house_robber;
///
/// assert_eq!(house_robber(&[2, 3, 2]), 3);
/// assert_eq!(house_robber(&[1, 2, 3, 1]), 4);
/// assert_eq!(house_robber(&[5]), 5);
/// assert_eq!(house_robber(&[]), 0);
/// ```
#[must_use]
pub fn house_robber(values: &[u32]) -> u64 {
    match values {
        [] => 0,
        [only] => u64::from(*only),
        _ => rob_linear(&values[..values.len() - 1]).max(rob_linear(&values[1..])),
    }
}

/// Returns the number of distinct ways to climb `steps` stairs taking one
/// or two steps at a time.
///
/// The recurrence is Fibonacci: `ways(n) = ways(n - 1) + ways(n - 2)`.
///
/// # Examples
///
/// ```rust
/// use algokit::dp::climb_stairs;
///
/// assert_eq!(climb_stairs(2), 2);
/// assert_eq!(climb_stairs(3), 3);
/// assert_eq!(climb_stairs(10), 89);
/// ```
#[must_use]
pub fn climb_stairs(steps: u32) -> u64 {
    if steps <= 2 {
        return u64::from(steps);
    }
    let mut two_back = 1_u64;
    let mut one_back = 2_u64;
    for _ in 3..=steps {
        let current = one_back + two_back;
        two_back = one_back;
        one_back = current;
    }
    one_back
}
