//! Stack-based and monotonic-stack routines.
//!
//! A monotonic stack keeps its elements in increasing (or decreasing)
//! order so that next-smaller/next-greater queries resolve in amortized
//! O(n) over a whole scan. The routines here use it for bracket matching
//! and for area queries over histograms.
//!
//! # Overview
//!
//! | Routine                      | Time          | Space |
//! |------------------------------|---------------|-------|
//! | `is_balanced`                | O(n)          | O(n)  |
//! | `longest_valid_parentheses`  | O(n)          | O(n)  |
//! | `largest_rectangle_area`     | O(n)          | O(n)  |
//! | `maximal_rectangle`          | O(rows · cols)| O(cols) |
//! | `trap`                       | O(n)          | O(1)  |
//!
//! # Examples
//!
//! ```rust
//! use algokit::stack::{is_balanced, largest_rectangle_area};
//!
//! assert!(is_balanced("()[]{}"));
//! assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
//! ```

/// Reports whether `text` is a balanced string over the bracket alphabet
/// `()[]{}`.
///
/// Accepts exactly the Dyck language: every closer must match the most
/// recent unmatched opener, and no opener may remain at the end. Any
/// character outside the bracket alphabet makes the string invalid. The
/// empty string is balanced.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::stack::is_balanced;
///
/// assert!(is_balanced("()[]{}"));
/// assert!(is_balanced("{[]}"));
/// assert!(!is_balanced("([)]"));
/// assert!(!is_balanced("("));
/// assert!(is_balanced(""));
/// ```
#[must_use]
pub fn is_balanced(text: &str) -> bool {
    let mut openers = Vec::new();
    for character in text.chars() {
        match character {
            '(' | '[' | '{' => openers.push(character),
            ')' => {
                if openers.pop() != Some('(') {
                    return false;
                }
            }
            ']' => {
                if openers.pop() != Some('[') {
                    return false;
                }
            }
            '}' => {
                if openers.pop() != Some('{') {
                    return false;
                }
            }
            _ => return false,
        }
    }
    openers.is_empty()
}

/// Returns the length of the longest well-formed `(`/`)` substring.
///
/// Maintains a stack of byte indices seeded with a `-1` sentinel. A `(`
/// pushes its index; a `)` pops, and either resets the sentinel to the
/// current index (the stack emptied, so nothing to the left can extend a
/// match) or records `i - top` as a candidate length.
///
/// The input is expected to contain only `(` and `)`. The empty string
/// yields 0.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::stack::longest_valid_parentheses;
///
/// assert_eq!(longest_valid_parentheses("(()"), 2);
/// assert_eq!(longest_valid_parentheses(")()())"), 4);
/// assert_eq!(longest_valid_parentheses(""), 0);
/// ```
#[must_use]
pub fn longest_valid_parentheses(text: &str) -> usize {
    let mut boundary_indices: Vec<isize> = vec![-1];
    let mut best_length = 0_usize;
    for (index, byte) in text.bytes().enumerate() {
        let index = index as isize;
        if byte == b'(' {
            boundary_indices.push(index);
        } else {
            boundary_indices.pop();
            match boundary_indices.last() {
                None => boundary_indices.push(index),
                Some(&boundary) => {
                    best_length = best_length.max((index - boundary) as usize);
                }
            }
        }
    }
    best_length
}

/// Returns the area of the largest rectangle that fits under a histogram.
///
/// Single left-to-right pass with a stack of bar indices kept in
/// non-decreasing height order. When a bar shorter than the stack top
/// arrives, popped bars resolve their rectangles: the popped height times
/// a width bounded by the new stack top (exclusive) and the current index.
/// An implicit zero-height bar after the last element flushes the stack.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::stack::largest_rectangle_area;
///
/// assert_eq!(largest_rectangle_area(&[2, 1, 5, 6, 2, 3]), 10);
/// assert_eq!(largest_rectangle_area(&[2, 4]), 4);
/// assert_eq!(largest_rectangle_area(&[]), 0);
/// ```
#[must_use]
pub fn largest_rectangle_area(heights: &[u32]) -> u64 {
    let mut rising_indices: Vec<usize> = Vec::with_capacity(heights.len());
    let mut best_area = 0_u64;
    for index in 0..=heights.len() {
        let flush_height = if index == heights.len() {
            0
        } else {
            heights[index]
        };
        while let Some(&top) = rising_indices.last()
            && heights[top] > flush_height
        {
            rising_indices.pop();
            let width = match rising_indices.last() {
                Some(&below) => index - below - 1,
                None => index,
            };
            best_area = best_area.max(u64::from(heights[top]) * width as u64);
        }
        rising_indices.push(index);
    }
    best_area
}

/// Returns the area of the largest axis-aligned rectangle of `true` cells
/// in a boolean matrix.
///
/// Reduces each row to a histogram of consecutive-`true` run heights
/// ending at that row, then reuses [`largest_rectangle_area`] per row.
///
/// # Complexity
///
/// O(rows × cols) time, O(cols) space
///
/// # Examples
///
/// ```rust
/// use algokit::stack::maximal_rectangle;
///
/// let matrix = vec![
///     vec![true, false, true, false, false],
///     vec![true, false, true, true, true],
///     vec![true, true, true, true, true],
///     vec![true, false, false, true, false],
/// ];
/// assert_eq!(maximal_rectangle(&matrix), 6);
/// ```
#[must_use]
pub fn maximal_rectangle(matrix: &[Vec<bool>]) -> u64 {
    let Some(first_row) = matrix.first() else {
        return 0;
    };
    let mut run_heights = vec![0_u32; first_row.len()];
    let mut best_area = 0;
    for row in matrix {
        for (column, &filled) in row.iter().enumerate() {
            run_heights[column] = if filled { run_heights[column] + 1 } else { 0 };
        }
        best_area = best_area.max(largest_rectangle_area(&run_heights));
    }
    best_area
}

/// Returns the total volume of rain water trapped between the bars of an
/// elevation map.
///
/// Two pointers converge from both ends, each side tracking its own
/// running maximum. Water accumulates on whichever side currently has the
/// smaller boundary height, since that side's level is what bounds it.
///
/// # Complexity
///
/// O(n) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::stack::trap;
///
/// assert_eq!(trap(&[0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]), 6);
/// assert_eq!(trap(&[4, 2, 0, 3, 2, 5]), 9);
/// assert_eq!(trap(&[]), 0);
/// ```
#[must_use]
pub fn trap(heights: &[u32]) -> u64 {
    if heights.is_empty() {
        return 0;
    }
    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut left_maximum = 0_u32;
    let mut right_maximum = 0_u32;
    let mut water = 0_u64;
    while left < right {
        if heights[left] < heights[right] {
            if heights[left] >= left_maximum {
                left_maximum = heights[left];
            } else {
                water += u64::from(left_maximum - heights[left]);
            }
            left += 1;
        } else {
            if heights[right] >= right_maximum {
                right_maximum = heights[right];
            } else {
                water += u64::from(right_maximum - heights[right]);
            }
            right -= 1;
        }
    }
    water
}
