//! Singly-linked list routines.
//!
//! The list is a chain of uniquely owned nodes: each [`ListNode`] owns the
//! remainder of the list through its `next` link, so no node is ever
//! referenced by two lists at once. The merge routines take ownership of
//! their inputs and relink the existing nodes; they never copy values.
//!
//! Teardown, cloning, and comparison are all iterative, so arbitrarily
//! long lists cannot overflow the stack.
//!
//! # Overview
//!
//! | Routine           | Time        | Space |
//! |-------------------|-------------|-------|
//! | `reverse_list`    | O(n)        | O(1)  |
//! | `merge_two_lists` | O(n + m)    | O(1)  |
//! | `merge_k_lists`   | O(n log k)  | O(k)  |
//!
//! # Examples
//!
//! ```rust
//! use algokit::list::{ListNode, merge_two_lists};
//!
//! let first = ListNode::from_slice(&[1, 2, 4]);
//! let second = ListNode::from_slice(&[1, 3, 4]);
//! let merged = merge_two_lists(first, second);
//! assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
//! ```

use std::collections::BinaryHeap;

/// An owning link to the rest of a list: `None` marks the end.
pub type ListLink = Option<Box<ListNode>>;

/// A node of a singly-linked list.
///
/// Each node stores one value and exclusively owns its successor.
#[derive(Debug)]
pub struct ListNode {
    /// The value stored in this node.
    pub value: i32,
    /// The uniquely owned remainder of the list.
    pub next: ListLink,
}

impl Drop for ListNode {
    fn drop(&mut self) {
        // Unlink iteratively; the derived recursive drop would overflow
        // the stack on long lists.
        let mut remainder = self.next.take();
        while let Some(mut node) = remainder {
            remainder = node.next.take();
        }
    }
}

impl Clone for ListNode {
    // Copies iteratively; the derived clone would overflow the stack on
    // long lists.
    fn clone(&self) -> Self {
        let mut cloned = Self::new(self.value);
        let mut tail = &mut cloned.next;
        let mut cursor = &self.next;
        while let Some(node) = cursor.as_deref() {
            tail = &mut tail.insert(Box::new(Self::new(node.value))).next;
            cursor = &node.next;
        }
        cloned
    }
}

impl PartialEq for ListNode {
    // Compares iteratively; the derived impl would overflow the stack on
    // long lists.
    fn eq(&self, other: &Self) -> bool {
        let mut left = Some(self);
        let mut right = Some(other);
        loop {
            match (left, right) {
                (None, None) => return true,
                (Some(first), Some(second)) if first.value == second.value => {
                    left = first.next.as_deref();
                    right = second.next.as_deref();
                }
                _ => return false,
            }
        }
    }
}

impl Eq for ListNode {}

impl ListNode {
    /// Creates a detached node holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algokit::list::ListNode;
    ///
    /// let node = ListNode::new(7);
    /// assert_eq!(node.value, 7);
    /// assert!(node.next.is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self { value, next: None }
    }

    /// Builds a list containing `values` in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algokit::list::ListNode;
    ///
    /// let list = ListNode::from_slice(&[1, 2, 3]);
    /// assert_eq!(ListNode::to_vec(&list), vec![1, 2, 3]);
    /// assert!(ListNode::from_slice(&[]).is_none());
    /// ```
    #[must_use]
    pub fn from_slice(values: &[i32]) -> ListLink {
        let mut head: ListLink = None;
        for &value in values.iter().rev() {
            head = Some(Box::new(Self { value, next: head }));
        }
        head
    }

    /// Collects the values of a list into a `Vec`, front to back.
    #[must_use]
    pub fn to_vec(list: &ListLink) -> Vec<i32> {
        let mut values = Vec::new();
        let mut cursor = list;
        while let Some(node) = cursor {
            values.push(node.value);
            cursor = &node.next;
        }
        values
    }
}

/// Reverses a list in place, returning the new head.
///
/// Takes ownership of the list and relinks its nodes; no values are
/// copied.
///
/// # Complexity
///
/// O(n) time, O(1) space
///
/// # Examples
///
/// ```rust
/// use algokit::list::{ListNode, reverse_list};
///
/// let list = ListNode::from_slice(&[1, 2, 3, 4, 5]);
/// let reversed = reverse_list(list);
/// assert_eq!(ListNode::to_vec(&reversed), vec![5, 4, 3, 2, 1]);
/// ```
#[must_use]
pub fn reverse_list(mut head: ListLink) -> ListLink {
    let mut reversed: ListLink = None;
    while let Some(mut node) = head {
        head = node.next.take();
        node.next = reversed;
        reversed = Some(node);
    }
    reversed
}

/// Merges two individually sorted lists into one sorted list.
///
/// Both inputs must be non-decreasing. Nodes are relinked through a
/// growing tail, always advancing whichever list currently has the
/// smaller head value; ties go to `first`. The output has length
/// `len(first) + len(second)`.
///
/// # Complexity
///
/// O(n + m) time, O(1) extra space
///
/// # Examples
///
/// ```rust
/// use algokit::list::{ListNode, merge_two_lists};
///
/// let first = ListNode::from_slice(&[1, 2, 4]);
/// let second = ListNode::from_slice(&[1, 3, 4]);
/// let merged = merge_two_lists(first, second);
/// assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4]);
/// ```
#[must_use]
pub fn merge_two_lists(mut first: ListLink, mut second: ListLink) -> ListLink {
    let mut merged_head: ListLink = None;
    let mut tail = &mut merged_head;
    loop {
        match (first.take(), second.take()) {
            (Some(mut first_node), Some(second_node)) => {
                if first_node.value <= second_node.value {
                    first = first_node.next.take();
                    second = Some(second_node);
                    tail = &mut tail.insert(first_node).next;
                } else {
                    let mut second_node = second_node;
                    second = second_node.next.take();
                    first = Some(first_node);
                    tail = &mut tail.insert(second_node).next;
                }
            }
            (remaining_first, remaining_second) => {
                *tail = remaining_first.or(remaining_second);
                return merged_head;
            }
        }
    }
}

/// Heap entry ordered by ascending node value, so `BinaryHeap` pops the
/// minimum first.
struct AscendingHead(Box<ListNode>);

impl PartialEq for AscendingHead {
    fn eq(&self, other: &Self) -> bool {
        self.0.value == other.0.value
    }
}

impl Eq for AscendingHead {}

impl PartialOrd for AscendingHead {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AscendingHead {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other.0.value.cmp(&self.0.value)
    }
}

/// Merges `k` individually sorted lists into one sorted list.
///
/// A min-heap keyed by head value holds at most one node per input list.
/// The minimum is popped, appended to the output, and replaced by its
/// successor (if any). Nodes are relinked, never copied.
///
/// # Complexity
///
/// O(n log k) time for n total nodes across k lists, O(k) space
///
/// # Examples
///
/// ```rust
/// use algokit::list::{ListNode, merge_k_lists};
///
/// let lists = vec![
///     ListNode::from_slice(&[1, 4, 5]),
///     ListNode::from_slice(&[1, 3, 4]),
///     ListNode::from_slice(&[2, 6]),
/// ];
/// let merged = merge_k_lists(lists);
/// assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4, 5, 6]);
/// ```
#[must_use]
pub fn merge_k_lists(lists: Vec<ListLink>) -> ListLink {
    let mut heads: BinaryHeap<AscendingHead> =
        lists.into_iter().flatten().map(AscendingHead).collect();
    let mut merged_head: ListLink = None;
    let mut tail = &mut merged_head;
    while let Some(AscendingHead(mut node)) = heads.pop() {
        if let Some(successor) = node.next.take() {
            heads.push(AscendingHead(successor));
        }
        tail = &mut tail.insert(node).next;
    }
    merged_head
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // Construction Tests
    // =========================================================================

    #[rstest]
    fn test_from_slice_round_trips() {
        let list = ListNode::from_slice(&[1, 2, 3]);
        assert_eq!(ListNode::to_vec(&list), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_from_slice_empty() {
        assert!(ListNode::from_slice(&[]).is_none());
        assert!(ListNode::to_vec(&None).is_empty());
    }

    #[rstest]
    fn test_long_list_drops_without_overflowing() {
        let values: Vec<i32> = (0..200_000).collect();
        let list = ListNode::from_slice(&values);
        drop(list);
    }

    #[rstest]
    fn test_long_list_clones_and_compares_without_overflowing() {
        let values: Vec<i32> = (0..200_000).collect();
        let list = ListNode::from_slice(&values);
        let copied = list.clone();
        assert_eq!(copied, list);
    }

    #[rstest]
    fn test_list_equality_checks_values_and_length() {
        assert_eq!(ListNode::from_slice(&[1, 2, 3]), ListNode::from_slice(&[1, 2, 3]));
        assert_ne!(ListNode::from_slice(&[1, 2, 3]), ListNode::from_slice(&[1, 2]));
        assert_ne!(ListNode::from_slice(&[1, 2, 3]), ListNode::from_slice(&[1, 2, 4]));
    }

    // =========================================================================
    // reverse_list Tests
    // =========================================================================

    #[rstest]
    #[case(&[1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1])]
    #[case(&[1], vec![1])]
    #[case(&[], vec![])]
    fn test_reverse_list(#[case] values: &[i32], #[case] expected: Vec<i32>) {
        let reversed = reverse_list(ListNode::from_slice(values));
        assert_eq!(ListNode::to_vec(&reversed), expected);
    }

    #[rstest]
    fn test_reverse_twice_is_identity() {
        let list = ListNode::from_slice(&[3, 1, 4, 1, 5]);
        let round_tripped = reverse_list(reverse_list(list));
        assert_eq!(ListNode::to_vec(&round_tripped), vec![3, 1, 4, 1, 5]);
    }

    // =========================================================================
    // merge_two_lists Tests
    // =========================================================================

    #[rstest]
    #[case(&[1, 2, 4], &[1, 3, 4], vec![1, 1, 2, 3, 4, 4])]
    #[case(&[], &[], vec![])]
    #[case(&[], &[0], vec![0])]
    #[case(&[5], &[], vec![5])]
    #[case(&[1, 1, 1], &[1, 1], vec![1, 1, 1, 1, 1])]
    fn test_merge_two_lists(
        #[case] first: &[i32],
        #[case] second: &[i32],
        #[case] expected: Vec<i32>,
    ) {
        let merged = merge_two_lists(
            ListNode::from_slice(first),
            ListNode::from_slice(second),
        );
        assert_eq!(ListNode::to_vec(&merged), expected);
    }

    #[rstest]
    fn test_merge_two_lists_length_is_sum_of_inputs() {
        let first = ListNode::from_slice(&[0, 2, 4, 6]);
        let second = ListNode::from_slice(&[1, 3, 5]);
        let merged = merge_two_lists(first, second);
        assert_eq!(ListNode::to_vec(&merged).len(), 7);
    }

    // =========================================================================
    // merge_k_lists Tests
    // =========================================================================

    #[rstest]
    fn test_merge_k_lists_classic() {
        let lists = vec![
            ListNode::from_slice(&[1, 4, 5]),
            ListNode::from_slice(&[1, 3, 4]),
            ListNode::from_slice(&[2, 6]),
        ];
        let merged = merge_k_lists(lists);
        assert_eq!(ListNode::to_vec(&merged), vec![1, 1, 2, 3, 4, 4, 5, 6]);
    }

    #[rstest]
    fn test_merge_k_lists_no_lists() {
        assert!(merge_k_lists(Vec::new()).is_none());
    }

    #[rstest]
    fn test_merge_k_lists_all_empty() {
        assert!(merge_k_lists(vec![None, None, None]).is_none());
    }

    #[rstest]
    fn test_merge_k_lists_single_list() {
        let merged = merge_k_lists(vec![ListNode::from_slice(&[1, 2, 3])]);
        assert_eq!(ListNode::to_vec(&merged), vec![1, 2, 3]);
    }

    #[rstest]
    fn test_merge_k_lists_output_is_sorted() {
        let lists = vec![
            ListNode::from_slice(&[9, 10, 11]),
            None,
            ListNode::from_slice(&[-3, 0, 12]),
            ListNode::from_slice(&[7]),
        ];
        let merged = ListNode::to_vec(&merge_k_lists(lists));
        let mut sorted = merged.clone();
        sorted.sort_unstable();
        assert_eq!(merged, sorted);
        assert_eq!(merged.len(), 7);
    }
}
