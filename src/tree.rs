//! Binary tree routines and the preorder serialization codec.
//!
//! A tree is a chain of uniquely owned nodes: each [`TreeNode`] owns its
//! `left` and `right` subtrees, so no sharing and no cycles are possible
//! by construction. Every routine here, together with `Clone`,
//! `PartialEq`, and teardown, walks the tree with an explicit stack, so a
//! degenerate (spine-shaped) tree cannot overflow the call stack.
//!
//! # Overview
//!
//! | Routine                   | Time | Space |
//! |---------------------------|------|-------|
//! | `is_symmetric`            | O(n) | O(n)  |
//! | `level_order`             | O(n) | O(n)  |
//! | `is_valid_bst`            | O(n) | O(n)  |
//! | `lowest_common_ancestor`  | O(n) | O(h)  |
//! | `build_tree`              | O(n) | O(n)  |
//! | `serialize`/`deserialize` | O(n) | O(n)  |
//!
//! # Wire Format
//!
//! [`serialize`] emits a comma-delimited preorder token stream with `#`
//! as the null sentinel: the tree `1 -> (2, 3)` becomes `"1,2,#,#,3,#,#"`
//! and the empty tree becomes `"#"`. This is the one wire format in this
//! crate; [`deserialize`] reproduces it byte-for-byte, and
//! `deserialize(&serialize(t))` is structurally equal to `t` for every
//! tree including the empty one.
//!
//! # Examples
//!
//! ```rust
//! use algokit::tree::{TreeNode, deserialize, serialize};
//!
//! let tree = TreeNode::branch(1, TreeNode::leaf(2), TreeNode::leaf(3));
//! let encoded = serialize(&tree);
//! assert_eq!(encoded, "1,2,#,#,3,#,#");
//! assert_eq!(deserialize(&encoded), Ok(tree));
//! ```

use std::collections::HashMap;

/// An owning link to a subtree: `None` marks an absent child.
pub type TreeLink = Option<Box<TreeNode>>;

/// A node of a binary tree.
///
/// Each node stores one value and exclusively owns its two subtrees.
#[derive(Debug)]
pub struct TreeNode {
    /// The value stored in this node.
    pub value: i32,
    /// The uniquely owned left subtree.
    pub left: TreeLink,
    /// The uniquely owned right subtree.
    pub right: TreeLink,
}

impl Drop for TreeNode {
    fn drop(&mut self) {
        // Tear down iteratively; the derived recursive drop would
        // overflow the stack on spine-shaped trees.
        let mut pending: Vec<Box<Self>> = Vec::new();
        pending.extend(self.left.take());
        pending.extend(self.right.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
    }
}

/// Copies a subtree bottom-up with post-order frames; the second slot
/// holds the finished left copy while the right subtree is walked.
fn clone_link(root: &TreeLink) -> TreeLink {
    let mut frames: Vec<(&TreeNode, Option<TreeLink>)> = Vec::new();
    let mut current = root;
    loop {
        let mut copy: TreeLink = loop {
            match current.as_deref() {
                None => break None,
                Some(node) => {
                    frames.push((node, None));
                    current = &node.left;
                }
            }
        };
        loop {
            match frames.pop() {
                None => return copy,
                Some((node, None)) => {
                    frames.push((node, Some(copy)));
                    current = &node.right;
                    break;
                }
                Some((node, Some(left_copy))) => {
                    copy = Some(Box::new(TreeNode {
                        value: node.value,
                        left: left_copy,
                        right: copy,
                    }));
                }
            }
        }
    }
}

impl Clone for TreeNode {
    // Copies iteratively; the derived clone would overflow the stack on
    // spine-shaped trees.
    fn clone(&self) -> Self {
        Self {
            value: self.value,
            left: clone_link(&self.left),
            right: clone_link(&self.right),
        }
    }
}

impl PartialEq for TreeNode {
    // Compares iteratively; the derived impl would overflow the stack on
    // spine-shaped trees.
    fn eq(&self, other: &Self) -> bool {
        let mut pending: Vec<(&Self, &Self)> = vec![(self, other)];
        while let Some((left, right)) = pending.pop() {
            if left.value != right.value {
                return false;
            }
            match (left.left.as_deref(), right.left.as_deref()) {
                (None, None) => {}
                (Some(first), Some(second)) => pending.push((first, second)),
                _ => return false,
            }
            match (left.right.as_deref(), right.right.as_deref()) {
                (None, None) => {}
                (Some(first), Some(second)) => pending.push((first, second)),
                _ => return false,
            }
        }
        true
    }
}

impl Eq for TreeNode {}

impl TreeNode {
    /// Creates a childless node holding `value`.
    #[inline]
    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// Creates a linked leaf holding `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algokit::tree::TreeNode;
    ///
    /// let leaf = TreeNode::leaf(7);
    /// assert_eq!(leaf.as_ref().map(|node| node.value), Some(7));
    /// ```
    #[inline]
    #[must_use]
    pub fn leaf(value: i32) -> TreeLink {
        Some(Box::new(Self::new(value)))
    }

    /// Creates a linked node holding `value` with the given subtrees.
    #[inline]
    #[must_use]
    pub fn branch(value: i32, left: TreeLink, right: TreeLink) -> TreeLink {
        Some(Box::new(Self { value, left, right }))
    }
}

/// Reports whether a tree is a mirror of itself around its root.
///
/// Walks mirrored node pairs with an explicit stack, so arbitrarily deep
/// trees cannot overflow the call stack. The empty tree is symmetric.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, is_symmetric};
///
/// let mirrored = TreeNode::branch(
///     1,
///     TreeNode::branch(2, TreeNode::leaf(3), TreeNode::leaf(4)),
///     TreeNode::branch(2, TreeNode::leaf(4), TreeNode::leaf(3)),
/// );
/// assert!(is_symmetric(&mirrored));
/// assert!(is_symmetric(&None));
/// ```
#[must_use]
pub fn is_symmetric(root: &TreeLink) -> bool {
    let Some(root_node) = root.as_deref() else {
        return true;
    };
    let mut mirrored_pairs: Vec<(&TreeLink, &TreeLink)> =
        vec![(&root_node.left, &root_node.right)];
    while let Some(pair) = mirrored_pairs.pop() {
        match pair {
            (None, None) => {}
            (Some(left), Some(right)) => {
                if left.value != right.value {
                    return false;
                }
                mirrored_pairs.push((&left.left, &right.right));
                mirrored_pairs.push((&left.right, &right.left));
            }
            _ => return false,
        }
    }
    true
}

/// Returns the tree's values grouped by depth, one row per level, each
/// row left to right.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, level_order};
///
/// let tree = TreeNode::branch(
///     3,
///     TreeNode::leaf(9),
///     TreeNode::branch(20, TreeNode::leaf(15), TreeNode::leaf(7)),
/// );
/// assert_eq!(
///     level_order(&tree),
///     vec![vec![3], vec![9, 20], vec![15, 7]]
/// );
/// ```
#[must_use]
pub fn level_order(root: &TreeLink) -> Vec<Vec<i32>> {
    let Some(root_node) = root.as_deref() else {
        return Vec::new();
    };
    let mut rows = Vec::new();
    let mut frontier: Vec<&TreeNode> = vec![root_node];
    while !frontier.is_empty() {
        let mut row = Vec::with_capacity(frontier.len());
        let mut next_frontier = Vec::new();
        for node in frontier {
            row.push(node.value);
            next_frontier.extend(node.left.as_deref());
            next_frontier.extend(node.right.as_deref());
        }
        rows.push(row);
        frontier = next_frontier;
    }
    rows
}

/// Reports whether a tree satisfies the binary-search-tree ordering.
///
/// Every node must lie strictly inside the open interval inherited from
/// its ancestors: the left subtree tightens the upper bound to the node's
/// value, the right subtree tightens the lower bound. A child equal to a
/// bound is invalid (duplicates are rejected). The empty tree is valid.
///
/// Bounds are tracked as `i64` so `i32::MIN`/`i32::MAX` node values are
/// themselves inside the initial interval.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, is_valid_bst};
///
/// let valid = TreeNode::branch(2, TreeNode::leaf(1), TreeNode::leaf(3));
/// assert!(is_valid_bst(&valid));
///
/// let invalid = TreeNode::branch(
///     5,
///     TreeNode::leaf(1),
///     TreeNode::branch(4, TreeNode::leaf(3), TreeNode::leaf(6)),
/// );
/// assert!(!is_valid_bst(&invalid));
/// ```
#[must_use]
pub fn is_valid_bst(root: &TreeLink) -> bool {
    let mut pending: Vec<(&TreeNode, i64, i64)> = Vec::new();
    if let Some(root_node) = root.as_deref() {
        pending.push((root_node, i64::MIN, i64::MAX));
    }
    while let Some((node, lower_bound, upper_bound)) = pending.pop() {
        let value = i64::from(node.value);
        if value <= lower_bound || value >= upper_bound {
            return false;
        }
        if let Some(child) = node.left.as_deref() {
            pending.push((child, lower_bound, value));
        }
        if let Some(child) = node.right.as_deref() {
            pending.push((child, value, upper_bound));
        }
    }
    true
}

/// Post-order walk over explicit frames; a node whose value matches a
/// target closes its whole subtree immediately, and the second slot holds
/// the left subtree's result while the right subtree is walked.
fn locate_ancestor<'tree>(
    root: &'tree TreeLink,
    first_target: i32,
    second_target: i32,
) -> Option<&'tree TreeNode> {
    let mut frames: Vec<(&'tree TreeNode, Option<Option<&'tree TreeNode>>)> = Vec::new();
    let mut current = root;
    loop {
        let mut found = loop {
            match current.as_deref() {
                None => break None,
                Some(node) if node.value == first_target || node.value == second_target => {
                    break Some(node);
                }
                Some(node) => {
                    frames.push((node, None));
                    current = &node.left;
                }
            }
        };
        loop {
            match frames.pop() {
                None => return found,
                Some((node, None)) => {
                    frames.push((node, Some(found)));
                    current = &node.right;
                    break;
                }
                Some((node, Some(found_left))) => {
                    found = match (found_left, found) {
                        (Some(_), Some(_)) => Some(node),
                        (result, None) | (None, result) => result,
                    };
                }
            }
        }
    }
}

/// Returns the value of the lowest common ancestor of two target values
/// in an arbitrary binary tree (not necessarily a BST).
///
/// A node is the LCA if the two targets are found in disjoint subtrees,
/// or if the node itself is one of the targets. Values in the tree are
/// assumed distinct and both targets are assumed present; if only one
/// target occurs, that target is returned, and if neither occurs the
/// result is `None`.
///
/// # Complexity
///
/// O(n) time, O(h) space for tree height h
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, lowest_common_ancestor};
///
/// let tree = TreeNode::branch(
///     3,
///     TreeNode::branch(5, TreeNode::leaf(6), TreeNode::leaf(2)),
///     TreeNode::branch(1, TreeNode::leaf(0), TreeNode::leaf(8)),
/// );
/// assert_eq!(lowest_common_ancestor(&tree, 5, 1), Some(3));
/// assert_eq!(lowest_common_ancestor(&tree, 6, 2), Some(5));
/// assert_eq!(lowest_common_ancestor(&tree, 5, 2), Some(5));
/// ```
#[must_use]
pub fn lowest_common_ancestor(
    root: &TreeLink,
    first_target: i32,
    second_target: i32,
) -> Option<i32> {
    locate_ancestor(root, first_target, second_target).map(|node| node.value)
}

/// An inorder range `[low, high)` whose root is already known; `split` is
/// the root's inorder index and `high` is restored when the frame's right
/// range is entered.
struct BuildFrame {
    node: Box<TreeNode>,
    split: usize,
    high: usize,
    left_built: bool,
}

/// Reconstructs a binary tree from its preorder and inorder traversals.
///
/// The preorder sequence is consumed left to right as root values while a
/// value-to-inorder-index map splits each inorder range around the
/// current root in O(1). Values must be distinct and the two slices must
/// be traversals of the same tree; inconsistent inputs yield a partial
/// tree or `None` rather than a panic.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, build_tree};
///
/// let tree = build_tree(&[3, 9, 20, 15, 7], &[9, 3, 15, 20, 7]);
/// let expected = TreeNode::branch(
///     3,
///     TreeNode::leaf(9),
///     TreeNode::branch(20, TreeNode::leaf(15), TreeNode::leaf(7)),
/// );
/// assert_eq!(tree, expected);
/// ```
#[must_use]
pub fn build_tree(preorder: &[i32], inorder: &[i32]) -> TreeLink {
    if preorder.len() != inorder.len() {
        return None;
    }
    let inorder_index_of: HashMap<i32, usize> = inorder
        .iter()
        .enumerate()
        .map(|(index, &value)| (value, index))
        .collect();
    let mut cursor = 0;
    let mut frames: Vec<BuildFrame> = Vec::new();
    let mut low = 0;
    let mut high = inorder.len();
    loop {
        // Descend along left edges, opening a frame per root value.
        let mut built: TreeLink = loop {
            if low >= high || cursor >= preorder.len() {
                break None;
            }
            let root_value = preorder[cursor];
            let Some(&split) = inorder_index_of.get(&root_value) else {
                break None;
            };
            if split < low || split >= high {
                break None;
            }
            cursor += 1;
            frames.push(BuildFrame {
                node: Box::new(TreeNode::new(root_value)),
                split,
                high,
                left_built: false,
            });
            high = split;
        };
        // Attach the finished range, closing every frame whose right
        // range just completed.
        loop {
            match frames.pop() {
                None => return built,
                Some(mut frame) if !frame.left_built => {
                    frame.node.left = built;
                    low = frame.split + 1;
                    high = frame.high;
                    frame.left_built = true;
                    frames.push(frame);
                    break;
                }
                Some(mut frame) => {
                    frame.node.right = built;
                    built = Some(frame.node);
                }
            }
        }
    }
}

/// Encodes a tree as a comma-delimited preorder token stream with `#` as
/// the null sentinel.
///
/// The empty tree encodes as `"#"`. Uses an explicit stack, so deep trees
/// cannot overflow the call stack.
///
/// # Complexity
///
/// O(n) time, O(n) space
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, serialize};
///
/// assert_eq!(serialize(&None), "#");
/// assert_eq!(serialize(&TreeNode::leaf(1)), "1,#,#");
/// ```
#[must_use]
pub fn serialize(root: &TreeLink) -> String {
    let mut tokens: Vec<String> = Vec::new();
    let mut pending: Vec<&TreeLink> = vec![root];
    while let Some(link) = pending.pop() {
        match link.as_deref() {
            None => tokens.push("#".to_string()),
            Some(node) => {
                tokens.push(node.value.to_string());
                // Right first so the left subtree is emitted first.
                pending.push(&node.right);
                pending.push(&node.left);
            }
        }
    }
    tokens.join(",")
}

/// Represents a failure to decode a serialized tree.
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{DecodeError, deserialize};
///
/// let error = deserialize("1,oops,#").unwrap_err();
/// assert_eq!(
///     error,
///     DecodeError::InvalidToken {
///         token: "oops".to_string()
///     }
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The stream ended while a subtree was still expected.
    UnexpectedEnd,
    /// A token was neither an integer nor the `#` sentinel.
    InvalidToken {
        /// The offending token.
        token: String,
    },
    /// Tokens remained after the root's subtrees were complete.
    TrailingTokens,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedEnd => {
                write!(formatter, "serialized tree ended before all subtrees were closed")
            }
            Self::InvalidToken { token } => {
                write!(formatter, "token {token:?} is neither an integer nor \"#\"")
            }
            Self::TrailingTokens => {
                write!(formatter, "serialized tree has tokens after the root's subtrees")
            }
        }
    }
}

impl std::error::Error for DecodeError {}

/// Decodes a tree from the token stream produced by [`serialize`].
///
/// Tokens are consumed sequentially in the same preorder order they were
/// emitted, against an explicit stack of open nodes, so deep trees cannot
/// overflow the call stack. Both `""` and `"#"` decode to the empty tree,
/// and the round-trip law `deserialize(&serialize(t)) == Ok(t)` holds for
/// every tree.
///
/// # Errors
///
/// Returns a [`DecodeError`] if a token is neither an integer nor `#`,
/// if the stream ends early, or if tokens remain after the tree is
/// complete.
///
/// # Examples
///
/// ```rust
/// use algokit::tree::{TreeNode, deserialize};
///
/// let tree = deserialize("1,2,#,#,3,#,#").unwrap();
/// assert_eq!(
///     tree,
///     TreeNode::branch(1, TreeNode::leaf(2), TreeNode::leaf(3))
/// );
/// assert_eq!(deserialize(""), Ok(None));
/// assert_eq!(deserialize("#"), Ok(None));
/// ```
pub fn deserialize(data: &str) -> Result<TreeLink, DecodeError> {
    if data.is_empty() {
        return Ok(None);
    }
    let mut tokens = data.split(',');
    // Open nodes still waiting for a subtree; the flag records whether
    // the left child has been attached.
    let mut open_nodes: Vec<(Box<TreeNode>, bool)> = Vec::new();
    loop {
        let Some(token) = tokens.next() else {
            return Err(DecodeError::UnexpectedEnd);
        };
        if token != "#" {
            let value = token.parse().map_err(|_| DecodeError::InvalidToken {
                token: token.to_string(),
            })?;
            open_nodes.push((Box::new(TreeNode::new(value)), false));
            continue;
        }
        // A `#` completes a subtree; attach it, closing every ancestor
        // whose right child just finished.
        let mut subtree: TreeLink = None;
        loop {
            match open_nodes.pop() {
                None => {
                    if tokens.next().is_some() {
                        return Err(DecodeError::TrailingTokens);
                    }
                    return Ok(subtree);
                }
                Some((mut node, false)) => {
                    node.left = subtree;
                    open_nodes.push((node, true));
                    break;
                }
                Some((mut node, true)) => {
                    node.right = subtree;
                    subtree = Some(node);
                }
            }
        }
    }
}
