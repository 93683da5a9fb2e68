#![cfg(feature = "tree")]
//! Property-based tests for the binary tree suite.
//!
//! This module verifies the serialization round-trip law and the
//! traversal-reconstruction law using proptest.

use algokit::tree::{
    TreeLink, TreeNode, build_tree, deserialize, is_valid_bst, level_order, serialize,
};
use proptest::prelude::*;
use std::collections::HashSet;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_tree() -> impl Strategy<Value = TreeLink> {
    let leaf = prop_oneof![
        Just(None),
        any::<i32>().prop_map(TreeNode::leaf),
    ];
    leaf.prop_recursive(8, 128, 2, |subtree| {
        (any::<i32>(), subtree.clone(), subtree)
            .prop_map(|(value, left, right)| TreeNode::branch(value, left, right))
    })
}

fn arbitrary_distinct_values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::hash_set(any::<i32>(), 1..64)
        .prop_map(|values| values.into_iter().collect())
}

/// Builds a balanced tree by rooting each range at its middle element.
fn balanced_tree_from(values: &[i32]) -> TreeLink {
    if values.is_empty() {
        return None;
    }
    let middle = values.len() / 2;
    TreeNode::branch(
        values[middle],
        balanced_tree_from(&values[..middle]),
        balanced_tree_from(&values[middle + 1..]),
    )
}

fn preorder_of(link: &TreeLink, output: &mut Vec<i32>) {
    if let Some(node) = link.as_deref() {
        output.push(node.value);
        preorder_of(&node.left, output);
        preorder_of(&node.right, output);
    }
}

fn inorder_of(link: &TreeLink, output: &mut Vec<i32>) {
    if let Some(node) = link.as_deref() {
        inorder_of(&node.left, output);
        output.push(node.value);
        inorder_of(&node.right, output);
    }
}

fn node_count(link: &TreeLink) -> usize {
    link.as_deref().map_or(0, |node| {
        1 + node_count(&node.left) + node_count(&node.right)
    })
}

// =============================================================================
// Round-Trip Law: deserialize(serialize(t)) == Ok(t)
// =============================================================================

proptest! {
    #[test]
    fn prop_codec_round_trip_law(tree in arbitrary_tree()) {
        let encoded = serialize(&tree);
        prop_assert_eq!(deserialize(&encoded), Ok(tree));
    }
}

// =============================================================================
// Token-Count Law: n nodes serialize to exactly 2n + 1 tokens
// =============================================================================

proptest! {
    #[test]
    fn prop_codec_token_count_law(tree in arbitrary_tree()) {
        let encoded = serialize(&tree);
        let token_count = encoded.split(',').count();
        prop_assert_eq!(token_count, 2 * node_count(&tree) + 1);
    }
}

// =============================================================================
// Reconstruction Law: build_tree(preorder(t), inorder(t)) == t
// for trees with distinct values
// =============================================================================

proptest! {
    #[test]
    fn prop_build_tree_reconstruction_law(values in arbitrary_distinct_values()) {
        let tree = balanced_tree_from(&values);
        let mut preorder = Vec::new();
        let mut inorder = Vec::new();
        preorder_of(&tree, &mut preorder);
        inorder_of(&tree, &mut inorder);

        prop_assert_eq!(build_tree(&preorder, &inorder), tree);
    }
}

// =============================================================================
// BST Law: a middle-rooted tree over sorted distinct values is a valid BST
// =============================================================================

proptest! {
    #[test]
    fn prop_balanced_tree_over_sorted_values_is_bst(values in arbitrary_distinct_values()) {
        let mut sorted = values;
        sorted.sort_unstable();
        let tree = balanced_tree_from(&sorted);

        prop_assert!(is_valid_bst(&tree));
    }
}

// =============================================================================
// Level-Order Law: BFS visits every value exactly once
// =============================================================================

proptest! {
    #[test]
    fn prop_level_order_visits_all_values(values in arbitrary_distinct_values()) {
        let tree = balanced_tree_from(&values);
        let visited: HashSet<i32> = level_order(&tree).into_iter().flatten().collect();
        let expected: HashSet<i32> = values.into_iter().collect();

        prop_assert_eq!(visited, expected);
    }
}
