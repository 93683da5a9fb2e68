//! # algokit
//!
//! A library of classic algorithm routines operating purely on in-memory
//! values: the caller supplies sequences, lists, trees, or dictionaries and
//! receives values or newly constructed structures back.
//!
//! ## Overview
//!
//! Each suite is an independent set of pure or near-pure functions with an
//! explicit asymptotic complexity contract. No suite depends on another
//! except where a list or tree type is shared:
//!
//! - **Linear scans**: two-sum, Kadane's maximum subarray, two-pointer
//!   string and array problems
//! - **Monotonic stacks**: bracket validation, largest rectangle in a
//!   histogram, trapping rain water
//! - **Linked lists**: reversal and sorted merges (two-way and k-way)
//! - **Binary trees**: BFS, BST validation, traversal reconstruction, and a
//!   preorder serialization codec
//! - **Dynamic programming**: edit distance, wildcard matching, coin
//!   change, longest increasing subsequence
//! - **Graph search**: flood fill, cycle detection, word-ladder BFS
//! - **Binary search**: rotated arrays, peaks, median of two sorted arrays
//! - **Trie**: prefix tree with insert/contains/starts-with
//! - **Grouping and selection**: anagram grouping, top-k frequency,
//!   quickselect
//!
//! ## Feature Flags
//!
//! - `scan`: single-pass and two-pointer array/string routines
//! - `stack`: monotonic-stack routines
//! - `list`: singly-linked list routines
//! - `tree`: binary tree routines and the serialization codec
//! - `dp`: dynamic-programming routines
//! - `graph`: graph traversal routines
//! - `search`: binary-search routines
//! - `trie`: prefix tree
//! - `select`: hashing-based grouping and order statistics
//! - `full`: enable all features
//!
//! ## Example
//!
//! ```rust
//! use algokit::prelude::*;
//!
//! let indices = two_sum(&[2, 7, 11, 15], 9);
//! assert_eq!(indices, Some((0, 1)));
//! ```
//!
//! ## Error Handling
//!
//! Absence is an answer, not an error: search-family routines return
//! [`Option`]. Inputs that violate a routine's domain (an empty sequence
//! where at least one element is required, a rank outside the valid range)
//! fail fast with [`InputError`]. No routine panics on well-formed input.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use algokit::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::InputError;

    #[cfg(feature = "scan")]
    pub use crate::scan::*;

    #[cfg(feature = "stack")]
    pub use crate::stack::*;

    #[cfg(feature = "list")]
    pub use crate::list::*;

    #[cfg(feature = "tree")]
    pub use crate::tree::*;

    #[cfg(feature = "dp")]
    pub use crate::dp::*;

    #[cfg(feature = "graph")]
    pub use crate::graph::*;

    #[cfg(feature = "search")]
    pub use crate::search::*;

    #[cfg(feature = "trie")]
    pub use crate::trie::*;

    #[cfg(feature = "select")]
    pub use crate::select::*;
}

pub mod error;

pub use error::InputError;

#[cfg(feature = "scan")]
pub mod scan;

#[cfg(feature = "stack")]
pub mod stack;

#[cfg(feature = "list")]
pub mod list;

#[cfg(feature = "tree")]
pub mod tree;

#[cfg(feature = "dp")]
pub mod dp;

#[cfg(feature = "graph")]
pub mod graph;

#[cfg(feature = "search")]
pub mod search;

#[cfg(feature = "trie")]
pub mod trie;

#[cfg(feature = "select")]
pub mod select;
