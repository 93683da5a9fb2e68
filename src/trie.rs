//! Trie (prefix tree) mapping character sequences to word membership.
//!
//! Each node holds a map from character to uniquely owned child plus an
//! end-of-word flag; the root carries no character of its own. Unicode
//! scalar values are the edge alphabet and repeated inserts of the same
//! word are idempotent.
//!
//! # Complexity
//!
//! `insert`, `contains`, and `starts_with` run in O(m) for a word of m
//! characters; `len` and `is_empty` are O(1).
//!
//! # Examples
//!
//! ```rust
//! use algokit::trie::Trie;
//!
//! let mut trie = Trie::new();
//! trie.insert("apple");
//!
//! assert!(trie.contains("apple"));
//! assert!(!trie.contains("app"));
//! assert!(trie.starts_with("app"));
//!
//! trie.insert("app");
//! assert!(trie.contains("app"));
//! ```

use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: bool,
}

/// A prefix tree over Unicode strings.
///
/// # Examples
///
/// ```rust
/// use algokit::trie::Trie;
///
/// let mut trie = Trie::new();
/// trie.insert("car");
/// trie.insert("card");
///
/// assert!(trie.contains("car"));
/// assert!(trie.starts_with("ca"));
/// assert!(!trie.contains("ca"));
/// assert_eq!(trie.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: TrieNode,
    word_count: usize,
}

impl Trie {
    /// Creates an empty trie.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct words inserted.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.word_count
    }

    /// Reports whether no word has been inserted.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Inserts `word`, creating child nodes per character and marking the
    /// terminal node as end-of-word. Inserting a word twice is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use algokit::trie::Trie;
    ///
    /// let mut trie = Trie::new();
    /// trie.insert("hi");
    /// trie.insert("hi");
    /// assert_eq!(trie.len(), 1);
    /// ```
    pub fn insert(&mut self, word: &str) {
        let mut cursor = &mut self.root;
        for character in word.chars() {
            cursor = cursor.children.entry(character).or_default();
        }
        if !cursor.terminal {
            cursor.terminal = true;
            self.word_count += 1;
        }
    }

    fn walk(&self, path: &str) -> Option<&TrieNode> {
        let mut cursor = &self.root;
        for character in path.chars() {
            cursor = cursor.children.get(&character)?;
        }
        Some(cursor)
    }

    /// Reports whether `word` was inserted as a complete word.
    ///
    /// Requires the exact path to exist and its terminal node to carry
    /// the end-of-word flag.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|node| node.terminal)
    }

    /// Reports whether any inserted word starts with `prefix`.
    ///
    /// Requires only path existence; no end-of-word flag is consulted.
    /// Every trie starts with the empty prefix.
    #[must_use]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }
}
