//! Graph traversal routines: flood fill, cycle detection, and word-ladder
//! BFS.
//!
//! All depth-first traversals here use explicit stacks rather than
//! recursion, so pathological inputs (a grid that is one huge island, a
//! prerequisite chain thousands of courses long) cannot overflow the call
//! stack.
//!
//! # Overview
//!
//! | Routine         | Time                | Space |
//! |-----------------|---------------------|-------|
//! | `count_islands` | O(rows · cols)      | O(rows · cols) |
//! | `can_finish`    | O(V + E)            | O(V + E) |
//! | `ladder_length` | O(words · len · 26) | O(words) |
//!
//! # Examples
//!
//! ```rust
//! use algokit::graph::can_finish;
//!
//! // Course 1 requires course 0: feasible.
//! assert!(can_finish(2, &[(1, 0)]));
//! // Mutual prerequisites: infeasible.
//! assert!(!can_finish(2, &[(1, 0), (0, 1)]));
//! ```

use std::collections::HashSet;

/// Counts the islands in a grid, where an island is a maximal group of
/// `true` cells connected horizontally or vertically.
///
/// Destructive: visited land cells are cleared to `false` in place, so
/// each outer-scan hit of a still-`true` cell is a new island and
/// triggers one explicit-stack flood fill.
///
/// # Complexity
///
/// O(rows · cols) time, O(rows · cols) space in the worst case
///
/// # Examples
///
/// ```rust
/// use algokit::graph::count_islands;
///
/// let mut grid = vec![
///     vec![true, true, false, false],
///     vec![true, true, false, false],
///     vec![false, false, true, false],
///     vec![false, false, false, true],
/// ];
/// assert_eq!(count_islands(&mut grid), 3);
/// ```
pub fn count_islands(grid: &mut [Vec<bool>]) -> usize {
    let row_count = grid.len();
    let column_count = grid.first().map_or(0, Vec::len);
    let mut island_count = 0;
    let mut pending: Vec<(usize, usize)> = Vec::new();
    for start_row in 0..row_count {
        for start_column in 0..column_count {
            if !grid[start_row][start_column] {
                continue;
            }
            island_count += 1;
            grid[start_row][start_column] = false;
            pending.push((start_row, start_column));
            while let Some((row, column)) = pending.pop() {
                let mut flood = |row: usize, column: usize, grid: &mut [Vec<bool>]| {
                    if row < row_count && column < column_count && grid[row][column] {
                        grid[row][column] = false;
                        pending.push((row, column));
                    }
                };
                flood(row.wrapping_sub(1), column, grid);
                flood(row + 1, column, grid);
                flood(row, column.wrapping_sub(1), grid);
                flood(row, column + 1, grid);
            }
        }
    }
    island_count
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum VisitState {
    Unvisited,
    InProgress,
    Done,
}

/// Reports whether every course can be finished given `(course,
/// prerequisite)` pairs, i.e. whether the prerequisite graph is acyclic.
///
/// Builds an adjacency list and runs a three-state depth-first search
/// with an explicit frame stack: revisiting an in-progress node is a
/// back-edge, which signals a cycle; fully explored nodes are never
/// revisited. Course indices must be below `course_count`; pairs naming
/// an out-of-range course are ignored.
///
/// # Complexity
///
/// O(V + E) time and space
///
/// # Examples
///
/// ```rust
/// use algokit::graph::can_finish;
///
/// assert!(can_finish(2, &[(1, 0)]));
/// assert!(!can_finish(2, &[(1, 0), (0, 1)]));
/// assert!(can_finish(5, &[]));
/// ```
#[must_use]
pub fn can_finish(course_count: usize, prerequisites: &[(usize, usize)]) -> bool {
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); course_count];
    for &(course, prerequisite) in prerequisites {
        if course < course_count && prerequisite < course_count {
            adjacency[prerequisite].push(course);
        }
    }
    let mut states = vec![VisitState::Unvisited; course_count];
    // Frames carry the node and the index of its next unexplored edge.
    let mut frames: Vec<(usize, usize)> = Vec::new();
    for start in 0..course_count {
        if states[start] != VisitState::Unvisited {
            continue;
        }
        states[start] = VisitState::InProgress;
        frames.push((start, 0));
        while let Some(frame) = frames.last_mut() {
            let (node, edge_index) = *frame;
            if let Some(&next) = adjacency[node].get(edge_index) {
                frame.1 += 1;
                match states[next] {
                    VisitState::InProgress => return false,
                    VisitState::Unvisited => {
                        states[next] = VisitState::InProgress;
                        frames.push((next, 0));
                    }
                    VisitState::Done => {}
                }
            } else {
                states[node] = VisitState::Done;
                frames.pop();
            }
        }
    }
    true
}

/// Returns the length of the shortest transformation sequence from
/// `begin_word` to `end_word`, where each step changes exactly one
/// character and every intermediate word must be in the dictionary.
///
/// Breadth-first search over the implicit edit-distance-1 graph. The
/// dictionary is borrowed immutably; an explicit visited set guarantees
/// each word is enqueued at most once. The level counter starts at 1 (the
/// sequence includes `begin_word`) and increments per frontier. Returns
/// `0` when `end_word` is absent from the dictionary or unreachable.
///
/// Words are expected to be lowercase ASCII of equal length.
///
/// # Examples
///
/// ```rust
/// use algokit::graph::ladder_length;
///
/// let dictionary = ["hot", "dot", "dog", "lot", "log", "cog"];
/// assert_eq!(ladder_length("hit", "cog", &dictionary), 5);
///
/// let missing_end = ["hot", "dot", "dog", "lot", "log"];
/// assert_eq!(ladder_length("hit", "cog", &missing_end), 0);
/// ```
#[must_use]
pub fn ladder_length(begin_word: &str, end_word: &str, dictionary: &[&str]) -> usize {
    let words: HashSet<&[u8]> = dictionary.iter().map(|word| word.as_bytes()).collect();
    if !words.contains(end_word.as_bytes()) {
        return 0;
    }
    let mut visited: HashSet<Vec<u8>> = HashSet::new();
    visited.insert(begin_word.as_bytes().to_vec());
    let mut frontier: Vec<Vec<u8>> = vec![begin_word.as_bytes().to_vec()];
    let mut level = 1;
    while !frontier.is_empty() {
        let mut next_frontier = Vec::new();
        for word in frontier {
            if word == end_word.as_bytes() {
                return level;
            }
            for position in 0..word.len() {
                let original = word[position];
                let mut candidate = word.clone();
                for letter in b'a'..=b'z' {
                    if letter == original {
                        continue;
                    }
                    candidate[position] = letter;
                    if words.contains(candidate.as_slice()) && !visited.contains(&candidate) {
                        visited.insert(candidate.clone());
                        next_frontier.push(candidate.clone());
                    }
                }
            }
        }
        frontier = next_frontier;
        level += 1;
    }
    0
}
