//! Error types for malformed caller input.
//!
//! This module provides the error type returned when a routine's input
//! violates its domain, such as an empty sequence passed to a routine that
//! is defined only for non-empty input.
//!
//! Absence of an answer is never an error: routines that can legitimately
//! find nothing (searches, two-sum, coin change) return [`Option`] instead.

/// Represents an error caused by input outside a routine's domain.
///
/// # Examples
///
/// ```rust
/// use algokit::error::InputError;
///
/// let error = InputError::Empty {
///     routine_name: "max_subarray",
/// };
/// assert_eq!(
///     format!("{}", error),
///     "max_subarray: input must contain at least one element"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// The routine requires at least one element but the input was empty.
    Empty {
        /// The name of the routine that rejected the input.
        routine_name: &'static str,
    },
    /// A requested rank (1-based) lies outside the valid range for the
    /// input length.
    RankOutOfRange {
        /// The requested 1-based rank.
        rank: usize,
        /// The number of elements in the input.
        length: usize,
    },
}

impl std::fmt::Display for InputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty { routine_name } => write!(
                formatter,
                "{routine_name}: input must contain at least one element"
            ),
            Self::RankOutOfRange { rank, length } => write!(
                formatter,
                "rank {rank} is outside the valid range 1..={length}"
            ),
        }
    }
}

impl std::error::Error for InputError {}
