//! Error types for the resolution engine

use thiserror::Error;

/// A query the resolver refuses to score.
///
/// Kept apart from [`crate::MatchResult::NoMatch`]: a rejected query is
/// malformed input, whereas `NoMatch` is a well-formed query that nothing on
/// the roster is close enough to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// Fewer tokens than a first and last name
    #[error("query has {found} name token(s), at least {required} required")]
    TooFewTokens { found: usize, required: usize },
}

/// Errors raised while building a roster snapshot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Record has no usable name
    #[error("roster record {index} has an empty name")]
    EmptyName { index: usize },

    /// Record capacity is zero or negative
    #[error("roster record {index} ('{name}') has invalid max_guests {max_guests}, must be >= 1")]
    InvalidCapacity {
        index: usize,
        name: String,
        max_guests: i64,
    },

    /// Roster document could not be decoded
    #[error("roster parse error: {0}")]
    Parse(String),
}

/// Result type for roster construction
pub type RosterResult<T> = Result<T, RosterError>;
