//! Roster Resolution
//!
//! Maps a free-text query onto the roster:
//!
//! 1. Queries with fewer than two tokens are rejected ([`crate::QueryError`])
//! 2. A bare first+last query that collides with two or more roster entries
//!    on first and last token is [`MatchResult::Ambiguous`], without scoring
//! 3. Otherwise the highest-scoring entry wins (earliest on ties), provided
//!    its score is strictly above the acceptance threshold (0.2)
//!
//! The resolver is stateless; the caller keeps whatever it has selected in
//! a [`crate::Selection`].
//!
//! # Example
//!
//! ```rust
//! use rsvp_core::{resolve, GuestRecord, MatchResult, QueryError, Roster};
//!
//! let roster = Roster::new(vec![
//!     GuestRecord::new("Jane Doe", 2),
//!     GuestRecord::new("Jane Doe", 3),
//! ])
//! .unwrap();
//!
//! assert!(matches!(resolve("jane doe", &roster), Ok(MatchResult::Ambiguous(ref g)) if g.len() == 2));
//! assert!(matches!(resolve("Madonna", &roster), Err(QueryError::TooFewTokens { .. })));
//! ```

mod resolver;

use serde::{Deserialize, Serialize};

use crate::roster::GuestRecord;

pub use resolver::{resolve, Resolver, ResolverConfig};

/// Scores at or below this are never presented as a match
pub const DEFAULT_MIN_SCORE: f64 = 0.2;

/// A query needs at least a first and a last name
pub const MIN_QUERY_TOKENS: usize = 2;

/// Outcome of resolving a well-formed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "guests", rename_all = "snake_case")]
pub enum MatchResult {
    /// One roster entry identified
    Unique(GuestRecord),
    /// Several entries share the query's first and last name, in roster order
    Ambiguous(Vec<GuestRecord>),
    /// Nothing scored above the threshold
    NoMatch,
}

impl MatchResult {
    /// The resolved guest, if exactly one
    pub fn unique(&self) -> Option<&GuestRecord> {
        match self {
            MatchResult::Unique(guest) => Some(guest),
            _ => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchResult::NoMatch)
    }
}

/// One roster entry's score against a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredGuest<'a> {
    /// Position in the roster
    pub index: usize,
    pub guest: &'a GuestRecord,
    pub score: f64,
}
