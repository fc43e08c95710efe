//! RSVP Core Engine
//!
//! Resolves free-text guest names against a fixed roster of registered
//! guests. The engine is pure: the same roster and query always produce the
//! same result, and nothing in here holds state between calls.
//!
//! # Layers
//!
//! - [`normalize`] - canonical lower-case, single-spaced names and tokens
//! - [`similarity`] - graded name similarity (token overlap, prefix bonus,
//!   per-token edit-distance fuzz)
//! - [`resolve`] - exact first+last collision routing and best-match
//!   selection over a [`Roster`]
//!
//! # Features
//!
//! - `parallel` - Score large rosters in parallel via rayon
//!
//! # Example
//!
//! ```rust
//! use rsvp_core::{GuestRecord, MatchResult, Resolver, Roster};
//!
//! let roster = Roster::new(vec![
//!     GuestRecord::new("Jon Smith", 1),
//!     GuestRecord::new("Alice Wang", 4),
//! ])
//! .unwrap();
//!
//! let resolver = Resolver::new();
//! match resolver.resolve("John Smith", &roster).unwrap() {
//!     MatchResult::Unique(guest) => assert_eq!(guest.name, "Jon Smith"),
//!     other => panic!("unexpected result: {:?}", other),
//! }
//! ```

pub mod error;
pub mod normalize;
pub mod resolve;
pub mod roster;
pub mod selection;
pub mod similarity;

// Re-export main types at crate root
pub use error::{QueryError, RosterError, RosterResult};
pub use normalize::{name_parts, normalize, tokenize, NameParts};
pub use resolve::{
    resolve, MatchResult, Resolver, ResolverConfig, ScoredGuest, DEFAULT_MIN_SCORE,
    MIN_QUERY_TOKENS,
};
pub use roster::{GuestRecord, Roster};
pub use selection::Selection;
pub use similarity::{
    edit_distance, score, score_breakdown, token_similarity, ScoreBreakdown, FUZZ_WEIGHT,
    START_BONUS,
};
