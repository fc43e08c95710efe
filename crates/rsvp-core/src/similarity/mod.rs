//! Name Similarity Scoring
//!
//! Graded similarity between two names. Stateless and symmetric.
//!
//! # Terms
//!
//! 1. Exact normalized equality short-circuits to 1.0
//! 2. Jaccard overlap of the two token sets
//! 3. Prefix bonus (0.15) when either full name starts with the other
//! 4. Fuzz (0.35 x mean best per-token Levenshtein similarity, both directions)
//!
//! The sum is not clamped: a single-token exact hit plus the prefix bonus can
//! land above 1.0. Only full-string equality is pinned to exactly 1.0.
//!
//! # Example
//!
//! ```rust
//! use rsvp_core::similarity::{score, token_similarity};
//!
//! assert_eq!(score("Jane Doe", "  jane   DOE"), 1.0);
//! assert!(token_similarity("nizem", "nizam") > 0.7);
//! assert!(score("John Smith", "Jon Smith") > 0.2);
//! ```

mod scoring;
mod token;

pub use scoring::{score, score_breakdown, ScoreBreakdown, FUZZ_WEIGHT, START_BONUS};
pub use token::{edit_distance, token_similarity};
