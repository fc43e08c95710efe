//! Resolver - best-match selection over a roster

use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{MatchResult, ScoredGuest, DEFAULT_MIN_SCORE, MIN_QUERY_TOKENS};
use crate::error::QueryError;
use crate::normalize::{name_parts, tokenize};
use crate::roster::{GuestRecord, Roster};
use crate::similarity::score;

/// Resolver configuration
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Best score must be strictly above this to count as a match
    pub min_score: f64,
    /// Queries with fewer tokens are rejected
    pub min_tokens: usize,
    /// Roster size at which scoring goes parallel (`parallel` feature)
    pub parallel_threshold: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            min_tokens: MIN_QUERY_TOKENS,
            parallel_threshold: 1000,
        }
    }
}

/// Stateless roster resolver
///
/// Holds only configuration, so one instance can be shared across threads
/// and called concurrently against the same roster.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    /// Create a resolver with default configuration
    pub fn new() -> Self {
        Self::with_config(ResolverConfig::default())
    }

    /// Create with custom configuration
    pub fn with_config(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve `query` against `roster`.
    ///
    /// Rejects queries with too few tokens. An empty roster always yields
    /// [`MatchResult::NoMatch`].
    pub fn resolve(&self, query: &str, roster: &Roster) -> Result<MatchResult, QueryError> {
        let found = tokenize(query).len();
        if found < self.config.min_tokens {
            debug!(found, required = self.config.min_tokens, "Query rejected");
            return Err(QueryError::TooFewTokens {
                found,
                required: self.config.min_tokens,
            });
        }

        let query_parts = name_parts(query);
        // collision routing only applies to a bare first+last query
        if found == 2 {
            let collisions: Vec<GuestRecord> = roster
                .iter()
                .filter(|(_, parts)| parts.same_first_last(&query_parts))
                .map(|(guest, _)| guest.clone())
                .collect();

            // Scoring can't tell apart two people with the same first and last name
            if collisions.len() > 1 {
                debug!(
                    first = %query_parts.first,
                    last = %query_parts.last,
                    candidates = collisions.len(),
                    "First/last collision, asking caller to disambiguate"
                );
                return Ok(MatchResult::Ambiguous(collisions));
            }
        }

        let scored = self.score_roster(query, roster);
        match best_of(&scored) {
            Some(best) if best.score > self.config.min_score => {
                debug!(
                    index = best.index,
                    score = best.score,
                    min_score = self.config.min_score,
                    "Resolved unique match"
                );
                Ok(MatchResult::Unique(best.guest.clone()))
            }
            best => {
                debug!(
                    best_score = ?best.map(|b| b.score),
                    min_score = self.config.min_score,
                    "No match above threshold"
                );
                Ok(MatchResult::NoMatch)
            }
        }
    }

    /// Score every roster entry against `query`, in roster order.
    pub fn score_roster<'r>(&self, query: &str, roster: &'r Roster) -> Vec<ScoredGuest<'r>> {
        self.score_records(query, roster.records())
    }

    /// Parallel above the threshold; collecting keeps roster order
    #[cfg(feature = "parallel")]
    fn score_records<'r>(&self, query: &str, records: &'r [GuestRecord]) -> Vec<ScoredGuest<'r>> {
        if records.len() >= self.config.parallel_threshold {
            records
                .par_iter()
                .enumerate()
                .map(|(index, guest)| score_one(query, index, guest))
                .collect()
        } else {
            score_sequential(query, records)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_records<'r>(&self, query: &str, records: &'r [GuestRecord]) -> Vec<ScoredGuest<'r>> {
        score_sequential(query, records)
    }
}

/// Resolve with the default configuration
pub fn resolve(query: &str, roster: &Roster) -> Result<MatchResult, QueryError> {
    Resolver::new().resolve(query, roster)
}

fn score_sequential<'r>(query: &str, records: &'r [GuestRecord]) -> Vec<ScoredGuest<'r>> {
    records
        .iter()
        .enumerate()
        .map(|(index, guest)| score_one(query, index, guest))
        .collect()
}

fn score_one<'r>(query: &str, index: usize, guest: &'r GuestRecord) -> ScoredGuest<'r> {
    let score = score(query, &guest.name);
    trace!(index, name = %guest.name, score, "Scored roster entry");
    ScoredGuest {
        index,
        guest,
        score,
    }
}

/// Highest score, earliest entry on ties
fn best_of<'a, 'r>(scored: &'a [ScoredGuest<'r>]) -> Option<&'a ScoredGuest<'r>> {
    let mut best: Option<&ScoredGuest> = None;
    for candidate in scored {
        match best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best
}
