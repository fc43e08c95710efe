//! Whole-name scoring

use serde::{Deserialize, Serialize};

use super::token::token_similarity;
use crate::normalize::normalize;

/// Added when either normalized name is a string prefix of the other
pub const START_BONUS: f64 = 0.15;

/// Weight of the mean best per-token similarity
pub const FUZZ_WEIGHT: f64 = 0.35;

/// The terms that make up a name score
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Shared tokens over distinct tokens
    pub jaccard: f64,
    /// [`START_BONUS`] or zero
    pub start_bonus: f64,
    /// [`FUZZ_WEIGHT`] times the mean best token similarity
    pub fuzz: f64,
    /// Normalized names were identical
    pub exact: bool,
}

impl ScoreBreakdown {
    fn exact() -> Self {
        Self {
            exact: true,
            ..Self::default()
        }
    }

    /// Final score. Exact matches are always exactly 1.0.
    pub fn total(&self) -> f64 {
        if self.exact {
            return 1.0;
        }
        self.jaccard + self.start_bonus + self.fuzz
    }
}

/// Score how closely `candidate` matches `query`.
///
/// Returns 0 when either side normalizes to empty and exactly 1 when both
/// normalize to the same string. Other results are not clamped to `[0, 1]`.
pub fn score(query: &str, candidate: &str) -> f64 {
    score_breakdown(query, candidate).total()
}

/// Compute every term of [`score`] separately.
pub fn score_breakdown(query: &str, candidate: &str) -> ScoreBreakdown {
    let a = normalize(query);
    let b = normalize(candidate);
    if a.is_empty() || b.is_empty() {
        return ScoreBreakdown::default();
    }
    if a == b {
        return ScoreBreakdown::exact();
    }

    let tokens_a = token_set(&a);
    let tokens_b = token_set(&b);

    let shared = tokens_a.iter().filter(|t| tokens_b.contains(t)).count();
    // both sets are non-empty here, so the union is too
    let union = tokens_a.len() + tokens_b.len() - shared;
    let jaccard = shared as f64 / union as f64;

    let start_bonus = if b.starts_with(&a) || a.starts_with(&b) {
        START_BONUS
    } else {
        0.0
    };

    let best_a: f64 = tokens_a.iter().map(|t| best_similarity(t, &tokens_b)).sum();
    let best_b: f64 = tokens_b.iter().map(|t| best_similarity(t, &tokens_a)).sum();
    let avg_best = (best_a + best_b) / (tokens_a.len() + tokens_b.len()) as f64;

    ScoreBreakdown {
        jaccard,
        start_bonus,
        fuzz: FUZZ_WEIGHT * avg_best,
        exact: false,
    }
}

/// Distinct tokens of a normalized name, in first-seen order
fn token_set(normalized: &str) -> Vec<&str> {
    let mut set: Vec<&str> = Vec::new();
    for token in normalized.split(' ').filter(|t| !t.is_empty()) {
        if !set.contains(&token) {
            set.push(token);
        }
    }
    set
}

/// Best similarity of `token` against any of `others`
fn best_similarity(token: &str, others: &[&str]) -> f64 {
    others
        .iter()
        .map(|other| token_similarity(token, other))
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_empty_scores_zero() {
        assert_eq!(score("", "Jane Doe"), 0.0);
        assert_eq!(score("Jane Doe", ""), 0.0);
        assert_eq!(score("   ", "  "), 0.0);
    }

    #[test]
    fn test_exact_after_normalization() {
        assert_eq!(score("Jane Doe", "jane doe"), 1.0);
        assert_eq!(score("  JANE\tdoe ", "Jane Doe"), 1.0);
        assert!(score_breakdown("jane doe", "Jane Doe").exact);
    }

    #[test]
    fn test_typo_in_first_name() {
        // jaccard 1/3, no prefix, fuzz 0.35 * (0.75 + 1 + 0.75 + 1) / 4
        let b = score_breakdown("John Smith", "Jon Smith");
        approx(b.jaccard, 1.0 / 3.0);
        assert_eq!(b.start_bonus, 0.0);
        approx(b.fuzz, 0.35 * 0.875);
        approx(b.total(), 1.0 / 3.0 + 0.35 * 0.875);
    }

    #[test]
    fn test_prefix_bonus() {
        // "jane" is a string prefix of "jane doe"
        let b = score_breakdown("Jane", "Jane Doe");
        assert_eq!(b.start_bonus, START_BONUS);
        approx(b.jaccard, 0.5);

        let b = score_breakdown("Jane Doe", "Jane");
        assert_eq!(b.start_bonus, START_BONUS);
    }

    #[test]
    fn test_prefix_bonus_is_string_level() {
        // mid-token prefix still counts
        let b = score_breakdown("jo", "john smith");
        assert_eq!(b.start_bonus, START_BONUS);
    }

    #[test]
    fn test_score_can_exceed_one() {
        // token sets are identical ({ann}) but the strings differ
        let s = score("ann", "Ann  Ann");
        approx(s, 1.0 + START_BONUS + FUZZ_WEIGHT);
        assert!(s > 1.0);
    }

    #[test]
    fn test_set_semantics() {
        let b = score_breakdown("lee lee kim", "lee kim");
        approx(b.jaccard, 1.0);
    }

    #[test]
    fn test_unrelated_names() {
        approx(score("Zzz Yyy", "Alice Wang"), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("John Smith", "Jon Smith"),
            ("Mary Ann Lee", "Mary Lee"),
            ("nizem khan", "nizam khan"),
            ("jo", "john smith"),
        ];
        for (a, b) in pairs {
            assert_eq!(score(a, b), score(b, a), "asymmetric for {:?} / {:?}", a, b);
        }
    }
}
