//! Per-token edit distance

use strsim::levenshtein;

/// Levenshtein distance over characters (insert, delete, substitute cost 1).
///
/// Zero iff `a == b`. Distance to or from an empty string is the other
/// string's character count.
#[inline]
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Similarity of two tokens in `[0, 1]`.
///
/// `0` when either token is empty, `1` when identical, otherwise
/// `1 - distance / max_len` with lengths counted in characters.
#[inline]
pub fn token_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }

    let max_len = a.chars().count().max(b.chars().count());
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_distance_identity() {
        for s in ["", "a", "nizam", "smith"] {
            assert_eq!(edit_distance(s, s), 0);
        }
    }

    #[test]
    fn test_edit_distance_empty() {
        assert_eq!(edit_distance("", "jane"), 4);
        assert_eq!(edit_distance("jane", ""), 4);
    }

    #[test]
    fn test_edit_distance_known() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("john", "jon"), 1);
        assert_eq!(edit_distance("nizem", "nizam"), 1);
        // transposition costs two single-character edits
        assert_eq!(edit_distance("smith", "smtih"), 2);
    }

    #[test]
    fn test_edit_distance_counts_characters() {
        assert_eq!(edit_distance("josé", "jose"), 1);
        assert_eq!(edit_distance("zoë", "zoe"), 1);
    }

    #[test]
    fn test_edit_distance_symmetric_and_triangle() {
        let words = ["jane", "jan", "joan", "dane", "", "janet"];
        for a in words {
            for b in words {
                assert_eq!(edit_distance(a, b), edit_distance(b, a));
                for c in words {
                    assert!(edit_distance(a, c) <= edit_distance(a, b) + edit_distance(b, c));
                }
            }
        }
    }

    #[test]
    fn test_token_similarity_bounds() {
        assert_eq!(token_similarity("", "jane"), 0.0);
        assert_eq!(token_similarity("jane", ""), 0.0);
        assert_eq!(token_similarity("jane", "jane"), 1.0);
        assert_eq!(token_similarity("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_token_similarity_typo() {
        let sim = token_similarity("nizem", "nizam");
        assert!((sim - 0.8).abs() < 1e-12, "got {}", sim);

        let sim = token_similarity("john", "jon");
        assert!((sim - 0.75).abs() < 1e-12, "got {}", sim);
    }

    #[test]
    fn test_token_similarity_multibyte_length() {
        // one substitution over four characters, not five bytes
        let sim = token_similarity("josé", "jose");
        assert!((sim - 0.75).abs() < 1e-12, "got {}", sim);
    }
}
