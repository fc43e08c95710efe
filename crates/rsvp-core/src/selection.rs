//! Caller-held selection state
//!
//! Tracks which roster entry, if any, the user currently has selected. The
//! resolver never touches this; hosts keep one per session and feed it each
//! resolution outcome.

use crate::error::QueryError;
use crate::resolve::MatchResult;
use crate::roster::GuestRecord;

/// The currently selected guest, if any
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<GuestRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new search always starts with nothing selected
    pub fn begin_search(&mut self) {
        self.current = None;
    }

    /// Select on a unique match, clear on anything else.
    pub fn apply(&mut self, outcome: &Result<MatchResult, QueryError>) {
        self.current = match outcome {
            Ok(MatchResult::Unique(guest)) => Some(guest.clone()),
            _ => None,
        };
    }

    /// Pick one entry out of an ambiguous list
    pub fn choose(&mut self, guest: GuestRecord) {
        self.current = Some(guest);
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&GuestRecord> {
        self.current.as_ref()
    }

    pub fn is_selected(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_selects() {
        let mut selection = Selection::new();
        let guest = GuestRecord::new("Jon Smith", 1);

        selection.apply(&Ok(MatchResult::Unique(guest.clone())));
        assert_eq!(selection.current(), Some(&guest));
    }

    #[test]
    fn test_other_outcomes_clear() {
        let guest = GuestRecord::new("Jon Smith", 1);
        let outcomes = [
            Ok(MatchResult::NoMatch),
            Ok(MatchResult::Ambiguous(vec![guest.clone(), guest.clone()])),
            Err(QueryError::TooFewTokens {
                found: 1,
                required: 2,
            }),
        ];

        for outcome in &outcomes {
            let mut selection = Selection::new();
            selection.choose(guest.clone());
            selection.apply(outcome);
            assert!(!selection.is_selected(), "still selected after {:?}", outcome);
        }
    }

    #[test]
    fn test_begin_search_resets() {
        let mut selection = Selection::new();
        selection.choose(GuestRecord::new("Jane Doe", 3));
        assert!(selection.is_selected());

        selection.begin_search();
        assert_eq!(selection.current(), None);
    }
}
