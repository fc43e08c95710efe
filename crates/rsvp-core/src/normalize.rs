//! Name normalization
//!
//! Every comparison in the engine runs on normalized text: lower-cased, with
//! each whitespace run collapsed to a single space and the ends trimmed.

use serde::{Deserialize, Serialize};

/// Canonicalize raw text for comparison.
///
/// Total and idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        // whole-word lowercasing keeps context-sensitive mappings (final sigma)
        out.push_str(&word.to_lowercase());
    }
    out
}

/// Normalize then split into non-empty tokens, in order.
pub fn tokenize(raw: &str) -> Vec<String> {
    normalize(raw)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// First / middle / last split of a normalized name.
///
/// `middle` holds every token between the first and last, joined by single
/// spaces, and is empty for one- and two-token names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameParts {
    pub first: String,
    pub middle: String,
    pub last: String,
}

impl NameParts {
    /// True when the name had no tokens at all
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }

    /// True when there is anything between the first and last token
    pub fn has_middle(&self) -> bool {
        !self.middle.is_empty()
    }

    /// Same first and last token, ignoring any middle names
    pub fn same_first_last(&self, other: &NameParts) -> bool {
        self.first == other.first && self.last == other.last
    }
}

/// Split a raw name into [`NameParts`].
///
/// A single-token name yields `first == last` with an empty middle.
pub fn name_parts(raw: &str) -> NameParts {
    let tokens = tokenize(raw);
    match tokens.as_slice() {
        [] => NameParts::default(),
        [only] => NameParts {
            first: only.clone(),
            middle: String::new(),
            last: only.clone(),
        },
        [first, middle @ .., last] => NameParts {
            first: first.clone(),
            middle: middle.join(" "),
            last: last.clone(),
        },
    }
}
