//! Rendering of resolution outcomes

use std::io::Write;

use rsvp_core::{GuestRecord, MatchResult, QueryError, ScoredGuest};
use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// JSON shape of a rejected query
#[derive(Debug, Serialize)]
struct InvalidQuery {
    kind: &'static str,
    found: usize,
    required: usize,
}

fn guest_line(guest: &GuestRecord) -> String {
    format!("{} (up to {} guest(s))", guest.name, guest.max_guests)
}

/// Human-readable outcome, one block per query
pub fn write_text<W: Write>(
    out: &mut W,
    outcome: &std::result::Result<MatchResult, QueryError>,
    scores: Option<&[ScoredGuest<'_>]>,
) -> Result<()> {
    match outcome {
        Ok(MatchResult::Unique(guest)) => writeln!(out, "match: {}", guest_line(guest))?,
        Ok(MatchResult::Ambiguous(options)) => {
            writeln!(out, "ambiguous: please pick your exact name")?;
            for (i, guest) in options.iter().enumerate() {
                writeln!(out, "  {}. {}", i + 1, guest.name)?;
            }
        }
        Ok(MatchResult::NoMatch) => writeln!(out, "no match: no close match found")?,
        Err(QueryError::TooFewTokens { found: 0, .. }) => {
            writeln!(out, "invalid query: please enter your name")?
        }
        Err(QueryError::TooFewTokens { .. }) => {
            writeln!(out, "invalid query: please enter your full name (first and last)")?
        }
    }

    if let Some(scores) = scores {
        for s in scores {
            writeln!(out, "  score {:.4}  {}", s.score, s.guest.name)?;
        }
    }
    Ok(())
}

/// Single-line JSON outcome
pub fn write_json<W: Write>(
    out: &mut W,
    outcome: &std::result::Result<MatchResult, QueryError>,
    scores: Option<&[ScoredGuest<'_>]>,
) -> Result<()> {
    let mut value = match outcome {
        Ok(result) => serde_json::to_value(result)?,
        Err(QueryError::TooFewTokens { found, required }) => serde_json::to_value(InvalidQuery {
            kind: "invalid_query",
            found: *found,
            required: *required,
        })?,
    };

    if let (Some(scores), Value::Object(map)) = (scores, &mut value) {
        map.insert("scores".to_string(), serde_json::to_value(scores)?);
    }

    serde_json::to_writer(&mut *out, &value)?;
    writeln!(out)?;
    Ok(())
}

/// Confirmation after picking from an ambiguous list
pub fn write_selected<W: Write>(out: &mut W, guest: &GuestRecord, json: bool) -> Result<()> {
    if json {
        let value = serde_json::json!({ "kind": "selected", "guest": guest });
        serde_json::to_writer(&mut *out, &value)?;
        writeln!(out)?;
    } else {
        writeln!(out, "selected: {}", guest_line(guest))?;
    }
    Ok(())
}
