//! RSVP guest lookup host
//!
//! Loads a roster file once, then resolves queries from the command line or
//! stdin with [`rsvp_core::Resolver`]. Holds the session's [`Selection`] so
//! that, in stdin mode, answering an ambiguous result with its number picks
//! that guest.
//!
//! ## Usage
//!
//! ```bash
//! rsvp-lookup --roster guests.json John Smith
//! echo "jane doe" | rsvp-lookup --roster guests.json --json
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RSVP_ROSTER`: roster file path
//! - `RSVP_MIN_SCORE`: acceptance threshold (default: 0.2)
//! - `RUST_LOG`: logging filter (default: warn)

pub mod config;
pub mod error;
pub mod logging;
pub mod output;

use std::io::{BufRead, Write};
use std::path::Path;

use rsvp_core::{GuestRecord, MatchResult, Resolver, Roster, Selection};
use tracing::{debug, info};

pub use config::Args;
pub use error::{Error, Result};

/// Read and validate a roster file
pub fn load_roster(path: &Path) -> Result<Roster> {
    let json = std::fs::read_to_string(path)?;
    let roster = Roster::from_json(&json).map_err(|source| Error::Roster {
        path: path.display().to_string(),
        source,
    })?;

    info!(
        path = %path.display(),
        guests = roster.len(),
        fingerprint = %roster.fingerprint(),
        "Roster loaded"
    );
    Ok(roster)
}

/// Lookup session over one roster snapshot
pub struct Session<'r> {
    roster: &'r Roster,
    resolver: Resolver,
    selection: Selection,
    pending: Vec<GuestRecord>,
    json: bool,
    explain: bool,
}

impl<'r> Session<'r> {
    pub fn new(roster: &'r Roster, args: &Args) -> Result<Self> {
        Ok(Self {
            roster,
            resolver: Resolver::with_config(args.resolver_config()?),
            selection: Selection::new(),
            pending: Vec::new(),
            json: args.json,
            explain: args.explain,
        })
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Resolve one query and write its outcome
    pub fn search<W: Write>(&mut self, query: &str, out: &mut W) -> Result<()> {
        self.selection.begin_search();
        self.pending.clear();

        let outcome = self.resolver.resolve(query, self.roster);
        debug!(query, outcome = ?outcome, "Query resolved");
        self.selection.apply(&outcome);
        if let Ok(MatchResult::Ambiguous(options)) = &outcome {
            self.pending = options.clone();
        }

        let scores = if self.explain {
            Some(self.resolver.score_roster(query, self.roster))
        } else {
            None
        };

        if self.json {
            output::write_json(out, &outcome, scores.as_deref())
        } else {
            output::write_text(out, &outcome, scores.as_deref())
        }
    }

    /// Handle one line of interactive input.
    ///
    /// A number right after an ambiguous result picks that option; anything
    /// else is a new search.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<()> {
        if let Some(guest) = self.pick_pending(line) {
            self.pending.clear();
            output::write_selected(out, &guest, self.json)?;
            self.selection.choose(guest);
            return Ok(());
        }
        self.search(line, out)
    }

    fn pick_pending(&self, line: &str) -> Option<GuestRecord> {
        let n: usize = line.trim().parse().ok()?;
        n.checked_sub(1)
            .and_then(|i| self.pending.get(i))
            .cloned()
    }
}

/// Run the lookup: positional query if given, otherwise one query per stdin line.
pub fn run<R: BufRead, W: Write>(args: &Args, input: R, mut out: W) -> Result<()> {
    let roster = load_roster(&args.roster)?;
    let mut session = Session::new(&roster, args)?;

    match args.joined_query() {
        Some(query) => session.search(&query, &mut out)?,
        None => {
            for line in input.lines() {
                session.handle_line(&line?, &mut out)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
