//! Command-line and environment configuration

use std::path::PathBuf;

use clap::Parser;
use rsvp_core::{ResolverConfig, DEFAULT_MIN_SCORE};

use crate::error::{Error, Result};

/// Look up guests on an RSVP roster by name
#[derive(Parser, Debug, Clone)]
#[command(name = "rsvp-lookup")]
#[command(about = "Resolve guest names against an RSVP roster")]
#[command(version)]
pub struct Args {
    /// Roster file: JSON array of {"name", "max_guests"} records
    #[arg(short, long, env = "RSVP_ROSTER")]
    pub roster: PathBuf,

    /// Best score must be strictly above this to count as a match
    #[arg(long, env = "RSVP_MIN_SCORE", default_value_t = DEFAULT_MIN_SCORE)]
    pub min_score: f64,

    /// Print one JSON object per query instead of text
    #[arg(long)]
    pub json: bool,

    /// Also print every roster entry's score
    #[arg(long)]
    pub explain: bool,

    /// Default log filter when RUST_LOG is unset (debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Name to look up; reads one query per line from stdin when omitted
    pub query: Vec<String>,
}

impl Args {
    /// Resolver settings derived from the arguments
    pub fn resolver_config(&self) -> Result<ResolverConfig> {
        if !self.min_score.is_finite() || self.min_score < 0.0 {
            return Err(Error::Config(format!(
                "min score must be a finite number >= 0, got {}",
                self.min_score
            )));
        }

        Ok(ResolverConfig {
            min_score: self.min_score,
            ..Default::default()
        })
    }

    /// Positional words joined into one query, if any were given
    pub fn joined_query(&self) -> Option<String> {
        if self.query.is_empty() {
            None
        } else {
            Some(self.query.join(" "))
        }
    }
}
