//! rsvp-lookup - resolve guest names against an RSVP roster
//!
//! ```bash
//! rsvp-lookup --roster guests.json --explain John Smith
//! ```

use std::io;

use clap::Parser;
use rsvp_lookup::{logging, run, Args};
use tracing::{error, info};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_with_filter(&args.log_level);

    info!(
        roster = %args.roster.display(),
        min_score = args.min_score,
        "Starting rsvp-lookup"
    );

    if let Err(e) = run(&args, io::stdin().lock(), io::stdout().lock()) {
        error!(error = %e, "Lookup failed");
        return Err(e.into());
    }
    Ok(())
}
