//! Environment fallbacks for lookup configuration
//!
//! Kept in its own test binary: it mutates process environment variables
//! that the other config tests read.

use clap::Parser;
use rsvp_lookup::Args;

#[test]
fn test_env_fallbacks_and_override() {
    std::env::set_var("RSVP_ROSTER", "/srv/rsvp/guests.json");
    std::env::set_var("RSVP_MIN_SCORE", "0.45");

    let args = Args::try_parse_from(["rsvp-lookup", "Jane", "Doe"]).unwrap();
    assert_eq!(args.roster, std::path::PathBuf::from("/srv/rsvp/guests.json"));
    assert_eq!(args.min_score, 0.45);
    assert_eq!(args.resolver_config().unwrap().min_score, 0.45);
    assert_eq!(args.joined_query().as_deref(), Some("Jane Doe"));

    // explicit flags win over the environment
    let args =
        Args::try_parse_from(["rsvp-lookup", "--roster", "local.json", "--min-score", "0.3"])
            .unwrap();
    assert_eq!(args.roster, std::path::PathBuf::from("local.json"));
    assert_eq!(args.min_score, 0.3);

    std::env::set_var("RSVP_MIN_SCORE", "not-a-number");
    assert!(Args::try_parse_from(["rsvp-lookup"]).is_err());

    std::env::remove_var("RSVP_ROSTER");
    std::env::remove_var("RSVP_MIN_SCORE");
    assert!(Args::try_parse_from(["rsvp-lookup"]).is_err());
}
