//! Error types for the lookup host.

use rsvp_core::RosterError;
use thiserror::Error;

/// Lookup error type.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Roster file rejected
    #[error("roster error in {path}: {source}")]
    Roster {
        path: String,
        #[source]
        source: RosterError,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using the lookup Error.
pub type Result<T> = std::result::Result<T, Error>;
