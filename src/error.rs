//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. Every variant is
//! recoverable: the REPL prints the message and keeps the session alive.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for navigation, fetching and command dispatch.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Network or remote failure while fetching a resource
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// Stored or fetched payload could not be decoded
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Backward navigation requested on the first page
    #[error("Already at the beginning of the map!")]
    AtBeginning,

    /// Forward navigation requested after the last page
    #[error("Already at the end of the map!")]
    AtEnd,

    /// Command requires an argument that was not supplied
    #[error("Usage: {0}")]
    MissingArgument(String),

    /// Pokemon is not in the Pokedex
    #[error("{0} has not been caught")]
    NotCaught(String),

    /// Pokedex has no entries yet
    #[error("No Pokemon have been caught yet")]
    EmptyPokedex,

    /// Writing REPL output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// == Conversions ==
impl From<reqwest::Error> for PokedexError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PokedexError::Decode(err.to_string())
        } else {
            PokedexError::Fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PokedexError {
    fn from(err: serde_json::Error) -> Self {
        PokedexError::Decode(err.to_string())
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
