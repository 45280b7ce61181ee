//! Configuration Module
//!
//! Handles loading and managing Pokedex configuration from environment variables.

use std::env;
use std::time::Duration;

/// Pokedex configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cache TTL in seconds, also the sweep interval
    pub cache_ttl: u64,
    /// Base URL of the PokeAPI, without trailing slash
    pub api_base_url: String,
    /// HTTP request timeout in seconds
    pub fetch_timeout: u64,
    /// Prompt printed before each REPL line
    pub prompt: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    ///
    /// Zero or unparsable durations fall back to the default.
    ///
    /// - `POKEDEX_CACHE_TTL` - Cache TTL in seconds (default: 5)
    /// - `POKEDEX_API_BASE_URL` - PokeAPI base URL (default: https://pokeapi.co/api/v2)
    /// - `POKEDEX_FETCH_TIMEOUT` - HTTP timeout in seconds (default: 10)
    /// - `POKEDEX_PROMPT` - REPL prompt (default: "Pokedex > ")
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: env::var("POKEDEX_CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.cache_ttl),
            api_base_url: env::var("POKEDEX_API_BASE_URL")
                .ok()
                .map(|v| v.trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_base_url),
            fetch_timeout: env::var("POKEDEX_FETCH_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|timeout| *timeout > 0)
                .unwrap_or(defaults.fetch_timeout),
            prompt: env::var("POKEDEX_PROMPT").unwrap_or(defaults.prompt),
        }
    }

    /// Cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    /// HTTP timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 5,
            api_base_url: "https://pokeapi.co/api/v2".to_string(),
            fetch_timeout: 10,
            prompt: "Pokedex > ".to_string(),
        }
    }
}
