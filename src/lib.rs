//! Pokedex CLI - An interactive explorer over the PokeAPI
//!
//! Pages through location areas with a cursor-driven pager backed by a
//! time-expiring read-through response cache.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pager;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use pager::{PageSource, Pager};
pub use repl::Session;
