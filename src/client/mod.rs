//! HTTP client for the remote catalog

mod pokeapi;

pub use pokeapi::PokeApiClient;
