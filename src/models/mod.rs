//! Resource models decoded from the PokeAPI
//!
//! Every model is both `Serialize` and `Deserialize` so it can be written to
//! and read back from the response cache.

pub mod page;
pub mod pokemon;

// Re-export commonly used types
pub use page::{NamedResource, PageEnvelope};
pub use pokemon::{LocationArea, Pokemon, PokemonEncounter, PokemonStat, PokemonType};
