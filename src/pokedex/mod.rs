//! Pokedex Module
//!
//! In-memory collection of caught Pokemon, keyed by name. Lives only for the
//! current session.

mod catch;

pub use catch::{attempt_catch, catch_chance, MIN_CATCH_CHANCE};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::models::Pokemon;

/// A Pokemon record plus when it was caught
#[derive(Debug, Clone, PartialEq)]
pub struct CaughtPokemon {
    pub pokemon: Pokemon,
    pub caught_at: DateTime<Utc>,
}

/// Caught Pokemon, iterated in name order
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    entries: BTreeMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same Pokemon again replaces the record.
    pub fn add(&mut self, pokemon: Pokemon) {
        let caught = CaughtPokemon {
            caught_at: Utc::now(),
            pokemon,
        };
        self.entries.insert(caught.pokemon.name.clone(), caught);
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
