//! Catch simulation
//!
//! Chance is `max(10, 100 - base_experience)` percent; a uniform roll in
//! `[0, 100)` at or below the chance catches.

use rand::Rng;

use crate::models::Pokemon;

/// Floor so even the strongest Pokemon can be caught.
pub const MIN_CATCH_CHANCE: f64 = 10.0;

/// Catch chance in percent for a Pokemon with the given base experience.
pub fn catch_chance(base_experience: Option<u32>) -> f64 {
    let experience = f64::from(base_experience.unwrap_or(0));
    (100.0 - experience).max(MIN_CATCH_CHANCE)
}

/// Rolls `rng` against the Pokemon's catch chance.
pub fn attempt_catch<R: Rng>(pokemon: &Pokemon, rng: &mut R) -> bool {
    let roll = rng.gen::<f64>() * 100.0;
    roll <= catch_chance(pokemon.base_experience)
}
