//! Location area and Pokemon resources
//!
//! Only the fields the REPL displays are decoded; everything else in the API
//! payload is ignored.

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// A location area with the Pokemon that can be encountered there
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

impl LocationArea {
    /// Encounterable Pokemon names in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// A single Pokemon species
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Some forms have no base experience; treated as 0
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_location_area() {
        let body = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}, "version_details": []},
                {"pokemon": {"name": "staryu", "url": "https://pokeapi.co/api/v2/pokemon/120/"}, "version_details": []}
            ]
        }"#;

        let area: LocationArea = serde_json::from_str(body).unwrap();

        assert_eq!(area.name, "canalave-city-area");
        assert_eq!(area.pokemon_names().collect::<Vec<_>>(), vec!["tentacool", "staryu"]);
    }

    #[test]
    fn test_decode_pokemon() {
        let body = r#"{
            "name": "pidgey",
            "base_experience": 50,
            "height": 3,
            "weight": 18,
            "stats": [
                {"base_stat": 40, "effort": 0, "stat": {"name": "hp", "url": "u"}},
                {"base_stat": 45, "effort": 0, "stat": {"name": "attack", "url": "u"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "normal", "url": "u"}},
                {"slot": 2, "type": {"name": "flying", "url": "u"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(body).unwrap();

        assert_eq!(pokemon.name, "pidgey");
        assert_eq!(pokemon.base_experience, Some(50));
        assert_eq!(pokemon.height, 3);
        assert_eq!(pokemon.weight, 18);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 45);
        assert_eq!(pokemon.types[1].kind.name, "flying");
    }

    #[test]
    fn test_null_base_experience() {
        let pokemon: Pokemon =
            serde_json::from_str(r#"{"name": "missingno", "base_experience": null}"#).unwrap();
        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.stats.is_empty());
    }
}
