//! Caught Pokemon
//!
//! The record kept in the Pokedex once a catch succeeds.

use chrono::{DateTime, Utc};

use super::PokemonDetail;

/// A named base stat, e.g. `hp: 35`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// Everything `inspect` shows about a caught Pokemon.
#[derive(Debug, Clone)]
pub struct CaughtPokemon {
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub base_experience: u32,
    pub stats: Vec<Stat>,
    pub types: Vec<String>,
    pub caught_at: DateTime<Utc>,
}

impl CaughtPokemon {
    /// Builds the record from the API payload, stamped with the current time.
    pub fn from_detail(detail: PokemonDetail) -> Self {
        Self {
            name: detail.name,
            height: detail.height,
            weight: detail.weight,
            base_experience: detail.base_experience.unwrap_or(0),
            stats: detail
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            types: detail.types.into_iter().map(|t| t.kind.name).collect(),
            caught_at: Utc::now(),
        }
    }
}
