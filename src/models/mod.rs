//! Data models for the Pokedex
//!
//! This module defines the DTOs decoded from PokeAPI response bodies and the
//! records stored for caught Pokemon.

pub mod caught;
pub mod responses;

// Re-export commonly used types
pub use caught::{CaughtPokemon, Stat};
pub use responses::{
    LocationAreaDetail, LocationAreaPage, NamedResource, PokemonDetail, PokemonEncounter,
    PokemonStat, PokemonType,
};
