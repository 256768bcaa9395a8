//! The in-memory collection of caught Pokemon.

use std::collections::HashMap;

use crate::models::CaughtPokemon;

/// Caught Pokemon keyed by name. Lives only as long as the process.
#[derive(Debug, Default)]
pub struct Pokedex {
    entries: HashMap<String, CaughtPokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch. Catching the same name again replaces the record.
    pub fn add(&mut self, pokemon: CaughtPokemon) {
        self.entries.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&CaughtPokemon> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Returns every caught Pokemon, sorted by name.
    pub fn list(&self) -> Vec<&CaughtPokemon> {
        let mut all: Vec<_> = self.entries.values().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        all
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
