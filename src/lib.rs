//! Pokedex - an interactive explorer for the PokeAPI
//!
//! Pages through location areas, explores encounters and catches Pokemon,
//! with every API response going through a TTL read-through cache.

pub mod api;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use api::PokeApiClient;
pub use cache::Cache;
pub use commands::Session;
pub use config::Config;
pub use error::{PokedexError, Result};
