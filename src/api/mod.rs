//! API Module
//!
//! HTTP access to the PokeAPI, layered over the response cache.
//!
//! # Endpoints used
//! - `GET /location-area/?offset=..&limit=..` - page through location areas
//! - `GET /location-area/{name}/` - Pokemon encounters in an area
//! - `GET /pokemon/{name}/` - a single Pokemon

pub mod client;

pub use client::{Fetched, PokeApiClient, PAGE_SIZE};
