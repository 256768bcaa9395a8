//! Error types for the Pokedex
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from the HTTP fetcher, the JSON decoders and the
//! REPL's terminal I/O.

use reqwest::StatusCode;
use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// The HTTP request could not be sent or its body could not be read
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("{url} returned {status}")]
    Status { url: String, status: StatusCode },

    /// The response body was not the expected JSON shape
    #[error("failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true if the API reported that the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, PokedexError::Status { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = PokedexError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/missingno/".to_string(),
            status: StatusCode::NOT_FOUND,
        };

        assert!(err.is_not_found());
        assert_eq!(
            err.to_string(),
            "https://pokeapi.co/api/v2/pokemon/missingno/ returned 404 Not Found"
        );
    }

    #[test]
    fn test_decode_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: PokedexError = serde_err.into();

        assert!(!err.is_not_found());
        assert!(err.to_string().starts_with("failed to parse response"));
    }
}
