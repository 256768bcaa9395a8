//! Commands Module
//!
//! Session state shared by the REPL commands and the dispatcher that routes
//! a cleaned input line to its handler.

pub mod handlers;
pub mod registry;

use std::io::Write;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::api::PokeApiClient;
use crate::error::Result;
use crate::pokedex::Pokedex;

pub use registry::{find_command, Command, CommandKind, COMMANDS};

/// Where `map` and `mapb` go next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pagination {
    /// Page `map` will show, `None` past the last page
    pub next: Option<String>,
    /// Page `mapb` will show, `None` on the first page
    pub previous: Option<String>,
}

/// Everything a command can read or change.
#[derive(Debug)]
pub struct Session<R = StdRng> {
    pub client: PokeApiClient,
    pub pokedex: Pokedex,
    pub pages: Pagination,
    pub rng: R,
}

impl Session<StdRng> {
    /// Creates a session with an entropy-seeded random source.
    pub fn new(client: PokeApiClient) -> Self {
        Self::with_rng(client, StdRng::from_entropy())
    }
}

impl<R> Session<R> {
    /// Creates a session with a caller-supplied random source.
    pub fn with_rng(client: PokeApiClient, rng: R) -> Self {
        let pages = Pagination {
            next: Some(client.location_areas_url()),
            previous: None,
        };
        Self {
            client,
            pokedex: Pokedex::new(),
            pages,
            rng,
        }
    }
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// Runs the command named by `words[0]` with the remaining words as arguments.
///
/// Unknown commands are reported on `out` and are not errors.
pub async fn dispatch<R: Rng, W: Write>(
    session: &mut Session<R>,
    words: &[String],
    out: &mut W,
) -> Result<Outcome> {
    let Some((name, args)) = words.split_first() else {
        return Ok(Outcome::Continue);
    };
    let Some(command) = find_command(name) else {
        writeln!(out, "Unknown command")?;
        return Ok(Outcome::Continue);
    };

    debug!(command = command.name, ?args, "dispatching");
    match command.kind {
        CommandKind::Help => handlers::help(out)?,
        CommandKind::Exit => {
            handlers::exit(out)?;
            return Ok(Outcome::Exit);
        }
        CommandKind::Map => handlers::map(session, out).await?,
        CommandKind::MapBack => handlers::map_back(session, out).await?,
        CommandKind::Explore => handlers::explore(session, args, out).await?,
        CommandKind::Catch => handlers::catch(session, args, out).await?,
        CommandKind::Inspect => handlers::inspect(session, args, out)?,
        CommandKind::Pokedex => handlers::pokedex(session, out)?,
    }
    Ok(Outcome::Continue)
}
