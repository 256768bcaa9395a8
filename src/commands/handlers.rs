//! Command handlers
//!
//! One function per REPL command. Handlers write user-facing output to the
//! given sink and only return `Err` for failures the REPL should report.

use std::io::Write;

use rand::Rng;
use tracing::{debug, warn};

use super::{registry::COMMANDS, Session};
use crate::api::Fetched;
use crate::error::Result;
use crate::models::CaughtPokemon;

/// Catch probability never drops below this percentage
pub const MIN_CATCH_CHANCE: u32 = 10;

/// Percent chance of catching a Pokemon with the given base experience.
///
/// Lower base experience is easier: `max(10, 100 - base_experience)`.
pub fn catch_chance(base_experience: u32) -> u32 {
    100u32.saturating_sub(base_experience).max(MIN_CATCH_CHANCE)
}

/// Rolls `0..100` and reports whether the throw beats `chance`.
pub fn throw_ball<R: Rng>(rng: &mut R, chance: u32) -> bool {
    rng.gen_range(0..100) < chance
}

fn note_cache_hit<T, W: Write>(out: &mut W, fetched: &Fetched<T>) -> Result<()> {
    if fetched.from_cache {
        writeln!(out, "(cache hit)")?;
    }
    Ok(())
}

/// Handler for `help`
pub fn help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Welcome to the Pokedex!")?;
    writeln!(out, "Usage:")?;
    writeln!(out)?;
    for command in COMMANDS {
        writeln!(out, "{}: {}", command.usage, command.description)?;
    }
    Ok(())
}

/// Handler for `exit`
pub fn exit<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Closing the Pokedex... Goodbye!")?;
    Ok(())
}

/// Handler for `map`: shows the next page of location areas.
pub async fn map<R: Rng, W: Write>(session: &mut Session<R>, out: &mut W) -> Result<()> {
    let Some(url) = session.pages.next.clone() else {
        writeln!(out, "you're on the last page")?;
        return Ok(());
    };
    show_page(session, &url, out).await
}

/// Handler for `mapb`: shows the previous page of location areas.
pub async fn map_back<R: Rng, W: Write>(session: &mut Session<R>, out: &mut W) -> Result<()> {
    let Some(url) = session.pages.previous.clone() else {
        writeln!(out, "you're on the first page")?;
        return Ok(());
    };
    show_page(session, &url, out).await
}

async fn show_page<R: Rng, W: Write>(
    session: &mut Session<R>,
    url: &str,
    out: &mut W,
) -> Result<()> {
    let fetched = session.client.location_area_page(url).await?;
    note_cache_hit(out, &fetched)?;

    let page = fetched.value;
    for area in &page.results {
        writeln!(out, "{}", area.name)?;
    }
    session.pages.next = page.next;
    session.pages.previous = page.previous;
    Ok(())
}

/// Handler for `explore <location-area>`
pub async fn explore<R: Rng, W: Write>(
    session: &mut Session<R>,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    let Some(area) = args.first() else {
        writeln!(out, "Usage: explore <location-area>")?;
        return Ok(());
    };

    let fetched = session.client.location_area(area).await?;
    note_cache_hit(out, &fetched)?;

    writeln!(out, "Exploring {area}...")?;
    let encounters = &fetched.value.pokemon_encounters;
    if encounters.is_empty() {
        writeln!(out, "No Pokemon found in this location area.")?;
        return Ok(());
    }
    writeln!(out, "Found Pokemon:")?;
    for encounter in encounters {
        writeln!(out, " - {}", encounter.pokemon.name)?;
    }
    Ok(())
}

/// Handler for `catch <pokemon>`
pub async fn catch<R: Rng, W: Write>(
    session: &mut Session<R>,
    args: &[String],
    out: &mut W,
) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: catch <pokemon>")?;
        return Ok(());
    };
    if session.pokedex.contains(name) {
        writeln!(out, "You already caught {name}!")?;
        return Ok(());
    }

    writeln!(out, "Throwing a Pokeball at {name}...")?;
    let fetched = match session.client.pokemon(name).await {
        Ok(fetched) => fetched,
        Err(err) if err.is_not_found() => {
            debug!(pokemon = %name, "no such pokemon");
            writeln!(out, "{name} could not be found!")?;
            return Ok(());
        }
        Err(err) => {
            warn!(pokemon = %name, error = %err, "catch lookup failed");
            writeln!(out, "{name} could not be found!")?;
            return Ok(());
        }
    };
    note_cache_hit(out, &fetched)?;

    let detail = fetched.value;
    let chance = catch_chance(detail.base_experience.unwrap_or(0));
    if throw_ball(&mut session.rng, chance) {
        writeln!(out, "{} was caught!", detail.name)?;
        writeln!(out, "You may now inspect it with the inspect command.")?;
        session.pokedex.add(CaughtPokemon::from_detail(detail));
    } else {
        writeln!(out, "{} escaped!", detail.name)?;
    }
    Ok(())
}

/// Handler for `inspect <pokemon>`
pub fn inspect<R, W: Write>(session: &Session<R>, args: &[String], out: &mut W) -> Result<()> {
    let Some(name) = args.first() else {
        writeln!(out, "Usage: inspect <pokemon>")?;
        return Ok(());
    };
    let Some(pokemon) = session.pokedex.get(name) else {
        writeln!(out, "you have not caught that pokemon")?;
        return Ok(());
    };

    writeln!(out, "Name: {}", pokemon.name)?;
    writeln!(out, "Height: {}", pokemon.height)?;
    writeln!(out, "Weight: {}", pokemon.weight)?;
    writeln!(
        out,
        "Caught: {}",
        pokemon.caught_at.format("%Y-%m-%d %H:%M:%S UTC")
    )?;
    writeln!(out, "Stats:")?;
    for stat in &pokemon.stats {
        writeln!(out, "  -{}: {}", stat.name, stat.value)?;
    }
    writeln!(out, "Types:")?;
    for kind in &pokemon.types {
        writeln!(out, "  - {kind}")?;
    }
    Ok(())
}

/// Handler for `pokedex`
pub fn pokedex<R, W: Write>(session: &Session<R>, out: &mut W) -> Result<()> {
    if session.pokedex.is_empty() {
        writeln!(out, "You haven't caught any Pokemon yet.")?;
        return Ok(());
    }
    writeln!(out, "Your Pokedex:")?;
    for pokemon in session.pokedex.list() {
        writeln!(out, " - {}", pokemon.name)?;
    }
    Ok(())
}
