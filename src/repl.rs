//! The read-eval-print loop.

use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, warn};

use crate::commands::{dispatch, Outcome, Session};
use crate::error::Result;

/// Printed before every line of input
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(String::from)
        .collect()
}

/// Runs commands read from `input` until `exit` or end of input.
///
/// Command failures are printed and the loop carries on; only failures to
/// read input or write output end it early.
pub async fn run<R, I, W>(session: &mut Session<R>, mut input: I, out: &mut W) -> Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut buf = Vec::new();

    loop {
        write!(out, "{PROMPT}")?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf).await? == 0 {
            debug!("end of input");
            writeln!(out)?;
            break;
        }

        // Bytes that are not UTF-8 become replacement characters and the
        // line falls through to `Unknown command`.
        let line = String::from_utf8_lossy(&buf);
        let words = clean_input(&line);
        if words.is_empty() {
            continue;
        }

        match dispatch(session, &words, out).await {
            Ok(Outcome::Continue) => {}
            Ok(Outcome::Exit) => break,
            Err(err) => {
                warn!(command = %words[0], error = %err, "command failed");
                writeln!(out, "{err}")?;
            }
        }
    }

    Ok(())
}
