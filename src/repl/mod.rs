//! REPL Module
//!
//! Reads commands line by line, runs them against a [`Session`] and reports
//! failures without ending the session.

mod commands;
mod input;

pub use commands::{Command, CommandSpec, Flow, Session, COMMANDS};
pub use input::clean_input;

use std::io::Write;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, warn};

use crate::error::Result;

/// Runs the read-eval-print loop until `exit` or end of input.
///
/// Command errors are printed to `out` and logged; only failures to read
/// input or write output end the loop early.
pub async fn run<R, I, W>(session: &mut Session<R>, input: I, out: &mut W, prompt: &str) -> Result<()>
where
    R: Rng,
    I: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    loop {
        write!(out, "{prompt}")?;
        out.flush()?;

        let Some(line) = lines.next_line().await? else {
            writeln!(out)?;
            info!("Input closed, leaving the Pokedex");
            break;
        };

        match session.execute(&line, out).await {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => break,
            Err(err) => {
                warn!(command = %line.trim(), error = %err, "Command failed");
                writeln!(out, "Error: {err}")?;
            }
        }
    }

    Ok(())
}
