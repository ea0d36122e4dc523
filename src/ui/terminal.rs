//! Plain terminal pacing: one Enter per step, screen cleared between players
use std::io::{self, Write};

use anyhow::{bail, Result};
use crossterm::{cursor, terminal, QueueableCommand};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::{debug, warn};

use crate::core::engine::{RevealEvent, RevealStream};
use crate::ui::{role_line, RevealOutcome};

/// Wraps any writer with the few screen operations the prompts need
pub struct TerminalContext<W: Write> {
    out: W,
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn clear_screen(&mut self) -> io::Result<()> {
        self.out.queue(cursor::MoveTo(0, 0))?;
        self.out.queue(terminal::Clear(terminal::ClearType::All))?;
        Ok(())
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{text}")
    }

    /// Prints without a newline and flushes, so the cursor waits after the text
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Runs a whole session on a line-based input and a plain output.
///
/// A failure from the engine is returned as the error. End of input stops
/// the session early and abandons the stream.
pub async fn pace<R, W>(mut stream: RevealStream, input: R, out: W) -> Result<RevealOutcome>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();
    let mut ctx = TerminalContext::new(out);

    let category = match stream.next_event().await {
        Some(RevealEvent::CategoryAnnouncement { category }) => category,
        Some(RevealEvent::Failure(error)) => return Err(error.into()),
        Some(other) => bail!("reveal stream started with {other:?}"),
        None => bail!("reveal stream closed unexpectedly"),
    };
    let mut outcome = RevealOutcome {
        category,
        ..RevealOutcome::default()
    };

    while let Some(event) = stream.next_event().await {
        match event {
            RevealEvent::PlayerReveal {
                player,
                is_impostor,
                word,
            } => {
                debug!(player, "terminal reveal");
                ctx.clear_screen()?;
                ctx.prompt("Hey there, press enter to view your role ;)\n")?;
                if !wait_for_enter(&mut lines).await? {
                    stream.abandon().await;
                    return Ok(outcome);
                }

                ctx.print_line(&role_line(is_impostor, &word))?;
                ctx.prompt(&format!(
                    "\nCategory is: {}\n\nPress enter to leave...",
                    outcome.category
                ))?;
                outcome.word = Some(word);
                if !wait_for_enter(&mut lines).await? {
                    stream.abandon().await;
                    return Ok(outcome);
                }
            }
            RevealEvent::Failure(error) => return Err(error.into()),
            RevealEvent::CategoryAnnouncement { .. } => bail!("category announced twice"),
        }
    }

    ctx.clear_screen()?;
    ctx.print_line("Enjoy the game!")?;
    ctx.flush()?;
    outcome.completed = true;
    Ok(outcome)
}

/// `false` once the input is exhausted
async fn wait_for_enter<R>(lines: &mut Lines<R>) -> Result<bool>
where
    R: AsyncBufRead + Unpin,
{
    match lines.next_line().await? {
        Some(_) => Ok(true),
        None => {
            warn!("input closed before every player saw their role");
            Ok(false)
        }
    }
}
