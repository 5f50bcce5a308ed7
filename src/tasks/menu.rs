//! Interactive menu loop

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use super::{Mode, Session};
use crate::{clock::TickSource, services::Notifier, state::duration};

const MENU: &str = "\n  ================================
       PRODUCTIVITY TIMER
  ================================
  1. Sprint
  2. Break
  3. Custom Timer
  4. Pomodoro
  5. Exit
  ================================";

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Sprint,
    Break,
    Custom,
    Pomodoro,
    Exit,
}

impl MenuChoice {
    /// Parse a menu selection, `None` for anything unrecognised
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Sprint),
            "2" => Some(MenuChoice::Break),
            "3" => Some(MenuChoice::Custom),
            "4" => Some(MenuChoice::Pomodoro),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Reads menu selections and runs the chosen timers until Exit or end of input
pub struct Menu<R> {
    input: R,
}

impl<R: AsyncBufRead + Unpin> Menu<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// Show the menu until the user exits
    pub async fn run<W, T, A>(&mut self, session: &mut Session<W, T, A>) -> anyhow::Result<()>
    where
        W: Write,
        T: TickSource,
        A: Notifier,
    {
        loop {
            session.say(MENU)?;
            let Some(line) = self.ask(session, "  Choose an option: ").await? else {
                break;
            };

            let mode = match MenuChoice::parse(&line) {
                Some(MenuChoice::Sprint) => Mode::Sprint,
                Some(MenuChoice::Break) => Mode::Break,
                Some(MenuChoice::Custom) => match self.ask_custom(session).await? {
                    Some(Ok(mode)) => mode,
                    Some(Err(message)) => {
                        session.say(&message)?;
                        continue;
                    }
                    None => break,
                },
                Some(MenuChoice::Pomodoro) => match self.ask_cycles(session).await? {
                    Some(Ok(mode)) => mode,
                    Some(Err(message)) => {
                        session.say(&message)?;
                        continue;
                    }
                    None => break,
                },
                Some(MenuChoice::Exit) => break,
                None => {
                    debug!("Unrecognised menu input {:?}", line);
                    session.say("\n  Invalid option. Try again.")?;
                    continue;
                }
            };

            session.run_mode(&mode).await?;
        }

        session.say("\n  Goodbye!\n")
    }

    /// Prompt and read one line; `None` at end of input
    ///
    /// Bytes that are not UTF-8 are replaced, so they fail to parse like any
    /// other unrecognised input.
    async fn ask<W, T, A>(
        &mut self,
        session: &mut Session<W, T, A>,
        prompt: &str,
    ) -> anyhow::Result<Option<String>>
    where
        W: Write,
        T: TickSource,
        A: Notifier,
    {
        session.prompt(prompt)?;

        let mut buf = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut buf)
            .await
            .context("Failed to read input")?;
        if read == 0 {
            return Ok(None);
        }

        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Inner `Err` carries a message to show before returning to the menu
    async fn ask_custom<W, T, A>(
        &mut self,
        session: &mut Session<W, T, A>,
    ) -> anyhow::Result<Option<Result<Mode, String>>>
    where
        W: Write,
        T: TickSource,
        A: Notifier,
    {
        let Some(line) = self.ask(session, "\n  Enter minutes: ").await? else {
            return Ok(None);
        };
        let Ok(minutes) = line.trim().parse::<i64>() else {
            return Ok(Some(Err("\n  Invalid number. Try again.".to_string())));
        };

        let Some(answer) = self.ask(session, "  Add seconds too? (y/n): ").await? else {
            return Ok(None);
        };

        let seconds = if answer.trim().eq_ignore_ascii_case("y") {
            let Some(line) = self.ask(session, "  Enter seconds: ").await? else {
                return Ok(None);
            };
            match line.trim().parse::<i64>() {
                Ok(seconds) => Some(seconds),
                Err(_) => return Ok(Some(Err("\n  Invalid number. Try again.".to_string()))),
            }
        } else {
            None
        };

        Ok(Some(
            duration::from_parts(minutes, seconds.unwrap_or(0))
                .map(|total_seconds| Mode::Custom {
                    minutes,
                    seconds,
                    total_seconds,
                })
                .map_err(|e| format!("\n  {}. Try again.", e)),
        ))
    }

    async fn ask_cycles<W, T, A>(
        &mut self,
        session: &mut Session<W, T, A>,
    ) -> anyhow::Result<Option<Result<Mode, String>>>
    where
        W: Write,
        T: TickSource,
        A: Notifier,
    {
        let Some(line) = self.ask(session, "\n  How many Pomodoro cycles? ").await? else {
            return Ok(None);
        };

        Ok(Some(
            line.trim()
                .parse::<u32>()
                .map(|cycles| Mode::Pomodoro { cycles })
                .map_err(|_| "\n  Invalid number. Try again.".to_string()),
        ))
    }
}
