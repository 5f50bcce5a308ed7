//! Timer modes and the session that runs them

use std::io::Write;

use anyhow::Context;
use tracing::info;

use crate::{
    clock::{CountdownClock, TickSource},
    services::Notifier,
    state::RunLog,
};

/// Preset lengths, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Presets {
    pub sprint_seconds: u64,
    pub break_seconds: u64,
    pub work_seconds: u64,
    pub rest_seconds: u64,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            sprint_seconds: 40 * 60,
            break_seconds: 5 * 60,
            work_seconds: 25 * 60,
            rest_seconds: 5 * 60,
        }
    }
}

/// A timer the user can ask for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Sprint,
    Break,
    /// `minutes` and `seconds` as entered, `total_seconds` already validated
    Custom {
        minutes: i64,
        seconds: Option<i64>,
        total_seconds: u64,
    },
    /// Work phases separated by breaks, with no break after the last one
    Pomodoro { cycles: u32 },
}

/// Human-readable length used in banners
fn describe(seconds: u64) -> String {
    match (seconds / 60, seconds % 60) {
        (1, 0) => "1 minute".to_string(),
        (m, 0) => format!("{} minutes", m),
        (m, s) => format!("{}m {}s", m, s),
    }
}

/// Owns one clock and runs modes on it, one after another
#[derive(Debug)]
pub struct Session<W: Write, T, A> {
    clock: CountdownClock<W, T, A>,
    presets: Presets,
    log: RunLog,
}

impl<W, T, A> Session<W, T, A>
where
    W: Write,
    T: TickSource,
    A: Notifier,
{
    pub fn new(clock: CountdownClock<W, T, A>, presets: Presets) -> Self {
        Self {
            clock,
            presets,
            log: RunLog::new(),
        }
    }

    pub fn clock(&self) -> &CountdownClock<W, T, A> {
        &self.clock
    }

    /// Runs completed so far
    pub fn log(&self) -> &RunLog {
        &self.log
    }

    /// Write a line of text to the clock's output
    pub fn say(&mut self, text: &str) -> anyhow::Result<()> {
        let out = self.clock.output();
        writeln!(out, "{}", text).context("Failed to write to output")?;
        out.flush().context("Failed to flush output")
    }

    /// Write text without a trailing newline, for prompts
    pub fn prompt(&mut self, text: &str) -> anyhow::Result<()> {
        let out = self.clock.output();
        write!(out, "{}", text).context("Failed to write to output")?;
        out.flush().context("Failed to flush output")
    }

    /// Run every timer belonging to `mode`
    pub async fn run_mode(&mut self, mode: &Mode) -> anyhow::Result<()> {
        info!("Running mode {:?}", mode);
        match mode {
            Mode::Sprint => {
                let seconds = self.presets.sprint_seconds;
                self.say(&format!("\n  Starting Sprint Mode ({})...", describe(seconds)))?;
                self.run_timer("Sprint", seconds).await
            }
            Mode::Break => {
                let seconds = self.presets.break_seconds;
                self.say(&format!("\n  Starting Break Mode ({})...", describe(seconds)))?;
                self.run_timer("Break", seconds).await
            }
            Mode::Custom {
                minutes,
                seconds,
                total_seconds,
            } => {
                let banner = match seconds {
                    Some(s) => format!("\n  Starting Custom Timer ({}m {}s)...", minutes, s),
                    None => format!("\n  Starting Custom Timer ({} minutes)...", minutes),
                };
                self.say(&banner)?;
                self.run_timer("Custom", *total_seconds).await
            }
            Mode::Pomodoro { cycles } => self.run_pomodoro(*cycles).await,
        }
    }

    async fn run_pomodoro(&mut self, cycles: u32) -> anyhow::Result<()> {
        let Presets {
            work_seconds,
            rest_seconds,
            ..
        } = self.presets;

        for i in 1..=cycles {
            self.say(&format!("\n  --- Pomodoro Cycle {} of {} ---", i, cycles))?;

            self.say(&format!("\n  WORK phase ({})...", describe(work_seconds)))?;
            self.run_timer("Pomodoro Work", work_seconds).await?;

            if i < cycles {
                self.say(&format!("\n  BREAK phase ({})...", describe(rest_seconds)))?;
                self.run_timer("Pomodoro Break", rest_seconds).await?;
            }
        }

        self.say("\n  All Pomodoro cycles complete!\n")
    }

    /// Run one countdown and record it
    pub async fn run_timer(&mut self, label: &str, seconds: u64) -> anyhow::Result<()> {
        self.clock
            .start(seconds)
            .await
            .with_context(|| format!("{} timer failed", label))?;

        self.log.record(label, seconds);
        self.say("\n  *** TIMES UP ***\n")
    }
}
