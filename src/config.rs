//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    error::ClockError,
    services::{default_player, BellAlert, Notifier, SilentAlert, SoundAlert},
    state::duration,
    tasks::{Mode, Presets},
};

/// CLI argument parsing structure
#[derive(Debug, Parser)]
#[command(name = "countdown-clock")]
#[command(about = "A terminal countdown clock with progress gauges")]
#[command(version)]
pub struct Config {
    /// Timer to run; shows the interactive menu when omitted
    #[command(subcommand)]
    pub mode: Option<ModeCommand>,

    /// How to signal that a timer finished
    #[arg(long, value_enum, default_value_t = AlertKind::Sound)]
    pub alert: AlertKind,

    /// Sound file played by the alert
    #[arg(long, default_value = "alert.wav")]
    pub sound: PathBuf,

    /// Audio player used for the alert sound
    #[arg(long)]
    pub player: Option<String>,

    /// Sprint length in minutes
    #[arg(long, default_value = "40")]
    pub sprint_minutes: u64,

    /// Break length in minutes
    #[arg(long, default_value = "5")]
    pub break_minutes: u64,

    /// Pomodoro work phase in minutes
    #[arg(long, default_value = "25")]
    pub work_minutes: u64,

    /// Pomodoro break phase in minutes
    #[arg(long, default_value = "5")]
    pub rest_minutes: u64,

    /// Print the session summary as JSON
    #[arg(long)]
    pub json_summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Timer modes selectable from the command line
#[derive(Debug, Clone, Subcommand)]
pub enum ModeCommand {
    /// Focused work session
    Sprint,
    /// Short rest
    Break,
    /// Any duration
    Custom {
        /// Minutes
        #[arg(short, long, allow_negative_numbers = true)]
        minutes: i64,
        /// Extra seconds
        #[arg(short, long, allow_negative_numbers = true)]
        seconds: Option<i64>,
    },
    /// Work and break cycles
    Pomodoro {
        /// Number of cycles
        #[arg(short, long, default_value = "1")]
        cycles: u32,
    },
}

impl ModeCommand {
    /// Validate durations and convert into a runnable mode
    pub fn into_mode(self) -> Result<Mode, ClockError> {
        Ok(match self {
            ModeCommand::Sprint => Mode::Sprint,
            ModeCommand::Break => Mode::Break,
            ModeCommand::Custom { minutes, seconds } => Mode::Custom {
                minutes,
                seconds,
                total_seconds: duration::from_parts(minutes, seconds.unwrap_or(0))?,
            },
            ModeCommand::Pomodoro { cycles } => Mode::Pomodoro { cycles },
        })
    }
}

/// Completion alert kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlertKind {
    /// Play the sound file, falling back to the bell
    Sound,
    /// Terminal bell only
    Bell,
    /// No alert
    None,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// Preset lengths in seconds, rejecting presets longer than a day
    pub fn presets(&self) -> Result<Presets, ClockError> {
        Ok(Presets {
            sprint_seconds: duration::from_unsigned_minutes(self.sprint_minutes)?,
            break_seconds: duration::from_unsigned_minutes(self.break_minutes)?,
            work_seconds: duration::from_unsigned_minutes(self.work_minutes)?,
            rest_seconds: duration::from_unsigned_minutes(self.rest_minutes)?,
        })
    }

    /// Build the configured alert
    pub fn notifier(&self) -> Box<dyn Notifier> {
        match self.alert {
            AlertKind::Sound => Box::new(SoundAlert::new(
                self.player.as_deref().unwrap_or(default_player()),
                self.sound.clone(),
            )),
            AlertKind::Bell => Box::new(BellAlert),
            AlertKind::None => Box::new(SilentAlert),
        }
    }
}
