//! Countdown Clock - a terminal countdown timer with in-place progress gauges
//! 
//! This library provides the countdown engine, the gauge renderer, completion
//! alerts and the session/menu layer that sequences sprint, break, custom and
//! pomodoro timers.

pub mod clock;
pub mod config;
pub mod error;
pub mod render;
pub mod services;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use clock::{CountdownClock, TickSource, WallClock};
pub use config::Config;
pub use error::ClockError;
pub use render::{render, DisplaySnapshot, Gauge};
pub use services::Notifier;
pub use state::CountdownState;
pub use tasks::{Menu, Mode, Session};
pub use utils::signals::shutdown_signal;
