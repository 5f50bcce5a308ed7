//! Error types for the countdown clock

use std::io;
use thiserror::Error;

/// Errors raised by the countdown core and its input boundary
#[derive(Debug, Error)]
pub enum ClockError {
    /// A duration that cannot be represented as a non-negative number of seconds
    #[error("invalid duration: {minutes} minute(s) and {seconds} second(s)")]
    InvalidDuration { minutes: i64, seconds: i64 },

    /// The output sink rejected a frame
    #[error("failed to write countdown frame: {0}")]
    Output(#[from] io::Error),
}
